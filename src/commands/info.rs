//! Info command handler

use std::path::Path;

use anyhow::Result;

use printwatch::document_info;

pub fn cmd_info(file: &Path, json: bool) -> Result<()> {
    let info = document_info(file);

    if json {
        let mut value = serde_json::to_value(&info)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("event".to_string(), serde_json::json!("document_info"));
        }
        super::emit_json(&value);
        return Ok(());
    }

    println!("{}", info.file_name);
    println!("  path:      {}", info.file_path);
    if !info.file_type.is_empty() {
        println!("  type:      {}", info.file_type);
    }
    if let Some(size) = info.file_size {
        println!("  size:      {size} bytes");
    }
    if let Some(modified) = &info.last_modified {
        println!("  modified:  {modified}");
    }
    if let Some(pages) = info.page_count {
        println!("  pages:     {pages}");
    }
    if let Some(dimensions) = &info.dimensions {
        println!("  size (px): {dimensions}");
    }
    if let Some(format) = &info.format {
        println!("  format:    {format}");
    }
    if let Some(error) = &info.error {
        eprintln!("  error:     {error}");
    }
    Ok(())
}
