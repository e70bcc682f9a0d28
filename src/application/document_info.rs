//! Document metadata query
//!
//! Basic file metadata plus a best-effort, type-specific extra:
//! PDF page count, approximate DOCX page count, image dimensions.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::entities::TIMESTAMP_FORMAT;
use crate::domain::value_objects::{extension_of, IMAGE_EXTENSIONS};
use crate::error::{PrintwatchError, PrintwatchResult};

/// Main document part of a DOCX package
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

/// Section properties element; one per section
const DOCX_SECTION_TAG: &str = "<w:sectPr";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentInfo {
    pub file_path: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Lowercased, dot-prefixed extension, empty when there is none
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Never fails; problems are reported through `DocumentInfo::error`
pub fn document_info(path: &Path) -> DocumentInfo {
    let mut info = DocumentInfo {
        file_path: path.display().to_string(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_type: extension_of(path).unwrap_or_default(),
        ..DocumentInfo::default()
    };

    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no metadata");
            info.error = Some(e.to_string());
            return info;
        }
    };
    info.file_size = Some(meta.len());
    info.last_modified = meta
        .modified()
        .ok()
        .map(|t| DateTime::<Local>::from(t).format(TIMESTAMP_FORMAT).to_string());

    if let Err(e) = fill_extras(path, &mut info) {
        tracing::debug!(path = %path.display(), error = %e, "no type-specific metadata");
        info.error = Some(e.to_string());
    }
    info
}

fn fill_extras(path: &Path, info: &mut DocumentInfo) -> PrintwatchResult<()> {
    let parse = |message: String| PrintwatchError::ParseFailure {
        path: path.to_path_buf(),
        message,
    };

    match info.file_type.as_str() {
        ".pdf" => {
            let data = fs::read(path)?;
            info.page_count = Some(count_pdf_pages(&data).map_err(|e| parse(e.to_string()))?);
        }
        ".docx" => {
            info.page_count = Some(count_docx_sections(path).map_err(parse)?);
        }
        ext if IMAGE_EXTENSIONS.contains(&ext) => {
            let reader = image::ImageReader::open(path)?
                .with_guessed_format()
                .map_err(|e| parse(e.to_string()))?;
            let format = reader.format();
            let (width, height) = reader
                .into_dimensions()
                .map_err(|e| parse(e.to_string()))?;
            info.dimensions = Some(format!("{width}x{height}"));
            info.format = format.map(|f| format!("{f:?}").to_uppercase());
        }
        _ => {}
    }
    Ok(())
}

/// Number of pages in a PDF document
pub fn count_pdf_pages(data: &[u8]) -> Result<usize, lopdf::Error> {
    Ok(lopdf::Document::load_mem(data)?.get_pages().len())
}

/// Section count of a DOCX document, at least 1
fn count_docx_sections(path: &Path) -> Result<usize, String> {
    let file = fs::File::open(path).map_err(|e| e.to_string())?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| e.to_string())?;
    let mut part = archive
        .by_name(DOCX_DOCUMENT_PART)
        .map_err(|e| format!("{DOCX_DOCUMENT_PART}: {e}"))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml).map_err(|e| e.to_string())?;
    Ok(xml.matches(DOCX_SECTION_TAG).count().max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object};
    use std::io::Write;
    use tempfile::tempdir;

    fn write_pdf(path: &Path, pages: i64) {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = (0..pages)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                })
                .into()
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    fn write_docx(path: &Path, body: &str) {
        let file = fs::File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        zip.start_file(DOCX_DOCUMENT_PART, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn missing_file_keeps_identity_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Gone.PDF");

        let info = document_info(&path);

        assert_eq!(info.file_name, "Gone.PDF");
        assert_eq!(info.file_type, ".pdf");
        assert!(info.file_size.is_none());
        assert!(info.error.is_some());
    }

    #[test]
    fn text_file_has_basic_metadata_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let info = document_info(&path);

        assert_eq!(info.file_size, Some(5));
        assert!(info.last_modified.is_some());
        assert!(info.page_count.is_none());
        assert!(info.error.is_none());
    }

    #[test]
    fn pdf_page_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        write_pdf(&path, 3);

        let info = document_info(&path);

        assert_eq!(info.page_count, Some(3));
        assert!(info.error.is_none());
    }

    #[test]
    fn unparsable_pdf_degrades_to_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"not a pdf").unwrap();

        let info = document_info(&path);

        assert_eq!(info.file_size, Some(9));
        assert!(info.page_count.is_none());
        assert!(info.error.unwrap().contains("broken.pdf"));
    }

    #[test]
    fn docx_counts_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("letter.docx");
        write_docx(
            &path,
            "<w:document><w:body><w:p><w:pPr><w:sectPr/></w:pPr></w:p><w:sectPr w:rsidR=\"1\"/></w:body></w:document>",
        );

        assert_eq!(document_info(&path).page_count, Some(2));
    }

    #[test]
    fn docx_without_sections_counts_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bare.docx");
        write_docx(&path, "<w:document><w:body/></w:document>");

        assert_eq!(document_info(&path).page_count, Some(1));
    }

    #[test]
    fn image_dimensions_and_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");
        image::RgbImage::new(4, 3).save(&path).unwrap();

        let info = document_info(&path);

        assert_eq!(info.dimensions.as_deref(), Some("4x3"));
        assert_eq!(info.format.as_deref(), Some("PNG"));
    }
}
