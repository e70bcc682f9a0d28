//! History command handler

use anyhow::Result;

use printwatch::domain::ports::HistoryRepository;
use printwatch::infrastructure::JsonHistoryStore;
use printwatch::presentation::factory;

pub fn cmd_history(clear: bool, json: bool) -> Result<()> {
    let store = JsonHistoryStore::with_path(factory::history_path());

    if clear {
        store.clear()?;
        if json {
            super::emit_json(&serde_json::json!({"event": "history_cleared"}));
        } else {
            println!("History cleared.");
        }
        return Ok(());
    }

    let records = store.load()?;

    if json {
        for record in &records {
            let mut value = serde_json::to_value(record)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("event".to_string(), serde_json::json!("history_record"));
            }
            super::emit_json(&value);
        }
        return Ok(());
    }

    if records.is_empty() {
        println!("No print history.");
        return Ok(());
    }
    for record in &records {
        let status = if record.success { "ok" } else { "FAILED" };
        let printer = if record.printer_name.is_empty() {
            "-"
        } else {
            record.printer_name.as_str()
        };
        print!("{}  {:<6}  {:<20}  {}", record.timestamp, status, printer, record.file_name);
        match &record.error {
            Some(error) => println!("  ({error})"),
            None => println!(),
        }
    }
    Ok(())
}
