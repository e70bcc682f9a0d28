//! Printers command handler

use anyhow::Result;

use printwatch::domain::ports::PrintSystem;
use printwatch::domain::value_objects::PaperSize;
use printwatch::presentation::factory;

use super::Context;

pub fn cmd_printers(ctx: &Context, paper_sizes: bool) -> Result<()> {
    if paper_sizes {
        for size in PaperSize::ALL {
            if ctx.json {
                super::emit_json(&serde_json::json!({
                    "event": "paper_size",
                    "label": size.label(),
                    "media": size.media_keyword(),
                }));
            } else {
                println!("{:<8} {}", size.label(), size.media_keyword());
            }
        }
        return Ok(());
    }

    let system = factory::create_print_system(&ctx.config, ctx.dry_run, &[]);
    let printers = system.printers()?;

    if ctx.json {
        for printer in &printers {
            super::emit_json(&serde_json::json!({
                "event": "printer",
                "name": printer.name,
                "is_default": printer.is_default,
            }));
        }
        return Ok(());
    }

    if printers.is_empty() {
        println!("No printers found.");
    }
    for printer in &printers {
        let marker = if printer.is_default { "*" } else { " " };
        println!("{marker} {}", printer.name);
    }
    Ok(())
}
