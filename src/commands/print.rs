//! Print command handler

use std::path::PathBuf;

use anyhow::{bail, Result};

use printwatch::presentation::factory;
use printwatch::PrintSettings;

use super::Context;

pub fn cmd_print(
    ctx: &Context,
    files: &[PathBuf],
    printer: Option<String>,
    paper_size: Option<String>,
    copies: Option<u32>,
    duplex: bool,
) -> Result<()> {
    let extra: Vec<&str> = printer.as_deref().into_iter().collect();
    let system = factory::create_print_system(&ctx.config, ctx.dry_run, &extra);
    let dispatcher =
        factory::create_dispatcher(&ctx.config, system, factory::create_event_sink(ctx.json));

    let settings = PrintSettings {
        printer,
        paper_size,
        copies,
        duplex: duplex.then_some(true),
    };

    let failed = files
        .iter()
        .filter(|file| !dispatcher.print_document(file, &settings))
        .count();

    if failed > 0 {
        bail!("{failed} of {} document(s) failed to print", files.len());
    }
    Ok(())
}
