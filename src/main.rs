//! printwatch CLI - watch folders and print new documents
//!
//! Usage: printwatch <COMMAND>
//!
//! Commands:
//!   watch     Watch the configured folders and report new documents
//!   print     Print one or more documents
//!   info      Show document metadata
//!   printers  List installed printers
//!   history   Show print history
//!   config    Show or edit the configuration

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    printwatch::logging::init(cli.verbose);

    let ctx = Context::new(cli.json, cli.dry_run, cli.config);

    match cli.command {
        Commands::Watch {
            auto_print,
            folders,
        } => commands::cmd_watch(&ctx, auto_print, folders),
        Commands::Print {
            files,
            printer,
            paper_size,
            copies,
            duplex,
        } => commands::cmd_print(&ctx, &files, printer, paper_size, copies, duplex),
        Commands::Info { file } => commands::cmd_info(&file, ctx.json),
        Commands::Printers { paper_sizes } => commands::cmd_printers(&ctx, paper_sizes),
        Commands::History { clear } => commands::cmd_history(clear, ctx.json),
        Commands::Config { action } => commands::cmd_config(&ctx, action),
    }
}
