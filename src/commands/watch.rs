//! Watch command handler

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use chrono::Local;

use printwatch::presentation::factory;
use printwatch::{FolderWatcher, PrintSettings, WatchConfig, WatchEvent};

use super::{display_name, Context};

pub fn cmd_watch(ctx: &Context, auto_print: bool, folders: Vec<PathBuf>) -> Result<()> {
    let auto_print = auto_print || ctx.config.auto_print;
    let watch_config = folders
        .into_iter()
        .fold(WatchConfig::from(&ctx.config), |config, dir| {
            config.with_directory(dir)
        });

    let system = factory::create_print_system(&ctx.config, ctx.dry_run, &[]);
    let dispatcher =
        factory::create_dispatcher(&ctx.config, system, factory::create_event_sink(ctx.json));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    // Printing happens on this thread, not on the watcher's
    let (tx, rx) = channel::<PathBuf>();
    let json = ctx.json;
    let mut watcher = FolderWatcher::new(move |event| {
        if let WatchEvent::FileDiscovered { path } = &event {
            let _ = tx.send(path.clone());
        }
        render_watch_event(&event, json);
    });

    if !watcher.start(watch_config) {
        bail!("no watch folder could be attached; add one with `printwatch config add-folder DIR`");
    }

    if !json {
        if auto_print {
            println!("Auto-print is on.");
        }
        println!("Press Ctrl+C to stop\n");
    }

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(path) => {
                if auto_print {
                    dispatcher.print_document(&path, &PrintSettings::new());
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    watcher.stop();
    Ok(())
}

fn render_watch_event(event: &WatchEvent, json: bool) {
    if json {
        println!("{}", event.to_json());
        return;
    }

    let stamp = Local::now().format("%H:%M:%S");
    match event {
        WatchEvent::WatchStarted { directories } => {
            for dir in directories {
                println!("[{stamp}] watching {dir}");
            }
        }
        WatchEvent::FileDiscovered { path } => {
            println!("[{stamp}] new file: {}", display_name(path));
        }
        WatchEvent::Error { message } => {
            eprintln!("[{stamp}] watch error: {message}");
        }
        WatchEvent::WatchStopped => {
            println!("[{stamp}] stopped watching");
        }
    }
}
