//! A folder receives documents; supported ones are discovered once and
//! printed through an in-memory print system.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use printwatch::application::StabilityPolicy;
use printwatch::domain::entities::PrintDefaults;
use printwatch::domain::value_objects::ExtensionSet;
use printwatch::infrastructure::MemoryPrintSystem;
use printwatch::{FolderWatcher, PrintDispatcher, PrintSettings, WatchConfig, WatchEvent};
use tempfile::tempdir;

fn quick() -> StabilityPolicy {
    StabilityPolicy {
        interval: Duration::from_millis(20),
        timeout: Duration::from_millis(500),
    }
}

fn wait_for(rx: &std::sync::mpsc::Receiver<PathBuf>, timeout: Duration) -> Vec<PathBuf> {
    let deadline = Instant::now() + timeout;
    let mut found = Vec::new();
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(left) {
            Ok(path) => found.push(path),
            Err(_) => break,
        }
    }
    found
}

#[test]
fn supported_document_is_discovered_and_printed() {
    let inbox = tempdir().unwrap();
    let (tx, rx) = channel();
    let mut watcher = FolderWatcher::new(move |event| {
        if let WatchEvent::FileDiscovered { path } = event {
            let _ = tx.send(path);
        }
    });
    let config = WatchConfig::new(
        vec![inbox.path().to_path_buf()],
        ExtensionSet::new([".pdf", ".txt"]),
    )
    .with_stability(quick());
    assert!(watcher.start(config));
    std::thread::sleep(Duration::from_millis(100));

    fs::write(inbox.path().join("a.pdf"), b"%PDF-1.4 scan").unwrap();
    fs::write(inbox.path().join("b.exe"), b"MZ").unwrap();

    let found = wait_for(&rx, Duration::from_secs(3));
    watcher.stop();

    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.pdf"]);

    let dispatcher = PrintDispatcher::new(
        MemoryPrintSystem::new().with_default_printer("P1"),
        PrintDefaults::default(),
    );
    assert!(dispatcher.print_document(&found[0], &PrintSettings::new()));
    assert_eq!(dispatcher.system().raw_jobs().len(), 1);
    assert_eq!(dispatcher.history()[0].printer_name, "P1");
}

#[test]
fn nested_folders_are_watched() {
    let inbox = tempdir().unwrap();
    let nested = inbox.path().join("2024").join("May");
    fs::create_dir_all(&nested).unwrap();
    let (tx, rx) = channel();
    let mut watcher = FolderWatcher::new(move |event| {
        if let WatchEvent::FileDiscovered { path } = event {
            let _ = tx.send(path);
        }
    });
    let config = WatchConfig::new(vec![inbox.path().to_path_buf()], ExtensionSet::new([".txt"]))
        .with_stability(quick());
    assert!(watcher.start(config));
    std::thread::sleep(Duration::from_millis(100));

    fs::write(nested.join("note.txt"), b"hello").unwrap();

    let found = wait_for(&rx, Duration::from_secs(3));
    watcher.stop();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].file_name().unwrap(), "note.txt");
}
