//! Tests for the config file watcher.

use super::*;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    // Watcher should be created even if the file doesn't exist yet
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_facet_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn watcher_starts_on_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let changes = ConfigWatcher::new(path).unwrap().start().unwrap();
    assert!(!changes.is_pending());
}

#[test]
fn watcher_fails_on_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("config.toml");
    let result = ConfigWatcher::new(path).unwrap().start();
    assert!(matches!(result, Err(facet_common::ConfigError::WatchError(_))));
}

#[test]
fn poll_coalesces_bursts() {
    let (tx, rx) = mpsc::channel();
    let mut changes = ConfigChanges::from_channel(
        PathBuf::from("config.toml"),
        rx,
        Debouncer::new(Duration::from_millis(500)),
    );
    let start = Instant::now();

    tx.send(()).unwrap();
    tx.send(()).unwrap();
    assert!(!changes.poll(start));
    assert!(changes.is_pending());

    tx.send(()).unwrap();
    assert!(!changes.poll(start + Duration::from_millis(300)));
    assert!(!changes.poll(start + Duration::from_millis(700)));
    assert!(changes.poll(start + Duration::from_millis(800)));
    assert!(!changes.poll(start + Duration::from_millis(2000)));
}
