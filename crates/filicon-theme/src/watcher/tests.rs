//! Tests for the theme file watcher.

use super::*;
use std::path::PathBuf;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = ThemeWatcher::new(PathBuf::from("/tmp/nonexistent_filicon_watch.json"));
    assert_eq!(
        watcher.path(),
        PathBuf::from("/tmp/nonexistent_filicon_watch.json").as_path()
    );
}

#[test]
fn watcher_new_with_existing_path_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seti.json");
    std::fs::write(&path, "{}").unwrap();

    let watcher = ThemeWatcher::new(path.clone());
    assert_eq!(watcher.path(), path.as_path());
}

#[tokio::test]
async fn watch_on_missing_directory_fails() {
    let watcher = ThemeWatcher::new(PathBuf::from(
        "/tmp/nonexistent_filicon_dir/deeper/seti.json",
    ));
    let (tx, _rx) = tokio::sync::broadcast::channel(4);
    let result = watcher.watch(tx).await;
    assert!(matches!(
        result,
        Err(filicon_common::ThemeError::WatchError(_))
    ));
}

#[tokio::test]
async fn burst_of_writes_sends_one_signal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seti.json");
    std::fs::write(&path, "{}").unwrap();

    let watcher = ThemeWatcher::new(path.clone());
    let (tx, mut rx) = tokio::sync::broadcast::channel(4);
    let handle = tokio::spawn(async move { watcher.watch(tx).await });

    // Let the watcher register before touching the file.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for i in 0..5 {
        std::fs::write(&path, format!(r#"{{"file": "k{i}"}}"#)).unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let first = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv()).await;
    assert!(matches!(first, Ok(Ok(()))), "no reload signal: {first:?}");

    let extra = tokio::time::timeout(std::time::Duration::from_millis(1500), rx.recv()).await;
    assert!(extra.is_err(), "burst produced more than one signal");

    handle.abort();
}

#[tokio::test]
async fn changes_to_sibling_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seti.json");
    std::fs::write(&path, "{}").unwrap();

    let watcher = ThemeWatcher::new(path);
    let (tx, mut rx) = tokio::sync::broadcast::channel(4);
    let handle = tokio::spawn(async move { watcher.watch(tx).await });

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    std::fs::write(dir.path().join("minimal.json"), "{}").unwrap();

    let signal = tokio::time::timeout(std::time::Duration::from_millis(1500), rx.recv()).await;
    assert!(signal.is_err());

    handle.abort();
}
