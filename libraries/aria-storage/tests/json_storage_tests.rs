//! Integration tests for the file-backed playlist storage
//!
//! Covers the swallow-and-fall-back contract: a broken or missing
//! record must never surface as an error, only as an empty playlist.

use aria_core::{PlaylistStorage, SavedTrack, TrackId};
use aria_storage::{JsonFileStorage, MemoryStorage, PLAYLIST_KEY};
use chrono::Utc;
use std::fs;
use tempfile::tempdir;

fn saved(id: &str, title: &str, duration_seconds: Option<f64>) -> SavedTrack {
    SavedTrack {
        id: TrackId::new(id),
        title: title.to_string(),
        duration_seconds,
        added_at: Utc::now(),
    }
}

#[test]
fn save_then_load_round_trips_durable_fields() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("playlist.json"));

    let record = vec![
        saved("t1", "First", Some(181.4)),
        saved("t2", "Second", None),
        saved("t3", "Third", Some(12.0)),
    ];
    storage.save(&record);

    assert_eq!(storage.load(), record);
}

#[test]
fn load_without_a_file_is_empty() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("missing.json"));

    assert!(storage.load().is_empty());
}

#[test]
fn malformed_document_loads_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.json");
    fs::write(&path, "this is not json {{{").unwrap();

    let storage = JsonFileStorage::new(&path);
    assert!(storage.load().is_empty());
}

#[test]
fn wrong_shaped_record_loads_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.json");
    fs::write(&path, format!("{{\"{PLAYLIST_KEY}\": {{\"not\": \"an array\"}}}}")).unwrap();

    let storage = JsonFileStorage::new(&path);
    assert!(storage.load().is_empty());
}

#[test]
fn missing_key_loads_as_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.json");
    fs::write(&path, "{\"some.other.key\": 42}").unwrap();

    let storage = JsonFileStorage::new(&path);
    assert!(storage.load().is_empty());
}

#[test]
fn save_preserves_unrelated_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.json");
    fs::write(&path, "{\"ui.theme\": \"dark\"}").unwrap();

    let storage = JsonFileStorage::new(&path);
    storage.save(&[saved("t1", "Track", None)]);

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["ui.theme"], "dark");
    assert_eq!(document[PLAYLIST_KEY].as_array().unwrap().len(), 1);
}

#[test]
fn save_overwrites_previous_record() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("playlist.json"));

    storage.save(&[saved("t1", "One", None), saved("t2", "Two", None)]);
    storage.save(&[saved("t3", "Three", Some(3.0))]);

    let loaded = storage.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Three");
}

#[test]
fn save_failure_is_swallowed() {
    // The backing path is a directory, so every write fails
    let dir = tempdir().unwrap();
    let blocked = dir.path().join("blocked");
    fs::create_dir(&blocked).unwrap();
    let storage = JsonFileStorage::new(&blocked);

    storage.save(&[saved("t1", "Track", None)]);
    assert!(storage.load().is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("nested/deeper/playlist.json"));

    storage.save(&[saved("t1", "Track", None)]);
    assert_eq!(storage.load().len(), 1);
}

#[test]
fn stored_record_uses_the_documented_wire_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("playlist.json");
    let storage = JsonFileStorage::new(&path);
    storage.save(&[saved("t1", "Track", Some(4.5))]);

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &document[PLAYLIST_KEY][0];
    assert_eq!(entry["id"], "t1");
    assert_eq!(entry["title"], "Track");
    assert_eq!(entry["durationSeconds"], 4.5);
    assert!(entry["addedAt"].is_string());
    assert!(entry.get("handle").is_none());
}

#[test]
fn memory_storage_shares_records_between_clones() {
    let storage = MemoryStorage::new();
    let observer = storage.clone();

    storage.save(&[saved("t1", "Track", None)]);
    assert_eq!(observer.load().len(), 1);
    assert_eq!(observer.record()[0].title, "Track");
}
