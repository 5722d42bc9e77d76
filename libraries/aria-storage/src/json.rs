//! File-backed JSON playlist storage
//!
//! The durable record is one namespaced key inside a JSON object
//! document, holding the playlist's durable fields as an array:
//!
//! ```json
//! { "aria.playlist.v1": [
//!     { "id": "…", "title": "…", "durationSeconds": 182.5, "addedAt": "…" }
//! ] }
//! ```
//!
//! Unrelated keys in the document are preserved across saves. Writes
//! go through a temp file and an atomic rename so a crash mid-save
//! never corrupts the previous record.

use crate::error::{Result, StorageError};
use aria_core::{PlaylistStorage, SavedTrack};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Namespaced key holding the playlist record
pub const PLAYLIST_KEY: &str = "aria.playlist.v1";

/// JSON-file implementation of [`PlaylistStorage`]
///
/// Best-effort by contract: `load` falls back to an empty playlist on
/// any failure, `save` failures are logged and ignored. The in-memory
/// playlist is the source of truth; this file is only its mirror.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage backed by the given file path
    ///
    /// The file (and its parent directory) is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Map::new());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Value>(&text)? {
            Value::Object(document) => Ok(document),
            other => Err(StorageError::Malformed(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn try_load(&self) -> Result<Vec<SavedTrack>> {
        let mut document = self.read_document()?;
        match document.remove(PLAYLIST_KEY) {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn try_save(&self, tracks: &[SavedTrack]) -> Result<()> {
        // Keep unrelated keys; start fresh if the document is unreadable
        let mut document = self.read_document().unwrap_or_default();
        document.insert(PLAYLIST_KEY.to_string(), serde_json::to_value(tracks)?);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staged = self.path.with_extension("tmp");
        fs::write(&staged, serde_json::to_vec_pretty(&Value::Object(document))?)?;
        fs::rename(&staged, &self.path)?;
        Ok(())
    }
}

impl PlaylistStorage for JsonFileStorage {
    fn load(&self) -> Vec<SavedTrack> {
        match self.try_load() {
            Ok(tracks) => {
                debug!(count = tracks.len(), path = ?self.path, "loaded playlist record");
                tracks
            }
            Err(err) => {
                warn!(%err, path = ?self.path, "playlist load failed, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, tracks: &[SavedTrack]) {
        if let Err(err) = self.try_save(tracks) {
            warn!(%err, path = ?self.path, "playlist save failed");
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
