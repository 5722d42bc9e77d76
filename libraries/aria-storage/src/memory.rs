//! In-memory playlist storage
//!
//! Test double with the same contract as the file-backed adapter;
//! also usable for ephemeral sessions that should not touch disk.

use aria_core::{PlaylistStorage, SavedTrack};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory implementation of [`PlaylistStorage`]
///
/// Clones share the same record, so a test can hold one clone and
/// hand another to the playlist.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    record: Arc<Mutex<Vec<SavedTrack>>>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with a record
    pub fn with_record(record: Vec<SavedTrack>) -> Self {
        Self {
            record: Arc::new(Mutex::new(record)),
        }
    }

    /// The last saved record
    pub fn record(&self) -> Vec<SavedTrack> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PlaylistStorage for MemoryStorage {
    fn load(&self) -> Vec<SavedTrack> {
        self.record()
    }

    fn save(&self, tracks: &[SavedTrack]) {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = tracks.to_vec();
    }
}
