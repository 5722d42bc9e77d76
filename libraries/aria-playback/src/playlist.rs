//! Playlist store
//!
//! Owns the ordered track sequence and the current index. Every
//! mutation is synchronous and atomic: observers never see the
//! sequence and the index disagree. Mutations that change durable
//! fields trigger a fire-and-forget save, and removals revoke the
//! departing tracks' media resource handles.

use aria_core::{PlaylistSnapshot, PlaylistStorage, SavedTrack, Track, TrackId, TrackSummary};
use aria_media::ResourceManager;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of removing a track
#[derive(Debug)]
pub struct Removal {
    /// The removed track, with its handle already revoked and stripped
    pub track: Track,

    /// Whether the removed track was the current one
    pub removed_current: bool,
}

/// Ordered track sequence plus current index
///
/// Invariant: the current index is `None` iff the sequence is empty,
/// otherwise it is a valid index. No other component mutates the
/// sequence or the index directly.
pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
    resources: ResourceManager,
    storage: Box<dyn PlaylistStorage>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(resources: ResourceManager, storage: Box<dyn PlaylistStorage>) -> Self {
        Self {
            tracks: Vec::new(),
            current: None,
            resources,
            storage,
        }
    }

    /// Repopulate once from durable storage
    ///
    /// Restored tracks keep their metadata but carry no resource
    /// handle; they are unplayable until the files are re-ingested.
    pub fn restore(&mut self) {
        let saved = self.storage.load();
        if saved.is_empty() {
            return;
        }

        debug!(count = saved.len(), "restored playlist from storage");
        self.tracks = saved.into_iter().map(Track::from_saved).collect();
        self.current = Some(0);
    }

    // ===== Mutations =====

    /// Append tracks at the end, preserving input order
    ///
    /// Entries whose id collides with an existing track are skipped
    /// (their handles revoked so nothing leaks); a collision is
    /// non-fatal. An empty playlist becoming non-empty selects index 0.
    pub fn insert(&mut self, tracks: Vec<Track>) {
        let was_empty = self.tracks.is_empty();
        let mut inserted = false;

        for track in tracks {
            if self.tracks.iter().any(|t| t.id == track.id) {
                warn!(id = %track.id, "skipping track with colliding id");
                if let Some(handle) = track.handle {
                    self.resources.revoke(handle);
                }
                continue;
            }
            self.tracks.push(track);
            inserted = true;
        }

        if was_empty && !self.tracks.is_empty() {
            self.current = Some(0);
        }

        if inserted {
            self.persist();
        }
    }

    /// Remove the matching track; no-op on unknown id
    ///
    /// Rebases the current index so it keeps pointing at the same
    /// track where possible, and revokes the removed track's handle.
    pub fn remove(&mut self, id: &TrackId) -> Option<Removal> {
        let index = self.tracks.iter().position(|t| t.id == *id)?;
        let mut track = self.tracks.remove(index);

        if let Some(handle) = track.handle.take() {
            self.resources.revoke(handle);
        }

        let mut removed_current = false;
        self.current = match self.current {
            Some(current) if index < current => Some(current - 1),
            Some(current) if index == current => {
                removed_current = true;
                if self.tracks.is_empty() {
                    None
                } else {
                    Some(index.min(self.tracks.len() - 1))
                }
            }
            other => other,
        };

        self.persist();
        Some(Removal {
            track,
            removed_current,
        })
    }

    /// Remove every track, revoking all handles
    pub fn clear(&mut self) {
        for track in &mut self.tracks {
            if let Some(handle) = track.handle.take() {
                self.resources.revoke(handle);
            }
        }
        self.tracks.clear();
        self.current = None;
        self.persist();
    }

    /// Make the matching track current
    ///
    /// Returns the new index, or `None` as the explicit not-found
    /// signal.
    pub fn select(&mut self, id: &TrackId) -> Option<usize> {
        let index = self.tracks.iter().position(|t| t.id == *id)?;
        self.current = Some(index);
        Some(index)
    }

    /// Move the current index to a position returned by
    /// [`next_index`](Self::next_index) / [`previous_index`](Self::previous_index)
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    /// Record the duration the media backend resolved for a track
    pub fn set_track_duration(&mut self, id: &TrackId, duration: Duration) {
        if let Some(track) = self.tracks.iter_mut().find(|t| t.id == *id) {
            if track.duration != Some(duration) {
                track.duration = Some(duration);
                self.persist();
            }
        }
    }

    // ===== Navigation =====

    /// Index after the current one, wrapping around
    ///
    /// `None` iff the playlist is empty.
    pub fn next_index(&self) -> Option<usize> {
        let current = self.current?;
        Some((current + 1) % self.tracks.len())
    }

    /// Index before the current one, wrapping around
    ///
    /// `None` iff the playlist is empty.
    pub fn previous_index(&self) -> Option<usize> {
        let current = self.current?;
        let len = self.tracks.len();
        Some((current + len - 1) % len)
    }

    // ===== Read side =====

    /// Current index
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The current track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Look up a track by id
    pub fn get(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == *id)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Consistent point-in-time view for the UI
    pub fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            tracks: self.tracks.iter().map(TrackSummary::from).collect(),
            current_index: self.current,
        }
    }

    /// Best-effort mirror of the durable fields
    ///
    /// The in-memory playlist stays the source of truth; a failed save
    /// is the storage adapter's problem to log.
    fn persist(&self) {
        let saved: Vec<SavedTrack> = self.tracks.iter().map(Track::to_saved).collect();
        self.storage.save(&saved);
    }
}
