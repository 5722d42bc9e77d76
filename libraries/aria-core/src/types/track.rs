/// Track domain type
use crate::types::{ResourceHandle, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One playable audio item in the playlist
///
/// Not serializable on purpose: the resource handle is ephemeral and
/// must never reach durable storage. Persistence goes through
/// [`SavedTrack`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Unique track identifier, generated at ingestion
    pub id: TrackId,

    /// Display title (source filename, extension stripped)
    pub title: String,

    /// Track duration; unknown until the media backend reports metadata
    pub duration: Option<Duration>,

    /// Ephemeral media resource handle
    ///
    /// `None` for tracks restored from durable storage: they keep their
    /// metadata but are not playable until the file is ingested again.
    pub handle: Option<ResourceHandle>,

    /// Source file size in bytes
    pub size_bytes: u64,

    /// When the track was added to the playlist
    pub added_at: DateTime<Utc>,
}

impl Track {
    /// Create a freshly ingested track
    pub fn new(title: impl Into<String>, handle: ResourceHandle, size_bytes: u64) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            duration: None,
            handle: Some(handle),
            size_bytes,
            added_at: Utc::now(),
        }
    }

    /// Rebuild a track from its durable projection
    ///
    /// The handle is gone after a restart; the track stays listed but
    /// unplayable until re-ingested.
    pub fn from_saved(saved: SavedTrack) -> Self {
        Self {
            id: saved.id,
            title: saved.title,
            duration: saved.duration_seconds.map(Duration::from_secs_f64),
            handle: None,
            size_bytes: 0,
            added_at: saved.added_at,
        }
    }

    /// Project the durable fields for persistence
    pub fn to_saved(&self) -> SavedTrack {
        SavedTrack {
            id: self.id.clone(),
            title: self.title.clone(),
            duration_seconds: self.duration.map(|d| d.as_secs_f64()),
            added_at: self.added_at,
        }
    }

    /// Whether the track currently has a live media resource
    pub fn is_playable(&self) -> bool {
        self.handle.is_some()
    }
}

/// Durable projection of a track
///
/// Exactly the fields that survive a restart, in the wire shape of the
/// stored JSON record: `{id, title, durationSeconds, addedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTrack {
    /// Track identifier
    pub id: TrackId,

    /// Display title
    pub title: String,

    /// Duration in seconds, null while unresolved
    pub duration_seconds: Option<f64>,

    /// Ingestion timestamp (ISO-8601)
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HandleSequence;

    #[test]
    fn new_track_has_handle_and_no_duration() {
        let mut seq = HandleSequence::new();
        let track = Track::new("Song", seq.next(), 1024);
        assert!(track.is_playable());
        assert!(track.duration.is_none());
        assert_eq!(track.title, "Song");
    }

    #[test]
    fn saved_round_trip_preserves_durable_fields() {
        let mut seq = HandleSequence::new();
        let mut track = Track::new("Song", seq.next(), 1024);
        track.duration = Some(Duration::from_secs_f64(182.5));

        let restored = Track::from_saved(track.to_saved());
        assert_eq!(restored.id, track.id);
        assert_eq!(restored.title, track.title);
        assert_eq!(restored.duration, track.duration);
        assert_eq!(restored.added_at, track.added_at);
        assert!(!restored.is_playable());
    }

    #[test]
    fn saved_track_wire_shape() {
        let saved = SavedTrack {
            id: TrackId::new("t1"),
            title: "Song".to_string(),
            duration_seconds: None,
            added_at: Utc::now(),
        };

        let json = serde_json::to_value(&saved).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["title"], "Song");
        assert!(json["durationSeconds"].is_null());
        assert!(json["addedAt"].is_string());
    }
}
