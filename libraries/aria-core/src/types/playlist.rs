/// Read-only playlist views handed to the UI layer
use crate::types::{Track, TrackId};
use serde::Serialize;

/// Lightweight track view for playlist rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    /// Track identifier
    pub id: TrackId,

    /// Display title
    pub title: String,

    /// Duration in seconds, null while unresolved
    pub duration_seconds: Option<f64>,

    /// Whether the track has a live media resource
    pub playable: bool,
}

impl From<&Track> for TrackSummary {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            duration_seconds: track.duration.map(|d| d.as_secs_f64()),
            playable: track.is_playable(),
        }
    }
}

/// Consistent point-in-time view of the playlist
///
/// `current_index` is `None` iff `tracks` is empty; otherwise it is a
/// valid index into `tracks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnapshot {
    /// Ordered track summaries
    pub tracks: Vec<TrackSummary>,

    /// Index of the current track
    pub current_index: Option<usize>,
}

impl PlaylistSnapshot {
    /// Summary of the current track, if any
    pub fn current(&self) -> Option<&TrackSummary> {
        self.current_index.and_then(|i| self.tracks.get(i))
    }
}
