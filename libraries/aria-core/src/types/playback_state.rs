/// Playback state observed by the UI layer
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Playlist empty or no track loaded
    Idle,

    /// Waiting for the media backend to resolve the loaded track
    Loading,

    /// Backend is actively advancing position
    Playing,

    /// Track loaded, position frozen
    Paused,

    /// A load or play attempt failed; recoverable by selecting a track
    Error,
}

/// Observable playback state
///
/// Owned by the playback controller; transitions only in response to
/// commands or media backend events.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current status
    pub status: PlaybackStatus,

    /// Position within the current track
    pub position: Duration,

    /// Volume in `[0.0, 1.0]`
    pub volume: f32,

    /// Last failure message, set while `status == Error`
    pub error: Option<String>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Idle,
            position: Duration::ZERO,
            volume: 1.0,
            error: None,
        }
    }
}

impl PlaybackState {
    /// Whether the backend is actively playing
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}
