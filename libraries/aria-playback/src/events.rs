//! Player events
//!
//! Event-based communication for UI synchronization. The controller
//! queues events as observable state changes and the UI drains them
//! with [`crate::Player::take_events`] after each command or pump.

use aria_core::{PlaybackStatus, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A different track was loaded
    TrackChanged {
        /// ID of the new current track
        track_id: TrackId,
        /// ID of the previously loaded track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Playlist contents or selection changed
    PlaylistChanged {
        /// New playlist length
        length: usize,
        /// New current index
        current_index: Option<usize>,
    },

    /// Playhead moved
    PositionChanged {
        /// Position in seconds
        position_seconds: f64,
        /// Track duration in seconds, if resolved
        duration_seconds: Option<f64>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0 to 1.0)
        volume: f32,
    },

    /// A playback error became observable
    Error {
        /// Error message, also mirrored in `PlaybackState.error`
        message: String,
    },
}
