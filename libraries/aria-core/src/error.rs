/// Core error types for Aria
use crate::types::TrackId;
use thiserror::Error;

/// Result type alias using `PlayerError`
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Per-file ingestion rejection
///
/// Reported per file from `add_files`; one rejection never aborts the
/// rest of the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Media type not in the audio allow-list and no `.mp3` fallback
    #[error("unsupported media type \"{mime_type}\" for \"{name}\"")]
    UnsupportedType {
        /// Source filename
        name: String,
        /// Declared media type
        mime_type: String,
    },

    /// File exceeds the ingestion size limit
    #[error("\"{name}\" is {size_bytes} bytes, over the {limit_bytes} byte limit")]
    TooLarge {
        /// Source filename
        name: String,
        /// Declared file size
        size_bytes: u64,
        /// Configured limit
        limit_bytes: u64,
    },
}

/// Playback errors
///
/// These never cross the public command interface as faults; the
/// controller turns them into observable `PlaybackState.error` text.
#[derive(Error, Debug)]
pub enum PlayerError {
    /// No track is currently loaded
    #[error("no track loaded")]
    NoTrackLoaded,

    /// Playlist is empty
    #[error("playlist is empty")]
    PlaylistEmpty,

    /// Track not found in the playlist
    #[error("track not found: {0}")]
    TrackNotFound(TrackId),

    /// Track has no live media resource (restored from storage, or revoked)
    #[error("media resource unavailable for track {0}")]
    ResourceUnavailable(TrackId),

    /// Media backend failed to load or play
    #[error("media backend error: {0}")]
    Backend(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl PlayerError {
    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}
