//! Media backend seam
//!
//! The external media-playback primitive is provided by the platform
//! (a decoder/output stack on desktop, an `<audio>`-like element in an
//! embedded webview). This core never decodes audio itself; it drives
//! the primitive through [`MediaBackend`] and reacts to the events the
//! primitive reports back.

use aria_core::{ByteSource, Result};
use std::sync::Arc;
use std::time::Duration;

/// External media-playback primitive
///
/// Loads are tagged with a generation counter supplied by the playback
/// controller; every event the backend reports must carry the
/// generation of the load it belongs to. For one generation, events
/// arrive in the order `MetadataReady`, `PositionAdvanced`*, then
/// `Ended` or `Failed`.
///
/// There is no explicit cancel: loading a new source supersedes the
/// previous one, and the controller discards events from superseded
/// generations.
pub trait MediaBackend: Send {
    /// Load a new media source, superseding any current one
    fn load(&mut self, generation: u64, source: Arc<dyn ByteSource>) -> Result<()>;

    /// Start or resume playback; may fail
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead
    fn set_position(&mut self, position: Duration);

    /// Set output volume, `0.0` to `1.0`
    fn set_volume(&mut self, volume: f32);

    /// Drain events reported since the last poll
    ///
    /// The host's single suspension point: the controller calls this
    /// from `pump()` on the control thread.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

/// Event reported by the media backend
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEvent {
    /// Generation of the load this event belongs to
    pub generation: u64,

    /// What happened
    pub kind: MediaEventKind,
}

impl MediaEvent {
    /// Convenience constructor
    pub fn new(generation: u64, kind: MediaEventKind) -> Self {
        Self { generation, kind }
    }
}

/// Kinds of media backend events
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEventKind {
    /// Track metadata resolved; the track is ready to play
    MetadataReady {
        /// Resolved track duration
        duration: Duration,
    },

    /// Playhead advanced during playback
    PositionAdvanced {
        /// New playhead position
        position: Duration,
    },

    /// Track played to its end
    Ended,

    /// Load or playback failed
    Failed {
        /// Failure description
        reason: String,
    },
}
