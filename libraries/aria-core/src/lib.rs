//! Aria Core
//!
//! Platform-agnostic types, traits, and error handling for the Aria
//! playlist player.
//!
//! The core crate defines:
//! - **Domain types**: `Track`, `SavedTrack`, `PlaybackState`,
//!   `PlaylistSnapshot`, and the id types
//! - **Core traits**: `ByteSource` (opaque file bytes) and
//!   `PlaylistStorage` (durable playlist record)
//! - **Error handling**: `PlayerError`, `ValidationError`, `Result`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{PlayerError, Result, ValidationError};
pub use traits::{ByteSource, PlaylistStorage};
pub use types::{
    HandleSequence, PlaybackState, PlaybackStatus, PlaylistSnapshot, ResourceHandle, SavedTrack,
    Track, TrackId, TrackSummary,
};
