/// ID types for Aria entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random track ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ephemeral media resource handle
///
/// Grants the media backend access to a track's bytes while the track
/// lives in the playlist. Allocated by the resource manager from a
/// monotonic counter; a revoked handle value is never handed out again.
///
/// Deliberately not serializable: handles do not survive a process
/// restart and must never end up in the durable playlist record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    /// Wrap a raw handle value
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle#{}", self.0)
    }
}

/// Mint resource handles from a monotonic sequence
///
/// Used by the resource manager; lives here so the handle's inner value
/// stays private to this module.
#[derive(Debug, Default)]
pub struct HandleSequence(u64);

impl HandleSequence {
    /// Create a sequence starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next handle; never repeats a previously minted value
    pub fn next(&mut self) -> ResourceHandle {
        let handle = ResourceHandle::from_raw(self.0);
        self.0 += 1;
        handle
    }
}
