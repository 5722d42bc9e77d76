/// Core traits for Aria
use crate::types::SavedTrack;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// Opaque access to a media file's bytes
///
/// Handed to the resource manager at ingestion and resolved by the
/// playback controller when loading a track into the media backend.
/// The bytes themselves are never interpreted by this core.
pub trait ByteSource: Send + Sync {
    /// Open a fresh reader over the bytes
    fn open(&self) -> io::Result<Box<dyn Read + Send>>;

    /// Size of the source in bytes
    fn len(&self) -> u64;

    /// Whether the source is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for PathBuf {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(File::open(self)?))
    }

    fn len(&self) -> u64 {
        std::fs::metadata(self).map(|m| m.len()).unwrap_or(0)
    }
}

impl ByteSource for Vec<u8> {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.clone())))
    }

    fn len(&self) -> u64 {
        Vec::len(self) as u64
    }
}

/// Durable playlist storage
///
/// Best-effort mirror of the in-memory playlist. The signatures are
/// infallible by contract: `load` falls back to an empty playlist on
/// any failure, and `save` failures are logged by the implementation
/// and otherwise ignored. Storage never blocks or fails the in-memory
/// mutation that triggered it.
pub trait PlaylistStorage: Send {
    /// Read the durable playlist record
    ///
    /// Returns an empty list on missing key, malformed content, or any
    /// deserialization failure.
    fn load(&self) -> Vec<SavedTrack>;

    /// Write the durable playlist record
    ///
    /// Fire-and-forget; a failed write must not propagate.
    fn save(&self, tracks: &[SavedTrack]);
}
