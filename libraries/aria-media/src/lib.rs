//! Aria Media
//!
//! Media resource lifecycle and file ingestion for the Aria playlist
//! player.
//!
//! This crate provides:
//! - `ResourceManager`: allocation and guaranteed revocation of the
//!   ephemeral handles that grant the media backend access to a
//!   track's bytes
//! - `TrackRegistry`: the ingestion filter that turns UI-supplied file
//!   descriptors into playlist tracks (audio type allow-list, 50 MiB
//!   size cap, per-file rejections)
//!
//! Audio decoding itself is not implemented here; the bytes behind a
//! handle are opaque to this crate.

#![forbid(unsafe_code)]

pub mod ingest;
pub mod resources;

pub use ingest::{
    FileDescriptor, IngestReport, RejectedFile, TrackRegistry, AUDIO_MIME_TYPES,
    MAX_FILE_SIZE_BYTES,
};
pub use resources::ResourceManager;
