//! Track registry and ingestion filter
//!
//! Turns opaque file descriptors handed over by the UI layer into
//! playlist tracks: validates type and size, allocates a media resource
//! handle per accepted file, and derives display metadata. Rejections
//! are reported per file and never abort the rest of the batch.

use crate::resources::ResourceManager;
use aria_core::{ByteSource, Track, ValidationError};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum accepted file size (50 MiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

/// Accepted audio media types
pub const AUDIO_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/x-wav",
    "audio/ogg",
    "audio/flac",
    "audio/aac",
    "audio/mp4",
    "audio/webm",
];

/// Opaque file descriptor consumed from the UI layer
#[derive(Clone)]
pub struct FileDescriptor {
    /// Source filename, used for the display title and `.mp3` fallback
    pub name: String,

    /// Declared media type
    pub mime_type: String,

    /// Declared size in bytes
    pub size_bytes: u64,

    /// Access to the file's bytes
    pub source: Arc<dyn ByteSource>,
}

impl fmt::Debug for FileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDescriptor")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

/// A file the ingestion filter turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    /// Source filename
    pub name: String,

    /// Why it was rejected
    pub reason: ValidationError,
}

/// Outcome of one ingestion batch
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Tracks created from accepted files, in input order
    pub tracks: Vec<Track>,

    /// Per-file rejections, in input order
    pub rejected: Vec<RejectedFile>,
}

impl IngestReport {
    /// Whether every file in the batch was accepted
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Creates tracks from ingested files
///
/// Holds a clone of the resource manager so every accepted file gets a
/// live handle the moment its track exists.
#[derive(Clone)]
pub struct TrackRegistry {
    resources: ResourceManager,
}

impl TrackRegistry {
    /// Create a registry allocating from the given resource manager
    pub fn new(resources: ResourceManager) -> Self {
        Self { resources }
    }

    /// Ingest a batch of file descriptors
    ///
    /// Accepted files become tracks with freshly allocated handles;
    /// rejected files are reported alongside. Input order is preserved
    /// within both lists.
    pub fn ingest(&self, batch: Vec<FileDescriptor>) -> IngestReport {
        let mut report = IngestReport::default();

        for descriptor in batch {
            match validate(&descriptor) {
                Ok(()) => {
                    let handle = self.resources.allocate(Arc::clone(&descriptor.source));
                    let track =
                        Track::new(title_from_name(&descriptor.name), handle, descriptor.size_bytes);
                    debug!(name = %descriptor.name, id = %track.id, "ingested file");
                    report.tracks.push(track);
                }
                Err(reason) => {
                    warn!(name = %descriptor.name, %reason, "rejected file");
                    report.rejected.push(RejectedFile {
                        name: descriptor.name,
                        reason,
                    });
                }
            }
        }

        report
    }
}

fn validate(descriptor: &FileDescriptor) -> Result<(), ValidationError> {
    let type_accepted = AUDIO_MIME_TYPES.contains(&descriptor.mime_type.as_str())
        || descriptor.name.to_ascii_lowercase().ends_with(".mp3");

    if !type_accepted {
        return Err(ValidationError::UnsupportedType {
            name: descriptor.name.clone(),
            mime_type: descriptor.mime_type.clone(),
        });
    }

    if descriptor.size_bytes > MAX_FILE_SIZE_BYTES {
        return Err(ValidationError::TooLarge {
            name: descriptor.name.clone(),
            size_bytes: descriptor.size_bytes,
            limit_bytes: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Strip the final extension from a filename
///
/// A leading dot is not treated as an extension separator.
fn title_from_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if index > 0 => &name[..index],
        _ => name,
    }
}
