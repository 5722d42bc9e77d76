//! Aria Storage
//!
//! Durable playlist persistence for the Aria playlist player.
//!
//! Implements the `PlaylistStorage` contract from `aria-core`:
//! best-effort, never a fault for the caller. The record holds only
//! the durable track fields; resource handles are ephemeral and never
//! persisted, so tracks restored after a restart stay unplayable until
//! their files are re-ingested. That is a documented property of the
//! system, not something this crate papers over.

#![forbid(unsafe_code)]

mod error;
mod json;
mod memory;

pub use error::StorageError;
pub use json::{JsonFileStorage, PLAYLIST_KEY};
pub use memory::MemoryStorage;
