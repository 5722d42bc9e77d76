//! Aria Playback
//!
//! Playlist store and playback controller for the Aria playlist
//! player.
//!
//! This crate provides:
//! - `Playlist`: the ordered track sequence plus current index, with
//!   atomic mutations, index rebasing on removal, wraparound
//!   navigation, storage mirroring, and handle revocation
//! - `Player`: the playback controller the UI talks to; drives a
//!   [`MediaBackend`] and turns its events into observable state
//! - `MediaBackend`: the trait seam for the external media-playback
//!   primitive (audio decoding is not implemented in this workspace)
//!
//! # Architecture
//!
//! Everything runs on one control thread. The media backend is the
//! single asynchronous boundary: its events are drained by
//! [`Player::pump`] and validated against a per-load generation
//! counter, so events from a superseded track load are discarded.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_playback::{MediaBackend, Player};
//! use aria_media::{FileDescriptor, ResourceManager};
//! # fn backend() -> Box<dyn MediaBackend> { unimplemented!() }
//! # fn storage() -> Box<dyn aria_core::PlaylistStorage> { unimplemented!() }
//!
//! let mut player = Player::new(backend(), ResourceManager::new(), storage());
//!
//! // UI command handling
//! player.toggle_play_pause();
//! player.set_volume(0.8);
//!
//! // Control loop: drain backend events, then render
//! player.pump();
//! for event in player.take_events() {
//!     // forward to the UI layer
//! }
//! ```

#![forbid(unsafe_code)]

mod backend;
mod events;
mod player;
mod playlist;

// Public exports
pub use backend::{MediaBackend, MediaEvent, MediaEventKind};
pub use events::PlayerEvent;
pub use player::Player;
pub use playlist::{Playlist, Removal};
