/// Domain types for Aria
mod ids;
mod playback_state;
mod playlist;
mod track;

pub use ids::{HandleSequence, ResourceHandle, TrackId};
pub use playback_state::{PlaybackState, PlaybackStatus};
pub use playlist::{PlaylistSnapshot, TrackSummary};
pub use track::{SavedTrack, Track};
