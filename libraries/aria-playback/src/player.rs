//! Playback controller
//!
//! Orchestrates the media backend against the playlist's current
//! track. Commands come in from the UI layer; backend events come back
//! through [`Player::pump`]. No error crosses the command surface as a
//! fault: failures become observable `PlaybackState.error` text,
//! recoverable by selecting a track again.

use crate::backend::{MediaBackend, MediaEvent, MediaEventKind};
use crate::events::PlayerEvent;
use crate::playlist::Playlist;
use aria_core::{
    PlaybackState, PlaybackStatus, PlayerError, PlaylistSnapshot, PlaylistStorage, Track, TrackId,
};
use aria_media::{FileDescriptor, IngestReport, ResourceManager, TrackRegistry};
use std::time::Duration;
use tracing::{debug, warn};

/// Top-level playback orchestration
///
/// Each track load is tagged with a monotonically increasing
/// generation; backend events carrying a superseded generation are
/// discarded, so a late `Ended` from a replaced track can never
/// trigger a double auto-advance.
pub struct Player {
    backend: Box<dyn MediaBackend>,
    playlist: Playlist,
    registry: TrackRegistry,
    resources: ResourceManager,
    state: PlaybackState,
    /// Id of the track currently loaded in the backend
    loaded: Option<TrackId>,
    /// Generation of the most recent load
    generation: u64,
    /// Resume playback once metadata for the pending load is ready
    resume_on_ready: bool,
    /// Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create a controller and repopulate the playlist from storage
    ///
    /// The storage record is read exactly once, here. Restored tracks
    /// are listed but unplayable until their files are re-ingested.
    pub fn new(
        backend: Box<dyn MediaBackend>,
        resources: ResourceManager,
        storage: Box<dyn PlaylistStorage>,
    ) -> Self {
        let mut playlist = Playlist::new(resources.clone(), storage);
        playlist.restore();

        let mut player = Self {
            backend,
            registry: TrackRegistry::new(resources.clone()),
            resources,
            playlist,
            state: PlaybackState::default(),
            loaded: None,
            generation: 0,
            resume_on_ready: false,
            pending_events: Vec::new(),
        };
        player.backend.set_volume(player.state.volume);
        player
    }

    // ===== Commands =====

    /// Ingest a batch of files and append the accepted ones
    ///
    /// Returns the per-file outcome; one rejected file never aborts
    /// the rest of the batch.
    pub fn add_files(&mut self, batch: Vec<FileDescriptor>) -> IngestReport {
        let report = self.registry.ingest(batch);
        if !report.tracks.is_empty() {
            self.playlist.insert(report.tracks.clone());
            self.emit_playlist_changed();
        }
        report
    }

    /// Start or resume playback
    pub fn play(&mut self) {
        match self.state.status {
            PlaybackStatus::Playing => {}
            PlaybackStatus::Paused => self.attempt_play(),
            PlaybackStatus::Loading => {
                // Keep the intent; playback starts once metadata is ready
                self.resume_on_ready = true;
            }
            PlaybackStatus::Idle | PlaybackStatus::Error => {
                if self.playlist.current_track().is_some() {
                    self.load_current(true);
                }
            }
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        match self.state.status {
            PlaybackStatus::Playing => {
                self.backend.pause();
                self.set_status(PlaybackStatus::Paused);
            }
            PlaybackStatus::Loading => {
                self.resume_on_ready = false;
            }
            _ => {}
        }
    }

    /// Pause if playing, otherwise attempt play
    pub fn toggle_play_pause(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Seek within the current track
    ///
    /// Clamped to `[0, duration]`; the position is updated
    /// optimistically without waiting for the backend's echo.
    pub fn seek(&mut self, position: Duration) {
        if self.loaded.is_none() {
            debug!("seek ignored: no track loaded");
            return;
        }

        let clamped = match self.current_duration() {
            Some(duration) => position.min(duration),
            None => position,
        };

        self.backend.set_position(clamped);
        self.state.position = clamped;
        self.emit_position_changed();
    }

    /// Set volume, clamped to `[0.0, 1.0]`
    pub fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            warn!(volume, "ignoring non-finite volume");
            return;
        }

        let clamped = volume.clamp(0.0, 1.0);
        self.state.volume = clamped;
        self.backend.set_volume(clamped);
        self.pending_events
            .push(PlayerEvent::VolumeChanged { volume: clamped });
    }

    /// Make the matching track current and load it
    ///
    /// Playback resumes automatically once metadata is ready iff the
    /// state was playing immediately before the switch. Unknown ids
    /// are a no-op.
    pub fn select_track(&mut self, id: &TrackId) {
        let was_playing = self.state.is_playing();
        if self.playlist.select(id).is_none() {
            debug!(%id, "select ignored: track not in playlist");
            return;
        }
        self.emit_playlist_changed();
        self.load_current(was_playing);
    }

    /// Switch to the next track, wrapping around
    pub fn next(&mut self) {
        self.switch_to(self.playlist.next_index());
    }

    /// Switch to the previous track, wrapping around
    pub fn previous(&mut self) {
        self.switch_to(self.playlist.previous_index());
    }

    /// Remove the matching track; no-op on unknown id
    ///
    /// Removing the current track loads the rebased current track,
    /// preserving the play intent; removing the last track rests at
    /// idle.
    pub fn remove_track(&mut self, id: &TrackId) {
        let was_playing = self.state.is_playing();
        let Some(removal) = self.playlist.remove(id) else {
            return;
        };
        self.emit_playlist_changed();

        if self.playlist.is_empty() {
            self.unload();
        } else if removal.removed_current {
            self.load_current(was_playing);
        }
    }

    /// Empty the playlist, revoking every resource handle
    pub fn clear(&mut self) {
        self.playlist.clear();
        self.emit_playlist_changed();
        self.unload();
    }

    /// Drain backend events and apply them
    ///
    /// The host calls this from its control loop; it is the only place
    /// backend events enter the state machine.
    pub fn pump(&mut self) {
        for event in self.backend.poll_events() {
            self.handle_media_event(event);
        }
    }

    /// Teardown hook: stop the backend and revoke all live handles
    pub fn shutdown(&mut self) {
        self.backend.pause();
        self.generation += 1; // cancel interest in any in-flight load
        self.loaded = None;
        self.resume_on_ready = false;
        let revoked = self.resources.revoke_all();
        debug!(revoked, "player shut down");
    }

    // ===== Observables =====

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The current track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current_track()
    }

    /// Duration of the current track, if resolved
    pub fn current_duration(&self) -> Option<Duration> {
        self.playlist.current_track().and_then(|t| t.duration)
    }

    /// Consistent playlist view for the UI
    pub fn snapshot(&self) -> PlaylistSnapshot {
        self.playlist.snapshot()
    }

    /// Drain events queued since the last call
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Media events =====

    /// Apply one backend event
    ///
    /// Events from superseded generations are discarded; this is what
    /// makes fast manual track switches immune to late `Ended`s.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        if event.generation != self.generation {
            debug!(
                event_generation = event.generation,
                current_generation = self.generation,
                "discarding stale media event"
            );
            return;
        }

        match event.kind {
            MediaEventKind::MetadataReady { duration } => self.on_metadata_ready(duration),
            MediaEventKind::PositionAdvanced { position } => {
                self.state.position = position;
                self.emit_position_changed();
            }
            MediaEventKind::Ended => self.on_ended(),
            MediaEventKind::Failed { reason } => self.fail(reason),
        }
    }

    fn on_metadata_ready(&mut self, duration: Duration) {
        if let Some(id) = self.loaded.clone() {
            self.playlist.set_track_duration(&id, duration);
        }

        if self.resume_on_ready {
            self.resume_on_ready = false;
            self.attempt_play();
        } else {
            self.set_status(PlaybackStatus::Paused);
        }
    }

    fn on_ended(&mut self) {
        match self.playlist.next_index() {
            Some(index) => {
                // Continuous playback: wrap around and keep playing
                self.playlist.set_current_index(index);
                self.emit_playlist_changed();
                self.load_current(true);
            }
            None => self.unload(),
        }
    }

    // ===== Internals =====

    fn switch_to(&mut self, index: Option<usize>) {
        let Some(index) = index else {
            return; // empty playlist
        };
        let was_playing = self.state.is_playing();
        self.playlist.set_current_index(index);
        self.emit_playlist_changed();
        self.load_current(was_playing);
    }

    /// Load the playlist's current track into the backend
    ///
    /// Bumps the generation first so events from the outgoing track are
    /// dead on arrival even if the load itself fails.
    fn load_current(&mut self, resume: bool) {
        let Some(track) = self.playlist.current_track() else {
            self.unload();
            return;
        };
        let track_id = track.id.clone();
        let source = track
            .handle
            .and_then(|handle| self.resources.resolve(handle));

        self.generation += 1;
        self.state.position = Duration::ZERO;
        self.state.error = None;

        let Some(source) = source else {
            self.abort_load(PlayerError::ResourceUnavailable(track_id).to_string());
            return;
        };

        match self.backend.load(self.generation, source) {
            Ok(()) => {
                let previous = self.loaded.replace(track_id.clone());
                self.resume_on_ready = resume;
                self.pending_events.push(PlayerEvent::TrackChanged {
                    track_id,
                    previous_track_id: previous,
                });
                self.set_status(PlaybackStatus::Loading);
            }
            Err(err) => self.abort_load(err.to_string()),
        }
    }

    /// A load went wrong: silence whatever the backend still holds,
    /// drop the loaded track, and surface the failure
    fn abort_load(&mut self, message: String) {
        self.backend.pause();
        self.loaded = None;
        self.fail(message);
    }

    /// Attempt to start the backend; a refusal becomes an error state
    fn attempt_play(&mut self) {
        match self.backend.play() {
            Ok(()) => self.set_status(PlaybackStatus::Playing),
            Err(err) => self.fail(err.to_string()),
        }
    }

    /// Drop the loaded track and rest at idle
    fn unload(&mut self) {
        self.backend.pause();
        self.generation += 1; // cancel interest in the outgoing track
        self.loaded = None;
        self.resume_on_ready = false;
        self.state.position = Duration::ZERO;
        self.state.error = None;
        self.set_status(PlaybackStatus::Idle);
    }

    fn fail(&mut self, message: String) {
        warn!(%message, "playback error");
        self.state.error = Some(message.clone());
        self.resume_on_ready = false;
        self.pending_events.push(PlayerEvent::Error { message });
        self.set_status(PlaybackStatus::Error);
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.state.status != status {
            self.state.status = status;
            if status != PlaybackStatus::Error {
                self.state.error = None;
            }
            self.pending_events.push(PlayerEvent::StateChanged { status });
        }
    }

    fn emit_playlist_changed(&mut self) {
        self.pending_events.push(PlayerEvent::PlaylistChanged {
            length: self.playlist.len(),
            current_index: self.playlist.current_index(),
        });
    }

    fn emit_position_changed(&mut self) {
        self.pending_events.push(PlayerEvent::PositionChanged {
            position_seconds: self.state.position.as_secs_f64(),
            duration_seconds: self.current_duration().map(|d| d.as_secs_f64()),
        });
    }
}
