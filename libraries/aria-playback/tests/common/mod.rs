//! Shared test fixtures: a scripted mock media backend and file helpers

#![allow(dead_code)]

use aria_core::{ByteSource, PlayerError, Result};
use aria_media::{FileDescriptor, ResourceManager};
use aria_playback::{MediaBackend, MediaEvent, MediaEventKind, Player};
use aria_storage::MemoryStorage;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Observable state of the mock backend
#[derive(Debug)]
pub struct BackendState {
    /// Generations passed to `load`, in call order
    pub loads: Vec<u64>,
    /// Byte length of the most recently loaded source
    pub source_len: u64,
    /// Whether the backend believes it is playing
    pub playing: bool,
    /// Last position set by the controller
    pub position: Duration,
    /// Last volume set by the controller
    pub volume: f32,
    /// Events waiting to be polled
    pub queue: Vec<MediaEvent>,
    /// Duration reported by the scripted `MetadataReady`
    pub metadata_duration: Duration,
    /// Queue a `MetadataReady` automatically on every successful load
    pub emit_metadata_on_load: bool,
    /// Make the next `load` fail
    pub fail_next_load: bool,
    /// Make the next `play` fail
    pub fail_next_play: bool,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            loads: Vec::new(),
            source_len: 0,
            playing: false,
            position: Duration::ZERO,
            volume: 1.0,
            queue: Vec::new(),
            metadata_duration: Duration::from_secs(180),
            emit_metadata_on_load: true,
            fail_next_load: false,
            fail_next_play: false,
        }
    }
}

/// Scripted media backend for controller tests
///
/// Tests hold a clone of the shared state to script failures and
/// inject events, and to assert what the controller asked for.
pub struct MockBackend {
    state: Arc<Mutex<BackendState>>,
}

impl MockBackend {
    pub fn new() -> (Self, Arc<Mutex<BackendState>>) {
        let state = Arc::new(Mutex::new(BackendState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }
}

pub fn lock(state: &Arc<Mutex<BackendState>>) -> MutexGuard<'_, BackendState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MediaBackend for MockBackend {
    fn load(&mut self, generation: u64, source: Arc<dyn ByteSource>) -> Result<()> {
        let mut state = lock(&self.state);
        if state.fail_next_load {
            state.fail_next_load = false;
            return Err(PlayerError::backend("decoder rejected source"));
        }

        state.playing = false;
        state.loads.push(generation);
        state.source_len = source.len();
        if state.emit_metadata_on_load {
            let duration = state.metadata_duration;
            state
                .queue
                .push(MediaEvent::new(generation, MediaEventKind::MetadataReady { duration }));
        }
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        if state.fail_next_play {
            state.fail_next_play = false;
            return Err(PlayerError::backend("output device unavailable"));
        }
        state.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        lock(&self.state).playing = false;
    }

    fn set_position(&mut self, position: Duration) {
        lock(&self.state).position = position;
    }

    fn set_volume(&mut self, volume: f32) {
        lock(&self.state).volume = volume;
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut lock(&self.state).queue)
    }
}

/// A valid audio file descriptor
pub fn audio_file(name: &str) -> FileDescriptor {
    FileDescriptor {
        name: name.to_string(),
        mime_type: "audio/mpeg".to_string(),
        size_bytes: 2048,
        source: Arc::new(vec![0u8; 2048]),
    }
}

/// Fresh player over a mock backend and in-memory storage
pub fn player() -> (
    Player,
    Arc<Mutex<BackendState>>,
    ResourceManager,
    MemoryStorage,
) {
    let (backend, state) = MockBackend::new();
    let resources = ResourceManager::new();
    let storage = MemoryStorage::new();
    let player = Player::new(Box::new(backend), resources.clone(), Box::new(storage.clone()));
    (player, state, resources, storage)
}

/// Queue an event on the mock backend as if the primitive fired it
pub fn fire(state: &Arc<Mutex<BackendState>>, generation: u64, kind: MediaEventKind) {
    lock(state).queue.push(MediaEvent::new(generation, kind));
}

/// Generation of the most recent load
pub fn last_generation(state: &Arc<Mutex<BackendState>>) -> u64 {
    *lock(state).loads.last().expect("no load recorded")
}
