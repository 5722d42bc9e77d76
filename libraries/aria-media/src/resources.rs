//! Resource lifecycle manager
//!
//! Owns the ephemeral media resource handles backing ingested tracks.
//! A handle is allocated when a file is ingested and revoked the moment
//! its track leaves the playlist; a revoked handle never resolves again
//! and its value is never reused.

use aria_core::{ByteSource, HandleSequence, ResourceHandle};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Process-scoped registry of live media resources
///
/// Cheaply cloneable so the playlist store and a media backend
/// implementation can share one registry. Everything runs on the single
/// control thread, so the inner lock is uncontended; it exists to keep
/// the type `Send + Sync` without unsafe code.
#[derive(Clone, Default)]
pub struct ResourceManager {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    sequence: HandleSequence,
    live: HashMap<ResourceHandle, Arc<dyn ByteSource>>,
}

impl ResourceManager {
    /// Create an empty resource manager
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocate a handle for a file's bytes
    ///
    /// The returned handle is unique among all handles ever allocated
    /// by this manager, live or revoked.
    pub fn allocate(&self, source: Arc<dyn ByteSource>) -> ResourceHandle {
        let mut inner = self.lock();
        let handle = inner.sequence.next();
        inner.live.insert(handle, source);
        debug!(%handle, "allocated media resource");
        handle
    }

    /// Revoke a handle, dropping its byte source
    ///
    /// Returns `true` if the handle was live. A second revocation of
    /// the same handle is a logged no-op, never an error.
    pub fn revoke(&self, handle: ResourceHandle) -> bool {
        let removed = self.lock().live.remove(&handle).is_some();
        if removed {
            debug!(%handle, "revoked media resource");
        } else {
            warn!(%handle, "revoke of a handle that is not live");
        }
        removed
    }

    /// Resolve a handle to its byte source
    ///
    /// Returns `None` once the handle has been revoked.
    pub fn resolve(&self, handle: ResourceHandle) -> Option<Arc<dyn ByteSource>> {
        self.lock().live.get(&handle).cloned()
    }

    /// Whether a handle is currently live
    pub fn is_live(&self, handle: ResourceHandle) -> bool {
        self.lock().live.contains_key(&handle)
    }

    /// Revoke every live handle; returns how many were revoked
    ///
    /// Teardown hook for process shutdown.
    pub fn revoke_all(&self) -> usize {
        let mut inner = self.lock();
        let count = inner.live.len();
        inner.live.clear();
        if count > 0 {
            debug!(count, "revoked all live media resources");
        }
        count
    }

    /// Number of currently live handles
    pub fn live_count(&self) -> usize {
        self.lock().live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(data: &[u8]) -> Arc<dyn ByteSource> {
        Arc::new(data.to_vec())
    }

    #[test]
    fn allocate_then_resolve() {
        let manager = ResourceManager::new();
        let handle = manager.allocate(bytes(b"abc"));

        let source = manager.resolve(handle).expect("handle should be live");
        assert_eq!(source.len(), 3);
        assert_eq!(manager.live_count(), 1);
    }

    #[test]
    fn revoked_handle_never_resolves() {
        let manager = ResourceManager::new();
        let handle = manager.allocate(bytes(b"abc"));

        assert!(manager.revoke(handle));
        assert!(manager.resolve(handle).is_none());
        assert!(!manager.is_live(handle));
    }

    #[test]
    fn double_revoke_is_a_no_op() {
        let manager = ResourceManager::new();
        let handle = manager.allocate(bytes(b"abc"));

        assert!(manager.revoke(handle));
        assert!(!manager.revoke(handle));
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn handle_values_are_never_reused() {
        let manager = ResourceManager::new();
        let first = manager.allocate(bytes(b"a"));
        manager.revoke(first);

        let second = manager.allocate(bytes(b"b"));
        assert_ne!(first, second);
    }

    #[test]
    fn revoke_all_empties_the_registry() {
        let manager = ResourceManager::new();
        manager.allocate(bytes(b"a"));
        manager.allocate(bytes(b"b"));
        manager.allocate(bytes(b"c"));

        assert_eq!(manager.revoke_all(), 3);
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn clones_share_one_registry() {
        let manager = ResourceManager::new();
        let other = manager.clone();

        let handle = manager.allocate(bytes(b"a"));
        assert!(other.is_live(handle));

        other.revoke(handle);
        assert!(!manager.is_live(handle));
    }
}
