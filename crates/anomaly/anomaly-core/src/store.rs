//! In-memory model registry and frame store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use anomaly_spi::{
    AnomalyError, Frame, FrameKey, FrameStore, ModelRef, ModelRegistry, Result, ScoringModel,
    WriteLock,
};

/// Model registry backed by a map.
#[derive(Default)]
pub struct InMemoryModelRegistry {
    models: HashMap<ModelRef, Arc<dyn ScoringModel>>,
}

impl InMemoryModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` under `reference`, replacing any previous entry.
    pub fn register(&mut self, reference: ModelRef, model: Arc<dyn ScoringModel>) {
        self.models.insert(reference, model);
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_model(
        mut self,
        reference: impl Into<String>,
        model: impl ScoringModel + 'static,
    ) -> Self {
        self.register(ModelRef::new(reference), Arc::new(model));
        self
    }

    pub fn remove(&mut self, reference: &ModelRef) -> Option<Arc<dyn ScoringModel>> {
        self.models.remove(reference)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelRegistry for InMemoryModelRegistry {
    fn resolve(&self, reference: &ModelRef) -> Option<Arc<dyn ScoringModel>> {
        self.models.get(reference).cloned()
    }
}

/// Frame store backed by a map, with per-key write locks.
///
/// A second `acquire` on a locked key fails instead of waiting, so two
/// jobs writing the same destination cannot interleave. Each lock records
/// the id of the token that took it; `commit` and `release` only honour
/// that token.
#[derive(Debug, Default)]
pub struct InMemoryFrameStore {
    frames: RwLock<HashMap<FrameKey, Frame>>,
    locked: Mutex<HashMap<FrameKey, u64>>,
    next_lock: AtomicU64,
}

impl InMemoryFrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `frame` under its own key without taking a lock.
    pub fn insert(&self, frame: Frame) {
        let mut frames = self.frames.write().unwrap_or_else(|p| p.into_inner());
        frames.insert(frame.key().clone(), frame);
    }

    pub fn is_locked(&self, key: &FrameKey) -> bool {
        self.locked
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.frames.read().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FrameStore for InMemoryFrameStore {
    fn acquire(&self, key: &FrameKey) -> Result<WriteLock> {
        let mut locked = self.locked.lock().unwrap_or_else(|p| p.into_inner());
        if locked.contains_key(key) {
            return Err(AnomalyError::StorageFailure(format!(
                "key {key} is locked by another writer"
            )));
        }
        let id = self.next_lock.fetch_add(1, Ordering::Relaxed);
        locked.insert(key.clone(), id);
        Ok(WriteLock::new(key.clone(), id))
    }

    fn commit(&self, lock: &WriteLock, frame: Frame) -> Result<()> {
        // The lock table stays held until the frame is in place.
        let locked = self.locked.lock().unwrap_or_else(|p| p.into_inner());
        let key = lock.key();
        if locked.get(key) != Some(&lock.id()) {
            return Err(AnomalyError::StorageFailure(format!(
                "commit to {key} without holding its lock"
            )));
        }
        let mut frames = self.frames.write().unwrap_or_else(|p| p.into_inner());
        frames.insert(key.clone(), frame);
        tracing::debug!(key = %key, "frame committed");
        Ok(())
    }

    fn release(&self, lock: &WriteLock) {
        let mut locked = self.locked.lock().unwrap_or_else(|p| p.into_inner());
        if locked.get(lock.key()) == Some(&lock.id()) {
            locked.remove(lock.key());
        }
    }

    fn get(&self, key: &FrameKey) -> Option<Frame> {
        self.frames
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_spi::{Column, ErrorVector};

    struct Constant;

    impl ScoringModel for Constant {
        fn is_autoencoder(&self) -> bool {
            true
        }

        fn training_reconstruction_error(&self) -> f64 {
            1.0
        }

        fn score(&self, frame: &Frame) -> Result<ErrorVector> {
            Ok(ErrorVector::new(vec![1.0; frame.num_rows()]))
        }
    }

    fn frame(key: &str) -> Frame {
        Frame::new(FrameKey::new(key), vec![Column::new("v", vec![1.0])]).unwrap()
    }

    #[test]
    fn test_registry_resolve() {
        let registry = InMemoryModelRegistry::new().with_model("M1", Constant);

        assert!(registry.resolve(&ModelRef::new("M1")).is_some());
        assert!(registry.resolve(&ModelRef::new("M2")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_remove() {
        let mut registry = InMemoryModelRegistry::new().with_model("M1", Constant);
        assert!(registry.remove(&ModelRef::new("M1")).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryFrameStore::new();
        store.insert(frame("a"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&FrameKey::new("a")), Some(frame("a")));
        assert!(store.get(&FrameKey::new("b")).is_none());
    }

    #[test]
    fn test_double_acquire_rejected() {
        let store = InMemoryFrameStore::new();
        let key = FrameKey::new("out");

        let lock = store.acquire(&key).unwrap();
        let second = store.acquire(&key);

        assert!(matches!(second, Err(AnomalyError::StorageFailure(_))));
        store.release(&lock);
        assert!(store.acquire(&key).is_ok());
    }

    #[test]
    fn test_commit_requires_lock() {
        let store = InMemoryFrameStore::new();
        let unheld = WriteLock::new(FrameKey::new("out"), 0);
        let result = store.commit(&unheld, frame("out"));

        assert!(matches!(result, Err(AnomalyError::StorageFailure(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_rejects_token_of_other_writer() {
        let store = InMemoryFrameStore::new();
        let key = FrameKey::new("out");
        let held = store.acquire(&key).unwrap();
        let forged = WriteLock::new(key.clone(), held.id() + 1);

        let result = store.commit(&forged, frame("out"));

        assert!(matches!(result, Err(AnomalyError::StorageFailure(_))));
        assert!(store.get(&key).is_none());
        assert!(store.is_locked(&key));
        store.commit(&held, frame("out")).unwrap();
        assert_eq!(store.get(&key), Some(frame("out")));
    }

    #[test]
    fn test_stale_token_cannot_commit_or_release() {
        let store = InMemoryFrameStore::new();
        let key = FrameKey::new("out");
        let stale = store.acquire(&key).unwrap();
        store.release(&stale);
        let current = store.acquire(&key).unwrap();

        assert!(store.commit(&stale, frame("out")).is_err());
        store.release(&stale);
        assert!(store.is_locked(&key));

        store.release(&current);
        assert!(!store.is_locked(&key));
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_replaces_previous_frame() {
        let store = InMemoryFrameStore::new();
        let key = FrameKey::new("out");
        store.insert(frame("out"));

        let replacement =
            Frame::new(key.clone(), vec![Column::new("w", vec![2.0, 3.0])]).unwrap();
        let lock = store.acquire(&key).unwrap();
        store.commit(&lock, replacement.clone()).unwrap();
        store.release(&lock);

        assert_eq!(store.get(&key), Some(replacement));
    }

    #[test]
    fn test_release_unlocked_is_noop() {
        let store = InMemoryFrameStore::new();
        store.release(&WriteLock::new(FrameKey::new("nothing"), 7));
        assert!(!store.is_locked(&FrameKey::new("nothing")));
    }
}
