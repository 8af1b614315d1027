//! Key-addressed frame storage trait.

use crate::error::Result;
use crate::model::{Frame, FrameKey};

/// Write lock on one key, handed out by [`FrameStore::acquire`].
///
/// Stores check the token on `commit` and `release`, so only the writer
/// that took the lock can publish under the key or unlock it.
#[derive(Debug, PartialEq, Eq)]
pub struct WriteLock {
    key: FrameKey,
    id: u64,
}

impl WriteLock {
    /// Create a token. `id` must identify this acquisition within the store.
    pub fn new(key: FrameKey, id: u64) -> Self {
        Self { key, id }
    }

    pub fn key(&self) -> &FrameKey {
        &self.key
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Key-addressed frame storage with scoped write locks.
///
/// Writers call `acquire`, then `commit` at most once, then `release`.
/// A frame becomes visible to `get` only through `commit`, which replaces
/// the value under the key in a single step, so readers never observe a
/// partially written frame.
pub trait FrameStore: Send + Sync {
    /// Take the write lock on `key`.
    ///
    /// Fails with `StorageFailure` when the key is already locked.
    fn acquire(&self, key: &FrameKey) -> Result<WriteLock>;

    /// Make `frame` visible under the locked key.
    ///
    /// Fails with `StorageFailure` unless `lock` is the current lock on its key.
    fn commit(&self, lock: &WriteLock, frame: Frame) -> Result<()>;

    /// Drop the write lock. A stale token is a no-op.
    fn release(&self, lock: &WriteLock);

    /// Read the frame currently published under `key`.
    fn get(&self, key: &FrameKey) -> Option<Frame>;
}
