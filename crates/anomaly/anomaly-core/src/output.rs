//! Output frame assembly and scoped publication.

use anomaly_api::RECONSTRUCTION_ERROR_COLUMN;
use anomaly_spi::{AnomalyError, ErrorVector, Frame, FrameKey, FrameStore, Result, WriteLock};

/// Build the output frame: the source columns under `destination`, led by
/// the reconstruction error column.
pub fn assemble_output(
    source: &Frame,
    destination: &FrameKey,
    errors: &ErrorVector,
) -> Result<Frame> {
    if errors.len() != source.num_rows() {
        return Err(AnomalyError::LengthMismatch {
            expected: source.num_rows(),
            got: errors.len(),
        });
    }
    let mut output = source.structural_copy(destination.clone());
    output.prepend(errors.to_column(RECONSTRUCTION_ERROR_COLUMN))?;
    Ok(output)
}

/// Write lock on one store key, released on drop.
pub struct PublishGuard<'a, S: FrameStore + ?Sized> {
    store: &'a S,
    lock: WriteLock,
}

impl<'a, S: FrameStore + ?Sized> PublishGuard<'a, S> {
    /// Lock `key` in `store`.
    pub fn acquire(store: &'a S, key: &FrameKey) -> Result<Self> {
        let lock = store.acquire(key)?;
        tracing::debug!(key = %key, lock = lock.id(), "acquired publish lock");
        Ok(Self { store, lock })
    }

    pub fn key(&self) -> &FrameKey {
        self.lock.key()
    }

    /// Make `frame` visible under the locked key, then release the lock.
    pub fn commit(self, frame: Frame) -> Result<()> {
        self.store.commit(&self.lock, frame)
    }
}

impl<S: FrameStore + ?Sized> Drop for PublishGuard<'_, S> {
    fn drop(&mut self) {
        self.store.release(&self.lock);
        tracing::debug!(key = %self.lock.key(), "released publish lock");
    }
}

/// Assemble the output frame and publish it under `destination`.
///
/// The destination is locked before assembly starts. If assembly or the
/// commit fails the lock is still released and nothing becomes visible.
pub fn publish_output<S: FrameStore + ?Sized>(
    store: &S,
    source: &Frame,
    destination: &FrameKey,
    errors: &ErrorVector,
) -> Result<()> {
    let guard = PublishGuard::acquire(store, destination)?;
    let output = assemble_output(source, guard.key(), errors)?;
    guard.commit(output)
}
