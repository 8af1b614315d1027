//! Scoring model and model registry traits.

use std::sync::Arc;

use crate::error::Result;
use crate::model::{ErrorVector, Frame, ModelRef};

/// A trained model able to score frames by reconstruction error.
///
/// Models are read-only for the duration of a job.
pub trait ScoringModel: Send + Sync {
    /// Whether the model was trained in auto-encoding mode.
    fn is_autoencoder(&self) -> bool;

    /// Mean reconstruction error of the model on its own training data.
    fn training_reconstruction_error(&self) -> f64;

    /// Compute one reconstruction error per row of `frame`.
    ///
    /// The returned vector must have exactly `frame.num_rows()` entries,
    /// aligned by row index.
    fn score(&self, frame: &Frame) -> Result<ErrorVector>;
}

/// Resolves model references to trained models.
pub trait ModelRegistry: Send + Sync {
    /// Look up a model, returning `None` when the reference is unknown.
    fn resolve(&self, reference: &ModelRef) -> Option<Arc<dyn ScoringModel>>;
}
