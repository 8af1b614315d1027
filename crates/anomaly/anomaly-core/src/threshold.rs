//! Threshold resolution.

use anomaly_api::TRAINING_ERROR_MULTIPLIER;
use anomaly_spi::{AnomalyError, ModelRef, Result, ScoringModel, ThresholdSource};

/// Threshold fixed for the remainder of a job run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedThreshold {
    pub value: f64,
    pub source: ThresholdSource,
}

/// Pick the threshold for a run.
///
/// An explicit value is used as given. Otherwise the threshold is
/// `TRAINING_ERROR_MULTIPLIER` times the model's training reconstruction error,
/// whatever its magnitude or sign. Only a NaN training error is rejected.
pub fn resolve_threshold(
    explicit: Option<f64>,
    model: &dyn ScoringModel,
    reference: &ModelRef,
) -> Result<ResolvedThreshold> {
    if let Some(value) = explicit {
        if value.is_nan() {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must not be NaN".to_string(),
            });
        }
        return Ok(ResolvedThreshold {
            value,
            source: ThresholdSource::Explicit,
        });
    }

    let training_error = model.training_reconstruction_error();
    if training_error.is_nan() {
        return Err(AnomalyError::InvalidModelConfiguration {
            reference: reference.to_string(),
            reason: "training reconstruction error is NaN".to_string(),
        });
    }
    tracing::info!(
        "Mean reconstruction error (MSE) of model on training data: {}",
        training_error
    );
    let value = TRAINING_ERROR_MULTIPLIER * training_error;
    tracing::info!("Setting MSE threshold for anomaly to: {}.", value);

    Ok(ResolvedThreshold {
        value,
        source: ThresholdSource::Derived {
            training_error,
            multiplier: TRAINING_ERROR_MULTIPLIER,
        },
    })
}
