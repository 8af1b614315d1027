//! Anomaly Job API
//!
//! Configuration types and builders for the reconstruction-error anomaly job.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyReport, FrameKey, ModelRef, Result};

/// Multiplier applied to the training reconstruction error when no
/// explicit threshold is configured.
pub const TRAINING_ERROR_MULTIPLIER: f64 = 10.0;

/// Name of the column prepended to the output frame.
pub const RECONSTRUCTION_ERROR_COLUMN: &str = "Reconstruction error";

// ============================================================================
// Job Configuration
// ============================================================================

/// Anomaly job configuration.
///
/// The source frame is not part of the configuration; it is handed to the
/// job by whoever runs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyJobConfig {
    /// Auto-encoder model to score with.
    pub model: ModelRef,
    /// Reconstruction error above which a row is an outlier.
    /// Absent means `TRAINING_ERROR_MULTIPLIER` times the training error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Key the output frame is published under.
    pub destination: FrameKey,
}

impl AnomalyJobConfig {
    pub fn new(model: ModelRef, destination: FrameKey) -> Self {
        Self {
            model,
            threshold: None,
            destination,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnomalyError::InvalidParameter {
                name: "config".to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the job cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.model.as_str().is_empty() {
            return Err(AnomalyError::InvalidParameter {
                name: "model".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.destination.as_str().is_empty() {
            return Err(AnomalyError::InvalidParameter {
                name: "destination".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.threshold.is_some_and(f64::is_nan) {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must not be NaN".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AnomalyJobConfig.
#[derive(Debug, Default)]
pub struct AnomalyJobConfigBuilder {
    model: Option<ModelRef>,
    threshold: Option<f64>,
    destination: Option<FrameKey>,
}

impl AnomalyJobConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(ModelRef::new(model));
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(FrameKey::new(destination));
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AnomalyJobConfig> {
        let model = self.model.ok_or_else(|| missing("model"))?;
        let destination = self.destination.ok_or_else(|| missing("destination"))?;
        let config = AnomalyJobConfig {
            model,
            threshold: self.threshold,
            destination,
        };
        config.validate()?;
        Ok(config)
    }
}

fn missing(name: &str) -> AnomalyError {
    AnomalyError::InvalidParameter {
        name: name.to_string(),
        reason: "is required".to_string(),
    }
}
