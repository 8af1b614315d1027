//! Anomaly job execution.

use anomaly_api::AnomalyJobConfig;
use anomaly_spi::{AnomalyError, AnomalyReport, Frame, FrameStore, ModelRegistry, Result};

use crate::output::publish_output;
use crate::report::build_report;
use crate::threshold::resolve_threshold;

/// One anomaly detection run over a source frame.
///
/// The job scores `source` with an auto-encoder, publishes the source
/// columns plus a leading reconstruction error column under the configured
/// destination, and reports the rows whose error exceeds the threshold.
#[derive(Debug, Clone)]
pub struct AnomalyJob {
    config: AnomalyJobConfig,
    source: Frame,
}

impl AnomalyJob {
    /// Create a job for `source`.
    pub fn new(config: AnomalyJobConfig, source: Frame) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &AnomalyJobConfig {
        &self.config
    }

    pub fn source(&self) -> &Frame {
        &self.source
    }

    /// Run the job.
    ///
    /// Model validation happens before scoring; no frame is published when
    /// it fails. On success exactly one frame is published under the
    /// destination key and the report is logged once.
    pub fn execute<R, S>(&self, registry: &R, store: &S) -> Result<AnomalyReport>
    where
        R: ModelRegistry + ?Sized,
        S: FrameStore + ?Sized,
    {
        let span = tracing::info_span!(
            "anomaly_job",
            model = %self.config.model,
            source = %self.source.key(),
            destination = %self.config.destination,
        );
        let _entered = span.enter();

        self.config.validate()?;

        let reference = &self.config.model;
        let model = registry
            .resolve(reference)
            .ok_or_else(|| AnomalyError::ModelNotFound {
                reference: reference.to_string(),
            })?;
        if !model.is_autoencoder() {
            return Err(AnomalyError::InvalidModelConfiguration {
                reference: reference.to_string(),
                reason: "model must be trained with autoencoder = true".to_string(),
            });
        }

        let threshold = resolve_threshold(self.config.threshold, model.as_ref(), reference)?;

        let errors = model.score(&self.source)?;
        if errors.len() != self.source.num_rows() {
            return Err(AnomalyError::LengthMismatch {
                expected: self.source.num_rows(),
                got: errors.len(),
            });
        }
        tracing::debug!(rows = errors.len(), "scored source frame");

        publish_output(store, &self.source, &self.config.destination, &errors)?;

        let report = build_report(
            self.source.key(),
            &self.config.destination,
            threshold,
            &errors,
        );
        tracing::info!(
            target: "anomaly::report",
            outliers = report.outlier_count(),
            "\n{}",
            report
        );
        Ok(report)
    }
}
