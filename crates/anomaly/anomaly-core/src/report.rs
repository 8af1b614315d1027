//! Report assembly.

use anomaly_spi::{AnomalyReport, ErrorVector, FrameKey};

use crate::classify::outliers;
use crate::threshold::ResolvedThreshold;

/// Classify `errors` against `threshold` and summarise the run.
pub fn build_report(
    source: &FrameKey,
    destination: &FrameKey,
    threshold: ResolvedThreshold,
    errors: &ErrorVector,
) -> AnomalyReport {
    AnomalyReport {
        source: source.clone(),
        destination: destination.clone(),
        threshold: threshold.value,
        threshold_source: threshold.source,
        rows: errors.len(),
        outliers: outliers(errors, threshold.value).collect(),
        mean_error: errors.mean(),
    }
}
