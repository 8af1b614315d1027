//! Anomaly job report types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::FrameKey;

/// Where the threshold used by a job came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdSource {
    /// Supplied by the caller and used verbatim.
    Explicit,
    /// Derived as `multiplier * training_error`.
    Derived { training_error: f64, multiplier: f64 },
}

/// A row whose reconstruction error exceeds the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub row: usize,
    pub error: f64,
}

impl fmt::Display for Outlier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: error = {:.5}", self.row, self.error)
    }
}

/// Summary of one anomaly job run.
///
/// `Display` renders the human-readable report that the job logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    /// Frame that was scored.
    pub source: FrameKey,
    /// Key the output frame was published under.
    pub destination: FrameKey,
    /// Threshold used for classification.
    pub threshold: f64,
    pub threshold_source: ThresholdSource,
    /// Number of scored rows.
    pub rows: usize,
    /// Outlier rows in ascending row order.
    pub outliers: Vec<Outlier>,
    /// Mean reconstruction error over all rows, `None` when there are none.
    pub mean_error: Option<f64>,
}

impl AnomalyReport {
    /// Row indices of all outliers.
    pub fn outlier_rows(&self) -> Vec<usize> {
        self.outliers.iter().map(|o| o.row).collect()
    }

    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    pub fn is_outlier(&self, row: usize) -> bool {
        self.outliers.iter().any(|o| o.row == row)
    }
}

impl fmt::Display for AnomalyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Finding outliers in frame {}.", self.source)?;
        writeln!(
            f,
            "Storing the reconstruction error for all {} rows under: {}.",
            self.rows, self.destination
        )?;
        match self.threshold_source {
            ThresholdSource::Explicit => {
                writeln!(f, "Threshold (explicit): {}.", self.threshold)?;
            }
            ThresholdSource::Derived {
                training_error,
                multiplier,
            } => {
                writeln!(
                    f,
                    "Threshold ({}x training error {}): {}.",
                    multiplier, training_error, self.threshold
                )?;
            }
        }
        match self.mean_error {
            Some(mean) => writeln!(f, "Mean reconstruction error: {}.", mean)?,
            None => writeln!(f, "Mean reconstruction error: undefined (no rows).")?,
        }
        write!(
            f,
            "The following rows have a reconstruction error greater than {}:",
            self.threshold
        )?;
        for outlier in &self.outliers {
            write!(f, "\n{}", outlier)?;
        }
        Ok(())
    }
}
