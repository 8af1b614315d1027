//! Outlier classification.

use anomaly_spi::{ErrorVector, Outlier};

/// Lazily yield every row whose error strictly exceeds `threshold`.
///
/// A row whose error equals the threshold is not an outlier.
pub fn outliers(errors: &ErrorVector, threshold: f64) -> impl Iterator<Item = Outlier> + '_ {
    errors
        .iter()
        .filter(move |&(_, error)| error > threshold)
        .map(|(row, error)| Outlier { row, error })
}
