//! Per-row reconstruction errors.

use serde::{Deserialize, Serialize};

use crate::model::Column;

/// One reconstruction error per source row, aligned by row index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorVector(Vec<f64>);

impl ErrorVector {
    pub fn new(errors: Vec<f64>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<f64> {
        self.0.get(row).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over `(row, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Arithmetic mean, or `None` for an empty vector.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().sum::<f64>() / self.0.len() as f64)
    }

    /// Turn the errors into a frame column named `name`.
    pub fn to_column(&self, name: &str) -> Column {
        Column::new(name, self.0.as_slice())
    }
}

impl From<Vec<f64>> for ErrorVector {
    fn from(errors: Vec<f64>) -> Self {
        Self::new(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let errors = ErrorVector::new(vec![0.1, 0.25, 0.05]);
        let mean = errors.mean().unwrap();
        assert!((mean - 0.4 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_empty_is_none() {
        assert_eq!(ErrorVector::default().mean(), None);
    }

    #[test]
    fn test_iter_is_row_aligned() {
        let errors = ErrorVector::from(vec![0.5, 0.7]);
        let pairs: Vec<(usize, f64)> = errors.iter().collect();
        assert_eq!(pairs, vec![(0, 0.5), (1, 0.7)]);
        assert_eq!(errors.get(1), Some(0.7));
        assert_eq!(errors.get(2), None);
    }

    #[test]
    fn test_to_column() {
        let column = ErrorVector::new(vec![1.0, 2.0]).to_column("err");
        assert_eq!(column.name(), "err");
        assert_eq!(column.values(), &[1.0, 2.0]);
    }
}
