//! Column-oriented numeric frames.

use std::sync::Arc;

use crate::error::{AnomalyError, Result};
use crate::model::FrameKey;

/// A named numeric column.
///
/// Column data is shared, so cloning a column never copies its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Arc<[f64]>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: impl Into<Arc<[f64]>>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether both columns point at the same underlying data.
    pub fn shares_data_with(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

/// A keyed set of equal-length columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    key: FrameKey,
    columns: Vec<Column>,
}

impl Frame {
    /// Create a frame, checking that every column has the same length.
    pub fn new(key: FrameKey, columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(AnomalyError::LengthMismatch {
                    expected,
                    got: bad.len(),
                });
            }
        }
        Ok(Self { key, columns })
    }

    pub fn key(&self) -> &FrameKey {
        &self.key
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Row count. A frame without columns has no rows.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Values of row `index` across all columns, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.num_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| c.values()[index]).collect())
    }

    /// New frame under `key` that shares this frame's column data.
    pub fn structural_copy(&self, key: FrameKey) -> Self {
        Self {
            key,
            columns: self.columns.clone(),
        }
    }

    /// Insert `column` before all existing columns.
    pub fn prepend(&mut self, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.len() != self.num_rows() {
            return Err(AnomalyError::LengthMismatch {
                expected: self.num_rows(),
                got: column.len(),
            });
        }
        self.columns.insert(0, column);
        Ok(())
    }
}
