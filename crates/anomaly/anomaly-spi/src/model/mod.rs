//! Data model for the anomaly job.
//!
//! This module contains frames, keys, error vectors and the report.

mod error_vector;
mod frame;
mod keys;
mod report;

pub use error_vector::ErrorVector;
pub use frame::{Column, Frame};
pub use keys::{FrameKey, ModelRef};
pub use report::{AnomalyReport, Outlier, ThresholdSource};
