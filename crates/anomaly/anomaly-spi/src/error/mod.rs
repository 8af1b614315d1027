//! Error types for the anomaly job.
//!
//! This module contains error types and the Result alias.

mod anomaly_error;

pub use anomaly_error::{AnomalyError, Result};
