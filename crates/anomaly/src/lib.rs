//! # anomaly
//!
//! Auto-encoder anomaly detection job.
//! Scores a frame by reconstruction error, publishes the scored frame and
//! reports the rows whose error exceeds a threshold.

pub use anomaly_facade::*;
