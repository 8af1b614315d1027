//! Anomaly Job Service Provider Interface
//!
//! Defines the collaborator contracts and the data model shared by the
//! reconstruction-error anomaly job.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FrameStore, ModelRegistry, ScoringModel, WriteLock};
pub use error::{AnomalyError, Result};
pub use model::{
    AnomalyReport, Column, ErrorVector, Frame, FrameKey, ModelRef, Outlier, ThresholdSource,
};
