//! Anomaly Job Facade
//!
//! Unified re-exports for the anomaly job crates.
//!
//! This facade provides a single entry point:
//! - Collaborator traits, data model and `AnomalyError` from SPI
//! - `AnomalyJobConfig` and job constants from API
//! - `AnomalyJob`, classification and the in-memory store from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
