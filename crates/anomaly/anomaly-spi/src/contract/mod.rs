//! Contract definitions for the anomaly job.
//!
//! This module contains the traits that external collaborators implement.

mod frame_store;
mod scoring_model;

pub use frame_store::{FrameStore, WriteLock};
pub use scoring_model::{ModelRegistry, ScoringModel};
