//! Anomaly Job Core
//!
//! Execution of the reconstruction-error anomaly job, plus in-memory
//! implementations of the storage contracts.

mod classify;
mod job;
mod output;
mod report;
mod store;
mod threshold;

pub use classify::*;
pub use job::*;
pub use output::*;
pub use report::*;
pub use store::*;
pub use threshold::*;
