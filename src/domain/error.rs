//! Typed domain error for the cleanup flow.
//!
//! The two context labels are stable strings that downstream log scrapers
//! and the event handler's tests match on. Causes are carried as
//! `anyhow::Error` so port implementations keep their own context chains;
//! they are interpolated into the display rather than exposed via
//! `source()` because `anyhow::Error` does not implement `std::error::Error`.

use thiserror::Error;

/// Failure of one of the two fatal cleanup stages.
#[derive(Debug, Error)]
pub enum CleanupError {
    /// Workspace deletion failed; no lock release or comment was attempted.
    #[error("cleaning workspace: {0}")]
    Workspace(anyhow::Error),

    /// Lock release failed after workspace deletion already succeeded.
    /// The workspace removal is not compensated.
    #[error("cleaning up locks: {0}")]
    Locks(anyhow::Error),
}
