//! Domain layer — pure types and pure functions.
//!
//! This module has zero imports from `crate::application`, `tokio`,
//! `std::fs`, `std::process`, or `std::net`. All functions are synchronous
//! and take data in, returning data out.

pub mod comment;
pub mod error;
pub mod models;

pub use comment::pull_closed_summary;
pub use error::CleanupError;
pub use models::{Project, ProjectLock, PullRequest, PullRequestState, Repo, User, VcsHost};
