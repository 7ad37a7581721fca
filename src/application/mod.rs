//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on the embedding
//! server's infrastructure or presentation code.

pub mod ports;
pub mod services;

pub use ports::{Locker, VcsClient, WorkspaceCleaner};
