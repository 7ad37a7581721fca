//! tfgate-events — pull-closed cleanup core for the tfgate plan/apply
//! gatekeeper.
//!
//! When a pull request is closed or merged, the embedding server calls
//! [`application::services::pull_cleanup::clean_up_pull`] to delete the
//! pull's workspace state, release every lock it held, and leave an audit
//! comment on the pull request summarizing what was released.
//!
//! The lock store, workspace manager, and VCS transport are consumed
//! through the port traits in [`application::ports`]; this crate contains
//! no I/O of its own.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod domain;
