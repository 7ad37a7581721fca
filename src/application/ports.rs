//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`. Concrete implementations —
//! the boltdb-style lock store, the on-disk workspace manager, the VCS API
//! clients — live in the embedding server; tests inject recording doubles.

use anyhow::Result;

use crate::domain::{ProjectLock, PullRequest, Repo, VcsHost};

// ── Workspace Cleanup Port ────────────────────────────────────────────────────

/// Removes the on-disk/ephemeral Terraform state a pull request accumulated.
#[allow(async_fn_in_trait)]
pub trait WorkspaceCleaner {
    /// Delete all workspace state for the given pull. Must be idempotent:
    /// deleting a pull that holds no state succeeds.
    async fn delete(&self, repo: &Repo, pull: &PullRequest) -> Result<()>;
}

// ── Lock Release Port ─────────────────────────────────────────────────────────

/// Bulk lock release against the lock store.
#[allow(async_fn_in_trait)]
pub trait Locker {
    /// Release every lock held by `pull_num` in the named repository and
    /// return exactly the locks that were released, in store order. The
    /// returned order is authoritative for comment rendering. An empty
    /// vector means the pull held no locks.
    async fn unlock_by_pull(
        &self,
        repo_full_name: &str,
        pull_num: u64,
    ) -> Result<Vec<ProjectLock>>;
}

// ── VCS Comment Port ──────────────────────────────────────────────────────────

/// Posts comments on pull requests through the provider identified by
/// [`VcsHost`].
#[allow(async_fn_in_trait)]
pub trait VcsClient {
    /// Post `comment` on the pull request.
    async fn create_comment(
        &self,
        repo: &Repo,
        pull: &PullRequest,
        comment: &str,
        host: VcsHost,
    ) -> Result<()>;
}
