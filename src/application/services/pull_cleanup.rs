//! Application service — pull-closed cleanup use-case.
//!
//! Invoked by the event layer when a pull request is closed or merged.
//! All I/O is routed through injected port traits.

use anyhow::Result;

use crate::application::ports::{Locker, VcsClient, WorkspaceCleaner};
use crate::domain::{CleanupError, PullRequest, Repo, VcsHost, pull_closed_summary};

/// Reclaim everything a closed pull request was holding: its workspace
/// state, then its locks, then post one audit comment listing what was
/// released.
///
/// The three calls are strictly sequential and each runs at most once — no
/// internal retries. If workspace deletion fails, nothing else is
/// attempted. If lock release fails, the workspace is already gone; that
/// partial cleanup is accepted and not rolled back. No comment is posted
/// when the pull held no locks.
///
/// A comment-post failure is logged as a warning and does not fail the
/// call: the reclamation itself has already succeeded, and re-running the
/// whole cleanup to retry the comment would be duplicate-prone.
///
/// # Errors
///
/// Returns [`CleanupError::Workspace`] or [`CleanupError::Locks`] wrapping
/// the port's failure.
pub async fn clean_up_pull(
    workspace: &impl WorkspaceCleaner,
    locker: &impl Locker,
    vcs: &impl VcsClient,
    repo: &Repo,
    pull: &PullRequest,
    host: VcsHost,
) -> Result<()> {
    tracing::debug!(repo = %repo.full_name, pull = pull.num, "cleaning up closed pull");

    // 1. Delete pull-scoped workspace state.
    if let Err(err) = workspace.delete(repo, pull).await {
        return Err(CleanupError::Workspace(err).into());
    }

    // 2. Release every lock the pull held.
    let locks = locker
        .unlock_by_pull(&repo.full_name, pull.num)
        .await
        .map_err(CleanupError::Locks)?;
    if locks.is_empty() {
        return Ok(());
    }
    tracing::info!(
        repo = %repo.full_name,
        pull = pull.num,
        released = locks.len(),
        "released locks for closed pull"
    );

    // 3. Leave the audit trail on the pull request.
    let comment = pull_closed_summary(&locks);
    if let Err(err) = vcs.create_comment(repo, pull, &comment, host).await {
        tracing::warn!(
            repo = %repo.full_name,
            pull = pull.num,
            error = %format!("{err:#}"),
            "failed to comment on closed pull; locks and workspace were still reclaimed"
        );
    }
    Ok(())
}
