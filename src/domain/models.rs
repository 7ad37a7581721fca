//! Core value types for the pull-closed cleanup flow.
//!
//! These are immutable snapshots handed in by the webhook layer and passed
//! through to the ports unchanged. Locks are persisted by the (external)
//! lock store, so everything here is serde round-trippable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository on the VCS host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Full name in `owner/repo` form. This is the identity used as a
    /// lookup key by the lock store.
    pub full_name: String,
    /// Owner portion of `full_name` (user or organization).
    pub owner: String,
    /// Repository name portion of `full_name`.
    pub name: String,
    /// HTTPS clone URL, possibly containing credentials.
    pub clone_url: String,
    /// Clone URL with any credentials replaced, safe for logs and comments.
    pub sanitized_clone_url: String,
}

/// State of a pull request on the VCS host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullRequestState {
    #[default]
    Open,
    Closed,
}

/// A pull request, scoped to one [`Repo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Pull request number, unique within its repository.
    pub num: u64,
    /// SHA of the head commit.
    pub head_commit: String,
    /// Web URL of the pull request.
    pub url: String,
    /// Name of the source branch.
    pub branch: String,
    /// Username of the pull request author.
    pub author: String,
    /// Open/closed state as reported by the triggering event.
    pub state: PullRequestState,
}

/// A VCS user, recorded as the holder of a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// Which VCS provider API a comment must be posted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VcsHost {
    Github,
    Gitlab,
    Bitbucket,
}

/// One Terraform root module: a repository plus the relative path of the
/// directory that gets planned and applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Full name of the repository this project is in, `owner/repo` form.
    pub repo_full_name: String,
    /// Path relative to the repository root. Empty string means the root
    /// itself. Two projects are equal iff both fields match exactly.
    pub path: String,
}

impl Project {
    /// Build a project, cleaning the path so the repository root is always
    /// stored as the empty string: `"."` and a leading `"./"` are stripped,
    /// as is a trailing `/`. No other normalization is applied.
    #[must_use]
    pub fn new(repo_full_name: impl Into<String>, path: &str) -> Self {
        let path = path.strip_prefix("./").unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        let path = if path == "." { "" } else { path };
        Self {
            repo_full_name: repo_full_name.into(),
            path: path.to_string(),
        }
    }
}

/// An exclusivity claim on a (project, environment) pair, held by one pull
/// request. `(project, env)` is the lock store's unique key, so a release
/// batch never contains two locks with the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLock {
    /// The project the lock covers.
    pub project: Project,
    /// The pull request holding the lock.
    pub pull: PullRequest,
    /// The user whose command acquired the lock.
    pub user: User,
    /// Environment label, e.g. `"default"` or `"staging"`.
    pub env: String,
    /// When the lock was acquired.
    pub time: DateTime<Utc>,
}
