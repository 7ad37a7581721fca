//! Pull-closed audit comment rendering.
//!
//! Pure function from a batch of released locks to the Markdown comment
//! body posted on the pull request. The output shape is load-bearing:
//! platform-side tooling parses these lines, so grouping order and the
//! banner text must stay byte-for-byte stable.

use crate::domain::models::{Project, ProjectLock};

/// Fixed first line of every pull-closed summary comment.
const BANNER: &str =
    "Locks and plans deleted for the projects and environments modified in this pull request:";

/// Render the summary comment for a batch of released locks.
///
/// Locks are grouped by project in first-seen order — the lock store's
/// returned order is authoritative and is never re-sorted. Within a group,
/// environments appear in first-seen order too. One line is rendered per
/// project:
///
/// ```text
/// - path: `owner/repo/path` environment: `default`
/// - path: `owner/repo/path2` environments: `env1`, `env2`
/// ```
///
/// An empty project path renders as `.`, so root-module locks display as
/// `` `owner/repo/.` ``. Lines are joined with single newlines and there is
/// no trailing newline.
#[must_use]
pub fn pull_closed_summary(locks: &[ProjectLock]) -> String {
    let mut lines = Vec::new();
    for (project, envs) in group_by_project(locks) {
        let path = if project.path.is_empty() {
            "."
        } else {
            project.path.as_str()
        };
        let envs_rendered = envs
            .iter()
            .map(|env| format!("`{env}`"))
            .collect::<Vec<_>>()
            .join(", ");
        let label = if envs.len() == 1 {
            "environment"
        } else {
            "environments"
        };
        lines.push(format!(
            "- path: `{}/{path}` {label}: {envs_rendered}",
            project.repo_full_name
        ));
    }
    format!("{BANNER}\n\n{}", lines.join("\n"))
}

/// Group a lock batch into `(project, envs)` pairs, both levels keyed in
/// first-seen order. The batch invariant (unique `(project, env)`) means no
/// env dedup is needed within a group.
fn group_by_project(locks: &[ProjectLock]) -> Vec<(&Project, Vec<&str>)> {
    let mut groups: Vec<(&Project, Vec<&str>)> = Vec::new();
    for lock in locks {
        match groups.iter_mut().find(|(p, _)| **p == lock.project) {
            Some((_, envs)) => envs.push(&lock.env),
            None => groups.push((&lock.project, vec![&lock.env])),
        }
    }
    groups
}
