//! Property tests for the pull-closed summary formatter and a shape check
//! on the serialized lock model.
//!
//! Scenario-level output checks live next to the formatter in
//! `src/domain/comment.rs`; these tests cover the determinism and
//! first-seen-ordering properties across generated inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use tfgate_events::domain::{ProjectLock, pull_closed_summary};

use crate::mocks::lock;

const PATHS: &[&str] = &["", "path", "path2", "modules/vpc"];
const ENVS: &[&str] = &["default", "staging", "production", "env1"];

/// A release batch honoring the lock store's unique-key invariant: no two
/// locks share a (project, env) pair.
fn release_batch() -> impl Strategy<Value = Vec<ProjectLock>> {
    proptest::collection::vec((0..PATHS.len(), 0..ENVS.len()), 0..12).prop_map(|pairs| {
        let mut seen: Vec<(usize, usize)> = Vec::new();
        let mut locks = Vec::new();
        for pair in pairs {
            if !seen.contains(&pair) {
                seen.push(pair);
                locks.push(lock(PATHS[pair.0], ENVS[pair.1]));
            }
        }
        locks
    })
}

proptest! {
    /// Re-running the formatter on the same input is byte-identical.
    #[test]
    fn format_is_deterministic(locks in release_batch()) {
        prop_assume!(!locks.is_empty());
        prop_assert_eq!(pull_closed_summary(&locks), pull_closed_summary(&locks));
    }

    /// One rendered line per distinct project, in first-seen input order.
    #[test]
    fn groups_follow_first_seen_order(locks in release_batch()) {
        prop_assume!(!locks.is_empty());

        let mut first_seen = Vec::new();
        for l in &locks {
            if !first_seen.contains(&&l.project) {
                first_seen.push(&l.project);
            }
        }

        let body = pull_closed_summary(&locks);
        let lines: Vec<&str> = body
            .lines()
            .filter(|l| l.starts_with("- path: "))
            .collect();
        prop_assert_eq!(lines.len(), first_seen.len());
        for (line, project) in lines.iter().zip(&first_seen) {
            let path = if project.path.is_empty() {
                "."
            } else {
                project.path.as_str()
            };
            let rendered = format!("- path: `{}/{}` ", project.repo_full_name, path);
            prop_assert!(
                line.starts_with(&rendered),
                "line {:?} should start with {:?}", line, rendered
            );
        }
    }

    /// Environments within one project's line keep their input order.
    #[test]
    fn envs_keep_first_seen_order_within_group(locks in release_batch()) {
        prop_assume!(!locks.is_empty());

        let body = pull_closed_summary(&locks);
        for line in body.lines().filter(|l| l.starts_with("- path: ")) {
            let (path_part, envs_part) = line
                .split_once(" environment")
                .expect("every group line has an environment section");
            let rendered_envs: Vec<&str> = envs_part
                .trim_start_matches("s")
                .trim_start_matches(": ")
                .split(", ")
                .map(|e| e.trim_matches('`'))
                .collect();

            let input_envs: Vec<&str> = locks
                .iter()
                .filter(|l| {
                    let path = if l.project.path.is_empty() {
                        "."
                    } else {
                        l.project.path.as_str()
                    };
                    path_part == format!("- path: `{}/{}`", l.project.repo_full_name, path)
                })
                .map(|l| l.env.as_str())
                .collect();
            prop_assert_eq!(rendered_envs, input_envs);
        }
    }
}

/// The persisted lock shape must stay stable: the lock store serializes
/// these, so field names are part of the on-disk contract.
#[test]
fn project_lock_serde_round_trip() {
    let original = lock("modules/vpc", "staging");
    let json = serde_json::to_string(&original).expect("serialize");
    let restored: ProjectLock = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, original);

    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["project"]["repo_full_name"], "owner/repo");
    assert_eq!(value["project"]["path"], "modules/vpc");
    assert_eq!(value["env"], "staging");
}
