use std::fmt;

use crate::domain::Changelog;

/// Warnings about histories that produce a degenerate changelog.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no commits reachable from HEAD
    EmptyHistory,
    /// Commits exist but none of them closes a release
    NoReleaseMarkers { commit_count: usize, marker: String },
}

impl BoundaryWarning {
    /// Collect the warnings that apply to a finished changelog
    pub fn inspect(changelog: &Changelog, release_marker: &str) -> Vec<BoundaryWarning> {
        let commit_count = changelog.commit_count();

        if commit_count == 0 {
            vec![BoundaryWarning::EmptyHistory]
        } else if changelog.releases.is_empty() {
            vec![BoundaryWarning::NoReleaseMarkers {
                commit_count,
                marker: release_marker.to_string(),
            }]
        } else {
            Vec::new()
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::EmptyHistory => {
                write!(f, "Repository history is empty; nothing to release")
            }
            BoundaryWarning::NoReleaseMarkers {
                commit_count,
                marker,
            } => {
                write!(
                    f,
                    "None of the {} commits contains '{}'; everything is unreleased",
                    commit_count, marker
                )
            }
        }
    }
}
