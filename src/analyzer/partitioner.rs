use std::fmt::Write;

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::config::Config;
use crate::domain::{CommitRecord, Release};

/// Output of [`Partitioner::partition`]: sealed releases in the order they were
/// closed, plus the trailing unreleased group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub releases: Vec<Release>,
    pub unreleased: Release,
}

/// Splits an oldest-first commit sequence into releases delimited by the release marker
pub struct Partitioner {
    release_marker: String,
    date_format: String,
}

impl Partitioner {
    /// Create a new partitioner
    pub fn new(release_marker: impl Into<String>, date_format: impl Into<String>) -> Self {
        Partitioner {
            release_marker: release_marker.into(),
            date_format: date_format.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Partitioner::new(&config.markers.release, &config.output.date_format)
    }

    /// Group commits into releases.
    ///
    /// Every message is appended to the current release; a message containing the
    /// release marker (anywhere, any number of times) seals the current release
    /// with that commit's date and opens a new one. Whatever is left open at the
    /// end becomes the unreleased group, even when empty.
    ///
    /// `commits` must already be ordered oldest first.
    pub fn partition(&self, commits: &[CommitRecord]) -> Partition {
        let mut releases = Vec::new();
        let mut current = Release::new();

        for commit in commits {
            current.commit_messages.push(commit.message.clone());

            if commit.contains(&self.release_marker) {
                current.release_date = Some(self.format_date(&commit.timestamp));
                debug!(
                    commits = current.commit_messages.len(),
                    date = current.release_date.as_deref(),
                    "sealed release"
                );
                releases.push(std::mem::take(&mut current));
            }
        }

        Partition {
            releases,
            unreleased: current,
        }
    }

    fn format_date(&self, timestamp: &DateTime<FixedOffset>) -> String {
        let mut formatted = String::new();
        if write!(formatted, "{}", timestamp.format(&self.date_format)).is_err() {
            // Unvalidated format strings can still reach here through `new`.
            formatted = timestamp.to_rfc2822();
        }
        formatted
    }
}
