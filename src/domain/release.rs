use serde::{Deserialize, Serialize};

use super::Version;

/// A group of commits closed by a release marker, or the trailing unreleased group.
///
/// `version` stays at 0.0.0 until the versioner assigns it; the unreleased
/// group is never versioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: Version,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub commit_messages: Vec<String>,
}

impl Release {
    /// Create an empty, unversioned release
    pub fn new() -> Self {
        Release::default()
    }

    /// All commit messages concatenated with no separator, oldest first
    pub fn joined_messages(&self) -> String {
        self.commit_messages.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.commit_messages.is_empty()
    }
}

/// Result of the full pipeline: sealed, versioned releases (oldest first)
/// plus the unreleased tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    pub unreleased: Release,
    pub releases: Vec<Release>,
}

impl Changelog {
    /// Version of the newest sealed release, if any
    pub fn latest_version(&self) -> Option<Version> {
        self.releases.last().map(|release| release.version)
    }

    /// Number of commit messages across every release, unreleased included
    pub fn commit_count(&self) -> usize {
        self.unreleased.commit_messages.len()
            + self
                .releases
                .iter()
                .map(|release| release.commit_messages.len())
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_release_owns_empty_messages() {
        let release = Release::new();
        assert!(release.is_empty());
        assert_eq!(release.version, Version::new(0, 0, 0));
        assert_eq!(release.release_date, None);
    }

    #[test]
    fn test_joined_messages_has_no_separator() {
        let release = Release {
            commit_messages: vec!["a\n".to_string(), "b".to_string(), "c".to_string()],
            ..Release::default()
        };
        assert_eq!(release.joined_messages(), "a\nbc");
    }

    #[test]
    fn test_changelog_counts() {
        let changelog = Changelog {
            unreleased: Release {
                commit_messages: vec!["d".to_string()],
                ..Release::default()
            },
            releases: vec![
                Release {
                    version: Version::new(1, 0, 0),
                    release_date: None,
                    commit_messages: vec!["a".to_string()],
                },
                Release {
                    version: Version::new(1, 1, 0),
                    release_date: None,
                    commit_messages: vec!["b".to_string(), "c".to_string()],
                },
            ],
        };

        assert_eq!(changelog.commit_count(), 4);
        assert_eq!(changelog.latest_version(), Some(Version::new(1, 1, 0)));
    }

    #[test]
    fn test_release_serializes_version_as_string() {
        let release = Release {
            version: Version::new(2, 1, 0),
            release_date: None,
            commit_messages: vec![],
        };
        let json = serde_json::to_string(&release).unwrap();
        assert_eq!(json, r#"{"version":"2.1.0","commit_messages":[]}"#);
    }
}
