use crate::error::{ChangelogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic version representation
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a plain `X.Y.Z` version, optionally prefixed with `v` or `V`.
    ///
    /// Pre-release and build metadata are rejected: release versions in a
    /// changelog are always plain triples.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text
            .trim()
            .trim_start_matches('v')
            .trim_start_matches('V');

        let parsed = semver::Version::parse(clean).map_err(|e| {
            ChangelogError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z ({})",
                text, e
            ))
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(ChangelogError::version(format!(
                "Version '{}' must not carry pre-release or build metadata",
                text
            )));
        }

        let component = |value: u64, name: &str| {
            u32::try_from(value).map_err(|_| {
                ChangelogError::version(format!("{} version out of range: {}", name, value))
            })
        };

        Ok(Version {
            major: component(parsed.major, "Major")?,
            minor: component(parsed.minor, "Minor")?,
            patch: component(parsed.patch, "Patch")?,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Components saturate at `u32::MAX` instead of overflowing.
    pub fn bump(&self, bump_type: &VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version {
                major: self.major.saturating_add(1),
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.saturating_add(1),
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.saturating_add(1),
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<String> for Version {
    type Error = ChangelogError;

    fn try_from(value: String) -> Result<Self> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = Version::parse("V1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3.4").is_err());
        assert!(Version::parse("one.two.three").is_err());
    }

    #[test]
    fn test_version_parse_rejects_prerelease() {
        assert!(Version::parse("1.0.0-rc.1").is_err());
        assert!(Version::parse("1.0.0+build5").is_err());
    }

    #[test]
    fn test_version_default_is_zero() {
        assert_eq!(Version::default(), Version::new(0, 0, 0));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(&VersionBump::Major);
        assert_eq!(bumped, Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(&VersionBump::Minor);
        assert_eq!(bumped, Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(&VersionBump::Patch);
        assert_eq!(bumped, Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_saturates() {
        let v = Version::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(v.bump(&VersionBump::Major), Version::new(u32::MAX, 0, 0));
        assert_eq!(v.bump(&VersionBump::Minor), Version::new(u32::MAX, u32::MAX, 0));
        assert_eq!(v.bump(&VersionBump::Patch), v);
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_string_conversion() {
        let v = Version::try_from("2.0.1".to_string()).unwrap();
        assert_eq!(String::from(v), "2.0.1");
    }
}
