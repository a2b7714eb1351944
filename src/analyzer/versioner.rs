use tracing::debug;

use crate::config::{Config, MarkersConfig};
use crate::domain::{Release, Version, VersionBump};

/// Bump kinds in the order they are tested; the first marker found wins.
pub const BUMP_PRECEDENCE: [VersionBump; 3] =
    [VersionBump::Major, VersionBump::Minor, VersionBump::Patch];

/// Assigns semantic versions to sealed releases, oldest first
pub struct Versioner {
    markers: MarkersConfig,
    seed: Version,
}

impl Versioner {
    /// Create a new versioner
    pub fn new(markers: MarkersConfig, seed: Version) -> Self {
        Versioner { markers, seed }
    }

    pub fn from_config(config: &Config) -> Self {
        Versioner::new(config.markers.clone(), config.versioning.seed)
    }

    fn marker_for(&self, bump: VersionBump) -> &str {
        match bump {
            VersionBump::Major => &self.markers.breaking,
            VersionBump::Minor => &self.markers.feature,
            VersionBump::Patch => &self.markers.bug,
        }
    }

    /// Highest-priority bump requested by a release's messages, if any
    pub fn detect_bump(&self, release: &Release) -> Option<VersionBump> {
        let messages = release.joined_messages();
        BUMP_PRECEDENCE
            .into_iter()
            .find(|bump| messages.contains(self.marker_for(*bump)))
    }

    /// Return the releases with their versions filled in.
    ///
    /// The first release always gets the seed. Each later release bumps the
    /// previous version by its detected bump, or repeats it when no marker is
    /// present.
    pub fn assign_versions(&self, releases: Vec<Release>) -> Vec<Release> {
        let mut current = self.seed;

        releases
            .into_iter()
            .enumerate()
            .map(|(index, release)| {
                if index > 0 {
                    if let Some(bump) = self.detect_bump(&release) {
                        current = current.bump(&bump);
                    }
                }
                debug!(index, version = %current, "assigned version");
                Release {
                    version: current,
                    ..release
                }
            })
            .collect()
    }
}
