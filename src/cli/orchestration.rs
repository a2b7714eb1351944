//! Main workflow orchestration logic
//!
//! Runs the changelog pipeline: history retrieval, partitioning, versioning and
//! rendering. Kept apart from main.rs so it can be called programmatically
//! without depending on clap.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::analyzer::{Partitioner, Versioner};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::Changelog;
use crate::error::Result;
use crate::git::{Git2Repository, HistorySource};
use crate::ui;

/// Where the commit history comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryLocation {
    /// A local working tree or bare repository (discovered upwards)
    Path(PathBuf),
    /// A remote URL, cloned into a temporary directory
    Url(String),
}

impl Default for HistoryLocation {
    fn default() -> Self {
        HistoryLocation::Path(PathBuf::from("."))
    }
}

/// Rendering of the generated changelog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangelogWorkflowArgs {
    pub location: HistoryLocation,

    pub format: OutputFormat,

    /// Write the rendered changelog here instead of returning it only
    pub output: Option<PathBuf>,
}

/// Result of a successful changelog workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub changelog: Changelog,

    /// The changelog rendered in the requested format
    pub rendered: String,

    pub warnings: Vec<BoundaryWarning>,
}

/// Partition and version a commit history.
///
/// History retrieval failures abort before any partitioning happens.
pub fn build_changelog<S: HistorySource>(source: &S, config: &Config) -> Result<Changelog> {
    let commits = source.history()?;
    debug!(commits = commits.len(), "partitioning history");

    let partition = Partitioner::from_config(config).partition(&commits);
    let releases = Versioner::from_config(config).assign_versions(partition.releases);

    Ok(Changelog {
        unreleased: partition.unreleased,
        releases,
    })
}

/// Render a changelog in the requested format
pub fn render(changelog: &Changelog, format: OutputFormat, config: &Config) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(ui::render_markdown(changelog, &config.output.title)),
        OutputFormat::Json => ui::render_json(changelog),
    }
}

/// Run the pipeline against any history source and render the result.
pub fn generate<S: HistorySource>(
    source: &S,
    format: OutputFormat,
    config: &Config,
) -> Result<WorkflowResult> {
    let changelog = build_changelog(source, config)?;
    let warnings = BoundaryWarning::inspect(&changelog, &config.markers.release);
    let rendered = render(&changelog, format, config)?;

    Ok(WorkflowResult {
        changelog,
        rendered,
        warnings,
    })
}

/// Main changelog workflow
///
/// 1. Open or clone the repository
/// 2. Read its history, oldest first
/// 3. Partition into releases and assign versions
/// 4. Render, and write to the output file when one is given
pub fn run_changelog_workflow(
    args: ChangelogWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let repo = match &args.location {
        HistoryLocation::Path(path) => Git2Repository::open(path)?,
        HistoryLocation::Url(url) => {
            ui::display_status(&format!("Cloning {}...", url));
            Git2Repository::clone_from(url)?
        }
    };

    let result = generate(&repo, args.format, config)?;
    info!(
        releases = result.changelog.releases.len(),
        unreleased = result.changelog.unreleased.commit_messages.len(),
        "changelog generated"
    );

    if let Some(path) = &args.output {
        fs::write(path, &result.rendered)?;
        info!(path = %path.display(), "changelog written");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;
    use crate::git::MockRepository;

    #[test]
    fn test_build_changelog_from_mock() {
        let repo: MockRepository = ["a[Release]", "b[Feature]", "c[Release]", "d"]
            .into_iter()
            .collect();

        let changelog = build_changelog(&repo, &Config::default()).unwrap();
        assert_eq!(changelog.releases.len(), 2);
        assert_eq!(changelog.releases[0].version, Version::new(1, 0, 0));
        assert_eq!(changelog.releases[1].version, Version::new(1, 1, 0));
        assert_eq!(changelog.unreleased.commit_messages, vec!["d"]);
        assert_eq!(changelog.unreleased.version, Version::default());
    }

    #[test]
    fn test_history_failure_aborts() {
        let mut repo = MockRepository::new();
        repo.add_message("a[Release]");
        repo.fail_with("clone failed");

        assert!(generate(&repo, OutputFormat::Markdown, &Config::default()).is_err());
    }

    #[test]
    fn test_generate_reports_warnings() {
        let repo: MockRepository = ["wip", "more wip"].into_iter().collect();
        let result = generate(&repo, OutputFormat::Markdown, &Config::default()).unwrap();
        assert_eq!(
            result.warnings,
            vec![BoundaryWarning::NoReleaseMarkers {
                commit_count: 2,
                marker: "[Release]".to_string(),
            }]
        );
        assert!(result.rendered.starts_with("# Change log\n## [Unreleased]\n"));
    }

    #[test]
    fn test_generate_json() {
        let repo: MockRepository = ["one [Release]"].into_iter().collect();
        let result = generate(&repo, OutputFormat::Json, &Config::default()).unwrap();
        assert!(result.rendered.contains("\"version\": \"1.0.0\""));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_default_location_is_current_dir() {
        assert_eq!(
            ChangelogWorkflowArgs::default().location,
            HistoryLocation::Path(PathBuf::from("."))
        );
    }
}
