//! Pure formatting functions for changelog output.
//!
//! Rendering is kept free of I/O so the output can be tested byte for byte;
//! printing happens in the parent module.

use serde::Serialize;

use crate::domain::{Changelog, Release};
use crate::error::Result;

/// Join commit messages into one bullet list body.
///
/// Messages are concatenated with no separator, leading and trailing newlines
/// are trimmed, and every remaining newline starts a new `- ` bullet.
pub fn format_commit_messages(messages: &[String]) -> String {
    messages
        .concat()
        .trim_matches('\n')
        .replace('\n', "\n- ")
}

fn release_heading(release: &Release) -> String {
    match &release.release_date {
        Some(date) => format!("## [{}] - ({}):", release.version, date),
        None => format!("## [{}]:", release.version),
    }
}

/// Render a changelog as Markdown, newest release first.
///
/// The unreleased section is always present, even when it has no commits.
pub fn render_markdown(changelog: &Changelog, title: &str) -> String {
    let mut out = format!(
        "# {}\n## [Unreleased]\n### [Changed]\n- {}\n\n",
        title,
        format_commit_messages(&changelog.unreleased.commit_messages)
    );

    for release in changelog.releases.iter().rev() {
        out.push_str(&format!(
            "{}\n### Changed\n- {}\n\n",
            release_heading(release),
            format_commit_messages(&release.commit_messages)
        ));
    }

    out
}

/// JSON shape of the unreleased group; it carries no version.
#[derive(Serialize)]
struct UnreleasedOutput<'a> {
    commit_messages: &'a [String],
}

#[derive(Serialize)]
struct ChangelogOutput<'a> {
    unreleased: UnreleasedOutput<'a>,
    releases: &'a [Release],
}

/// Render a changelog as pretty-printed JSON, releases oldest first.
///
/// The unreleased group is written without a `version` field.
pub fn render_json(changelog: &Changelog) -> Result<String> {
    let output = ChangelogOutput {
        unreleased: UnreleasedOutput {
            commit_messages: &changelog.unreleased.commit_messages,
        },
        releases: &changelog.releases,
    };

    let mut json = serde_json::to_string_pretty(&output)?;
    json.push('\n');
    Ok(json)
}
