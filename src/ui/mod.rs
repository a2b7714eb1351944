//! User interface module - console status output and changelog formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure rendering of the changelog document
//! - This module - Status lines written to stderr, so stdout carries only the changelog

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::Changelog;

pub mod formatter;

pub use formatter::{format_commit_messages, render_json, render_markdown};

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a boundary warning with a yellow warning icon.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summarize a generated changelog in one status line.
pub fn display_summary(changelog: &Changelog) {
    let summary = match changelog.latest_version() {
        Some(version) => format!(
            "{} releases (latest {}), {} unreleased commits",
            changelog.releases.len(),
            style(version).cyan(),
            changelog.unreleased.commit_messages.len()
        ),
        None => format!(
            "no releases, {} unreleased commits",
            changelog.unreleased.commit_messages.len()
        ),
    };
    display_success(&summary);
}
