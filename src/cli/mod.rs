//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{
    build_changelog, generate, run_changelog_workflow, ChangelogWorkflowArgs, HistoryLocation,
    OutputFormat, WorkflowResult,
};
