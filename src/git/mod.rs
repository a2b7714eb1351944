//! Commit history retrieval
//!
//! This module provides a trait-based abstraction over reading commit history,
//! allowing the changelog pipeline to run against a real Git repository or
//! against an in-memory mock in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [HistorySource] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_changelog::git::HistorySource;
//! # fn example<S: HistorySource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let commits = source.history()?;
//! for commit in &commits {
//!     println!("{}: {}", commit.timestamp, commit.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::CommitRecord;
use crate::error::Result;

/// Source of an ordered commit history
///
/// ## Ordering
///
/// Implementations return commits oldest first. The partitioner relies on
/// this and does not check it.
///
/// ## Error Handling
///
/// Any retrieval failure (missing repository, failed clone, missing HEAD) is
/// returned as an error; implementations never hand back a partial history.
pub trait HistorySource {
    /// Get the full history reachable from HEAD, oldest first
    fn history(&self) -> Result<Vec<CommitRecord>>;
}
