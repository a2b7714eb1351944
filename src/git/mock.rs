use crate::domain::CommitRecord;
use crate::error::{ChangelogError, Result};
use crate::git::HistorySource;

/// Mock history for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<CommitRecord>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Append a commit; commits are returned in insertion order
    pub fn add_commit(&mut self, commit: CommitRecord) {
        self.commits.push(commit);
    }

    /// Append a commit built from a message, spacing timestamps one minute apart
    pub fn add_message(&mut self, message: impl Into<String>) {
        let seconds = 60 * self.commits.len() as i64;
        if let Some(commit) = CommitRecord::from_epoch(message, seconds, 0) {
            self.commits.push(commit);
        }
    }

    /// Make every subsequent `history` call fail with the given reason
    pub fn fail_with(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }
}

impl<S: Into<String>> FromIterator<S> for MockRepository {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut repo = MockRepository::new();
        for message in iter {
            repo.add_message(message);
        }
        repo
    }
}

impl HistorySource for MockRepository {
    fn history(&self) -> Result<Vec<CommitRecord>> {
        match &self.failure {
            Some(reason) => Err(ChangelogError::history(reason.clone())),
            None => Ok(self.commits.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_basic() {
        let mut repo = MockRepository::new();
        repo.add_message("first");
        repo.add_message("second");

        let history = repo.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].message, "first");
        assert!(history[0].timestamp < history[1].timestamp);
    }

    #[test]
    fn test_mock_repository_from_iter() {
        let repo: MockRepository = ["a", "b", "c"].into_iter().collect();
        let messages: Vec<_> = repo.history().unwrap().into_iter().map(|c| c.message).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_mock_repository_failure() {
        let mut repo = MockRepository::new();
        repo.add_message("first");
        repo.fail_with("remote hung up");

        let err = repo.history().unwrap_err();
        assert!(err.to_string().contains("remote hung up"));
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.history().unwrap().is_empty());
    }
}
