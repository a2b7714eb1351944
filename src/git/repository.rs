use crate::domain::CommitRecord;
use crate::error::{ChangelogError, Result};
use git2::{build::RepoBuilder, Repository as Git2Repo, Sort};
use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, info};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    // Holds the clone directory for repositories created by `clone_from`.
    _workdir: Option<TempDir>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ChangelogError::history(format!(
                "Not a git repository: '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "opened repository");

        Ok(Git2Repository {
            repo,
            _workdir: None,
        })
    }

    /// Clone a remote repository into a temporary directory.
    ///
    /// The clone is bare and lives as long as the returned value.
    /// Supports SSH authentication via SSH agent, SSH keys from ~/.ssh/, or
    /// other credential helpers.
    pub fn clone_from(url: &str) -> Result<Self> {
        let workdir = TempDir::new()?;
        info!(url, "cloning repository");

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);

        let repo = RepoBuilder::new()
            .bare(true)
            .fetch_options(fetch_options)
            .clone(url, workdir.path())
            .map_err(|e| ChangelogError::history(format!("Failed to clone '{}': {}", url, e)))?;

        Ok(Git2Repository {
            repo,
            _workdir: Some(workdir),
        })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            _workdir: None,
        }
    }
}

impl super::HistorySource for Git2Repository {
    fn history(&self) -> Result<Vec<CommitRecord>> {
        let head = self
            .repo
            .head()
            .map_err(|e| ChangelogError::history(format!("Cannot resolve HEAD: {}", e)))?;
        let head_oid = head
            .target()
            .ok_or_else(|| ChangelogError::history("HEAD does not point to a commit"))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL)?;
        revwalk.push(head_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            let when = commit.author().when();

            let record = CommitRecord::from_epoch(message, when.seconds(), when.offset_minutes())
                .ok_or_else(|| {
                    ChangelogError::history(format!("Commit {} has an invalid author date", oid))
                })?;

            commits.push(record);
        }

        // Revwalk yields newest first
        commits.reverse();
        debug!(count = commits.len(), "read commit history");
        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::HistorySource;

    #[test]
    fn test_open_non_repository_fails() {
        let dir = TempDir::new().unwrap();
        let result = Git2Repository::open(dir.path().join("missing"));
        assert!(matches!(result, Err(ChangelogError::History(_))));
    }

    #[test]
    fn test_history_of_unborn_head_fails() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let err = Git2Repository::from_git2(repo).history().unwrap_err();
        assert!(err.to_string().contains("HEAD"));
    }

    #[test]
    fn test_clone_invalid_url_fails() {
        let dir = TempDir::new().unwrap();
        let url = format!("file://{}", dir.path().join("nope").display());
        assert!(Git2Repository::clone_from(&url).is_err());
    }
}
