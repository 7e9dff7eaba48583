use std::sync::Mutex;

use git2::StatusOptions;
use semver::Version;

use crate::error::Result;
use crate::git::Repository;

/// Real repository introspection backed by the `git2` crate.
///
/// `git2::Repository` is `Send` but not `Sync`, so it is held behind a
/// `Mutex` to satisfy the `Send + Sync` contract the [Repository] trait
/// declares. The orchestrator is strictly single-threaded, so the lock
/// never actually contends.
pub struct Git2Repository {
    inner: Mutex<git2::Repository>,
}

impl Git2Repository {
    /// Discover the repository containing the current directory
    pub fn discover() -> Result<Self> {
        Ok(Git2Repository {
            inner: Mutex::new(git2::Repository::discover(".")?),
        })
    }

    /// Open the repository at an explicit path
    pub fn open(path: &std::path::Path) -> Result<Self> {
        Ok(Git2Repository {
            inner: Mutex::new(git2::Repository::open(path)?),
        })
    }
}

impl Repository for Git2Repository {
    fn remote_url(&self) -> Result<Option<String>> {
        let inner = self.inner.lock().unwrap();
        let url = match inner.find_remote("origin") {
            Ok(remote) => Ok(remote.url().map(|url| url.to_string())),
            Err(_) => Ok(None),
        };
        url
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let inner = self.inner.lock().unwrap();
        let names = inner.tag_names(None)?;

        let mut best: Option<(Version, String)> = None;
        for name in names.iter().flatten() {
            let stripped = name.trim_start_matches('v');
            if let Ok(version) = Version::parse(stripped) {
                let newer = best
                    .as_ref()
                    .map(|(current, _)| version > *current)
                    .unwrap_or(true);
                if newer {
                    best = Some((version, name.to_string()));
                }
            }
        }

        Ok(best.map(|(_, name)| name))
    }

    fn head_subject(&self) -> Result<Option<String>> {
        let inner = self.inner.lock().unwrap();
        let head = match inner.head() {
            Ok(head) => head,
            // Unborn branch: no commits yet
            Err(_) => return Ok(None),
        };
        let commit = head.peel_to_commit()?;
        Ok(commit.summary().map(|subject| subject.to_string()))
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(false).include_ignored(false);
        let inner = self.inner.lock().unwrap();
        let statuses = inner.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }
}
