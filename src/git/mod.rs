//! Git introspection abstraction layer.
//!
//! The git plugin reads repository state (remote URL, latest semver tag, HEAD
//! subject, cleanliness) through the [Repository] trait rather than a concrete
//! implementation, so orchestration logic can be tested without a real
//! repository. Mutating operations (commit, tag, push) are not here: they go
//! through the shell executor like every other side effect, which keeps them
//! under the same dry-run and logging rules.
//!
//! Implementations:
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only repository state queries.
///
/// All implementors must be `Send + Sync`. Methods return `Ok(None)` when the
/// queried state simply does not exist (no remote, no tags, unborn HEAD);
/// `Err` is reserved for actual git failures.
pub trait Repository: Send + Sync {
    /// URL of the `origin` remote, if configured
    fn remote_url(&self) -> Result<Option<String>>;

    /// Name of the highest semver tag (an optional `v` prefix is accepted)
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Subject line of the commit at HEAD
    fn head_subject(&self) -> Result<Option<String>>;

    /// Whether the working tree has no uncommitted changes to tracked files
    fn is_clean(&self) -> Result<bool>;
}

/// Derive a project name from a remote URL
/// (e.g. `git@github.com:acme/widget.git` -> `widget`).
pub fn project_name_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    let name = trimmed.rsplit(&['/', ':'][..]).next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_from_ssh_url() {
        assert_eq!(
            project_name_from_url("git@github.com:acme/widget.git"),
            Some("widget".to_string())
        );
    }

    #[test]
    fn test_project_name_from_https_url() {
        assert_eq!(
            project_name_from_url("https://github.com/acme/widget"),
            Some("widget".to_string())
        );
    }

    #[test]
    fn test_project_name_from_trailing_slash() {
        assert_eq!(
            project_name_from_url("https://gitlab.com/acme/widget/"),
            Some("widget".to_string())
        );
    }
}
