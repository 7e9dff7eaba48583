use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git state
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    remote_url: Option<String>,
    latest_tag: Option<String>,
    head_subject: Option<String>,
    dirty: bool,
}

impl MockRepository {
    /// Create a clean mock repository with no remote, tags, or commits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }

    pub fn with_latest_tag(mut self, tag: impl Into<String>) -> Self {
        self.latest_tag = Some(tag.into());
        self
    }

    pub fn with_head_subject(mut self, subject: impl Into<String>) -> Self {
        self.head_subject = Some(subject.into());
        self
    }

    pub fn with_dirty_working_dir(mut self) -> Self {
        self.dirty = true;
        self
    }
}

impl Repository for MockRepository {
    fn remote_url(&self) -> Result<Option<String>> {
        Ok(self.remote_url.clone())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.latest_tag.clone())
    }

    fn head_subject(&self) -> Result<Option<String>> {
        Ok(self.head_subject.clone())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(!self.dirty)
    }
}
