use crate::domain::Tag;
use crate::error::{ReleaseError, Result};
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    latest_tag: Option<String>,
}

impl MockRepository {
    /// Create a mock repository with no tags
    pub fn new() -> Self {
        MockRepository { latest_tag: None }
    }

    /// Create a mock repository whose nearest tag is `name`
    pub fn with_tag(name: impl Into<String>) -> Self {
        MockRepository {
            latest_tag: Some(name.into()),
        }
    }

    /// Replace the nearest tag
    pub fn set_latest_tag(&mut self, name: impl Into<String>) {
        self.latest_tag = Some(name.into());
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<Tag> {
        self.latest_tag
            .as_deref()
            .map(Tag::new)
            .ok_or_else(|| ReleaseError::no_tag("mock repository has no tags"))
    }
}
