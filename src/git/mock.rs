use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: HashMap::new(),
        }
    }

    /// Add a tag pointing to a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.insert(name.into(), hash.into());
    }

    /// Builder-style variant of [MockRepository::add_tag]
    pub fn with_tag(mut self, name: impl Into<String>, hash: impl Into<String>) -> Self {
        self.add_tag(name, hash);
        self
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn resolve_commit(&self, reference: &str) -> Result<String> {
        self.tags
            .get(reference)
            .cloned()
            .ok_or_else(|| ReleaseError::vcs(format!("Unknown reference '{}'", reference)))
    }
}
