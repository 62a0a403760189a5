//! Target Resolver
//!
//! Maps raw target type tags to the repository able to look entities up.
//! Resolution happens before any entity lookup: a tag outside the closed
//! enumeration, or one without a registered repository, fails with
//! `UnknownTargetType` and nothing else runs.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{errors::MessagingError, value_objects::TargetType};
use crate::ports::repositories::TargetRepository;

/// Registry of target repositories, one per target type
pub struct TargetRegistry {
    repositories: HashMap<TargetType, Arc<dyn TargetRepository>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            repositories: HashMap::new(),
        }
    }

    /// Register a repository under its own target type
    pub fn register(mut self, repository: Arc<dyn TargetRepository>) -> Self {
        self.repositories
            .insert(repository.target_type(), repository);
        self
    }

    /// Resolve a raw type tag to its registered repository
    pub fn resolve(&self, tag: &str) -> Result<&Arc<dyn TargetRepository>, MessagingError> {
        let target_type: TargetType = tag
            .parse()
            .map_err(|_| MessagingError::UnknownTargetType(tag.to_string()))?;

        self.repositories
            .get(&target_type)
            .ok_or_else(|| MessagingError::UnknownTargetType(tag.to_string()))
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
