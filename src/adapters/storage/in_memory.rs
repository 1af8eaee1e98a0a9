//! In-memory profile store for tests and single-process runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::AuthorProfile;
use crate::ports::{ProfileStore, StorageError};

/// Profile store backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<ProfileId, AuthorProfile>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.lock().expect("profile map lock").len()
    }

    /// True when no profile is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, profile: &AuthorProfile) -> Result<ProfileId, StorageError> {
        let id = ProfileId::new();
        self.profiles
            .lock()
            .expect("profile map lock")
            .insert(id, profile.clone());
        Ok(id)
    }

    async fn load(&self, id: ProfileId) -> Result<AuthorProfile, StorageError> {
        self.profiles
            .lock()
            .expect("profile map lock")
            .get(&id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn exists(&self, id: ProfileId) -> Result<bool, StorageError> {
        Ok(self
            .profiles
            .lock()
            .expect("profile map lock")
            .contains_key(&id))
    }

    async fn delete(&self, id: ProfileId) -> Result<(), StorageError> {
        self.profiles.lock().expect("profile map lock").remove(&id);
        Ok(())
    }
}
