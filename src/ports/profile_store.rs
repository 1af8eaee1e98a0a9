//! ProfileStore port - persistence interface for author profiles.
//!
//! The engine is agnostic to the backing store (file, database row,
//! object store); it only requires round-trip fidelity of the
//! `AuthorProfile` structure.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::AuthorProfile;

/// Port for persisting and retrieving author profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persists a profile and returns its assigned id.
    async fn save(&self, profile: &AuthorProfile) -> Result<ProfileId, StorageError>;

    /// Loads a profile by id.
    async fn load(&self, id: ProfileId) -> Result<AuthorProfile, StorageError>;

    /// Checks whether a profile exists.
    async fn exists(&self, id: ProfileId) -> Result<bool, StorageError>;

    /// Deletes a profile. Deleting a missing profile is not an error.
    async fn delete(&self, id: ProfileId) -> Result<(), StorageError>;
}

/// Storage adapter errors.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("profile not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    IoError(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),
}
