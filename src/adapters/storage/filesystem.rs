//! Filesystem profile store.
//!
//! Stores one JSON document per profile under a configurable base
//! directory: `{base_dir}/profiles/{id}.json`.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::AuthorProfile;
use crate::ports::{ProfileStore, StorageError};

/// Filesystem-backed profile store.
pub struct FsProfileStore {
    base_dir: PathBuf,
}

impl FsProfileStore {
    /// Creates a store rooted at the given directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join("profiles")
    }

    fn file_path(&self, id: ProfileId) -> PathBuf {
        self.profiles_dir().join(format!("{}.json", id))
    }

    async fn ensure_dir_exists(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.profiles_dir())
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to create directory: {}", e)))
    }

    /// SHA-256 checksum of serialized profile content.
    pub fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl ProfileStore for FsProfileStore {
    async fn save(&self, profile: &AuthorProfile) -> Result<ProfileId, StorageError> {
        let id = ProfileId::new();
        let file_path = self.file_path(id);
        self.ensure_dir_exists().await?;

        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Write through a temporary file, then rename for atomicity.
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, &content)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to write temporary file: {}", e)))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to rename file: {}", e)))?;

        Ok(id)
    }

    async fn load(&self, id: ProfileId) -> Result<AuthorProfile, StorageError> {
        let file_path = self.file_path(id);
        if !file_path.exists() {
            return Err(StorageError::NotFound(format!("profile {}", id)));
        }

        let content = fs::read_to_string(&file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                StorageError::PermissionDenied(format!("Cannot read file: {}", e))
            } else {
                StorageError::IoError(format!("Failed to read file: {}", e))
            }
        })?;

        serde_json::from_str(&content).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn exists(&self, id: ProfileId) -> Result<bool, StorageError> {
        Ok(self.file_path(id).exists())
    }

    async fn delete(&self, id: ProfileId) -> Result<(), StorageError> {
        let file_path = self.file_path(id);
        if !file_path.exists() {
            // Not an error - idempotent delete.
            return Ok(());
        }

        fs::remove_file(&file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                StorageError::PermissionDenied(format!("Cannot delete file: {}", e))
            } else {
                StorageError::IoError(format!("Failed to delete file: {}", e))
            }
        })
    }
}
