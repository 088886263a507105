//! Identity storage trait and implementations

use crate::error::{IdentityError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

/// Durable key-value storage for the device identity.
#[async_trait]
pub trait IdentityStorage: Send + Sync {
    /// Load the stored identity.
    async fn load(&self) -> Result<String>;

    /// Persist the identity.
    async fn save(&self, identity: &str) -> Result<()>;

    /// Check whether an identity has been stored.
    async fn exists(&self) -> bool;
}

/// File-based identity storage: a single file holding the raw token.
#[derive(Clone)]
pub struct FileIdentityStorage {
    base_path: PathBuf,
}

const IDENTITY_FILE: &str = "identity";

impl FileIdentityStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn identity_path(&self) -> PathBuf {
        self.base_path.join(IDENTITY_FILE)
    }
}

#[async_trait]
impl IdentityStorage for FileIdentityStorage {
    async fn load(&self) -> Result<String> {
        let path = self.identity_path();

        if !path.exists() {
            return Err(IdentityError::NotFound);
        }

        let contents = fs::read_to_string(&path).await?;
        let identity = contents.trim().to_string();

        if identity.is_empty() {
            return Err(IdentityError::NotFound);
        }

        Ok(identity)
    }

    async fn save(&self, identity: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;

        fs::write(&self.identity_path(), identity).await?;

        Ok(())
    }

    async fn exists(&self) -> bool {
        self.identity_path().exists()
    }
}

/// In-memory identity storage, for tests and session-only operation.
#[derive(Default)]
pub struct InMemoryIdentityStorage {
    value: RwLock<Option<String>>,
}

impl InMemoryIdentityStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStorage for InMemoryIdentityStorage {
    async fn load(&self) -> Result<String> {
        self.value
            .read()
            .await
            .clone()
            .ok_or(IdentityError::NotFound)
    }

    async fn save(&self, identity: &str) -> Result<()> {
        *self.value.write().await = Some(identity.to_string());
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.value.read().await.is_some()
    }
}
