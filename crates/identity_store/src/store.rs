//! Identity store service

use crate::error::IdentityError;
use crate::storage::IdentityStorage;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

/// Resolves the stable per-device identity.
///
/// The identity is written to storage before it is first returned and cached
/// for the rest of the session, so repeated calls agree even when storage is
/// unavailable.
pub struct IdentityStore<S: IdentityStorage> {
    storage: Arc<S>,
    cached: RwLock<Option<String>>,
}

impl<S: IdentityStorage> IdentityStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            cached: RwLock::new(None),
        }
    }

    /// Return the stored identity, generating and persisting one on first
    /// use.
    ///
    /// Storage failures degrade to a session-only identity instead of
    /// propagating: the chat must become usable regardless.
    pub async fn get_or_create(&self) -> String {
        if let Some(identity) = self.cached.read().await.clone() {
            return identity;
        }

        let mut cached = self.cached.write().await;
        // Another caller may have resolved it while we waited for the lock.
        if let Some(identity) = cached.clone() {
            return identity;
        }

        let identity = match self.storage.load().await {
            Ok(identity) => identity,
            Err(IdentityError::NotFound) => {
                let identity = generate_identity();
                if let Err(err) = self.storage.save(&identity).await {
                    warn!("failed to persist identity, continuing session-only: {err}");
                }
                identity
            }
            Err(err) => {
                warn!("identity storage unavailable, continuing session-only: {err}");
                generate_identity()
            }
        };

        *cached = Some(identity.clone());
        identity
    }
}

/// `user_` plus a UUID suffix: first launches on two devices must not
/// collide.
fn generate_identity() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}
