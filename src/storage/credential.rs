/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::AUTH_TOKEN_KEY;
use crate::error::AppError;
use crate::storage::store::KeyValueStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Capability that yields the bearer credential for the next request
///
/// The client asks for the token before every authenticated call and never
/// caches it, so a logout performed elsewhere takes effect immediately.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns the current token, or `None` when the user is logged out
    async fn token(&self) -> Result<Option<String>, AppError>;
}

/// Credential provider reading `auth_token` from a key-value store
#[derive(Debug)]
pub struct StoredCredential<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> Clone for StoredCredential<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> StoredCredential<S> {
    /// Wraps `store` as a credential provider
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wraps a store that is shared with other parts of the application
    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists the token obtained at login
    pub async fn save_token(&self, token: &str) -> Result<(), AppError> {
        if token.trim().is_empty() {
            return Err(AppError::InvalidInput("token must not be empty".to_string()));
        }
        self.store.set(AUTH_TOKEN_KEY, token).await?;
        debug!("Stored credential under {}", AUTH_TOKEN_KEY);
        Ok(())
    }

    /// Removes the token at logout
    pub async fn clear_token(&self) -> Result<(), AppError> {
        self.store.remove(AUTH_TOKEN_KEY).await?;
        debug!("Cleared credential under {}", AUTH_TOKEN_KEY);
        Ok(())
    }
}

#[async_trait]
impl<S: KeyValueStore + 'static> CredentialProvider for StoredCredential<S> {
    async fn token(&self) -> Result<Option<String>, AppError> {
        self.store.get(AUTH_TOKEN_KEY).await
    }
}
