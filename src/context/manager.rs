//! Context operations over the document and the secret store

use log::{debug, info};

use crate::config::secrets as secrets_config;
use crate::error::{ContextError, Result};
use crate::secrets::{KeyringStore, SecretError, SecretStore};

use super::models::{Context, ContextConfig};
use super::store::ContextStore;

/// Manages named contexts: addresses in the document, tokens in the vault
pub struct ContextManager<S = KeyringStore> {
    store: ContextStore,
    secrets: S,
    service: String,
}

impl ContextManager<KeyringStore> {
    /// Manager over the default document location and the OS keychain
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(ContextStore::new()?, KeyringStore::new()))
    }
}

impl<S: SecretStore> ContextManager<S> {
    pub fn with_store(store: ContextStore, secrets: S) -> Self {
        Self {
            store,
            secrets,
            service: secrets_config::SERVICE.to_string(),
        }
    }

    /// Injected secret store
    #[cfg(test)]
    pub(crate) fn secrets(&self) -> &S {
        &self.secrets
    }

    /// All contexts sorted by name, plus the current context name
    pub fn list(&self) -> Result<(Vec<Context>, String)> {
        let config = self.store.load()?;
        let contexts = config.contexts.into_values().collect();
        Ok((contexts, config.current))
    }

    /// Create or update a context. An empty address keeps the existing one.
    /// The first context saved into an empty current slot becomes current.
    pub fn upsert(&self, name: &str, address: &str, token: &str) -> Result<()> {
        let name = name.trim();
        let address = address.trim();

        if name.is_empty() {
            return Err(ContextError::InvalidArgument(
                "context name is required".to_string(),
            ));
        }

        let mut config = self.store.load()?;

        let address = match (address.is_empty(), config.contexts.get(name)) {
            (false, _) => address.to_string(),
            (true, Some(existing)) => existing.address.clone(),
            (true, None) => {
                return Err(ContextError::InvalidArgument(
                    "address is required".to_string(),
                ))
            }
        };

        config
            .contexts
            .insert(name.to_string(), Context::new(name, address));

        if !config.has_current() {
            debug!("No current context, activating '{}'", name);
            config.current = name.to_string();
        }

        self.store.save(&config)?;
        info!("Saved context '{}'", name);

        if !token.is_empty() {
            self.store_token(name, token)?;
        }

        Ok(())
    }

    /// Remove a context and, best effort, its token
    pub fn delete(&self, name: &str) -> Result<()> {
        let mut config = self.store.load()?;

        if config.contexts.remove(name).is_none() {
            return Err(ContextError::ContextNotFound(name.to_string()));
        }

        if config.current == name {
            config.current = pick_new_current(&config);
            debug!("Deleted current context, now '{}'", config.current);
        }

        self.store.save(&config)?;
        info!("Deleted context '{}'", name);

        match self.secrets.delete(&self.service, name) {
            Ok(()) | Err(SecretError::NotFound) => Ok(()),
            Err(SecretError::Backend(msg)) => Err(ContextError::SecretStore(msg)),
        }
    }

    /// Switch the current context
    pub fn use_context(&self, name: &str) -> Result<()> {
        let mut config = self.store.load()?;

        if !config.contexts.contains_key(name) {
            return Err(ContextError::ContextNotFound(name.to_string()));
        }

        config.current = name.to_string();
        self.store.save(&config)?;
        info!("Switched to context '{}'", name);
        Ok(())
    }

    /// The current context; a dangling current name is reported, not repaired
    pub fn current(&self) -> Result<Context> {
        let mut config = self.store.load()?;

        if !config.has_current() {
            return Err(ContextError::NoCurrentContext);
        }

        config
            .contexts
            .remove(&config.current)
            .ok_or(ContextError::ContextNotFound(config.current))
    }

    /// Look up `name`, or the current context when `name` is empty
    pub fn resolve(&self, name: &str) -> Result<Context> {
        if name.is_empty() {
            return self.current();
        }

        self.store
            .load()?
            .contexts
            .remove(name)
            .ok_or_else(|| ContextError::ContextNotFound(name.to_string()))
    }

    /// Token stored for `name`
    pub fn token(&self, name: &str) -> Result<String> {
        self.secrets
            .get(&self.service, name)
            .map_err(|e| match e {
                SecretError::NotFound => ContextError::TokenNotFound(name.to_string()),
                SecretError::Backend(msg) => ContextError::SecretStore(msg),
            })
    }

    /// Whether a token is stored for `name`
    pub fn has_token(&self, name: &str) -> Result<bool> {
        match self.token(name) {
            Ok(_) => Ok(true),
            Err(ContextError::TokenNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Store a token for `name` without touching the document
    pub fn save_token(&self, name: &str, token: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContextError::InvalidArgument(
                "context name is required for token storage".to_string(),
            ));
        }
        let token = token.trim();
        if token.is_empty() {
            return Err(ContextError::InvalidArgument("token is empty".to_string()));
        }

        self.store_token(name, token)
    }

    fn store_token(&self, name: &str, token: &str) -> Result<()> {
        self.secrets
            .set(&self.service, name, token)
            .map_err(|e| ContextError::SecretStore(e.to_string()))?;
        debug!("Stored token for context '{}'", name);
        Ok(())
    }
}

// Smallest remaining name. Kept for compatibility with existing setups;
// most-recently-used would be a better pick.
fn pick_new_current(config: &ContextConfig) -> String {
    config.first_name()
}
