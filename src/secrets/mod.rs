//! Secret storage for context tokens
//!
//! Tokens never touch the context document. They live in a credential vault
//! addressed by a service identifier and a key (the context name).

mod keyring_store;
mod memory;

use std::fmt;

pub use keyring_store::KeyringStore;
pub use memory::MemoryStore;

/// Failure reported by a secret store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// No secret is stored under the service/key pair
    NotFound,
    /// Any other backend failure
    Backend(String),
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretError::NotFound => write!(f, "secret not found"),
            SecretError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SecretError {}

/// Key/value credential vault holding one secret per service/key pair
pub trait SecretStore {
    /// Fetch the secret stored under `service`/`key`
    fn get(&self, service: &str, key: &str) -> Result<String, SecretError>;

    /// Store or overwrite the secret under `service`/`key`
    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), SecretError>;

    /// Remove the secret under `service`/`key`
    fn delete(&self, service: &str, key: &str) -> Result<(), SecretError>;
}
