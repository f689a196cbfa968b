//! In-memory secret store

use std::collections::HashMap;
use std::sync::Mutex;

use super::{SecretError, SecretStore};

/// Secret store kept in process memory, used in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored secrets
    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<(String, String), String>>, SecretError> {
        self.entries
            .lock()
            .map_err(|_| SecretError::Backend("memory store lock poisoned".to_string()))
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, service: &str, key: &str) -> Result<String, SecretError> {
        self.lock()?
            .get(&(service.to_string(), key.to_string()))
            .cloned()
            .ok_or(SecretError::NotFound)
    }

    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), SecretError> {
        self.lock()?
            .insert((service.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn delete(&self, service: &str, key: &str) -> Result<(), SecretError> {
        self.lock()?
            .remove(&(service.to_string(), key.to_string()))
            .map(|_| ())
            .ok_or(SecretError::NotFound)
    }
}
