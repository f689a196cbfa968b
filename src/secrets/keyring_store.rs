//! OS keychain backend
//!
//! Uses the `keyring` crate:
//! - macOS: Keychain
//! - Linux: kernel keyutils
//! - Windows: Credential Manager

use log::debug;

use super::{SecretError, SecretStore};

/// Secret store backed by the operating system credential vault
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(service: &str, key: &str) -> Result<keyring::Entry, SecretError> {
        keyring::Entry::new(service, key).map_err(SecretError::from)
    }
}

impl From<keyring::Error> for SecretError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::NoEntry => SecretError::NotFound,
            other => SecretError::Backend(other.to_string()),
        }
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, service: &str, key: &str) -> Result<String, SecretError> {
        debug!("Reading keychain entry {}/{}", service, key);
        Ok(Self::entry(service, key)?.get_password()?)
    }

    fn set(&self, service: &str, key: &str, value: &str) -> Result<(), SecretError> {
        debug!("Writing keychain entry {}/{}", service, key);
        Self::entry(service, key)?.set_password(value)?;
        Ok(())
    }

    fn delete(&self, service: &str, key: &str) -> Result<(), SecretError> {
        debug!("Deleting keychain entry {}/{}", service, key);
        Self::entry(service, key)?.delete_credential()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_entry_maps_to_not_found() {
        let err: SecretError = keyring::Error::NoEntry.into();
        assert_eq!(err, SecretError::NotFound);
    }

    #[test]
    fn test_other_errors_map_to_backend() {
        let err: SecretError = keyring::Error::TooLong("user".to_string(), 255).into();
        assert!(matches!(err, SecretError::Backend(_)));
    }

    #[test]
    #[ignore] // Requires actual keychain access
    fn test_keyring_roundtrip() {
        let store = KeyringStore::new();
        let service = "nomad-context-test";

        store.set(service, "roundtrip", "test-secret").unwrap();
        assert_eq!(store.get(service, "roundtrip").unwrap(), "test-secret");

        store.delete(service, "roundtrip").unwrap();
        assert_eq!(
            store.get(service, "roundtrip").unwrap_err(),
            SecretError::NotFound
        );
    }
}
