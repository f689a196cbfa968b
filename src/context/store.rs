//! Context document file I/O

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::context as context_config;
use crate::error::{ContextError, Result};

use super::models::ContextConfig;

/// Handles reading and writing the context document
#[derive(Debug, Clone)]
pub struct ContextStore {
    config_path: PathBuf,
}

impl ContextStore {
    /// Create a store at the default location, honouring NOMAD_CONTEXT_HOME
    pub fn new() -> Result<Self> {
        let dir = config_dir(std::env::var_os(context_config::HOME_ENV_VAR))?;
        Ok(Self::with_path(dir.join(context_config::FILE_NAME)))
    }

    /// Create a store with a custom document path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the context document from disk.
    /// Returns Default if file doesn't exist, errors on anything else.
    pub fn load(&self) -> Result<ContextConfig> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "No context document at {}, starting empty",
                    self.config_path.display()
                );
                return Ok(ContextConfig::default());
            }
            Err(e) => {
                return Err(ContextError::Config(format!(
                    "Failed to read context config {}: {}",
                    self.config_path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            ContextError::Config(format!(
                "Failed to parse context config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save the context document to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, config: &ContextConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ContextError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config)?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            ContextError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                ContextError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            ContextError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Saved context document to {}", self.config_path.display());
        Ok(())
    }
}

/// Resolve the config directory: a non-empty override wins, otherwise
/// `<platform config dir>/nomad-context`.
fn config_dir(home_override: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = home_override.filter(|d| !d.is_empty()) {
        debug!(
            "Using config directory from {}: {}",
            context_config::HOME_ENV_VAR,
            Path::new(&dir).display()
        );
        return Ok(PathBuf::from(dir));
    }

    dirs::config_dir()
        .map(|dir| dir.join(context_config::DIR_NAME))
        .ok_or_else(|| {
            ContextError::Config(format!(
                "Could not determine user config directory; set {}",
                context_config::HOME_ENV_VAR
            ))
        })
}
