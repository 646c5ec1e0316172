//! Configuration file I/O

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BigipError, Result};

use super::models::ConfigDocument;

/// Handles reading and writing the configuration document
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the given config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration document from disk.
    /// Errors if the file is missing or malformed.
    pub fn load(&self) -> Result<ConfigDocument> {
        if !self.config_path.exists() {
            return Err(BigipError::ConfigNotFound(self.config_path.clone()));
        }
        self.read()
    }

    /// Load the configuration document, treating a missing file as empty
    pub fn load_or_default(&self) -> Result<ConfigDocument> {
        if !self.config_path.exists() {
            debug!(
                "Config file {} does not exist yet, starting empty",
                self.config_path.display()
            );
            return Ok(ConfigDocument::default());
        }
        self.read()
    }

    fn read(&self) -> Result<ConfigDocument> {
        debug!("Reading config file {}", self.config_path.display());

        let content =
            fs::read_to_string(&self.config_path).map_err(|e| BigipError::ConfigParse {
                path: self.config_path.clone(),
                message: e.to_string(),
            })?;

        serde_yml::from_str(&content).map_err(|e| BigipError::ConfigParse {
            path: self.config_path.clone(),
            message: e.to_string(),
        })
    }

    /// Make `name` the current context and rewrite the whole document.
    /// The file is left untouched when `name` is unknown.
    pub fn set_current(&self, name: &str) -> Result<()> {
        let mut config = self.load()?;

        if !config.hosts.contains_key(name) {
            return Err(BigipError::NotFound(format!(
                "Context '{}' not found. Available contexts: {}",
                name,
                config.available()
            )));
        }

        config.current = Some(name.to_string());
        self.save(&config)
    }

    /// Save the configuration document to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, config: &ConfigDocument) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    BigipError::Config(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let yaml = serde_yml::to_string(config)
            .map_err(|e| BigipError::Config(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.config_path.with_extension("yaml.tmp");
        fs::write(&tmp_path, &yaml).map_err(|e| {
            BigipError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Passwords live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                BigipError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            BigipError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        debug!("Wrote config file {}", self.config_path.display());
        Ok(())
    }
}
