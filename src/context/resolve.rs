//! Config path and active context resolution

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::context as context_config;
use crate::error::{BigipError, Result};

use super::models::{ConfigDocument, DeviceContext};

/// Resolve the config file path:
/// 1. --config flag (or BIGIP_CONFIG, folded in by clap)
/// 2. ./bigip.yaml if it exists
/// 3. ~/.bigip/bigip.yaml if it exists
/// 4. ./bigip.yaml
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        debug!("Using config file from CLI/env: {}", path.display());
        return path.to_path_buf();
    }

    let local = PathBuf::from(context_config::FILE_NAME);
    if local.exists() {
        debug!("Using config file in working directory");
        return local;
    }

    if let Some(home) = dirs::home_dir() {
        let fallback = home
            .join(context_config::DIR_NAME)
            .join(context_config::FILE_NAME);
        if fallback.exists() {
            debug!("Using config file {}", fallback.display());
            return fallback;
        }
    }

    local
}

/// Resolve the active context from the document:
/// 1. --context flag (or BIGIP_CONTEXT, folded in by clap)
/// 2. `current` from the document
pub fn resolve_active_context(
    config: &ConfigDocument,
    explicit: Option<&str>,
) -> Result<(String, DeviceContext)> {
    let name = match explicit {
        Some(name) => {
            debug!("Using context from CLI/env: {}", name);
            name.to_string()
        }
        None => config.current.clone().ok_or_else(|| {
            BigipError::Config(
                "No current context set. Use 'bigipctl config context <name>' to select one."
                    .to_string(),
            )
        })?,
    };

    match config.hosts.get(&name) {
        Some(ctx) => {
            debug!(
                "Resolved context '{}': host={} user={}",
                name, ctx.host, ctx.user
            );
            Ok((name, ctx.clone()))
        }
        None => Err(BigipError::NotFound(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available()
        ))),
    }
}
