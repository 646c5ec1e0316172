//! Context configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration document
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigDocument {
    /// Map of context name to device connection parameters
    pub hosts: BTreeMap<String, DeviceContext>,
    /// Name of the currently active context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Keys this tool does not manage, written back unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yml::Value>,
}

impl ConfigDocument {
    /// Comma-separated list of known context names, for error messages
    pub fn available(&self) -> String {
        if self.hosts.is_empty() {
            return "<none>".to_string();
        }
        self.hosts.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// A named set of device connection credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceContext {
    /// Management address: host[:port] or a full http(s):// URL
    pub host: String,
    /// Management user
    pub user: String,
    /// Management password (stored in the config file)
    pub password: String,
    /// Verify the device's TLS certificate
    #[serde(
        rename = "verify-tls",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub verify_tls: bool,
    /// Keys this tool does not manage, written back unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yml::Value>,
}

impl DeviceContext {
    /// Copy of this context with the password masked, for display
    pub fn masked(&self) -> Self {
        Self {
            password: mask_password(&self.password),
            ..self.clone()
        }
    }
}

/// Mask a password for display
pub fn mask_password(password: &str) -> String {
    if password.is_empty() {
        "<not set>".to_string()
    } else {
        "****".to_string()
    }
}
