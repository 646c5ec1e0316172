//! iControl REST data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::traits::BigipResource;

/// Response wrapper for collection endpoints
#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// LTM pool
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Pool {
    pub name: String,
    #[serde(default = "default_partition")]
    pub partition: String,
    /// Remaining attributes, kept for raw output
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl BigipResource for Pool {
    fn name(&self) -> &str {
        &self.name
    }

    fn partition(&self) -> &str {
        &self.partition
    }
}

/// Pool member
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Member {
    pub name: String,
    #[serde(default = "default_partition")]
    pub partition: String,
    #[serde(default)]
    pub state: MemberState,
    /// Administrative session state (e.g. monitor-enabled, user-disabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Remaining attributes, kept for raw output
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Member {
    pub fn is_up(&self) -> bool {
        self.state == MemberState::Up
    }
}

impl BigipResource for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn partition(&self) -> &str {
        &self.partition
    }
}

/// Monitor-reported availability of a member
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemberState {
    Up,
    Down,
    /// Any other device-reported state (user-down, unchecked, ...)
    Other(String),
    #[default]
    Unknown,
}

impl From<String> for MemberState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "up" => MemberState::Up,
            "down" => MemberState::Down,
            "" | "unknown" => MemberState::Unknown,
            _ => MemberState::Other(s),
        }
    }
}

impl From<MemberState> for String {
    fn from(state: MemberState) -> Self {
        state.to_string()
    }
}

impl std::fmt::Display for MemberState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberState::Up => write!(f, "up"),
            MemberState::Down => write!(f, "down"),
            MemberState::Other(s) => write!(f, "{}", s),
            MemberState::Unknown => write!(f, "unknown"),
        }
    }
}

/// Administrative session values accepted by PATCH on a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSession {
    Enabled,
    Disabled,
}

impl MemberSession {
    /// Value of the member `session` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberSession::Enabled => "user-enabled",
            MemberSession::Disabled => "user-disabled",
        }
    }

    /// Past-tense verb for confirmation messages
    pub fn verb(&self) -> &'static str {
        match self {
            MemberSession::Enabled => "enabled",
            MemberSession::Disabled => "disabled",
        }
    }
}

fn default_partition() -> String {
    crate::config::defaults::PARTITION.to_string()
}
