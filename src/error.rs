use std::fmt;
use std::path::PathBuf;

/// Custom error type for BIG-IP operations
#[derive(Debug)]
pub enum BigipError {
    /// HTTP request failed after the session was established
    Http(reqwest::Error),
    /// API returned an unexpected status code
    Api { status: u16, message: String },
    /// Device could not be reached at startup
    Connection { host: String, message: String },
    /// Device rejected the configured credentials
    Auth { host: String, user: String },
    /// Configuration file does not exist
    ConfigNotFound(PathBuf),
    /// Configuration file exists but could not be read or parsed
    ConfigParse { path: PathBuf, message: String },
    /// Other configuration problems
    Config(String),
    /// Named pool, member, context or metric does not exist
    NotFound(String),
    /// Command input rejected before contacting the device
    Validation(String),
    /// A wait operation did not complete in time
    Timeout(String),
    /// Response body did not have the expected shape
    Json(String),
    /// Interactive prompt failed
    Prompt(String),
    /// Command is declared but has no implementation
    Unimplemented(String),
}

impl fmt::Display for BigipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigipError::Http(e) => write!(f, "HTTP request failed: {}", e),
            BigipError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            BigipError::Connection { host, message } => {
                write!(f, "Unable to reach BIG-IP at '{}': {}", host, message)
            }
            BigipError::Auth { host, user } => write!(
                f,
                "Authentication rejected by '{}' for user '{}'. Check the credentials in the active context.",
                host, user
            ),
            BigipError::ConfigNotFound(path) => write!(
                f,
                "Configuration file {} not found. Use 'bigipctl config set-context' to create one.",
                path.display()
            ),
            BigipError::ConfigParse { path, message } => write!(
                f,
                "Failed to parse configuration file {}: {}",
                path.display(),
                message
            ),
            BigipError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BigipError::NotFound(msg) => write!(f, "{}", msg),
            BigipError::Validation(msg) => write!(f, "{}", msg),
            BigipError::Timeout(msg) => write!(f, "Timed out: {}", msg),
            BigipError::Json(msg) => write!(f, "JSON error: {}", msg),
            BigipError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            BigipError::Unimplemented(what) => write!(f, "'{}' is not implemented", what),
        }
    }
}

impl std::error::Error for BigipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BigipError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BigipError {
    fn from(err: reqwest::Error) -> Self {
        BigipError::Http(err)
    }
}

impl From<serde_json::Error> for BigipError {
    fn from(err: serde_json::Error) -> Self {
        BigipError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for BigipError {
    fn from(err: serde_yml::Error) -> Self {
        BigipError::Config(err.to_string())
    }
}

impl From<std::io::Error> for BigipError {
    fn from(err: std::io::Error) -> Self {
        BigipError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for BigipError {
    fn from(err: dialoguer::Error) -> Self {
        BigipError::Prompt(err.to_string())
    }
}

/// Result type alias for BIG-IP operations
pub type Result<T> = std::result::Result<T, BigipError>;
