//! iControl REST HTTP client

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{api, defaults};
use crate::context::DeviceContext;
use crate::error::{BigipError, Result};

use super::models::ListResponse;
use super::stats::StatsBag;

/// BIG-IP management API client
pub struct BigipClient {
    client: Client,
    host: String,
    user: String,
    authorization: String,
}

impl BigipClient {
    /// Create a client for the given device context
    pub fn new(ctx: &DeviceContext) -> Result<Self> {
        Self::with_timeout(ctx, Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(ctx: &DeviceContext, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            // Devices ship with self-signed management certificates
            .danger_accept_invalid_certs(!ctx.verify_tls)
            .build()?;

        let credentials = format!("{}:{}", ctx.user, ctx.password);

        Ok(Self {
            client,
            host: ctx.host.clone(),
            user: ctx.user.clone(),
            authorization: format!("Basic {}", STANDARD.encode(credentials)),
        })
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// Get the configured host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Add standard headers to a request builder.
    /// Content-Type is left to `.json(body)` on requests that carry one.
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Verify connectivity and credentials, returning the TMOS version
    pub async fn authenticate(&self) -> Result<String> {
        let url = format!("{}{}", self.base_url(), api::SYS_VERSION);
        debug!("Authenticating as '{}' against {}", self.user, url);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| BigipError::Connection {
                host: self.host.clone(),
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BigipError::Auth {
                host: self.host.clone(),
                user: self.user.clone(),
            }),
            status if status.is_success() => {
                let raw: serde_json::Value = response.json().await?;
                let version = StatsBag::from_response(&raw)
                    .text("Version")
                    .unwrap_or("unknown")
                    .to_string();
                debug!("Connected to {} (TMOS {})", self.host, version);
                Ok(version)
            }
            status => Err(BigipError::Api {
                status: status.as_u16(),
                message: format!("Failed to verify session with '{}'", self.host),
            }),
        }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(BigipError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        let raw: serde_json::Value = response.json().await?;
        serde_json::from_value(raw)
            .map_err(|e| BigipError::Json(format!("Failed to parse {}: {}", error_context, e)))
    }

    /// Fetch every item of a collection endpoint
    pub async fn fetch_collection<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let list: ListResponse<T> = self.parse_api_response(response, error_context).await?;

        debug!("Fetched {} items for {}", list.items.len(), error_context);
        Ok(list.items)
    }

    /// Fetch a single resource by API path, returning None for 404
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let raw: serde_json::Value = response.json().await?;
                let item = serde_json::from_value(raw).map_err(|e| {
                    BigipError::Json(format!("Failed to parse {}: {}", resource_label, e))
                })?;
                Ok(Some(item))
            }
            status => Err(BigipError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }

    /// Fetch and flatten a stats sub-resource
    pub async fn fetch_stats(&self, path: &str, error_context: &str) -> Result<StatsBag> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url).send().await?;
        let raw: serde_json::Value = self.parse_api_response(response, error_context).await?;
        Ok(StatsBag::from_response(&raw))
    }

    /// PATCH a JSON body onto a resource
    pub async fn patch_resource(
        &self,
        path: &str,
        body: &serde_json::Value,
        resource_label: &str,
    ) -> Result<()> {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Patching {} at {} with {}", resource_label, url, body);

        let response = self.patch(&url).json(body).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BigipError::NotFound(format!(
                "{} not found",
                resource_label
            ))),
            status if status.is_success() => Ok(()),
            status => Err(BigipError::Api {
                status: status.as_u16(),
                message: format!("Failed to update {}", resource_label),
            }),
        }
    }
}

#[cfg(test)]
impl BigipClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let ctx = DeviceContext {
            host: base_url.to_string(),
            user: "admin".to_string(),
            password: "admin".to_string(),
            verify_tls: false,
            extra: Default::default(),
        };
        Self::new(&ctx).unwrap()
    }
}
