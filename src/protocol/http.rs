// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Kulon 912 devices.

use std::time::Duration;

use reqwest::Client;

use super::StatusResponse;
use super::encoding::decode_body;
use crate::error::ProtocolError;

/// Path of the status document on the device's web server.
pub const STATUS_PATH: &str = "/data.jsn";

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for reaching a Kulon 912 device.
///
/// The device serves plain HTTP without authentication, so the only knobs
/// are the address and the request timeout.
///
/// # Examples
///
/// ```
/// use kulon912::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.60");
/// assert_eq!(config.status_url(), "http://192.168.1.60/data.jsn");
///
/// // With all options
/// let config = HttpConfig::new("kulon.local")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(3));
/// assert_eq!(config.status_url(), "http://kulon.local:8080/data.jsn");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    ///
    /// The timeout covers connecting, sending and reading the whole body.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Builds the URL of the status document.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.base_url())
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` if the host is empty, or
    /// `ProtocolError::Http` if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            status_url: self.status_url(),
            client,
        })
    }
}

// ============================================================================
// HttpClient - Status document retrieval
// ============================================================================

/// HTTP client fetching the status document of one device.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    status_url: String,
    client: Client,
}

impl HttpClient {
    /// Returns the URL of the status document.
    #[must_use]
    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    /// Fetches the status document.
    ///
    /// The body is decoded with an auto-detected character encoding, since the
    /// device does not reliably declare one. Non-success statuses are returned
    /// as-is for the caller to judge.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Http` if the device cannot be reached or the
    /// body cannot be read.
    pub async fn get_status(&self) -> Result<StatusResponse, ProtocolError> {
        tracing::debug!(url = %self.status_url, "Requesting status document");

        let response = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(ProtocolError::Http)?;

        let (body, encoding) = decode_body(&bytes);

        tracing::debug!(status, encoding = encoding.name(), "Received status document");
        tracing::trace!(body = %body, "Status document body");

        Ok(StatusResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.60");
        assert_eq!(config.host(), "192.168.1.60");
        assert_eq!(config.port(), 80);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_with_port() {
        let config = HttpConfig::new("192.168.1.60").with_port(8080);
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn http_config_with_timeout() {
        let config = HttpConfig::new("192.168.1.60").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn http_config_base_url_default_port() {
        let config = HttpConfig::new("192.168.1.60");
        assert_eq!(config.base_url(), "http://192.168.1.60");
    }

    #[test]
    fn http_config_base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.60").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.60:8080");
        assert_eq!(config.status_url(), "http://192.168.1.60:8080/data.jsn");
    }

    #[test]
    fn http_config_into_client() {
        let client = HttpConfig::new("192.168.1.60")
            .with_port(81)
            .into_client()
            .unwrap();
        assert_eq!(client.status_url(), "http://192.168.1.60:81/data.jsn");
    }

    #[test]
    fn http_config_empty_host_rejected() {
        let result = HttpConfig::new("  ").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }
}
