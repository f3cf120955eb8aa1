// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a Kulon 912 device.

use crate::error::Result;
use crate::protocol::{HttpClient, HttpConfig};
use crate::response::Envelope;
use crate::state::DeviceState;
use crate::telemetry::parse_state;

/// Client polling the operating state of one Kulon 912 device.
///
/// Each call to [`fetch`](Self::fetch) is a single independent request; the
/// client keeps no state between polls and may be shared across tasks.
///
/// # Examples
///
/// ```no_run
/// use kulon912::DeviceClient;
///
/// # async fn example() -> kulon912::Result<()> {
/// let device = DeviceClient::new("192.168.1.60")?;
///
/// match device.fetch().await {
///     Ok(state) => println!("{state}"),
///     Err(e) if e.is_unreachable() => println!("device offline"),
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: HttpClient,
}

impl DeviceClient {
    /// Creates a client for the device at `host`, port 80.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`](crate::Error::Unreachable) if the host is
    /// empty or the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::from_config(HttpConfig::new(host))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`](crate::Error::Unreachable) if the host is
    /// empty or the HTTP client cannot be created.
    pub fn from_config(config: HttpConfig) -> Result<Self> {
        let client = config.into_client()?;
        Ok(Self { client })
    }

    /// Returns the URL polled by this client.
    #[must_use]
    pub fn status_url(&self) -> &str {
        self.client.status_url()
    }

    /// Fetches the raw status envelope without classifying it.
    ///
    /// # Errors
    ///
    /// - [`Error::Unreachable`](crate::Error::Unreachable) on any transport failure
    /// - [`Error::InvalidData`](crate::Error::InvalidData) if the device answers
    ///   with an error status or a body that is not a status document
    pub async fn fetch_envelope(&self) -> Result<Envelope> {
        let response = self.client.get_status().await?;
        Ok(response.envelope()?)
    }

    /// Fetches and parses the current device state.
    ///
    /// # Errors
    ///
    /// - [`Error::Unreachable`](crate::Error::Unreachable) on any transport failure
    /// - [`Error::MalformedHtml`](crate::Error::MalformedHtml) if the display
    ///   fragment has no usable voltage reading
    /// - [`Error::InvalidData`](crate::Error::InvalidData) if the document does
    ///   not describe a known device state
    pub async fn fetch(&self) -> Result<DeviceState> {
        let envelope = self.fetch_envelope().await?;
        parse_state(&envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_port() {
        let device = DeviceClient::new("10.0.0.7").unwrap();
        assert_eq!(device.status_url(), "http://10.0.0.7/data.jsn");
    }

    #[test]
    fn from_config_uses_custom_port() {
        let device = DeviceClient::from_config(HttpConfig::new("10.0.0.7").with_port(8000)).unwrap();
        assert_eq!(device.status_url(), "http://10.0.0.7:8000/data.jsn");
    }

    #[test]
    fn empty_host_is_unreachable() {
        let err = DeviceClient::new("").unwrap_err();
        assert!(err.is_unreachable());
    }
}
