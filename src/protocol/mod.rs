// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for reaching Kulon 912 devices.
//!
//! The device exposes a single document, `GET /data.jsn`, over plain HTTP.
//! [`HttpClient`] fetches it and hands back the decoded body together with
//! the HTTP status; interpreting it is left to the caller.

mod encoding;
mod http;

pub use http::{HttpClient, HttpConfig, STATUS_PATH};

use crate::error::ParseError;
use crate::response::Envelope;

/// Raw answer to a status request.
#[derive(Debug, Clone)]
pub struct StatusResponse {
    status: u16,
    body: String,
}

impl StatusResponse {
    /// Creates a response from an HTTP status code and a decoded body.
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the decoded body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a status envelope.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedStatus` for non-success statuses, or
    /// `ParseError::Json` if the body is not a status document.
    pub fn envelope(&self) -> Result<Envelope, ParseError> {
        if !self.is_success() {
            return Err(ParseError::UnexpectedStatus(self.status));
        }
        Envelope::from_json(&self.body)
    }
}
