// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `data.jsn` status document.

use serde::Deserialize;

use crate::error::ParseError;

/// Status document served by the device at `/data.jsn`.
///
/// Only the three fields the state parser needs are kept; the device sends
/// more, and those are ignored. A missing key and a JSON `null` both read
/// as absent.
///
/// # Examples
///
/// ```
/// use kulon912::response::Envelope;
///
/// let json = r#"{
///     "pda": "<p><strong>12.71V</strong></p>",
///     "prs": "Battery connected. ",
///     "pnf": null,
///     "ver": "1.12"
/// }"#;
/// let envelope = Envelope::from_json(json).unwrap();
///
/// assert_eq!(envelope.present_state(), Some("Battery connected."));
/// assert_eq!(envelope.notification(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    /// HTML fragment rendered on the device display.
    #[serde(default)]
    pda: Option<String>,

    /// Short present-state phrase (e.g. `Battery connected.`).
    #[serde(default)]
    prs: Option<String>,

    /// Free-text status line (timer, charge counter, warnings).
    #[serde(default)]
    pnf: Option<String>,
}

impl Envelope {
    /// Creates an envelope holding only the display fragment.
    #[must_use]
    pub fn new(pda: impl Into<String>) -> Self {
        Self {
            pda: Some(pda.into()),
            ..Self::default()
        }
    }

    /// Sets the present-state phrase.
    #[must_use]
    pub fn with_prs(mut self, prs: impl Into<String>) -> Self {
        self.prs = Some(prs.into());
        self
    }

    /// Sets the status line.
    #[must_use]
    pub fn with_pnf(mut self, pnf: impl Into<String>) -> Self {
        self.pnf = Some(pnf.into());
        self
    }

    /// Decodes an envelope from the JSON body of `/data.jsn`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the body is not a JSON object with
    /// string-or-null values for the known keys.
    pub fn from_json(body: &str) -> Result<Self, ParseError> {
        serde_json::from_str(body).map_err(Into::into)
    }

    /// Returns the raw display fragment.
    #[must_use]
    pub fn display_html(&self) -> Option<&str> {
        self.pda.as_deref()
    }

    /// Returns the present-state phrase with surrounding whitespace removed.
    #[must_use]
    pub fn present_state(&self) -> Option<&str> {
        self.prs.as_deref().map(str::trim)
    }

    /// Returns the status line with surrounding whitespace removed.
    #[must_use]
    pub fn notification(&self) -> Option<&str> {
        self.pnf.as_deref().map(str::trim)
    }
}
