// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Kulon 912 library.
//!
//! Every failure falls into exactly one of three kinds, so callers can tell
//! "device offline" apart from "device answered with something unexpected":
//!
//! - [`Error::Unreachable`]: the device could not be reached at all
//! - [`Error::MalformedHtml`]: the display fragment lacks the expected readings
//! - [`Error::InvalidData`]: the envelope does not describe a known device state

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure while talking to the device.
    #[error("device unreachable: {0}")]
    Unreachable(#[from] ProtocolError),

    /// The `pda` display fragment could not be read.
    #[error("malformed display HTML: {0}")]
    MalformedHtml(#[from] HtmlError),

    /// The envelope was readable but does not match a known device state.
    #[error("invalid data: {0}")]
    InvalidData(#[from] ParseError),
}

impl Error {
    /// Returns `true` if the device could not be reached.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Returns `true` if the display fragment was malformed.
    #[must_use]
    pub fn is_malformed_html(&self) -> bool {
        matches!(self, Self::MalformedHtml(_))
    }

    /// Returns `true` if the device reported data that could not be classified.
    #[must_use]
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData(_))
    }
}

/// Errors related to reaching the device over the network.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed (connection refused, DNS, timeout, broken body).
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to the embedded display HTML.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HtmlError {
    /// An expected emphasized reading is not present in the fragment.
    #[error("missing {name} reading (strong element #{index})")]
    MissingReading {
        /// Position of the element in document order.
        index: usize,
        /// The reading the element carries.
        name: &'static str,
    },

    /// A reading does not start with a decimal number.
    #[error("{name} reading {token:?} is not a number")]
    InvalidNumber {
        /// The reading that failed to parse.
        name: &'static str,
        /// The raw token text.
        token: String,
    },
}

/// Errors related to the response envelope and its contents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the envelope.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: &'static str,
        /// Description of the parsing failure.
        message: String,
    },

    /// A reading carries the wrong unit suffix.
    #[error("{field} has unit {actual:?}, expected {expected:?}")]
    UnexpectedUnit {
        /// The reading with the wrong unit.
        field: &'static str,
        /// The unit the reading must carry.
        expected: char,
        /// The unit that was found.
        actual: char,
    },

    /// The device answered with a non-success HTTP status.
    #[error("device answered with HTTP status {0}")]
    UnexpectedStatus(u16),

    /// The status texts match none of the known device states.
    #[error("unrecognized device state (prs: {prs:?}, pnf: {pnf:?})")]
    UnknownState {
        /// Present-state phrase, trimmed.
        prs: String,
        /// Status line, trimmed.
        pnf: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_error_display() {
        let err = HtmlError::MissingReading {
            index: 0,
            name: "voltage",
        };
        assert_eq!(
            err.to_string(),
            "missing voltage reading (strong element #0)"
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("pnf");
        assert_eq!(err.to_string(), "missing field in response: pnf");

        let err = ParseError::UnexpectedUnit {
            field: "current",
            expected: 'A',
            actual: 'W',
        };
        assert_eq!(err.to_string(), "current has unit 'W', expected 'A'");
    }

    #[test]
    fn error_from_parse_error_is_invalid_data() {
        let err: Error = ParseError::MissingField("pda").into();
        assert!(err.is_invalid_data());
        assert!(!err.is_unreachable());
        assert!(!err.is_malformed_html());
    }

    #[test]
    fn error_from_protocol_error_is_unreachable() {
        let err: Error = ProtocolError::InvalidAddress(String::new()).into();
        assert!(err.is_unreachable());
        assert!(!err.is_invalid_data());
    }

    #[test]
    fn error_from_html_error_is_malformed() {
        let err: Error = HtmlError::InvalidNumber {
            name: "voltage",
            token: "abcV".to_string(),
        }
        .into();
        assert!(err.is_malformed_html());
        assert_eq!(
            err.to_string(),
            "malformed display HTML: voltage reading \"abcV\" is not a number"
        );
    }
}
