// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reader for the HTML fragment shown on the device display.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::{HtmlError, ParseError};
use crate::types::Quantity;

static STRONG: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong").expect("`strong` is a valid selector"));

/// Emphasized readings of the display fragment, in document order.
///
/// The device renders voltage first and current second; anything after that
/// (temperature, cell count, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DisplayReadings {
    tokens: Vec<String>,
}

impl DisplayReadings {
    /// Collects the text of every `strong` element in `html`.
    ///
    /// The fragment is parsed leniently; unclosed tags and a missing doctype
    /// are fine.
    pub(crate) fn parse(html: &str) -> Self {
        let document = Html::parse_fragment(html);
        let tokens = document
            .select(&STRONG)
            .map(|element| element.text().collect::<String>())
            .collect();
        Self { tokens }
    }

    /// Returns the raw text of the reading at `index`.
    pub(crate) fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Reads the voltage (first reading). The unit is not checked here.
    pub(crate) fn voltage(&self) -> Result<Quantity, HtmlError> {
        let token = self.token(0).ok_or(HtmlError::MissingReading {
            index: 0,
            name: "voltage",
        })?;
        token.parse().map_err(|_| HtmlError::InvalidNumber {
            name: "voltage",
            token: token.to_string(),
        })
    }

    /// Returns the unit character of the reading at `index`, if present.
    pub(crate) fn unit(&self, index: usize) -> Option<char> {
        self.token(index).and_then(Quantity::unit_of)
    }

    /// Reads the current (second reading).
    ///
    /// The `A` suffix is checked before the number, so a wrong unit is
    /// reported as such even when the rest of the token is garbage.
    pub(crate) fn current(&self) -> Result<Quantity, ParseError> {
        let token = self.token(1).ok_or(ParseError::MissingField("current"))?;
        if let Some(actual) = Quantity::unit_of(token) {
            check_unit("current", actual, 'A')?;
        }
        token.parse().map_err(|e| ParseError::InvalidValue {
            field: "current",
            message: format!("{token:?}: {e}"),
        })
    }
}

/// Fails unless `actual` is the `expected` unit.
pub(crate) fn check_unit(
    field: &'static str,
    actual: char,
    expected: char,
) -> Result<(), ParseError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ParseError::UnexpectedUnit {
            field,
            expected,
            actual,
        })
    }
}
