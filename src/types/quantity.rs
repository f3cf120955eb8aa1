// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric readings with a single-character unit suffix.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A reading shown on the device display, such as `12.64V` or `1.5A`.
///
/// Everything but the last character is the number; the last character is
/// the unit, even when it is whitespace. Leading whitespace and whitespace
/// between the number and the unit are ignored.
///
/// # Examples
///
/// ```
/// use kulon912::types::Quantity;
///
/// let q: Quantity = " 12.64V".parse().unwrap();
/// assert_eq!(q.value(), 12.64);
/// assert_eq!(q.unit(), 'V');
///
/// assert_eq!(Quantity::unit_of("12.64V "), Some(' '));
/// assert!("V".parse::<Quantity>().is_err());
/// assert!("twelveV".parse::<Quantity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: char,
}

impl Quantity {
    /// Creates a quantity from its parts.
    #[must_use]
    pub const fn new(value: f64, unit: char) -> Self {
        Self { value, unit }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit suffix.
    #[must_use]
    pub const fn unit(&self) -> char {
        self.unit
    }

    /// Returns the unit character of a raw token without parsing the number.
    #[must_use]
    pub fn unit_of(token: &str) -> Option<char> {
        token.trim_start().chars().next_back()
    }

    /// Returns `true` if the quantity carries the given unit.
    #[must_use]
    pub fn has_unit(&self, unit: char) -> bool {
        self.unit == unit
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Error returned when a token is not a number followed by a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The token is empty.
    Empty,
    /// The part before the unit is not a decimal number.
    Number(ParseFloatError),
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty reading"),
            Self::Number(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for QuantityError {}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim_start();
        let unit = Self::unit_of(token).ok_or(QuantityError::Empty)?;
        let number = &token[..token.len() - unit.len_utf8()];
        let value = number
            .trim_end()
            .parse::<f64>()
            .map_err(QuantityError::Number)?;
        Ok(Self { value, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_voltage() {
        let q: Quantity = "14.40V".parse().unwrap();
        assert!((q.value() - 14.4).abs() < f64::EPSILON);
        assert!(q.has_unit('V'));
    }

    #[test]
    fn parse_negative_current() {
        let q: Quantity = "-2.05A".parse().unwrap();
        assert!((q.value() + 2.05).abs() < f64::EPSILON);
        assert_eq!(q.unit(), 'A');
    }

    #[test]
    fn parse_number_with_space_before_unit() {
        let q: Quantity = "3.5 A".parse().unwrap();
        assert!((q.value() - 3.5).abs() < f64::EPSILON);
        assert_eq!(q.unit(), 'A');
    }

    #[test]
    fn unit_is_last_character_even_if_numeric() {
        // "125" reads as 12 with unit '5'; the caller rejects the unit.
        let q: Quantity = "125".parse().unwrap();
        assert!((q.value() - 12.0).abs() < f64::EPSILON);
        assert_eq!(q.unit(), '5');
    }

    #[test]
    fn parse_empty_fails() {
        assert_eq!("".parse::<Quantity>(), Err(QuantityError::Empty));
        assert_eq!("   ".parse::<Quantity>(), Err(QuantityError::Empty));
    }

    #[test]
    fn trailing_whitespace_is_the_unit() {
        assert_eq!(Quantity::unit_of("12.60V "), Some(' '));
        assert_eq!(Quantity::unit_of("1.50A\n"), Some('\n'));
        assert!(matches!(
            "12.60V ".parse::<Quantity>(),
            Err(QuantityError::Number(_))
        ));
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        let q: Quantity = "\t 13.2V".parse().unwrap();
        assert!((q.value() - 13.2).abs() < f64::EPSILON);
        assert_eq!(q.unit(), 'V');
    }

    #[test]
    fn parse_unit_only_fails() {
        assert!(matches!(
            "V".parse::<Quantity>(),
            Err(QuantityError::Number(_))
        ));
    }

    #[test]
    fn parse_garbage_fails() {
        assert!("12,5V".parse::<Quantity>().is_err());
        assert!("--V".parse::<Quantity>().is_err());
    }

    #[test]
    fn multibyte_unit_is_split_on_char_boundary() {
        let q: Quantity = "21.5°".parse().unwrap();
        assert_eq!(q.unit(), '°');
    }

    #[test]
    fn display() {
        assert_eq!(Quantity::new(12.5, 'V').to_string(), "12.5V");
    }
}
