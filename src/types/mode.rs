// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating modes of a Kulon 912 device.

use std::fmt;

/// The operating mode reported by the device.
///
/// The set is closed: anything the device reports outside these four modes
/// is rejected as invalid data rather than mapped onto one of them.
///
/// # Examples
///
/// ```
/// use kulon912::types::DeviceMode;
///
/// assert_eq!(DeviceMode::PowerSupply.as_str(), "power_supply");
/// assert!(DeviceMode::Charging.tracks_energy());
/// assert!(!DeviceMode::Idle.tracks_energy());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceMode {
    /// A battery is connected but nothing is running.
    Idle,
    /// The device is charging the battery.
    Charging,
    /// The device is discharging the battery (capacity test).
    Discharging,
    /// The device is acting as a bench power supply.
    PowerSupply,
}

impl DeviceMode {
    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Charging => "charging",
            Self::Discharging => "discharging",
            Self::PowerSupply => "power_supply",
        }
    }

    /// Returns `true` for the idle mode.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` if the mode accumulates a charge counter (in Ah).
    #[must_use]
    pub const fn tracks_energy(&self) -> bool {
        matches!(self, Self::Charging | Self::Discharging)
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
