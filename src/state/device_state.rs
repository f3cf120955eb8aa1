// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating state snapshot.

use std::fmt;

use crate::types::DeviceMode;

/// Operating state of a Kulon 912 device, as read in one poll.
///
/// The constructors are per mode so the field set always matches the mode:
///
/// - `current` is present for every mode except [`DeviceMode::Idle`]
/// - `energy` is present only for [`DeviceMode::Charging`] and
///   [`DeviceMode::Discharging`]
///
/// # Examples
///
/// ```
/// use kulon912::state::DeviceState;
/// use kulon912::types::DeviceMode;
///
/// let state = DeviceState::charging(14.2, 1.8, 3.25);
/// assert_eq!(state.mode(), DeviceMode::Charging);
/// assert_eq!(state.energy(), Some(3.25));
///
/// let idle = DeviceState::idle(12.7);
/// assert_eq!(idle.current(), None);
/// assert_eq!(idle.energy(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceState {
    /// Operating mode.
    mode: DeviceMode,
    /// Battery voltage in Volts.
    voltage: Option<f64>,
    /// Battery current in Amperes.
    current: Option<f64>,
    /// Charge moved in the current run, in ampere-hours.
    energy: Option<f64>,
}

impl DeviceState {
    /// Idle device: only the battery voltage is known.
    #[must_use]
    pub const fn idle(voltage: f64) -> Self {
        Self {
            mode: DeviceMode::Idle,
            voltage: Some(voltage),
            current: None,
            energy: None,
        }
    }

    /// Charging device with the charge delivered so far.
    #[must_use]
    pub const fn charging(voltage: f64, current: f64, energy: f64) -> Self {
        Self {
            mode: DeviceMode::Charging,
            voltage: Some(voltage),
            current: Some(current),
            energy: Some(energy),
        }
    }

    /// Discharging device with the capacity measured so far.
    #[must_use]
    pub const fn discharging(voltage: f64, current: f64, energy: f64) -> Self {
        Self {
            mode: DeviceMode::Discharging,
            voltage: Some(voltage),
            current: Some(current),
            energy: Some(energy),
        }
    }

    /// Device running as a power supply.
    #[must_use]
    pub const fn power_supply(voltage: f64, current: f64) -> Self {
        Self {
            mode: DeviceMode::PowerSupply,
            voltage: Some(voltage),
            current: Some(current),
            energy: None,
        }
    }

    /// Returns the operating mode.
    #[must_use]
    pub const fn mode(&self) -> DeviceMode {
        self.mode
    }

    /// Returns the battery voltage in Volts.
    #[must_use]
    pub const fn voltage(&self) -> Option<f64> {
        self.voltage
    }

    /// Returns the current in Amperes. `None` when idle.
    #[must_use]
    pub const fn current(&self) -> Option<f64> {
        self.current
    }

    /// Returns the accumulated charge in Ah. `None` unless charging or discharging.
    #[must_use]
    pub const fn energy(&self) -> Option<f64> {
        self.energy
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode)?;
        if let Some(v) = self.voltage {
            write!(f, " {v}V")?;
        }
        if let Some(a) = self.current {
            write!(f, " {a}A")?;
        }
        if let Some(ah) = self.energy {
            write!(f, " {ah}Ah")?;
        }
        Ok(())
    }
}
