// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Kulon 912 readings.
//!
//! # Types
//!
//! - [`DeviceMode`] - Idle/Charging/Discharging/PowerSupply
//! - [`Quantity`] - A display reading such as `12.64V`

mod mode;
mod quantity;

pub use mode::DeviceMode;
pub use quantity::{Quantity, QuantityError};
