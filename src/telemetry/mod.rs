// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of Kulon 912 status documents into device states.
//!
//! The device does not report its mode directly. The mode is inferred from
//! the display fragment and two loosely formatted status texts:
//!
//! | Mode          | Signal                                                      |
//! |---------------|-------------------------------------------------------------|
//! | Idle          | `prs` is `Battery connected.`                               |
//! | Charging      | `pnf` contains `time:HHhMMm Charge: N.NNAh`                 |
//! | Discharging   | `pnf` contains `time:HHhMMm Capacity: N.NNAh`               |
//! | Power supply  | `prs` is `Power ON.` with an empty or overload `pnf`, or `pnf` is `PSU pulse mode` |
//!
//! Anything else is rejected.
//!
//! # Examples
//!
//! ```
//! use kulon912::telemetry::parse_status;
//! use kulon912::types::DeviceMode;
//!
//! let body = r#"{"pda":"<strong>13.80V</strong><strong>0.52A</strong>","prs":"Power ON.","pnf":""}"#;
//! let state = parse_status(body).unwrap();
//!
//! assert_eq!(state.mode(), DeviceMode::PowerSupply);
//! assert_eq!(state.current(), Some(0.52));
//! ```

mod display_parser;
mod state_parser;

pub use state_parser::parse_state;

use crate::error::Result;
use crate::response::Envelope;
use crate::state::DeviceState;

/// Parses the JSON body of `/data.jsn` into a device state.
///
/// # Errors
///
/// Returns [`Error::InvalidData`](crate::Error::InvalidData) if the body is
/// not a valid status document, plus every error of [`parse_state`].
pub fn parse_status(body: &str) -> Result<DeviceState> {
    let envelope = Envelope::from_json(body)?;
    parse_state(&envelope)
}
