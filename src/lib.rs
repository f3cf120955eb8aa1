// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kulon 912 - A Rust library to read the state of Kulon 912 battery chargers.
//!
//! The Kulon 912 serves its display as an HTML fragment wrapped in a JSON
//! document at `/data.jsn`. This library fetches that document and turns it
//! into a typed [`DeviceState`]: mode, voltage, current and charge counter.
//!
//! # Modes
//!
//! - **Idle**: battery connected, nothing running (voltage only)
//! - **Charging**: voltage, current and charged Ah
//! - **Discharging**: voltage, current and measured capacity in Ah
//! - **Power supply**: voltage and current
//!
//! # Errors
//!
//! Failures are split so that an offline device is never confused with a
//! device reporting something unexpected:
//!
//! - [`Error::Unreachable`] - the device could not be reached
//! - [`Error::MalformedHtml`] - the display fragment lacks the voltage reading
//! - [`Error::InvalidData`] - the document matches no known device state
//!
//! # Quick Start
//!
//! ```no_run
//! use kulon912::{DeviceClient, HttpConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> kulon912::Result<()> {
//!     let config = HttpConfig::new("192.168.1.60").with_timeout(Duration::from_secs(3));
//!     let device = DeviceClient::from_config(config)?;
//!
//!     let state = device.fetch().await?;
//!     println!("{} at {:?} V", state.mode(), state.voltage());
//!
//!     if let Some(ah) = state.energy() {
//!         println!("{ah} Ah so far");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Offline Parsing
//!
//! The parser is independent of the transport and can be fed captured
//! documents directly:
//!
//! ```
//! use kulon912::telemetry::parse_status;
//!
//! let body = r#"{"pda":"<strong>12.02V</strong><strong>-1.00A</strong>",
//!               "prs":"Discharging","pnf":"time:04h10m Capacity: 4.16Ah"}"#;
//! let state = parse_status(body).unwrap();
//! assert_eq!(state.energy(), Some(4.16));
//! ```

#[cfg(feature = "http")]
mod device;
pub mod error;
#[cfg(feature = "http")]
pub mod protocol;
pub mod response;
pub mod state;
pub mod telemetry;
pub mod types;

#[cfg(feature = "http")]
pub use device::DeviceClient;
pub use error::{Error, HtmlError, ParseError, ProtocolError, Result};
#[cfg(feature = "http")]
pub use protocol::HttpConfig;
pub use response::Envelope;
pub use state::DeviceState;
pub use telemetry::{parse_state, parse_status};
pub use types::{DeviceMode, Quantity};
