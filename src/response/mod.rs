// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the device's JSON status document.
//!
//! The device wraps its display in a fixed legacy format: a JSON object whose
//! `pda` field carries an HTML fragment, next to two plain-text status fields.

mod envelope;

pub use envelope::Envelope;
