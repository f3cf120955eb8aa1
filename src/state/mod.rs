// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state types.
//!
//! A [`DeviceState`] is a plain value produced fresh by every poll. The
//! library keeps no copy of it.

mod device_state;

pub use device_state::DeviceState;
