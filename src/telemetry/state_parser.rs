// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of a status envelope into a [`DeviceState`].

use std::sync::LazyLock;

use regex::Regex;

use super::display_parser::{DisplayReadings, check_unit};
use crate::error::{ParseError, Result};
use crate::response::Envelope;
use crate::state::DeviceState;

/// `prs` value shown while a battery is connected and nothing runs.
const IDLE_MARKER: &str = "Battery connected.";
/// `prs` value shown while the power supply output is enabled.
const POWER_ON: &str = "Power ON.";
/// `pnf` value shown in pulsed power supply mode.
const PSU_PULSE_MODE: &str = "PSU pulse mode";
/// `pnf` value shown when the power supply output is overloaded.
const CURRENT_OVERLOAD: &str = "CURRENT OVERLOAD!!";

static CHARGE_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*time:(\d\d)h(\d\d)m\s+Charge:\s*([\d.]+)Ah").expect("valid charge pattern")
});

static CAPACITY_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*time:(\d\d)h(\d\d)m\s+Capacity:\s*([\d.]+)Ah")
        .expect("valid capacity pattern")
});

/// Parses a status envelope into the device's operating state.
///
/// The voltage reading is always required. If the device reports
/// `Battery connected.` the state is idle and nothing else is read.
/// Otherwise the current reading and the status line decide between
/// charging, discharging and power supply mode, in that order.
///
/// # Errors
///
/// - [`Error::MalformedHtml`](crate::Error::MalformedHtml) if the display
///   fragment has no numeric voltage reading (for a non-idle device, a
///   voltage not ending in `V` is reported as invalid data first)
/// - [`Error::InvalidData`](crate::Error::InvalidData) if a field is missing,
///   a reading has the wrong unit, or the status texts match no known mode
///
/// # Examples
///
/// ```
/// use kulon912::response::Envelope;
/// use kulon912::telemetry::parse_state;
/// use kulon912::types::DeviceMode;
///
/// let envelope = Envelope::new("<strong>14.31V</strong><strong>2.00A</strong>")
///     .with_prs("Charging...")
///     .with_pnf("CC/CV time:01h05m  Charge: 2.15Ah");
///
/// let state = parse_state(&envelope).unwrap();
/// assert_eq!(state.mode(), DeviceMode::Charging);
/// assert_eq!(state.energy(), Some(2.15));
/// ```
pub fn parse_state(envelope: &Envelope) -> Result<DeviceState> {
    let html = envelope
        .display_html()
        .ok_or(ParseError::MissingField("pda"))?;
    let display = DisplayReadings::parse(html);

    let voltage = display.voltage();

    if envelope.present_state() == Some(IDLE_MARKER) {
        let voltage = voltage?;
        tracing::debug!(voltage = voltage.value(), "Device idle");
        return Ok(DeviceState::idle(voltage.value()));
    }

    // The unit is the raw last character, checked ahead of the number.
    if let Some(unit) = display.unit(0) {
        check_unit("voltage", unit, 'V')?;
    }
    let voltage = voltage?;
    let current = display.current()?;

    let status = StatusLine {
        prs: envelope.present_state().unwrap_or_default(),
        pnf: envelope
            .notification()
            .ok_or(ParseError::MissingField("pnf"))?,
    };

    let state = classify(&status)?.into_state(voltage.value(), current.value());
    tracing::debug!(mode = %state.mode(), "Classified device state");
    Ok(state)
}

/// Trimmed status texts of a non-idle envelope.
#[derive(Debug, Clone, Copy)]
struct StatusLine<'a> {
    prs: &'a str,
    pnf: &'a str,
}

/// Mode-specific part of a non-idle state.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reading {
    Charging { energy: f64 },
    Discharging { energy: f64 },
    PowerSupply,
}

impl Reading {
    fn into_state(self, voltage: f64, current: f64) -> DeviceState {
        match self {
            Self::Charging { energy } => DeviceState::charging(voltage, current, energy),
            Self::Discharging { energy } => DeviceState::discharging(voltage, current, energy),
            Self::PowerSupply => DeviceState::power_supply(voltage, current),
        }
    }
}

type Classifier = fn(&StatusLine<'_>) -> std::result::Result<Option<Reading>, ParseError>;

/// Candidate classifications in priority order. First match wins.
const CLASSIFIERS: [Classifier; 3] = [charging, discharging, power_supply];

fn classify(status: &StatusLine<'_>) -> std::result::Result<Reading, ParseError> {
    for classifier in CLASSIFIERS {
        if let Some(reading) = classifier(status)? {
            return Ok(reading);
        }
    }

    tracing::warn!(prs = status.prs, pnf = status.pnf, "Unrecognized device state");
    Err(ParseError::UnknownState {
        prs: status.prs.to_string(),
        pnf: status.pnf.to_string(),
    })
}

fn charging(status: &StatusLine<'_>) -> std::result::Result<Option<Reading>, ParseError> {
    Ok(charge_counter(&CHARGE_COUNTER, status.pnf)?.map(|energy| Reading::Charging { energy }))
}

fn discharging(status: &StatusLine<'_>) -> std::result::Result<Option<Reading>, ParseError> {
    Ok(charge_counter(&CAPACITY_COUNTER, status.pnf)?
        .map(|energy| Reading::Discharging { energy }))
}

#[allow(clippy::unnecessary_wraps)]
fn power_supply(status: &StatusLine<'_>) -> std::result::Result<Option<Reading>, ParseError> {
    let output_on = status.prs == POWER_ON && matches!(status.pnf, "" | CURRENT_OVERLOAD);
    if output_on || status.pnf == PSU_PULSE_MODE {
        Ok(Some(Reading::PowerSupply))
    } else {
        Ok(None)
    }
}

/// Extracts the Ah counter from a status line matching `pattern`.
///
/// The elapsed run time is matched but not kept.
fn charge_counter(pattern: &Regex, pnf: &str) -> std::result::Result<Option<f64>, ParseError> {
    let Some(captures) = pattern.captures(pnf) else {
        return Ok(None);
    };

    tracing::trace!(
        hours = &captures[1],
        minutes = &captures[2],
        "Elapsed run time"
    );

    let amount = &captures[3];
    amount
        .parse()
        .map(Some)
        .map_err(|e| ParseError::InvalidValue {
            field: "energy",
            message: format!("{amount:?}: {e}"),
        })
}
