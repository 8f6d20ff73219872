// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Timestamp, civil, tz::TimeZone};

use crate::Error;

/// Format of the value shown in a `datetime-local` style input.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Conversion between absolute instants and wall-clock strings in a named timezone.
///
/// Both directions are total over valid IANA identifiers. Malformed input or an
/// unknown zone is reported as an error and never caught by the editor.
pub trait DateConverter {
    /// Interpret a wall-clock string as local to `timezone`.
    fn to_instant(&self, wall_clock: &str, timezone: &str) -> Result<Timestamp, Error>;

    /// Render an instant as a wall-clock string local to `timezone`.
    fn to_wall_clock(&self, instant: Timestamp, timezone: &str) -> Result<String, Error>;

    /// Render an instant as an input value, truncated to minutes.
    fn to_input_value(&self, instant: Timestamp, timezone: &str) -> Result<String, Error> {
        let wall_clock = self.to_wall_clock(instant, timezone)?;
        let dt = parse_wall_clock(&wall_clock)?;
        Ok(dt.strftime(INPUT_FORMAT).to_string())
    }
}

/// [`DateConverter`] backed by the jiff time zone database.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZoneConverter;

impl DateConverter for ZoneConverter {
    fn to_instant(&self, wall_clock: &str, timezone: &str) -> Result<Timestamp, Error> {
        let tz = lookup_timezone(timezone)?;
        let dt = parse_wall_clock(wall_clock)?;
        // Folds take the earlier offset, gaps are shifted forward.
        let zoned = dt.to_zoned(tz).map_err(|e| Error::InvalidDateInput {
            input: wall_clock.to_string(),
            reason: e.to_string(),
        })?;
        Ok(zoned.timestamp())
    }

    fn to_wall_clock(&self, instant: Timestamp, timezone: &str) -> Result<String, Error> {
        let tz = lookup_timezone(timezone)?;
        Ok(instant.to_zoned(tz).datetime().to_string())
    }
}

/// Look up an IANA timezone by name.
pub fn lookup_timezone(name: &str) -> Result<TimeZone, Error> {
    TimeZone::get(name).map_err(|e| {
        tracing::debug!(name, err = %e, "timezone lookup failed");
        Error::UnknownTimezone(name.to_string())
    })
}

/// Parse a wall-clock string.
///
/// Accepts `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS` (with optional fraction),
/// and the same with a space in place of `T`.
pub fn parse_wall_clock(input: &str) -> Result<civil::DateTime, Error> {
    let normalized = input.trim().replacen(' ', "T", 1);
    normalized
        .parse::<civil::DateTime>()
        .map_err(|e| Error::InvalidDateInput {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
