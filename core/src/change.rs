// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde_json::Value;

use crate::{DateConverter, DraftPatch, Error, EventDraft, FieldPath};

/// Path of the timezone field.
pub const TIMEZONE: &str = "timezone";

/// Path of the name field.
pub const NAME: &str = "name";

/// One of the two date fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// `startsAt`
    StartsAt,

    /// `endsAt`
    EndsAt,
}

const STARTS_AT: &str = "startsAt";
const ENDS_AT: &str = "endsAt";

impl DateField {
    /// The field name in the draft.
    pub const fn path(self) -> &'static str {
        match self {
            DateField::StartsAt => STARTS_AT,
            DateField::EndsAt => ENDS_AT,
        }
    }

    /// The instant stored for this field.
    pub fn get(self, draft: &EventDraft) -> Option<Timestamp> {
        match self {
            DateField::StartsAt => draft.starts_at,
            DateField::EndsAt => draft.ends_at,
        }
    }

    fn set(self, patch: &mut DraftPatch, value: Option<Timestamp>) {
        match self {
            DateField::StartsAt => patch.starts_at = Some(value),
            DateField::EndsAt => patch.ends_at = Some(value),
        }
    }

    fn of(path: &FieldPath) -> Option<Self> {
        if path.is_field(STARTS_AT) {
            Some(DateField::StartsAt)
        } else if path.is_field(ENDS_AT) {
            Some(DateField::EndsAt)
        } else {
            None
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for DateField {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STARTS_AT => Ok(DateField::StartsAt),
            ENDS_AT => Ok(DateField::EndsAt),
            _ => Err(()),
        }
    }
}

/// Computes the partial update for setting `value` at `path`.
///
/// Rules, first match wins:
/// 1. `startsAt`/`endsAt`: the value is a wall clock in the draft's current
///    timezone and only that instant changes. Empty or `null` clears it.
/// 2. `timezone` (non-empty): both instants are moved so their wall clock stays
///    the same in the new zone, and the timezone is set with them.
///    An empty or `null` zone is stored as `""` and the instants stay put.
/// 3. `name`: stored as given; submission is disabled when it trims to empty.
/// 4. anything else: the leaf at `path` is replaced.
pub fn apply_change(
    draft: &EventDraft,
    path: &FieldPath,
    value: Value,
    dates: &impl DateConverter,
) -> Result<DraftPatch, Error> {
    if let Some(field) = DateField::of(path) {
        return change_date(draft, field, &value, dates);
    }

    if path.is_field(TIMEZONE) {
        return match value {
            Value::Null => change_timezone(draft, "", dates),
            Value::String(zone) => change_timezone(draft, &zone, dates),
            other => Err(expected_string(path, &other)),
        };
    }

    let mut patch = DraftPatch::default();
    if path.is_field(NAME) {
        let name = value.as_str().ok_or_else(|| expected_string(path, &value))?;
        let disabled = name.trim().is_empty();
        if disabled {
            tracing::debug!("name is empty, submission disabled");
        }
        patch.submit_disabled = Some(disabled);
    }

    patch.fields.push((path.clone(), value));
    Ok(patch)
}

/// Rule 1: set one instant from a wall clock in the draft's timezone.
pub fn change_date(
    draft: &EventDraft,
    field: DateField,
    value: &Value,
    dates: &impl DateConverter,
) -> Result<DraftPatch, Error> {
    let instant = match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(wall_clock) => Some(dates.to_instant(wall_clock, draft.zone())?),
        other => {
            let path = FieldPath::parse(field.path())?;
            return Err(expected_string(&path, other));
        }
    };

    tracing::debug!(%field, ?instant, timezone = %draft.timezone, "date changed");
    let mut patch = DraftPatch::default();
    field.set(&mut patch, instant);
    Ok(patch)
}

/// Rule 2: switch timezone while keeping the wall clock of both instants.
///
/// An empty `zone` is stored as is. Wall clocks of a draft without a zone are
/// read as UTC.
pub fn change_timezone(
    draft: &EventDraft,
    zone: &str,
    dates: &impl DateConverter,
) -> Result<DraftPatch, Error> {
    if zone.is_empty() {
        tracing::debug!(from = %draft.timezone, "timezone cleared, dates kept");
        return Ok(DraftPatch {
            timezone: Some(String::new()),
            ..Default::default()
        });
    }

    let old = draft.zone();
    let rezone = |instant: Option<Timestamp>| -> Result<Option<Timestamp>, Error> {
        instant
            .map(|t| {
                let wall_clock = dates.to_wall_clock(t, old)?;
                dates.to_instant(&wall_clock, zone)
            })
            .transpose()
    };

    let patch = DraftPatch {
        starts_at: Some(rezone(draft.starts_at)?),
        ends_at: Some(rezone(draft.ends_at)?),
        timezone: Some(zone.to_string()),
        ..Default::default()
    };
    tracing::debug!(from = old, to = zone, "timezone changed");
    Ok(patch)
}

fn expected_string(path: &FieldPath, value: &Value) -> Error {
    Error::InvalidFieldValue {
        path: path.to_string(),
        reason: format!("expected a string, got {value}"),
    }
}
