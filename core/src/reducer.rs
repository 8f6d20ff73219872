// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

use crate::change::{apply_change, change_date, change_timezone};
use crate::{DateConverter, DateField, DraftState, Error, FieldPath, SubmitPayload, Tier};

/// An edit or command coming from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set a value at a dotted path. Special paths follow the same rules as
    /// the dedicated actions below.
    SetField(FieldPath, Value),

    /// Switch timezone, keeping the wall clock of both dates.
    ChangeTimezone(String),

    /// Set a date from a wall clock in the current timezone.
    ChangeDate(DateField, String),

    /// Replace the tier list with the tier editor's output.
    SetTiers(Vec<Tier>),

    /// Hand the current draft to the submit callback.
    Submit,
}

impl Action {
    /// Builds a `SetField` action from a dotted path string.
    pub fn set_field(path: &str, value: impl Into<Value>) -> Result<Self, Error> {
        Ok(Action::SetField(FieldPath::parse(path)?, value.into()))
    }
}

/// Result of reducing one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The next state.
    pub state: DraftState,

    /// The payload to submit, set only for [`Action::Submit`].
    pub submission: Option<SubmitPayload>,
}

/// Computes the next state for `action`. `state` itself is never modified.
pub fn reduce(
    state: &DraftState,
    action: &Action,
    dates: &impl DateConverter,
) -> Result<Reduction, Error> {
    let draft = &state.draft;
    let patch = match action {
        Action::SetField(path, value) => apply_change(draft, path, value.clone(), dates)?,
        Action::ChangeTimezone(zone) => change_timezone(draft, zone, dates)?,
        Action::ChangeDate(field, wall_clock) => {
            change_date(draft, *field, &Value::String(wall_clock.clone()), dates)?
        }
        Action::SetTiers(tiers) => {
            return Ok(Reduction {
                state: DraftState {
                    tiers: tiers.clone(),
                    ..state.clone()
                },
                submission: None,
            });
        }
        Action::Submit => {
            return Ok(Reduction {
                state: state.clone(),
                submission: Some(state.payload()),
            });
        }
    };

    Ok(Reduction {
        state: state.merged(&patch)?,
        submission: None,
    })
}
