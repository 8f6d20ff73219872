// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::locale::{SUBMIT_CREATE, SUBMIT_LOADING, SUBMIT_SAVE};
use crate::{DraftState, EventDraft, Localizer, Tier};

/// The draft as handed to the submit callback: draft fields plus the tier list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmitPayload(EventDraft);

impl SubmitPayload {
    /// Snapshot of `draft` with its tiers replaced by `tiers`.
    pub fn new(draft: &EventDraft, tiers: &[Tier]) -> Self {
        let mut event = draft.clone();
        event.tiers = tiers.to_vec();
        Self(event)
    }

    /// The submitted event.
    pub fn event(&self) -> &EventDraft {
        &self.0
    }

    /// Consumes the payload, returning the submitted event.
    pub fn into_event(self) -> EventDraft {
        self.0
    }
}

/// Hands a snapshot of the draft to `on_submit`.
///
/// The callback's result is not awaited or inspected, and the submit-disabled
/// flag is not checked again here; the caller gates the button.
pub fn submit<F>(state: &DraftState, on_submit: F)
where
    F: FnOnce(SubmitPayload),
{
    let payload = state.payload();
    tracing::debug!(name = %payload.event().name, tiers = payload.event().tiers.len(), "submitting draft");
    on_submit(payload);
}

/// View state of the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    /// Display text.
    pub label: String,

    /// Whether the button rejects clicks.
    pub disabled: bool,

    /// Whether a submission is in flight.
    pub loading: bool,
}

impl SubmitButton {
    /// Builds the button for `state`, `loading` being owned by the caller.
    pub fn new(state: &DraftState, loading: bool, localizer: &impl Localizer) -> Self {
        let key = if loading {
            SUBMIT_LOADING
        } else if state.draft.is_new() {
            SUBMIT_CREATE
        } else {
            SUBMIT_SAVE
        };

        Self {
            label: localizer.resolve(key),
            disabled: state.submit_disabled,
            loading,
        }
    }
}
