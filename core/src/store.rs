// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::reducer::{Action, reduce};
use crate::{DateConverter, DraftPatch, Error, EventDraft, RecordId, SubmitPayload, Tier};

/// The editable state: draft, tier list and submit flag.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DraftState {
    /// The event being edited.
    pub draft: EventDraft,

    /// Tiers, edited by the tier editor and submitted with the draft.
    pub tiers: Vec<Tier>,

    /// Whether submission is disabled.
    pub submit_disabled: bool,
}

impl DraftState {
    /// Builds the initial state from a source record, or an empty shape.
    ///
    /// The slug prefix is stripped, an empty timezone is replaced by
    /// `default_timezone`, and a missing tier list starts with one empty tier.
    pub fn from_source(source: Option<EventDraft>, default_timezone: &str) -> Self {
        let mut draft = source.unwrap_or_default().normalized();
        if draft.timezone.is_empty() {
            draft.timezone = default_timezone.to_string();
        }

        let tiers = match draft.tiers.is_empty() {
            true => vec![Tier::empty()],
            false => draft.tiers.clone(),
        };

        Self {
            draft,
            tiers,
            submit_disabled: false,
        }
    }

    /// Returns the state with `patch` merged in.
    pub fn merged(&self, patch: &DraftPatch) -> Result<Self, Error> {
        Ok(Self {
            draft: patch.apply_to(&self.draft)?,
            tiers: self.tiers.clone(),
            submit_disabled: patch.submit_disabled.unwrap_or(self.submit_disabled),
        })
    }

    /// Snapshot for the submit callback.
    pub fn payload(&self) -> SubmitPayload {
        SubmitPayload::new(&self.draft, &self.tiers)
    }
}

/// When a refreshed source record replaces the draft.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ResetPolicy {
    /// Reset when the record's name differs from the previous one.
    ///
    /// A change of any other field, including the id, is not noticed.
    #[default]
    Name,

    /// Reset when the record's id differs from the previous one.
    Id,
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetPolicy::Name => write!(f, "name"),
            ResetPolicy::Id => write!(f, "id"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SourceKey {
    id: Option<RecordId>,
    name: String,
}

impl SourceKey {
    fn of(source: &EventDraft) -> Self {
        Self {
            id: source.id.clone(),
            name: source.name.clone(),
        }
    }

    fn is_same_record(&self, other: &SourceKey, policy: ResetPolicy) -> bool {
        match policy {
            ResetPolicy::Name => self.name == other.name,
            ResetPolicy::Id => self.id == other.id,
        }
    }
}

/// Owns the draft state and serializes every mutation of it.
#[derive(Debug)]
pub struct DraftStore {
    state: DraftState,
    last_source: Option<SourceKey>,
    reset_on: ResetPolicy,
    default_timezone: String,
}

impl DraftStore {
    /// Creates a store from an optional source record.
    pub fn new(
        source: Option<EventDraft>,
        default_timezone: impl Into<String>,
        reset_on: ResetPolicy,
    ) -> Self {
        let default_timezone = default_timezone.into();
        let last_source = source.as_ref().map(SourceKey::of);
        Self {
            state: DraftState::from_source(source, &default_timezone),
            last_source,
            reset_on,
            default_timezone,
        }
    }

    /// The current state.
    pub fn state(&self) -> &DraftState {
        &self.state
    }

    /// The current draft.
    pub fn draft(&self) -> &EventDraft {
        &self.state.draft
    }

    /// The current tier list.
    pub fn tiers(&self) -> &[Tier] {
        &self.state.tiers
    }

    /// Whether submission is disabled.
    pub fn submit_disabled(&self) -> bool {
        self.state.submit_disabled
    }

    /// Replaces the draft and tiers with a new source record.
    pub fn replace(&mut self, source: EventDraft) {
        tracing::debug!(name = %source.name, "replacing draft");
        self.last_source = Some(SourceKey::of(&source));
        self.state = DraftState::from_source(Some(source), &self.default_timezone);
    }

    /// Merges a partial update. On error the state is left unchanged.
    pub fn merge(&mut self, patch: &DraftPatch) -> Result<(), Error> {
        if patch.is_empty() {
            return Ok(());
        }
        self.state = self.state.merged(patch)?;
        Ok(())
    }

    /// Offers a refreshed source record, returning whether the draft was reset.
    ///
    /// The draft is only reset when the record looks like a different one
    /// according to the reset policy; otherwise local edits are kept.
    pub fn refresh(&mut self, source: Option<EventDraft>) -> bool {
        let Some(source) = source else {
            return false;
        };

        let key = SourceKey::of(&source);
        let is_same = self
            .last_source
            .as_ref()
            .is_some_and(|last| last.is_same_record(&key, self.reset_on));

        if is_same {
            tracing::debug!(policy = %self.reset_on, "source refreshed, same record, keeping draft");
            self.last_source = Some(key);
            false
        } else {
            self.replace(source);
            true
        }
    }

    /// Runs `action` through the reducer and commits the resulting state.
    ///
    /// Returns the payload when the action was a submission.
    pub fn dispatch(
        &mut self,
        action: &Action,
        dates: &impl DateConverter,
    ) -> Result<Option<SubmitPayload>, Error> {
        let reduction = reduce(&self.state, action, dates).inspect_err(|e| {
            tracing::warn!(?action, err = %e, "action rejected");
        })?;
        self.state = reduction.state;
        Ok(reduction.submission)
    }
}
