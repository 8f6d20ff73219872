// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use serde_json::Value;

use crate::{Error, EventDraft, FieldPath};

/// Partial update of a draft computed from a single edit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DraftPatch {
    /// Values to set at dotted paths, applied in order.
    pub fields: Vec<(FieldPath, Value)>,

    /// The start instant, `Some(None)` clears it.
    pub starts_at: Option<Option<Timestamp>>,

    /// The end instant, `Some(None)` clears it.
    pub ends_at: Option<Option<Timestamp>>,

    /// The timezone.
    pub timezone: Option<String>,

    /// Whether submission is disabled.
    pub submit_disabled: Option<bool>,
}

impl DraftPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.starts_at.is_none()
            && self.ends_at.is_none()
            && self.timezone.is_none()
            && self.submit_disabled.is_none()
    }

    /// Applies the draft part of the patch, returning the updated draft.
    ///
    /// Path values go through the JSON form of the draft so that only the
    /// addressed leaf changes. If a value does not fit the typed draft the
    /// original is left as it was and an error is returned.
    pub(crate) fn apply_to(&self, draft: &EventDraft) -> Result<EventDraft, Error> {
        let mut draft = if self.fields.is_empty() {
            draft.clone()
        } else {
            let mut doc = draft.to_document()?;
            for (path, value) in &self.fields {
                path.set_in(&mut doc, value.clone());
            }
            EventDraft::from_document(doc).map_err(|e| Error::InvalidFieldValue {
                path: self
                    .fields
                    .iter()
                    .map(|(p, _)| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                reason: e.to_string(),
            })?
        };

        if let Some(starts_at) = self.starts_at {
            draft.starts_at = starts_at;
        }

        if let Some(ends_at) = self.ends_at {
            draft.ends_at = ends_at;
        }

        if let Some(timezone) = &self.timezone {
            draft.timezone.clone_from(timezone);
        }

        Ok(draft)
    }
}
