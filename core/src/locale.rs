// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

/// Resolves a message key to display text.
pub trait Localizer {
    /// The display text for `key`.
    fn resolve(&self, key: &str) -> String;
}

/// Message keys of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMessages {
    /// Key of the field label.
    pub label: &'static str,

    /// Key of the help text shown under the field, if any.
    pub description: Option<&'static str>,
}

/// Message keys by field identifier.
pub const FIELD_MESSAGES: &[(&str, FieldMessages)] = &[
    ("slug", label("collective.slug.label")),
    ("type", label("event.type.label")),
    ("name", label("Fields.name")),
    ("amount", label("Fields.amount")),
    ("description", label("collective.description.label")),
    ("longDescription", label("event.longDescription.label")),
    ("startsAt", label("startDateAndTime")),
    ("endsAt", label("event.endsAt.label")),
    ("timezone", label("event.timezone.label")),
    ("location", label("event.location.label")),
    (
        "privateInstructions",
        FieldMessages {
            label: "event.privateInstructions.label",
            description: Some(PRIVATE_INSTRUCTIONS_DESCRIPTION),
        },
    ),
];

/// Help text of the private instructions field.
pub const PRIVATE_INSTRUCTIONS_DESCRIPTION: &str = "event.privateInstructions.description";

/// Submit button label while the submission is in flight.
pub const SUBMIT_LOADING: &str = "submit.loading";

/// Submit button label for an event that does not exist yet.
pub const SUBMIT_CREATE: &str = "submit.create";

/// Submit button label for an existing event.
pub const SUBMIT_SAVE: &str = "submit.save";

/// Title of the tier editor.
pub const TICKETS_TITLE: &str = "event.tickets.title";

const fn label(key: &'static str) -> FieldMessages {
    FieldMessages {
        label: key,
        description: None,
    }
}

/// The message keys registered for `field`.
pub fn field_messages(field: &str) -> Option<FieldMessages> {
    FIELD_MESSAGES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, messages)| *messages)
}

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("collective.slug.label", "url"),
    ("event.type.label", "Type"),
    ("Fields.name", "Name"),
    ("Fields.amount", "Amount"),
    ("collective.description.label", "Short description"),
    ("event.longDescription.label", "Long description"),
    ("startDateAndTime", "start date and time"),
    ("event.endsAt.label", "end date and time"),
    ("event.timezone.label", "Timezone"),
    ("event.location.label", "location"),
    ("event.privateInstructions.label", "Private instructions"),
    (
        PRIVATE_INSTRUCTIONS_DESCRIPTION,
        "These instructions will be provided by email to the participants.",
    ),
    (SUBMIT_LOADING, "loading"),
    (SUBMIT_CREATE, "Create Event"),
    (SUBMIT_SAVE, "Save"),
    (TICKETS_TITLE, "Tickets"),
];

/// In-memory message catalog, seeded with English defaults.
///
/// Unknown keys resolve to the key itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    /// A catalog holding only the default messages.
    pub fn new() -> Self {
        let messages = DEFAULT_MESSAGES
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { messages }
    }

    /// Replaces or adds messages.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Localizer for MessageCatalog {
    fn resolve(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(message) => message.clone(),
            None => {
                tracing::debug!(key, "missing message");
                key.to_string()
            }
        }
    }
}
