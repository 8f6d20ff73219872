// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::Serialize;

use crate::locale::field_messages;
use crate::{DateConverter, DateField, Error, EventDraft, Localizer};

/// How a field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text input.
    Text,

    /// Multi-line text input.
    #[serde(rename = "textarea")]
    TextArea,

    /// Local date and time input, `YYYY-MM-DDTHH:mm`.
    #[serde(rename = "datetime-local")]
    DateTimeLocal,

    /// Dedicated timezone picker, not a generic input.
    #[serde(rename = "TimezonePicker")]
    TimezonePicker,

    /// Location search input.
    Location,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::DateTimeLocal => "datetime-local",
            FieldKind::TimezonePicker => "TimezonePicker",
            FieldKind::Location => "location",
        };
        write!(f, "{name}")
    }
}

/// Client-side check attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Validation {
    /// The value must contain a non-whitespace character.
    NotBlank,
}

impl Validation {
    /// Whether `value` passes the check.
    pub fn check(self, value: &str) -> bool {
        match self {
            Validation::NotBlank => !value.trim().is_empty(),
        }
    }
}

/// Display-ready description of one editable field of the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field path in the draft.
    pub name: &'static str,

    /// How the field is rendered.
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Localized label.
    pub label: String,

    /// Localized help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Initial value of the input.
    pub default_value: String,

    /// Placeholder shown while the input is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Check run by the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<Validation>,

    /// Maximum input length, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Whether the form can be rendered for `draft`.
///
/// Without an owning collective the form is not ready and renders nothing.
pub fn is_ready(draft: &EventDraft) -> bool {
    draft.parent_collective.is_some()
}

/// The field descriptors for `draft`, or none when the form is not ready.
pub fn render_fields(
    draft: &EventDraft,
    localizer: &impl Localizer,
    dates: &impl DateConverter,
) -> Result<Vec<FieldDescriptor>, Error> {
    if !is_ready(draft) {
        tracing::debug!("no parent collective, rendering nothing");
        return Ok(Vec::new());
    }
    build_fields(draft, localizer, dates)
}

/// Derives the ordered field descriptors from `draft`.
///
/// Order: name, description, startsAt, endsAt, timezone, location,
/// privateInstructions.
pub fn build_fields(
    draft: &EventDraft,
    localizer: &impl Localizer,
    dates: &impl DateConverter,
) -> Result<Vec<FieldDescriptor>, Error> {
    let date_value = |field: DateField| -> Result<String, Error> {
        match field.get(draft) {
            Some(instant) => dates.to_input_value(instant, draft.zone()),
            None => Ok(String::new()),
        }
    };

    let fields = vec![
        FieldDescriptor {
            placeholder: Some(String::new()),
            validate: Some(Validation::NotBlank),
            max_length: Some(255),
            ..field("name", FieldKind::Text, text_or_empty(Some(&draft.name)))
        },
        FieldDescriptor {
            placeholder: Some(String::new()),
            max_length: Some(255),
            ..field(
                "description",
                FieldKind::Text,
                text_or_empty(draft.description.as_deref()),
            )
        },
        field(
            "startsAt",
            FieldKind::DateTimeLocal,
            date_value(DateField::StartsAt)?,
        ),
        field(
            "endsAt",
            FieldKind::DateTimeLocal,
            date_value(DateField::EndsAt)?,
        ),
        field(
            "timezone",
            FieldKind::TimezonePicker,
            draft.timezone.clone(),
        ),
        FieldDescriptor {
            placeholder: Some(String::new()),
            ..field(
                "location",
                FieldKind::Location,
                text_or_empty(draft.location.as_ref().and_then(|a| a.display())),
            )
        },
        FieldDescriptor {
            max_length: Some(10_000),
            ..field(
                "privateInstructions",
                FieldKind::TextArea,
                text_or_empty(draft.private_instructions.as_deref()),
            )
        },
    ];

    Ok(fields
        .into_iter()
        .map(|f| localize(f, localizer))
        .collect())
}

fn field(name: &'static str, kind: FieldKind, default_value: String) -> FieldDescriptor {
    FieldDescriptor {
        name,
        kind,
        label: String::new(),
        description: None,
        default_value,
        placeholder: None,
        validate: None,
        max_length: None,
    }
}

fn localize(mut field: FieldDescriptor, localizer: &impl Localizer) -> FieldDescriptor {
    match field_messages(field.name) {
        Some(messages) => {
            field.label = localizer.resolve(messages.label);
            field.description = messages.description.map(|key| localizer.resolve(key));
        }
        None => field.label = field.name.to_string(),
    }
    field
}

fn text_or_empty(value: Option<&str>) -> String {
    value.filter(|a| !a.is_empty()).unwrap_or_default().to_string()
}
