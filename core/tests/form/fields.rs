// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evform_core::{
    FieldKind, MessageCatalog, Validation, ZoneConverter, build_fields, render_fields,
};

use crate::common::{existing_event, new_event};

#[test]
fn existing_event_fields() {
    let fields = render_fields(
        &existing_event(1, "Meetup"),
        &MessageCatalog::new(),
        &ZoneConverter,
    )
    .unwrap();

    let summary: Vec<_> = fields
        .iter()
        .map(|f| (f.name, f.kind, f.default_value.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            ("name", FieldKind::Text, "Meetup"),
            ("description", FieldKind::Text, ""),
            ("startsAt", FieldKind::DateTimeLocal, "2024-01-01T12:00"),
            ("endsAt", FieldKind::DateTimeLocal, "2024-01-01T14:30"),
            ("timezone", FieldKind::TimezonePicker, "America/New_York"),
            ("location", FieldKind::Location, ""),
            ("privateInstructions", FieldKind::TextArea, ""),
        ]
    );
}

#[test]
fn name_field_constraints() {
    let fields = build_fields(&new_event(""), &MessageCatalog::new(), &ZoneConverter).unwrap();
    let name = &fields[0];
    assert_eq!(name.validate, Some(Validation::NotBlank));
    assert_eq!(name.max_length, Some(255));
    assert_eq!(name.placeholder.as_deref(), Some(""));
    assert_eq!(fields[6].max_length, Some(10_000));
}

#[test]
fn not_ready_renders_nothing() {
    let mut draft = new_event("Party");
    draft.parent_collective = None;
    let fields = render_fields(&draft, &MessageCatalog::new(), &ZoneConverter).unwrap();
    assert!(fields.is_empty());
}

#[test]
fn renderer_json_shape() {
    let fields = render_fields(
        &existing_event(1, "Meetup"),
        &MessageCatalog::new(),
        &ZoneConverter,
    )
    .unwrap();
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(json[2]["name"], "startsAt");
    assert_eq!(json[2]["type"], "datetime-local");
    assert_eq!(json[2]["defaultValue"], "2024-01-01T12:00");
    assert!(json[2].get("maxLength").is_none());
}
