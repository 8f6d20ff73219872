// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evform_core::{Action, Config, EditorView, EventEditor, Tier};
use serde_json::json;

use crate::common::{assert_instant, existing_event, new_event, test_config};

#[test]
fn apply_change_merges_into_draft() {
    let mut editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    editor.apply_change("description", json!("Monthly")).unwrap();
    editor.apply_change("startsAt", json!("2024-01-02T08:00")).unwrap();

    let draft = editor.store().draft();
    assert_eq!(draft.description.as_deref(), Some("Monthly"));
    assert_instant(draft.starts_at, "2024-01-02T13:00:00Z");
}

#[test]
fn apply_change_rejects_bad_path() {
    let mut editor = EventEditor::new(Some(new_event("Party")), &test_config("UTC"));
    assert!(editor.apply_change("a..b", json!(1)).is_err());
}

#[test]
fn timezone_picker_round_trip() {
    let mut editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    let picker = editor.timezone_picker();
    assert_eq!(picker.selected_timezone, "America/New_York");
    assert_eq!(picker.label, "Timezone");

    let action = picker.on_change("Europe/Paris");
    assert_eq!(action, Action::ChangeTimezone("Europe/Paris".to_string()));
    editor.dispatch(&action).unwrap();

    assert_eq!(editor.timezone_picker().selected_timezone, "Europe/Paris");
    assert_instant(editor.store().draft().starts_at, "2024-01-01T11:00:00Z");
}

#[test]
fn tier_editor_hidden_outside_enabled_environments() {
    let editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    assert!(editor.tier_editor().is_none());

    let config = Config {
        environment: Some("production".to_string()),
        ..test_config("UTC")
    };
    let editor = EventEditor::new(Some(existing_event(1, "Meetup")), &config);
    assert!(editor.tier_editor().is_none());
}

#[test]
fn tier_editor_shown_in_ci() {
    let config = Config {
        environment: Some("ci".to_string()),
        ..test_config("UTC")
    };
    let mut editor = EventEditor::new(Some(existing_event(1, "Meetup")), &config);

    let props = editor.tier_editor().expect("tier editor should be shown");
    assert_eq!(props.title, "Tickets");
    assert_eq!(props.currency.as_deref(), Some("USD"));
    assert_eq!(props.tiers.len(), 1);

    let action = props.on_change(vec![Tier(json!({ "name": "Free" }))]);
    editor.dispatch(&action).unwrap();
    assert_eq!(
        editor.store().tiers(),
        [Tier(json!({ "name": "Free" }))]
    );
}

#[test]
fn submit_button_labels() {
    let mut editor = EventEditor::new(Some(new_event("Party")), &test_config("UTC"));
    assert_eq!(editor.submit_button().label, "Create Event");

    editor.set_loading(true);
    let button = editor.submit_button();
    assert_eq!(button.label, "loading");
    assert!(button.loading);

    let editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    assert_eq!(editor.submit_button().label, "Save");
}

#[test]
fn blank_name_disables_button() {
    let mut editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    editor.apply_change("name", json!("")).unwrap();
    assert!(editor.submit_button().disabled);
}

#[test]
fn message_overrides_reach_labels() {
    let mut config = test_config("UTC");
    config
        .messages
        .insert("submit.save".to_string(), "Enregistrer".to_string());
    let editor = EventEditor::new(Some(existing_event(1, "Meetup")), &config);
    assert_eq!(editor.submit_button().label, "Enregistrer");
}

#[test]
fn view_of_orphan_draft_is_not_ready() {
    let mut source = new_event("Party");
    source.parent_collective = None;
    let editor = EventEditor::new(Some(source), &test_config("UTC"));
    assert_eq!(editor.view().unwrap(), EditorView::NotReady);
    assert!(editor.fields().unwrap().is_empty());

    let json = serde_json::to_value(editor.view().unwrap()).unwrap();
    assert_eq!(json, json!({ "state": "not-ready" }));
}

#[test]
fn view_of_ready_draft() {
    let editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    let EditorView::Ready {
        fields,
        timezone_picker,
        tier_editor,
        submit_button,
    } = editor.view().unwrap()
    else {
        panic!("view should be ready");
    };
    assert_eq!(fields.len(), 7);
    assert_eq!(timezone_picker.selected_timezone, "America/New_York");
    assert!(tier_editor.is_none());
    assert!(!submit_button.disabled);
}

#[test]
fn refresh_through_editor() {
    let mut editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    editor.apply_change("description", json!("draft")).unwrap();
    assert!(!editor.refresh(Some(existing_event(1, "Meetup"))));
    assert!(editor.refresh(Some(existing_event(1, "Other"))));
    assert_eq!(editor.store().draft().description, None);
}
