// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evform_core::{Action, EventEditor, SubmitPayload, Tier};
use serde_json::json;

use crate::common::{existing_event, new_event, test_config};

#[test]
fn submit_hands_over_draft_with_tiers() {
    let mut editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    editor
        .dispatch(&Action::SetTiers(vec![Tier(json!({ "name": "VIP" }))]))
        .unwrap();
    editor.apply_change("name", json!("Meetup #2")).unwrap();

    let mut submitted: Vec<SubmitPayload> = Vec::new();
    editor.submit(|payload| submitted.push(payload));

    assert_eq!(submitted.len(), 1);
    let event = submitted[0].event();
    assert_eq!(event.name, "Meetup #2");
    assert_eq!(event.tiers, vec![Tier(json!({ "name": "VIP" }))]);
}

#[test]
fn submit_payload_json() {
    let editor = EventEditor::new(Some(new_event("Party")), &test_config("Asia/Tokyo"));
    let mut json = None;
    editor.submit(|payload| json = Some(serde_json::to_value(&payload).unwrap()));

    let json = json.unwrap();
    assert_eq!(json["name"], "Party");
    assert_eq!(json["timezone"], "Asia/Tokyo");
    assert_eq!(json["tiers"], json!([{}]));
    assert!(json.get("id").is_none());
    assert_eq!(json["parentCollective"]["currency"], "USD");
}

#[test]
fn submit_does_not_change_state() {
    let editor = EventEditor::new(Some(existing_event(1, "Meetup")), &test_config("UTC"));
    let before = editor.store().state().clone();
    editor.submit(|_| {});
    assert_eq!(editor.store().state(), &before);
}
