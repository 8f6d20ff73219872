// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Draft store lifecycle: creation, refresh and tiers.

use evform_core::{Action, DraftStore, EventDraft, ResetPolicy, Tier, ZoneConverter};
use serde_json::json;

use crate::common::{existing_event, new_event};

#[test]
fn creation_strips_slug_prefix() {
    let store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    assert_eq!(store.draft().slug, "meetup");
}

#[test]
fn creation_without_source_uses_defaults() {
    let store = DraftStore::new(None, "Europe/Berlin", ResetPolicy::Name);
    assert_eq!(store.draft(), &EventDraft {
        timezone: "Europe/Berlin".to_string(),
        ..Default::default()
    });
    assert_eq!(store.tiers(), [Tier::empty()]);
    assert!(!store.submit_disabled());
}

#[test]
fn source_timezone_wins_over_default() {
    let store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    assert_eq!(store.draft().timezone, "America/New_York");

    let store = DraftStore::new(Some(new_event("Party")), "Asia/Tokyo", ResetPolicy::Name);
    assert_eq!(store.draft().timezone, "Asia/Tokyo");
}

#[test]
fn refresh_with_same_name_keeps_edits() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    store
        .dispatch(
            &Action::set_field("description", "edited").unwrap(),
            &ZoneConverter,
        )
        .unwrap();

    let mut refreshed = existing_event(1, "Meetup");
    refreshed.description = Some("from server".to_string());
    assert!(!store.refresh(Some(refreshed)));
    assert_eq!(store.draft().description.as_deref(), Some("edited"));
}

#[test]
fn refresh_with_new_name_resets() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    store
        .dispatch(&Action::set_field("name", "").unwrap(), &ZoneConverter)
        .unwrap();
    assert!(store.submit_disabled());

    assert!(store.refresh(Some(existing_event(1, "Conference"))));
    assert_eq!(store.draft().name, "Conference");
    assert_eq!(store.draft().slug, "conference");
    assert!(!store.submit_disabled());
}

#[test]
fn name_policy_misses_id_change() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    assert!(!store.refresh(Some(existing_event(2, "Meetup"))));
    assert_eq!(store.draft().id, existing_event(1, "Meetup").id);
}

#[test]
fn id_policy_notices_id_change() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Id);
    assert!(!store.refresh(Some(existing_event(1, "Renamed"))));
    assert!(store.refresh(Some(existing_event(2, "Renamed"))));
    assert_eq!(store.draft().name, "Renamed");
}

#[test]
fn refresh_with_nothing_keeps_draft() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    let before = store.state().clone();
    assert!(!store.refresh(None));
    assert_eq!(store.state(), &before);
}

#[test]
fn set_tiers_replaces_list_and_keeps_draft() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    let draft = store.draft().clone();
    let tiers = vec![
        Tier(json!({ "name": "Regular", "amount": 2000 })),
        Tier(json!({ "name": "VIP", "amount": 9000 })),
    ];
    store
        .dispatch(&Action::SetTiers(tiers.clone()), &ZoneConverter)
        .unwrap();
    assert_eq!(store.tiers(), tiers.as_slice());
    assert_eq!(store.draft(), &draft);
}

#[test]
fn submit_action_returns_payload_without_change() {
    let mut store = DraftStore::new(Some(existing_event(1, "Meetup")), "UTC", ResetPolicy::Name);
    let before = store.state().clone();
    let payload = store
        .dispatch(&Action::Submit, &ZoneConverter)
        .unwrap()
        .expect("submit should produce a payload");
    assert_eq!(payload.event().name, "Meetup");
    assert_eq!(payload.event().tiers, before.tiers);
    assert_eq!(store.state(), &before);
}
