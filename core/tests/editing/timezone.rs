// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone changes keep the wall clock of both dates.

use evform_core::{Action, DraftStore, Error, ResetPolicy, ZoneConverter};

use crate::common::{assert_instant, assert_wall_clock, existing_event, ready_store};

#[test]
fn paris_keeps_noon() {
    let mut store = ready_store();
    store
        .dispatch(&Action::ChangeTimezone("Europe/Paris".to_string()), &ZoneConverter)
        .unwrap();

    assert_eq!(store.draft().timezone, "Europe/Paris");
    assert_instant(store.draft().starts_at, "2024-01-01T11:00:00Z");
    assert_instant(store.draft().ends_at, "2024-01-01T13:30:00Z");
}

#[test]
fn wall_clock_survives_several_zone_pairs() {
    let zones = [
        "Asia/Tokyo",
        "America/Los_Angeles",
        "Australia/Sydney",
        "Asia/Kolkata",
        "UTC",
        "America/New_York",
    ];

    let mut store = ready_store();
    for zone in zones {
        store
            .dispatch(&Action::ChangeTimezone(zone.to_string()), &ZoneConverter)
            .unwrap();
        assert_wall_clock(store.draft().starts_at, zone, "2024-01-01T12:00");
        assert_wall_clock(store.draft().ends_at, zone, "2024-01-01T14:30");
    }

    assert_instant(store.draft().starts_at, "2024-01-01T17:00:00Z");
}

#[test]
fn same_zone_is_a_no_op_for_instants() {
    let mut store = ready_store();
    let before = store.draft().clone();
    store
        .dispatch(
            &Action::ChangeTimezone("America/New_York".to_string()),
            &ZoneConverter,
        )
        .unwrap();
    assert_eq!(store.draft(), &before);
}

#[test]
fn missing_dates_stay_missing() {
    let mut source = existing_event(1, "Meetup");
    source.ends_at = None;
    let mut store = DraftStore::new(Some(source), "UTC", ResetPolicy::Name);

    store
        .dispatch(&Action::ChangeTimezone("Asia/Tokyo".to_string()), &ZoneConverter)
        .unwrap();
    assert_eq!(store.draft().ends_at, None);
    assert_wall_clock(store.draft().starts_at, "Asia/Tokyo", "2024-01-01T12:00");
}

#[test]
fn unknown_zone_is_rejected_without_change() {
    let mut store = ready_store();
    let before = store.state().clone();
    let err = store
        .dispatch(&Action::ChangeTimezone("Mars/Olympus".to_string()), &ZoneConverter)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownTimezone(_)));
    assert_eq!(store.state(), &before);
}

#[test]
fn empty_zone_is_stored_and_dates_kept() {
    for action in [
        Action::ChangeTimezone(String::new()),
        Action::set_field("timezone", "").unwrap(),
        Action::set_field("timezone", serde_json::Value::Null).unwrap(),
    ] {
        let mut store = ready_store();
        store.dispatch(&action, &ZoneConverter).unwrap();

        assert_eq!(store.draft().timezone, "", "{action:?}");
        assert_instant(store.draft().starts_at, "2024-01-01T17:00:00Z");
        assert_instant(store.draft().ends_at, "2024-01-01T19:30:00Z");
    }
}

#[test]
fn zone_after_empty_zone_reads_dates_as_utc() {
    let mut store = ready_store();
    store
        .dispatch(&Action::ChangeTimezone(String::new()), &ZoneConverter)
        .unwrap();
    store
        .dispatch(&Action::ChangeTimezone("Europe/Paris".to_string()), &ZoneConverter)
        .unwrap();

    assert_eq!(store.draft().timezone, "Europe/Paris");
    assert_wall_clock(store.draft().starts_at, "Europe/Paris", "2024-01-01T17:00");
    assert_instant(store.draft().starts_at, "2024-01-01T16:00:00Z");
}

#[test]
fn timezone_via_set_field_uses_same_rule() {
    let mut store = ready_store();
    store
        .dispatch(
            &Action::set_field("timezone", "Europe/Paris").unwrap(),
            &ZoneConverter,
        )
        .unwrap();
    assert_instant(store.draft().starts_at, "2024-01-01T11:00:00Z");
}
