// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Source record factories for integration tests.

use evform_core::{
    CollectiveRef, Config, DraftStore, EventDraft, RecordId, ResetPolicy, Tier,
};
use serde_json::json;

/// Creates a collective with a currency, as an owner of test events.
#[must_use]
pub fn test_collective() -> CollectiveRef {
    CollectiveRef {
        id: Some(RecordId::Int(42)),
        slug: Some("webpack".to_string()),
        name: Some("Webpack".to_string()),
        currency: Some("USD".to_string()),
        ..Default::default()
    }
}

/// Creates a configuration with a fixed default timezone.
#[must_use]
pub fn test_config(default_timezone: &str) -> Config {
    Config {
        default_timezone: Some(default_timezone.to_string()),
        ..Default::default()
    }
}

/// Creates a source record for an event that does not exist yet.
#[must_use]
pub fn new_event(name: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        parent_collective: Some(test_collective()),
        ..Default::default()
    }
}

/// Creates a stored event in New York starting 2024-01-01 12:00 local time.
#[must_use]
pub fn existing_event(id: i64, name: &str) -> EventDraft {
    EventDraft {
        id: Some(RecordId::Int(id)),
        slug: format!("webpack/{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        starts_at: Some("2024-01-01T17:00:00Z".parse().unwrap()),
        ends_at: Some("2024-01-01T19:30:00Z".parse().unwrap()),
        timezone: "America/New_York".to_string(),
        parent_collective: Some(test_collective()),
        tiers: vec![Tier(json!({ "name": "Early bird", "amount": 1000 }))],
        ..Default::default()
    }
}

/// Creates a store around [`existing_event`].
#[must_use]
pub fn ready_store() -> DraftStore {
    DraftStore::new(
        Some(existing_event(1, "Meetup")),
        "UTC",
        ResetPolicy::Name,
    )
}
