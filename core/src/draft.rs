// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, FALLBACK_TIMEZONE};

/// Draft of a calendar event, the in-progress copy being edited.
///
/// Fields keep the camelCase names of the source record so dotted edit paths
/// (`location.address`) address the same keys the source used. Keys this type
/// does not know about are carried in `extra` and written back unchanged.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Identifier of the stored record, `None` for an event not created yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// URL slug, without any `collective/` prefix.
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,

    /// The name of the event.
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Start instant, always absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,

    /// End instant, always absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,

    /// IANA timezone the wall-clock times are displayed in.
    #[serde(default, deserialize_with = "nullable")]
    pub timezone: String,

    /// Where the event takes place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Instructions emailed to participants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_instructions: Option<String>,

    /// The collective owning the event. Read-only for the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_collective: Option<CollectiveRef>,

    /// Tiers as supplied by the source record.
    #[serde(default, deserialize_with = "nullable")]
    pub tiers: Vec<Tier>,

    /// Unknown keys of the source record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventDraft {
    /// Strips any `/`-delimited prefix from the slug.
    pub fn normalized(mut self) -> Self {
        let slug = normalize_slug(&self.slug);
        if slug.len() != self.slug.len() {
            tracing::debug!(from = %self.slug, to = slug, "stripped slug prefix");
            self.slug = slug.to_string();
        }
        self
    }

    /// The zone wall clocks are read in. An empty timezone reads as UTC.
    pub fn zone(&self) -> &str {
        if self.timezone.is_empty() {
            FALLBACK_TIMEZONE
        } else {
            &self.timezone
        }
    }

    /// Whether the draft describes an event that does not exist yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Converts the draft into a JSON document keyed by the source field names.
    pub fn to_document(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuilds a draft from a JSON document produced by [`Self::to_document`].
    pub fn from_document(doc: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(doc)?)
    }
}

impl FromStr for EventDraft {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Removes everything up to and including the last `/` of a slug.
pub fn normalize_slug(slug: &str) -> &str {
    slug.rsplit_once('/').map_or(slug, |(_, tail)| tail)
}

/// Record identifier, numeric or textual depending on the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier.
    Int(i64),

    /// Textual identifier.
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// Location of an event.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Display name of the place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,

    /// Unknown keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    /// Text shown for the location: its name, falling back to the address.
    pub fn display(&self) -> Option<&str> {
        [self.name.as_deref(), self.address.as_deref()]
            .into_iter()
            .flatten()
            .find(|a| !a.is_empty())
    }
}

/// Reference to the collective owning an event.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveRef {
    /// Identifier of the collective.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Slug of the collective.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Name of the collective.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Currency used for the tiers of its events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Unknown keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A ticket or pricing option, opaque to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(pub Value);

impl Tier {
    /// A tier with no fields set, used as the first row of an empty tier list.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Tier {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Treats an explicit `null` like a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
