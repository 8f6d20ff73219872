// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use serde_json::{Map, Value};

use crate::Error;

/// A dotted path to a field of the draft, e.g. `location.address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Parses a dotted path. Every segment must be non-empty.
    pub fn parse(path: &str) -> Result<Self, Error> {
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidFieldPath(path.to_string()));
        }
        Ok(Self(segments))
    }

    /// The path segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether the path names a single top-level field equal to `name`.
    pub fn is_field(&self, name: &str) -> bool {
        matches!(self.0.as_slice(), [only] if only == name)
    }

    /// Sets `value` at this path inside `doc`, leaving siblings untouched.
    ///
    /// Missing or non-object intermediate values are replaced by objects.
    /// A numeric segment indexes an existing array when it is in bounds.
    pub fn set_in(&self, doc: &mut Value, value: Value) {
        let mut cursor = doc;
        for segment in &self.0 {
            cursor = child_mut(cursor, segment);
        }
        *cursor = value;
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = match node {
        Value::Array(items) => segment.parse::<usize>().ok().filter(|i| *i < items.len()),
        _ => None,
    };
    if let Some(index) = index {
        return &mut node[index];
    }

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map.entry(segment).or_insert(Value::Null),
        _ => unreachable!("node was just replaced by an object"),
    }
}
