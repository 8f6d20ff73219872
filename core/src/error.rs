// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while editing a draft.
///
/// The editor itself only owns the non-empty name rule, which is not an error.
/// Everything here is propagated from a capability (date conversion) or from
/// mapping an edit onto the typed draft.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wall-clock input could not be parsed or resolved.
    #[error("Invalid date input '{input}': {reason}")]
    InvalidDateInput {
        /// The offending input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// The timezone is not an IANA identifier known to the tz database.
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    /// The field path is empty or contains an empty segment.
    #[error("Invalid field path '{0}'")]
    InvalidFieldPath(String),

    /// The value cannot be stored at the given path.
    #[error("Invalid value for field '{path}': {reason}")]
    InvalidFieldValue {
        /// The dotted field path
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// (De)serialization of a draft or source record failed.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
