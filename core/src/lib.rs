// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event editing form: draft state, field edits, timezone-aware dates and submission.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod change;
mod config;
mod datetime;
mod dispatcher;
mod draft;
mod editor;
mod error;
mod fields;
mod locale;
mod patch;
mod path;
mod reducer;
mod store;
mod submit;

pub use crate::change::{DateField, apply_change, change_date, change_timezone};
pub use crate::config::{APP_NAME, Config, FALLBACK_TIMEZONE};
pub use crate::datetime::{
    DateConverter, INPUT_FORMAT, ZoneConverter, lookup_timezone, parse_wall_clock,
};
pub use crate::dispatcher::Dispatcher;
pub use crate::draft::{CollectiveRef, EventDraft, Location, RecordId, Tier, normalize_slug};
pub use crate::editor::{EditorView, EventEditor, TierEditorProps, TimezonePickerProps};
pub use crate::error::Error;
pub use crate::fields::{
    FieldDescriptor, FieldKind, Validation, build_fields, is_ready, render_fields,
};
pub use crate::locale::{FieldMessages, Localizer, MessageCatalog, field_messages};
pub use crate::patch::DraftPatch;
pub use crate::path::FieldPath;
pub use crate::reducer::{Action, Reduction, reduce};
pub use crate::store::{DraftState, DraftStore, ResetPolicy};
pub use crate::submit::{SubmitButton, SubmitPayload, submit};
