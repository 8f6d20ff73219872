// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use tokio::fs;

use evform_core::{Config, EventDraft, EventEditor, SubmitPayload};

/// Reads a source event record from `path`.
///
/// An empty file means there is no source record.
pub async fn load_source(path: Option<&Path>) -> Result<Option<EventDraft>, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read source at {}: {}", path.display(), e))?;
    if content.trim().is_empty() {
        tracing::debug!(path = %path.display(), "source is empty");
        return Ok(None);
    }

    let source = content
        .parse::<EventDraft>()
        .map_err(|e| format!("Invalid source at {}: {}", path.display(), e))?;
    Ok(Some(source))
}

/// Creates an editor for the source record at `path`.
pub async fn open_editor(
    config: &Config,
    path: Option<&Path>,
) -> Result<EventEditor, Box<dyn Error>> {
    let source = load_source(path).await?;
    let editor = EventEditor::new(source, config);
    if !editor.is_ready() {
        tracing::warn!("the event has no parent collective, no fields will be rendered");
    }
    Ok(editor)
}

/// Writes `payload` as pretty JSON to `out`, or to stdout.
pub async fn write_payload(
    payload: &SubmitPayload,
    out: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(payload)?;
    match out {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .await
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            tracing::debug!(path = %path.display(), "payload written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
