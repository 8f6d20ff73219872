// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a `PATH=VALUE` assignment.
pub fn parse_assignment(s: &str) -> Result<(String, Value), String> {
    let (path, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid assignment '{s}', expected PATH=VALUE"))?;

    let path = path.trim();
    if path.is_empty() {
        return Err(format!("Invalid assignment '{s}', the path is empty"));
    }
    Ok((path.to_string(), parse_value(value)))
}

/// Reads `s` as JSON when it parses, otherwise as a plain string.
///
/// `42`, `true`, `null` and `{"a":1}` are JSON; `Town hall` is a string.
pub fn parse_value(s: &str) -> Value {
    serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_string()))
}

/// Parses a script of assignments, one per line. Blank lines and lines
/// starting with `#` are skipped.
pub fn parse_script(script: &str) -> Result<Vec<(String, Value)>, String> {
    script
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| parse_assignment(line).map_err(|e| format!("line {}: {e}", i + 1)))
        .collect()
}
