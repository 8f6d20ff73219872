// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::datetime::lookup_timezone;
use crate::{Error, MessageCatalog, ResetPolicy};

/// The name of the application.
pub const APP_NAME: &str = "evform";

/// Timezone used when neither the source, the config nor the system names one.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Configuration of the event editor.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Timezone given to drafts whose source has none. Defaults to the system timezone.
    #[serde(default)]
    pub default_timezone: Option<String>,

    /// When a refreshed source record replaces the draft.
    #[serde(default)]
    pub reset_on: ResetPolicy,

    /// Environment category of the host, e.g. `ci` or `production`.
    #[serde(default)]
    pub environment: Option<String>,

    /// Environments in which the tier editor is shown.
    #[serde(default = "default_ticket_editor_envs")]
    pub ticket_editor_envs: Vec<String>,

    /// Message overrides, by message key.
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timezone: None,
            reset_on: ResetPolicy::default(),
            environment: None,
            ticket_editor_envs: default_ticket_editor_envs(),
            messages: HashMap::new(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    ///
    /// Fills the default timezone from the system when unset and checks that
    /// it names a known zone.
    pub fn normalize(&mut self) -> Result<(), Error> {
        match &self.default_timezone {
            Some(tz) => {
                lookup_timezone(tz)?;
            }
            None => self.default_timezone = Some(system_timezone()),
        }
        Ok(())
    }

    /// The timezone for drafts without one.
    pub fn default_timezone(&self) -> &str {
        self.default_timezone
            .as_deref()
            .unwrap_or(FALLBACK_TIMEZONE)
    }

    /// Whether the tier editor is rendered in the configured environment.
    pub fn ticket_editor_enabled(&self) -> bool {
        self.environment
            .as_ref()
            .is_some_and(|env| self.ticket_editor_envs.iter().any(|a| a == env))
    }

    /// The message catalog with the configured overrides applied.
    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::new().with_overrides(self.messages.clone())
    }
}

fn default_ticket_editor_envs() -> Vec<String> {
    vec!["e2e".to_string(), "ci".to_string()]
}

fn system_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(tz) if lookup_timezone(&tz).is_ok() => tz,
        Ok(tz) => {
            tracing::warn!(tz, "system timezone is unknown, using {FALLBACK_TIMEZONE}");
            FALLBACK_TIMEZONE.to_string()
        }
        Err(e) => {
            tracing::warn!(err = %e, "failed to detect system timezone, using {FALLBACK_TIMEZONE}");
            FALLBACK_TIMEZONE.to_string()
        }
    }
}
