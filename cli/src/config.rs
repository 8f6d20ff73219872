// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use evform_core::{APP_NAME, Config as CoreConfig};

const EVFORM_CONFIG_ENV: &str = "EVFORM_CONFIG";
const EVFORM_ENV_ENV: &str = "EVFORM_ENV";

/// Loads the configuration.
///
/// Looks at `path`, then `$EVFORM_CONFIG`, then the user config directory. A
/// missing file in the user config directory yields the defaults; an explicit
/// path that cannot be read is an error.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(EVFORM_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if config.exists() {
            Some(config)
        } else {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            None
        }
    };

    let mut config = match path {
        Some(path) => {
            fs::read_to_string(&path)
                .await
                .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
                .parse::<ConfigRaw>()?
                .core
        }
        None => CoreConfig::default(),
    };

    if let Ok(env) = std::env::var(EVFORM_ENV_ENV) {
        tracing::debug!(env, "environment overridden by {EVFORM_ENV_ENV}");
        config.environment = Some(env).filter(|a| !a.is_empty());
    }

    config.normalize()?;
    Ok(config)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
