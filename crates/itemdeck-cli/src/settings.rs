//! User settings, read from a TOML file.
//!
//! The default location is the platform config folder:
//! - Linux: ~/.config/itemdeck/settings.toml
//! - macOS: ~/Library/Application Support/itemdeck/settings.toml
//! - Windows: %APPDATA%/itemdeck/config/settings.toml

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use itemdeck_catalog::Catalog;
use itemdeck_model::SortConfig;
use itemdeck_store::{DEFAULT_NOTIFICATION_TIMEOUT, StoreConfig};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "itemdeck";
const CONFIG_FILENAME: &str = "settings.toml";
const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog to seed from instead of the built-in one.
    pub catalog: Option<PathBuf>,
    pub default_sort: SortConfig,
    pub notification_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            default_sort: SortConfig::default(),
            notification_timeout_ms: u64::try_from(DEFAULT_NOTIFICATION_TIMEOUT.as_millis())
                .unwrap_or(u64::MAX),
        }
    }
}

impl Settings {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            default_sort: self.default_sort,
            notification_timeout: Duration::from_millis(self.notification_timeout_ms),
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Default settings file location, if the platform has one.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Default session file location, if the platform has one.
pub fn default_session_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(SESSION_FILENAME))
}

/// Read settings from `explicit`, or from the default location.
///
/// An explicitly named file must exist and parse. Problems with the default
/// file fall back to defaults with a warning.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded settings");
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };
    let settings = match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(%error, "failed to parse settings file, using defaults");
                Settings::default()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(error) => {
            tracing::warn!(%error, "failed to read settings file, using defaults");
            Settings::default()
        }
    };
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use itemdeck_model::{SortDirection, SortField};

    use super::*;

    #[test]
    fn defaults_match_store_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.store_config(), StoreConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [default_sort]
            field = "value"
            direction = "asc"
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.default_sort,
            SortConfig::new(SortField::Value, SortDirection::Asc)
        );
        assert_eq!(settings.notification_timeout_ms, 3000);
        assert_eq!(settings.catalog, None);
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings {
            catalog: Some(PathBuf::from("/tmp/catalog.toml")),
            default_sort: SortConfig::new(SortField::Name, SortDirection::Desc),
            notification_timeout_ms: 1500,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
