//! Application settings loaded from `expense_desk.toml`
//!
//! The settings file is optional: every field has a default so a fresh checkout can run
//! against a local `SQLite` file without any configuration.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "expense_desk.toml";

/// Configuration structure representing the entire settings file
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Database URL; `DATABASE_URL` in the environment takes precedence
    #[serde(default)]
    pub database_url: Option<String>,
    /// Where uploaded attachments are served from
    #[serde(default)]
    pub attachments: AttachmentSettings,
}

/// Settings for the attachment upload channel
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AttachmentSettings {
    /// Public base URL that uploaded files are served under
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AttachmentSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5678/public".to_string()
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns `Error::Config` if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads settings from the default location, falling back to defaults when the file is absent.
pub fn load_default_config() -> Result<Settings> {
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        tracing::info!("No {DEFAULT_CONFIG_PATH} found, using default settings");
        Ok(Settings::default())
    }
}
