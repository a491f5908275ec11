//! User-level configuration loaded from `~/.taggart/config.toml`.
//!
//! The file is optional; every field has a default.

mod loader;
pub use loader::{load_user_config, load_user_config_from};
use crate::codec::Format;
use crate::store::Orientation;
use crate::utils::get_taggart_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
fn default_database() -> PathBuf {
    PathBuf::from("tags.txt")
}
fn default_level() -> String {
    "warn".to_string()
}
fn default_rotation() -> String {
    "never".to_string()
}
/// Store settings (`[store]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Orientation used for new stores.
    #[serde(default)]
    pub orientation: Orientation,
    /// Tag database used by the CLI when `--db` is not given.
    #[serde(default = "default_database")]
    pub database: PathBuf,
    /// Format override for the database file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Require files to exist before tagging them.
    #[serde(default)]
    pub assert_exists: bool,
}
impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            database: default_database(),
            format: None,
            assert_exists: false,
        }
    }
}
/// Logging settings (`[logging]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            rotation: default_rotation(),
            dir: None,
        }
    }
}
/// Top-level user configuration, deserialized from `~/.taggart/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    get_taggart_home().map(|dir| dir.join("config.toml"))
}
#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
