// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[data_grid]` - Remote endpoint, page size, timeout and search behavior
//! - `[compositor]` - Logo size, custom background and export directory
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_VITRINE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_vitrine::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! println!("querying {}", config.data_grid.endpoint());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::compositor::LogoSize;
use crate::domain::paging::PageSize;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote data grid settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DataGridConfig {
    /// Base URL of the paginated service.
    #[serde(default = "default_endpoint")]
    pub endpoint: Option<String>,

    /// Records per page on startup.
    #[serde(default = "default_page_size")]
    pub default_page_size: Option<u32>,

    /// Timeout for a single page query (seconds).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,

    /// Jump back to page 1 when the search term changes.
    #[serde(default = "default_reset_page_on_search")]
    pub reset_page_on_search: Option<bool>,
}

impl Default for DataGridConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            default_page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            reset_page_on_search: default_reset_page_on_search(),
        }
    }
}

impl DataGridConfig {
    /// Endpoint to query, falling back to the built-in service.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Startup page size, clamped to at least one record.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn reset_page_on_search(&self) -> bool {
        self.reset_page_on_search
            .unwrap_or(DEFAULT_RESET_PAGE_ON_SEARCH)
    }
}

/// Logo compositor settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CompositorConfig {
    /// Logo width when a logo is first placed (pixels).
    #[serde(default = "default_logo_size")]
    pub default_logo_size: Option<u32>,

    /// Raster image used instead of the built-in shirt.
    #[serde(default)]
    pub background_path: Option<PathBuf>,

    /// Where exported designs are written.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            default_logo_size: default_logo_size(),
            background_path: None,
            export_dir: None,
        }
    }
}

impl CompositorConfig {
    /// Initial logo size, clamped to the valid range.
    #[must_use]
    pub fn logo_size(&self) -> LogoSize {
        LogoSize::new(self.default_logo_size.unwrap_or(DEFAULT_LOGO_SIZE))
    }

    /// Full path of the export file.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        paths::export_dir(self.export_dir.as_deref()).join(EXPORT_FILE_NAME)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Remote data grid settings.
    #[serde(default)]
    pub data_grid: DataGridConfig,

    /// Logo compositor settings.
    #[serde(default)]
    pub compositor: CompositorConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_endpoint() -> Option<String> {
    Some(DEFAULT_ENDPOINT.to_string())
}

fn default_page_size() -> Option<u32> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_reset_page_on_search() -> Option<bool> {
    Some(DEFAULT_RESET_PAGE_ON_SEARCH)
}

fn default_logo_size() -> Option<u32> {
    Some(DEFAULT_LOGO_SIZE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
