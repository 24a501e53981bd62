//! Overlay configuration
//!
//! Authoring-time settings for event names and pictures. The values are read
//! once at startup and never change during a run.
//!
//! Three sources are supported:
//! - a JSON file (`OverlayConfig::load_from_file`)
//! - a plugin-style parameter map with human readable keys
//!   (`OverlayConfig::from_parameters`)
//! - built-in defaults (`OverlayConfig::default`)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_RANGE: u32 = 5;
pub const DEFAULT_FONT_SIZE: u32 = 24;
pub const DEFAULT_FADE_TIMER: u32 = 30;

/// Parameter keys understood by [`OverlayConfig::from_parameters`]
pub const PARAM_DEFAULT_RANGE: &str = "Default Range";
pub const PARAM_FONT_SIZE: &str = "Font Size";
pub const PARAM_FADE_NAMES: &str = "Fade Names";
pub const PARAM_FADE_PICTURES: &str = "Fade Pictures";
pub const PARAM_FADE_TIMER: &str = "Fade Timer";

/// Fallback config shipped with the demo
pub const BUNDLED_CONFIG_PATH: &str = "assets/config/overlay.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings shared by every event overlay
///
/// # Fields
///
/// - `default_range`: tiles used when an explicit annotation gives no range
/// - `font_size`: label font size in pixels
/// - `fade_names` / `fade_pictures`: fade instead of a hard show/hide
/// - `fade_timer`: frames a full fade takes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub default_range: u32,
    pub font_size: u32,
    pub fade_names: bool,
    pub fade_pictures: bool,
    pub fade_timer: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            default_range: DEFAULT_RANGE,
            font_size: DEFAULT_FONT_SIZE,
            fade_names: false,
            fade_pictures: false,
            fade_timer: DEFAULT_FADE_TIMER,
        }
    }
}

impl OverlayConfig {
    /// Loads a config from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: OverlayConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), ?config, "loaded overlay config");
        Ok(config)
    }

    /// Builds a config from string parameters keyed by their display names
    ///
    /// Numbers that are missing, empty or not numeric fall back to the
    /// defaults. Booleans are only true for a case-insensitive `"true"`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use event_names::config::OverlayConfig;
    ///
    /// let mut params = HashMap::new();
    /// params.insert("Fade Names".to_string(), "TRUE".to_string());
    /// let config = OverlayConfig::from_parameters(&params);
    /// assert!(config.fade_names);
    /// assert_eq!(config.default_range, 5);
    /// ```
    pub fn from_parameters(params: &HashMap<String, String>) -> Self {
        OverlayConfig {
            default_range: number_param(params, PARAM_DEFAULT_RANGE, DEFAULT_RANGE),
            font_size: number_param(params, PARAM_FONT_SIZE, DEFAULT_FONT_SIZE),
            fade_names: bool_param(params, PARAM_FADE_NAMES),
            fade_pictures: bool_param(params, PARAM_FADE_PICTURES),
            fade_timer: number_param(params, PARAM_FADE_TIMER, DEFAULT_FADE_TIMER),
        }
    }

    /// Finds the config to use for this run
    ///
    /// Looks in the user config directory first, then the bundled asset,
    /// then falls back to defaults. A file that exists but fails to parse is
    /// skipped with a warning.
    pub fn locate() -> Self {
        let user_path = dirs::config_dir().map(|p| p.join("event_names").join("config.json"));
        let candidates = user_path
            .into_iter()
            .chain(std::iter::once(PathBuf::from(BUNDLED_CONFIG_PATH)));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => warn!("{}", e),
            }
        }

        info!("no overlay config found, using defaults");
        Self::default()
    }

    /// Opacity change per frame while fading
    ///
    /// A timer of 0 is treated as 1 frame.
    pub fn fade_step(&self) -> f32 {
        255.0 / self.fade_timer.max(1) as f32
    }
}

fn number_param(params: &HashMap<String, String>, key: &str, default: u32) -> u32 {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = raw, "parameter is not a number, using {}", default);
            default
        }),
    }
}

fn bool_param(params: &HashMap<String, String>, key: &str) -> bool {
    params
        .get(key)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
