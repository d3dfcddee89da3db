// SentiScope - platform/config.rs
//
// Platform-specific configuration: data directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SentiScope data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/sentiscope/ or %APPDATA%\SentiScope\)
    pub config_dir: PathBuf,

    /// Data directory for logs, caches, etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
                data_dir: proj_dirs.data_dir().to_path_buf(),
            }
        } else {
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[charts]` section.
    pub charts: ChartsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Reviews per table page.
    pub page_size: Option<usize>,
}

/// `[charts]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ChartsSection {
    /// Cap on length-histogram bins.
    pub max_bins: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level ("error", "warn", "info", "debug", "trace").
    pub level: Option<String>,
}

/// Validated runtime configuration.
///
/// `warnings` collects problems found while loading; the caller emits them
/// once the logging subsystem is up (config is read before logging so the
/// `[logging]` level can participate in filter selection).
#[derive(Debug, Clone)]
pub struct Config {
    /// Reviews per table page.
    pub page_size: usize,

    /// Cap on length-histogram bins.
    pub max_bins: usize,

    /// Log level from config.toml, if set.
    pub log_level: Option<String>,

    /// Non-fatal problems found while loading.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: constants::DEFAULT_PAGE_SIZE,
            max_bins: constants::DEFAULT_MAX_BINS,
            log_level: None,
            warnings: Vec::new(),
        }
    }
}

/// Load and validate config.toml from the given directory.
///
/// A missing file yields defaults. A malformed file yields defaults plus a
/// warning -- configuration problems never prevent startup. Out-of-range
/// values are clamped with a warning.
pub fn load_config(config_dir: &Path) -> Config {
    let path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut config = Config::default();

    if !path.exists() {
        return config;
    }

    let raw = match read_config(&path) {
        Ok(raw) => raw,
        Err(e) => {
            config.warnings.push(e.to_string());
            return config;
        }
    };

    if let Some(page_size) = raw.ui.page_size {
        config.page_size = clamped(
            "ui.page_size",
            page_size,
            constants::MIN_PAGE_SIZE,
            constants::MAX_PAGE_SIZE,
            &mut config.warnings,
        );
    }
    if let Some(max_bins) = raw.charts.max_bins {
        config.max_bins = clamped(
            "charts.max_bins",
            max_bins,
            constants::MIN_MAX_BINS,
            constants::ABSOLUTE_MAX_BINS,
            &mut config.warnings,
        );
    }
    config.log_level = raw.logging.level;

    config
}

/// Read and parse config.toml.
fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Clamp a config value to its allowed range, recording a warning when the
/// configured value was out of range.
fn clamped(
    field: &str,
    value: usize,
    min: usize,
    max: usize,
    warnings: &mut Vec<String>,
) -> usize {
    if value < min || value > max {
        let clamped_value = value.clamp(min, max);
        warnings.push(format!(
            "Config '{field}' = {value} is out of range [{min}, {max}]; using {clamped_value}"
        ));
        clamped_value
    } else {
        value
    }
}
