//! Configuration loading and merging logic.
//!
//! Loads the user and project config files and merges them over the
//! built-in defaults. Missing files are not errors; unreadable or malformed
//! files are.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::{BridgeConfig, CloseConfig, RegionConfig, TargetConfig};
use super::validation::validate_config;
use crate::errors::ConfigError;

/// Directory holding rdp-window configuration, relative to home or project.
pub const CONFIG_DIR_NAME: &str = ".rdp-window";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.rdp-window/config.toml`)
/// 3. Project config (`./.rdp-window/config.toml`)
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged configuration fails validation.
pub fn load_hierarchy() -> Result<BridgeConfig, ConfigError> {
    let mut config = BridgeConfig::default();

    if let Some(path) = user_config_path() {
        if let Some(user_config) = load_optional_config_file(&path)? {
            config = merge_configs(config, user_config);
        }
    }

    let project_path = std::env::current_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    if let Some(project_config) = load_optional_config_file(&project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        name_token = config.target.name_token(),
        display_name = config.target.display_name()
    );
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load a config file, treating a missing file as `None`.
pub fn load_optional_config_file(path: &Path) -> Result<Option<BridgeConfig>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(event = "core.config.file_loaded", path = %path.display());
            parse_config(&content, path).map(Some)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(event = "core.config.file_missing", path = %path.display());
            Ok(None)
        }
        Err(e) => Err(ConfigError::IoError { source: e }),
    }
}

fn parse_config(content: &str, path: &Path) -> Result<BridgeConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// A field set in the override replaces the base value; unset fields keep
/// the base value.
pub fn merge_configs(base: BridgeConfig, override_config: BridgeConfig) -> BridgeConfig {
    BridgeConfig {
        target: TargetConfig {
            name_token: override_config
                .target
                .name_token
                .or(base.target.name_token),
            display_name: override_config
                .target
                .display_name
                .or(base.target.display_name),
        },
        region: RegionConfig {
            modern_decoration_height: override_config
                .region
                .modern_decoration_height
                .or(base.region.modern_decoration_height),
            legacy_decoration_height: override_config
                .region
                .legacy_decoration_height
                .or(base.region.legacy_decoration_height),
            fullscreen_tolerance: override_config
                .region
                .fullscreen_tolerance
                .or(base.region.fullscreen_tolerance),
        },
        close: CloseConfig {
            timeout_ms: override_config.close.timeout_ms.or(base.close.timeout_ms),
        },
    }
}
