//! Configuration type definitions.
//!
//! Every leaf value is optional so a project config can override a single
//! field of the user config. Accessors apply the built-in defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BridgeConfig {
    /// Which application's windows are targets
    #[serde(default)]
    pub target: TargetConfig,

    /// Decoration-height heuristic parameters
    #[serde(default)]
    pub region: RegionConfig,

    /// Close automation settings
    #[serde(default)]
    pub close: CloseConfig,
}

/// Target application identification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TargetConfig {
    /// Substring that target owner names contain (case-sensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_token: Option<String>,

    /// Exact owner name of the target application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl TargetConfig {
    pub fn name_token(&self) -> &str {
        self.name_token
            .as_deref()
            .unwrap_or(defaults::DEFAULT_NAME_TOKEN)
    }

    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or(defaults::DEFAULT_DISPLAY_NAME)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegionConfig {
    /// Title bar height on macOS 11 and later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modern_decoration_height: Option<f64>,

    /// Title bar height before macOS 11.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_decoration_height: Option<f64>,

    /// Slack allowed when comparing window size with the screen size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen_tolerance: Option<f64>,
}

impl RegionConfig {
    pub fn modern_decoration_height(&self) -> f64 {
        self.modern_decoration_height
            .unwrap_or(defaults::MODERN_DECORATION_HEIGHT)
    }

    pub fn legacy_decoration_height(&self) -> f64 {
        self.legacy_decoration_height
            .unwrap_or(defaults::LEGACY_DECORATION_HEIGHT)
    }

    pub fn fullscreen_tolerance(&self) -> f64 {
        self.fullscreen_tolerance
            .unwrap_or(defaults::FULLSCREEN_TOLERANCE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CloseConfig {
    /// Upper bound on the close automation script, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl CloseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(defaults::CLOSE_TIMEOUT_MS))
    }
}
