//! # Configuration System
//!
//! Hierarchical TOML configuration for rdp-window.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.rdp-window/config.toml`
//! 3. **Project config** - `./.rdp-window/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.rdp-window/config.toml
//! [target]
//! name_token = "Windows"
//! display_name = "Windows App"
//!
//! [region]
//! modern_decoration_height = 28
//! legacy_decoration_height = 22
//!
//! [close]
//! timeout_ms = 3000
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{BridgeConfig, CloseConfig, RegionConfig, TargetConfig};
pub use validation::validate_config;

use crate::errors::ConfigError;

impl BridgeConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
