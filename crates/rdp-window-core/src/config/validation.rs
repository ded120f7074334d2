use super::defaults::MAX_DECORATION_HEIGHT;
use super::types::BridgeConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` if the target has no way to
/// match, a decoration height is outside 0..=200, the fullscreen tolerance is
/// negative or not finite, or the close timeout is zero.
pub fn validate_config(config: &BridgeConfig) -> Result<(), ConfigError> {
    if config.target.name_token().is_empty() && config.target.display_name().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "target.name_token and target.display_name cannot both be empty".to_string(),
        });
    }

    let heights = [
        (
            "region.modern_decoration_height",
            config.region.modern_decoration_height(),
        ),
        (
            "region.legacy_decoration_height",
            config.region.legacy_decoration_height(),
        ),
    ];
    for (name, height) in heights {
        if !(0.0..=MAX_DECORATION_HEIGHT).contains(&height) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "{} must be between 0 and {}, got {}",
                    name, MAX_DECORATION_HEIGHT, height
                ),
            });
        }
    }

    let tolerance = config.region.fullscreen_tolerance();
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "region.fullscreen_tolerance must be a finite, non-negative number, got {}",
                tolerance
            ),
        });
    }

    if config.close.timeout_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "close.timeout_ms must be greater than 0".to_string(),
        });
    }

    Ok(())
}
