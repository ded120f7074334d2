use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rules::RuleKind;
use crate::config::RegionConfig;
use crate::config::defaults::{
    FULLSCREEN_TOLERANCE, LEGACY_DECORATION_HEIGHT, MODERN_DECORATION_HEIGHT,
};
use crate::platform::WindowServer;
use crate::window::Bounds;

/// First macOS major version with the redesigned (taller) title bar
const MODERN_TITLE_BAR_MAJOR_VERSION: u32 = 11;

/// Size of the main display in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Title bar generation of the host OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsTier {
    /// macOS 11 and later
    Modern,
    /// macOS 10.x
    Legacy,
}

impl OsTier {
    /// Classify a product version string such as "14.5" or "10.15.7".
    ///
    /// Returns `None` when the major version cannot be parsed.
    pub fn from_version_str(version: &str) -> Option<Self> {
        let major: u32 = version.trim().split('.').next()?.trim().parse().ok()?;
        if major >= MODERN_TITLE_BAR_MAJOR_VERSION {
            Some(OsTier::Modern)
        } else {
            Some(OsTier::Legacy)
        }
    }

    /// Tier of the running OS. Unknown versions are treated as modern.
    pub fn detect() -> Self {
        let version = sysinfo::System::os_version();
        match version.as_deref().and_then(OsTier::from_version_str) {
            Some(tier) => {
                debug!(event = "core.region.os_tier_detected", version = ?version, tier = ?tier);
                tier
            }
            None => {
                warn!(
                    event = "core.region.os_tier_unknown",
                    version = ?version,
                    fallback = "modern"
                );
                OsTier::Modern
            }
        }
    }
}

/// Title bar heights for each OS tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecorationHeights {
    pub modern: f64,
    pub legacy: f64,
}

impl DecorationHeights {
    pub fn for_tier(&self, tier: OsTier) -> f64 {
        match tier {
            OsTier::Modern => self.modern,
            OsTier::Legacy => self.legacy,
        }
    }
}

impl Default for DecorationHeights {
    fn default() -> Self {
        Self {
            modern: MODERN_DECORATION_HEIGHT,
            legacy: LEGACY_DECORATION_HEIGHT,
        }
    }
}

/// Everything besides the window itself that the decoration rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionContext {
    /// Main display size; the fullscreen rule is skipped when unknown
    pub screen: Option<ScreenSize>,
    pub os_tier: OsTier,
    pub decoration: DecorationHeights,
    pub fullscreen_tolerance: f64,
}

impl RegionContext {
    pub fn new(screen: Option<ScreenSize>, os_tier: OsTier) -> Self {
        Self {
            screen,
            os_tier,
            decoration: DecorationHeights::default(),
            fullscreen_tolerance: FULLSCREEN_TOLERANCE,
        }
    }

    pub fn with_config(mut self, config: &RegionConfig) -> Self {
        self.decoration = DecorationHeights {
            modern: config.modern_decoration_height(),
            legacy: config.legacy_decoration_height(),
        };
        self.fullscreen_tolerance = config.fullscreen_tolerance();
        self
    }

    /// Build a context from the live display and OS version.
    pub fn detect(server: &dyn WindowServer, config: &RegionConfig) -> Self {
        let screen = server.main_display_size();
        if screen.is_none() {
            warn!(event = "core.region.display_size_unknown");
        }
        Self::new(screen, OsTier::detect()).with_config(config)
    }
}

/// Content rectangle of a window, title bar excluded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Height removed from the top of the window bounds
    pub decoration_height: f64,
    /// Rule that decided the decoration height
    pub rule: RuleKind,
}

impl CaptureRegion {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_tier_from_version_str() {
        assert_eq!(OsTier::from_version_str("15.1.1"), Some(OsTier::Modern));
        assert_eq!(OsTier::from_version_str("11.0"), Some(OsTier::Modern));
        assert_eq!(OsTier::from_version_str("10.15.7"), Some(OsTier::Legacy));
        assert_eq!(OsTier::from_version_str("10.9"), Some(OsTier::Legacy));
        assert_eq!(OsTier::from_version_str(" 14 "), Some(OsTier::Modern));
    }

    #[test]
    fn test_os_tier_from_invalid_version_str() {
        assert_eq!(OsTier::from_version_str(""), None);
        assert_eq!(OsTier::from_version_str("Sonoma"), None);
        assert_eq!(OsTier::from_version_str(".5"), None);
    }

    #[test]
    fn test_os_tier_detect_does_not_panic() {
        let _tier = OsTier::detect();
    }

    #[test]
    fn test_decoration_heights_for_tier() {
        let heights = DecorationHeights::default();
        assert_eq!(heights.for_tier(OsTier::Modern), 28.0);
        assert_eq!(heights.for_tier(OsTier::Legacy), 22.0);
    }

    #[test]
    fn test_context_with_config_overrides_heights() {
        let config = RegionConfig {
            modern_decoration_height: Some(30.0),
            legacy_decoration_height: None,
            fullscreen_tolerance: Some(4.0),
        };
        let context = RegionContext::new(None, OsTier::Modern).with_config(&config);
        assert_eq!(context.decoration.modern, 30.0);
        assert_eq!(context.decoration.legacy, 22.0);
        assert_eq!(context.fullscreen_tolerance, 4.0);
    }

    #[test]
    fn test_detect_uses_display_from_server() {
        use crate::platform::fake::FakeWindowServer;

        let server = FakeWindowServer::with_windows(Vec::new());
        let context = RegionContext::detect(&server, &RegionConfig::default());
        assert_eq!(context.screen, Some(ScreenSize::new(1920.0, 1080.0)));
    }
}
