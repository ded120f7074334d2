//! Built-in configuration defaults.

pub use crate::window::matching::{DEFAULT_DISPLAY_NAME, DEFAULT_NAME_TOKEN};

/// Title bar height from macOS 11 (Big Sur) on.
pub const MODERN_DECORATION_HEIGHT: f64 = 28.0;

/// Title bar height before macOS 11.
pub const LEGACY_DECORATION_HEIGHT: f64 = 22.0;

/// Absorbs rounding when a fullscreen window is a few points short of the screen.
pub const FULLSCREEN_TOLERANCE: f64 = 10.0;

/// Close automation timeout. Low single-digit seconds: the script either
/// clicks quickly or is stuck on a permission prompt.
pub const CLOSE_TIMEOUT_MS: u64 = 3000;

/// Largest decoration height accepted from configuration.
pub const MAX_DECORATION_HEIGHT: f64 = 200.0;
