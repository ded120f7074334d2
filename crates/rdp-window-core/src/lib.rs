//! rdp-window-core: locate, capture and close remote-desktop client windows
//!
//! This library finds the on-screen windows owned by the remote-desktop
//! client ("Windows App" on macOS), computes their content area and captures
//! them as PNG images. It also asks the client to close a window through UI
//! automation. It is used by the `rdp-window` CLI and its JSON-lines host
//! boundary.
//!
//! # Main Entry Points
//!
//! - [`window`] - Enumerate target windows
//! - [`region`] - Compute the content rectangle of a window
//! - [`capture`] - Capture a window as a PNG image
//! - [`close`] - Best-effort close of a target window
//! - [`protocol`] - Request/response contract for the host application

pub mod capture;
pub mod close;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod platform;
pub mod protocol;
pub mod region;
pub mod window;

pub use capture::{CaptureError, CapturedImage, capture_target_window, capture_window_image};
pub use close::{AutomationError, OsascriptRunner, ScriptRunner, close_window, request_close_window};
pub use config::BridgeConfig;
pub use platform::{Raster, WindowServer, system_window_server};
pub use region::{CaptureRegion, OsTier, RegionContext, ScreenSize, resolve_content_region};
pub use window::{
    Bounds, TargetMatcher, WindowDescriptor, WindowError, find_target_window_by_id,
    list_target_windows,
};

pub use logging::init_logging;
