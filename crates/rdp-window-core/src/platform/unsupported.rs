use tracing::debug;

use super::traits::WindowServer;
use super::types::{Raster, RawWindow};
use crate::region::ScreenSize;
use crate::window::{Bounds, WindowError};

/// Window server for platforms without a CoreGraphics window list.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWindowServer;

impl WindowServer for UnsupportedWindowServer {
    fn on_screen_windows(&self) -> Result<Vec<RawWindow>, WindowError> {
        Err(WindowError::EnumerationFailed {
            message: "Window enumeration is only supported on macOS".to_string(),
        })
    }

    fn main_display_size(&self) -> Option<ScreenSize> {
        None
    }

    fn window_raster(&self, window_id: u32, _rect: Option<Bounds>) -> Option<Raster> {
        debug!(
            event = "core.platform.raster_unsupported",
            window_id = window_id
        );
        None
    }
}
