use crate::region::ScreenSize;
use crate::window::{Bounds, WindowError};

use super::types::{Raster, RawWindow};

/// Read-only view of the OS window server.
///
/// Implementations hold no state between calls: every method queries the
/// live window server. Window ids handed out by [`on_screen_windows`] are
/// only valid until the window closes.
///
/// [`on_screen_windows`]: WindowServer::on_screen_windows
pub trait WindowServer: Send + Sync {
    /// Snapshot of every on-screen window, in window-server order.
    ///
    /// Entries carry whatever metadata the OS reported; any field may be
    /// missing. Fails only when the OS refuses to return a window list.
    fn on_screen_windows(&self) -> Result<Vec<RawWindow>, WindowError>;

    /// Size of the main display in screen coordinates, if known.
    fn main_display_size(&self) -> Option<ScreenSize>;

    /// Raster of a single window's own content.
    ///
    /// `rect` restricts the capture to a screen rectangle. `None` captures
    /// the window's current bounds. Returns `None` when the window is gone
    /// or the OS produced no image.
    fn window_raster(&self, window_id: u32, rect: Option<Bounds>) -> Option<Raster>;

    /// Whether `window_id` is currently an on-screen window.
    ///
    /// Asked before capturing: given an explicit rectangle, the window server
    /// produces a transparent image for ids that are gone instead of failing.
    fn is_on_screen(&self, window_id: u32) -> bool {
        self.on_screen_windows()
            .map(|windows| windows.iter().any(|w| w.id == Some(window_id)))
            .unwrap_or(false)
    }
}
