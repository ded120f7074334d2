//! In-memory window server used by unit tests.

use std::collections::HashMap;

use super::traits::WindowServer;
use super::types::{Raster, RawWindow};
use crate::region::ScreenSize;
use crate::window::{Bounds, WindowError};

#[derive(Debug, Default)]
pub(crate) struct FakeWindowServer {
    pub windows: Vec<RawWindow>,
    pub display: Option<ScreenSize>,
    pub rasters: HashMap<u32, Raster>,
    pub deny_enumeration: bool,
}

impl FakeWindowServer {
    pub fn with_windows(windows: Vec<RawWindow>) -> Self {
        Self {
            windows,
            display: Some(ScreenSize::new(1920.0, 1080.0)),
            ..Self::default()
        }
    }

    pub fn with_raster(mut self, window_id: u32, raster: Raster) -> Self {
        self.rasters.insert(window_id, raster);
        self
    }
}

impl WindowServer for FakeWindowServer {
    fn on_screen_windows(&self) -> Result<Vec<RawWindow>, WindowError> {
        if self.deny_enumeration {
            return Err(WindowError::EnumerationFailed {
                message: "permission denied".to_string(),
            });
        }
        Ok(self.windows.clone())
    }

    fn main_display_size(&self) -> Option<ScreenSize> {
        self.display
    }

    /// Unknown ids captured with an explicit rectangle get a transparent
    /// raster of that size, as CoreGraphics does.
    fn window_raster(&self, window_id: u32, rect: Option<Bounds>) -> Option<Raster> {
        if let Some(raster) = self.rasters.get(&window_id) {
            return Some(raster.clone());
        }
        rect.filter(|r| !r.is_empty()).map(|r| {
            let (width, height) = (r.width as usize, r.height as usize);
            Raster::packed_bgra(width, height, vec![0; width * height * 4])
        })
    }
}

/// Build a fully populated window list entry.
pub(crate) fn raw_window(
    id: u32,
    owner_name: &str,
    title: &str,
    owner_pid: i32,
    bounds: Bounds,
    layer: i32,
) -> RawWindow {
    RawWindow {
        id: Some(id),
        owner_name: Some(owner_name.to_string()),
        title: Some(title.to_string()),
        owner_pid: Some(owner_pid),
        bounds: Some(bounds),
        layer: Some(layer),
    }
}
