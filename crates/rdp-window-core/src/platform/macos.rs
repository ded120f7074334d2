use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::number::CFNumber;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::display::CGDisplay;
use core_graphics::geometry::{CGPoint, CGRect, CGSize};
use core_graphics::window::{
    copy_window_info, create_image, kCGNullWindowID, kCGWindowBounds,
    kCGWindowImageBestResolution, kCGWindowImageBoundsIgnoreFraming, kCGWindowLayer,
    kCGWindowListOptionIncludingWindow, kCGWindowListOptionOnScreenOnly, kCGWindowName,
    kCGWindowNumber, kCGWindowOwnerName, kCGWindowOwnerPID,
};
use tracing::{debug, warn};

use super::traits::WindowServer;
use super::types::{Raster, RawWindow};
use crate::region::ScreenSize;
use crate::window::{Bounds, WindowError};

type WindowDictionary = CFDictionary<CFString, CFType>;

/// CoreGraphics-backed window server.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreGraphicsWindowServer;

impl WindowServer for CoreGraphicsWindowServer {
    fn on_screen_windows(&self) -> Result<Vec<RawWindow>, WindowError> {
        let list = copy_window_info(kCGWindowListOptionOnScreenOnly, kCGNullWindowID).ok_or_else(
            || WindowError::EnumerationFailed {
                message: "CGWindowListCopyWindowInfo returned no window list \
                          (screen recording permission may be missing)"
                    .to_string(),
            },
        )?;

        let windows = list
            .iter()
            .map(|entry| {
                // SAFETY: every element of the window info array is a CFDictionary.
                // wrap_under_get_rule retains it for the lifetime of `dict`.
                let dict: WindowDictionary =
                    unsafe { CFDictionary::wrap_under_get_rule(*entry as CFDictionaryRef) };
                raw_window_from_dictionary(&dict)
            })
            .collect();

        Ok(windows)
    }

    fn main_display_size(&self) -> Option<ScreenSize> {
        let bounds = CGDisplay::main().bounds();
        if bounds.size.width <= 0.0 || bounds.size.height <= 0.0 {
            warn!(event = "core.platform.display_bounds_empty");
            return None;
        }
        Some(ScreenSize::new(bounds.size.width, bounds.size.height))
    }

    fn window_raster(&self, window_id: u32, rect: Option<Bounds>) -> Option<Raster> {
        let screen_rect = match rect {
            Some(b) => CGRect::new(&CGPoint::new(b.x, b.y), &CGSize::new(b.width, b.height)),
            None => null_rect(),
        };

        let image = create_image(
            screen_rect,
            kCGWindowListOptionIncludingWindow,
            window_id,
            kCGWindowImageBoundsIgnoreFraming | kCGWindowImageBestResolution,
        )?;

        let raster = Raster::new(
            image.width(),
            image.height(),
            image.bytes_per_row(),
            image.bits_per_pixel(),
            image.data().bytes().to_vec(),
        );

        debug!(
            event = "core.platform.raster_copied",
            window_id = window_id,
            width = raster.width(),
            height = raster.height(),
            bytes_per_row = raster.bytes_per_row()
        );

        // `image` drops here, releasing the CGImage before the raster is encoded.
        Some(raster)
    }
}

/// CGRectNull: asks the window server for the window's own bounds.
fn null_rect() -> CGRect {
    CGRect::new(
        &CGPoint::new(f64::INFINITY, f64::INFINITY),
        &CGSize::new(0.0, 0.0),
    )
}

fn raw_window_from_dictionary(dict: &WindowDictionary) -> RawWindow {
    // SAFETY: the kCGWindow* keys are immutable CFString constants exported by
    // CoreGraphics; they are valid for the lifetime of the process.
    let (number, owner, name, pid, bounds, layer) = unsafe {
        (
            key(kCGWindowNumber),
            key(kCGWindowOwnerName),
            key(kCGWindowName),
            key(kCGWindowOwnerPID),
            key(kCGWindowBounds),
            key(kCGWindowLayer),
        )
    };

    RawWindow {
        id: number_value(dict, &number)
            .and_then(|n| n.to_i64())
            .and_then(|n| u32::try_from(n).ok()),
        owner_name: string_value(dict, &owner),
        title: string_value(dict, &name),
        owner_pid: number_value(dict, &pid)
            .and_then(|n| n.to_i64())
            .and_then(|n| i32::try_from(n).ok()),
        bounds: bounds_value(dict, &bounds),
        layer: number_value(dict, &layer)
            .and_then(|n| n.to_i64())
            .and_then(|n| i32::try_from(n).ok()),
    }
}

unsafe fn key(raw: CFStringRef) -> CFString {
    unsafe { CFString::wrap_under_get_rule(raw) }
}

fn string_value(dict: &WindowDictionary, key: &CFString) -> Option<String> {
    dict.find(key)
        .and_then(|value| value.downcast::<CFString>())
        .map(|s| s.to_string())
}

fn number_value(dict: &WindowDictionary, key: &CFString) -> Option<CFNumber> {
    dict.find(key).and_then(|value| value.downcast::<CFNumber>())
}

/// Read the `kCGWindowBounds` dictionary ({X, Y, Width, Height}).
fn bounds_value(dict: &WindowDictionary, key: &CFString) -> Option<Bounds> {
    let value = dict.find(key)?;
    if !value.instance_of::<CFDictionary>() {
        return None;
    }
    // SAFETY: type checked above; wrap_under_get_rule retains the dictionary.
    let rect: WindowDictionary =
        unsafe { CFDictionary::wrap_under_get_rule(value.as_CFTypeRef() as CFDictionaryRef) };

    let field = |name: &'static str| {
        number_value(&rect, &CFString::from_static_string(name)).and_then(|n| n.to_f64())
    };

    Some(Bounds::new(
        field("X")?,
        field("Y")?,
        field("Width")?,
        field("Height")?,
    ))
}
