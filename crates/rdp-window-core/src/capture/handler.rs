use tracing::{info, warn};

use super::encode::encode_png;
use super::errors::CaptureError;
use super::types::CapturedImage;
use crate::config::RegionConfig;
use crate::platform::WindowServer;
use crate::region::{CaptureRegion, RegionContext, resolve_content_region};
use crate::window::{TargetMatcher, find_target_window_by_id};

/// Capture one window's own pixels as a PNG image
///
/// Only the window's content is captured; windows stacked above or below it
/// are excluded. When `region` is given the capture is restricted to that
/// screen rectangle, otherwise the window's current bounds are used.
///
/// A stale id produces `CaptureUnavailable`; the caller is expected to
/// re-enumerate.
///
/// # Errors
///
/// Returns `CaptureError::CaptureUnavailable` when the region is empty, the
/// window is no longer on screen, or the window server returns no raster
/// (window closed, minimized or fully occluded), and
/// `CaptureError::EncodingFailed` when the raster cannot be turned into a
/// PNG.
pub fn capture_window_image(
    server: &dyn WindowServer,
    window_id: u32,
    region: Option<&CaptureRegion>,
) -> Result<CapturedImage, CaptureError> {
    info!(
        event = "core.capture.window_started",
        window_id = window_id,
        region = ?region
    );

    if let Some(r) = region {
        if r.is_empty() {
            warn!(
                event = "core.capture.region_empty",
                window_id = window_id,
                width = r.width,
                height = r.height
            );
            return Err(CaptureError::CaptureUnavailable {
                window_id,
                reason: "capture region has no area".to_string(),
            });
        }
    }

    if !server.is_on_screen(window_id) {
        warn!(event = "core.capture.window_not_on_screen", window_id = window_id);
        return Err(CaptureError::CaptureUnavailable {
            window_id,
            reason: "window is not on screen".to_string(),
        });
    }

    let raster = server
        .window_raster(window_id, region.map(CaptureRegion::bounds))
        .filter(|raster| !raster.is_empty())
        .ok_or_else(|| {
            warn!(event = "core.capture.raster_unavailable", window_id = window_id);
            CaptureError::CaptureUnavailable {
                window_id,
                reason: "window server returned no image".to_string(),
            }
        })?;

    let png = encode_png(&raster).map_err(|reason| {
        warn!(
            event = "core.capture.encoding_failed",
            window_id = window_id,
            reason = %reason
        );
        CaptureError::EncodingFailed { window_id, reason }
    })?;

    let (width, height) = (raster.width() as u32, raster.height() as u32);
    drop(raster);

    info!(
        event = "core.capture.window_completed",
        window_id = window_id,
        width = width,
        height = height,
        bytes = png.len()
    );
    Ok(CapturedImage::new(window_id, width, height, png))
}

/// Re-resolve a target window and capture its content area
///
/// Looks the id up among the current target windows, computes its content
/// region against the live display and OS version, then captures it. With
/// `full` set the whole window, title bar included, is captured instead.
///
/// # Errors
///
/// Returns `CaptureError::Window` when the id is not a current target window,
/// otherwise the errors of [`capture_window_image`].
pub fn capture_target_window(
    server: &dyn WindowServer,
    matcher: &TargetMatcher,
    region_config: &RegionConfig,
    window_id: u32,
    full: bool,
) -> Result<CapturedImage, CaptureError> {
    let window = find_target_window_by_id(server, matcher, window_id)?;

    if full {
        return capture_window_image(server, window.id(), None);
    }

    let context = RegionContext::detect(server, region_config);
    let region = resolve_content_region(&window, &context);
    capture_window_image(server, window.id(), Some(&region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BridgeError;
    use crate::platform::Raster;
    use crate::platform::fake::{FakeWindowServer, raw_window};
    use crate::region::RuleKind;
    use crate::window::{Bounds, WindowError};

    fn server_with_window(id: u32, raster: Raster) -> FakeWindowServer {
        FakeWindowServer::with_windows(vec![raw_window(
            id,
            "Windows App",
            "Session",
            900,
            Bounds::new(100.0, 100.0, 800.0, 600.0),
            0,
        )])
        .with_raster(id, raster)
    }

    fn region(width: f64, height: f64) -> CaptureRegion {
        CaptureRegion {
            x: 100.0,
            y: 128.0,
            width,
            height,
            decoration_height: 28.0,
            rule: RuleKind::TitleBar,
        }
    }

    #[test]
    fn test_capture_returns_png() {
        let server = server_with_window(5, Raster::packed_bgra(4, 3, vec![128; 4 * 3 * 4]));
        let image = capture_window_image(&server, 5, None).unwrap();

        assert_eq!(image.window_id(), 5);
        assert_eq!((image.width(), image.height()), (4, 3));
        assert!(!image.as_bytes().is_empty());
        assert_eq!(&image.as_bytes()[1..4], b"PNG");
    }

    #[test]
    fn test_capture_with_region() {
        let server = server_with_window(5, Raster::packed_bgra(2, 2, vec![255; 16]));
        let image = capture_window_image(&server, 5, Some(&region(800.0, 572.0))).unwrap();
        assert_eq!(image.width(), 2);
    }

    #[test]
    fn test_capture_nonexistent_window_is_unavailable() {
        let server = FakeWindowServer::default();
        let error = capture_window_image(&server, 999_999, None).unwrap_err();
        assert_eq!(error.error_code(), "CAPTURE_UNAVAILABLE");
    }

    #[test]
    fn test_capture_stale_window_with_region_is_unavailable() {
        // Window 6 is gone; the server would still hand back a blank raster.
        let server = server_with_window(5, Raster::packed_bgra(1, 1, vec![0; 4]));
        assert!(server.window_raster(6, Some(region(800.0, 572.0).bounds())).is_some());

        let error = capture_window_image(&server, 6, Some(&region(800.0, 572.0))).unwrap_err();
        assert!(matches!(
            error,
            CaptureError::CaptureUnavailable { window_id: 6, .. }
        ));
    }

    #[test]
    fn test_capture_when_enumeration_denied_is_unavailable() {
        let server = FakeWindowServer {
            deny_enumeration: true,
            ..server_with_window(5, Raster::packed_bgra(1, 1, vec![0; 4]))
        };
        let error = capture_window_image(&server, 5, None).unwrap_err();
        assert_eq!(error.error_code(), "CAPTURE_UNAVAILABLE");
    }

    #[test]
    fn test_capture_empty_raster_is_unavailable() {
        let server = server_with_window(5, Raster::packed_bgra(0, 0, Vec::new()));
        let error = capture_window_image(&server, 5, None).unwrap_err();
        assert!(matches!(error, CaptureError::CaptureUnavailable { .. }));
    }

    #[test]
    fn test_capture_empty_region_is_unavailable() {
        let server = server_with_window(5, Raster::packed_bgra(1, 1, vec![0; 4]));
        let error = capture_window_image(&server, 5, Some(&region(800.0, 0.0))).unwrap_err();
        assert!(matches!(error, CaptureError::CaptureUnavailable { .. }));
    }

    #[test]
    fn test_capture_malformed_raster_fails_encoding() {
        let server = server_with_window(5, Raster::packed_bgra(10, 10, vec![0; 8]));
        let error = capture_window_image(&server, 5, None).unwrap_err();
        assert_eq!(error.error_code(), "CAPTURE_ENCODING_FAILED");
    }

    fn session_server() -> FakeWindowServer {
        FakeWindowServer::with_windows(vec![
            raw_window(
                30,
                "Windows App",
                "Session",
                900,
                Bounds::new(100.0, 100.0, 800.0, 600.0),
                0,
            ),
            raw_window(31, "Safari", "News", 12, Bounds::new(0.0, 0.0, 800.0, 600.0), 0),
        ])
        .with_raster(30, Raster::packed_bgra(2, 2, vec![40; 16]))
        .with_raster(31, Raster::packed_bgra(2, 2, vec![40; 16]))
    }

    #[test]
    fn test_capture_target_window_content_region() {
        let image = capture_target_window(
            &session_server(),
            &TargetMatcher::default(),
            &RegionConfig::default(),
            30,
            false,
        )
        .unwrap();
        assert_eq!(image.window_id(), 30);
    }

    #[test]
    fn test_capture_target_window_full() {
        let image = capture_target_window(
            &session_server(),
            &TargetMatcher::default(),
            &RegionConfig::default(),
            30,
            true,
        )
        .unwrap();
        assert_eq!(&image.as_bytes()[1..4], b"PNG");
    }

    #[test]
    fn test_capture_target_window_rejects_non_target() {
        let error = capture_target_window(
            &session_server(),
            &TargetMatcher::default(),
            &RegionConfig::default(),
            31,
            false,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            CaptureError::Window(WindowError::WindowNotFoundById { id: 31 })
        ));
    }

    #[test]
    fn test_capture_target_window_enumeration_failure() {
        let server = FakeWindowServer {
            deny_enumeration: true,
            ..FakeWindowServer::default()
        };
        let error = capture_target_window(
            &server,
            &TargetMatcher::default(),
            &RegionConfig::default(),
            30,
            false,
        )
        .unwrap_err();
        assert_eq!(error.error_code(), "WINDOW_ENUMERATION_FAILED");
    }
}
