use tracing::{debug, info, warn};

use super::errors::WindowError;
use super::matching::TargetMatcher;
use super::types::{Bounds, WindowDescriptor};
use crate::platform::{RawWindow, WindowServer};

/// Owner name reported for windows whose owner the window server did not name
const UNKNOWN_OWNER: &str = "Unknown";

/// List the on-screen windows owned by the target application
///
/// Every call re-queries the window server; nothing is cached. The result is
/// in window-server order and may be empty when the target application is
/// not running.
///
/// # Errors
///
/// Returns `WindowError::EnumerationFailed` when the window server refuses to
/// return a window list, so callers can tell "no target windows" apart from
/// "cannot query windows at all".
pub fn list_target_windows(
    server: &dyn WindowServer,
    matcher: &TargetMatcher,
) -> Result<Vec<WindowDescriptor>, WindowError> {
    info!(
        event = "core.window.list_started",
        name_token = matcher.name_token(),
        display_name = matcher.display_name()
    );

    let windows = server.on_screen_windows().inspect_err(|e| {
        warn!(event = "core.window.list_failed", error = %e);
    })?;
    let total = windows.len();

    let mut skipped_count = 0;

    let result: Vec<WindowDescriptor> = windows
        .into_iter()
        .filter_map(|raw| {
            let Some(descriptor) = descriptor_from_raw(raw) else {
                skipped_count += 1;
                return None;
            };

            debug!(
                event = "core.window.inspected",
                owner = descriptor.owner_name(),
                title = descriptor.title(),
                window_id = descriptor.id()
            );

            if !matcher.matches(descriptor.owner_name()) {
                return None;
            }

            debug!(
                event = "core.window.target_matched",
                window_id = descriptor.id(),
                owner_pid = descriptor.owner_pid(),
                title = descriptor.title()
            );
            Some(descriptor)
        })
        .collect();

    if skipped_count > 0 {
        warn!(
            event = "core.window.list_incomplete",
            skipped_count = skipped_count,
            total_count = total
        );
    }

    info!(
        event = "core.window.list_completed",
        total_count = total,
        count = result.len()
    );
    Ok(result)
}

/// Find the target window with the given id in a fresh enumeration
///
/// Window ids are ephemeral, so this is how capture and close re-resolve an
/// id handed out by an earlier listing.
pub fn find_target_window_by_id(
    server: &dyn WindowServer,
    matcher: &TargetMatcher,
    id: u32,
) -> Result<WindowDescriptor, WindowError> {
    info!(event = "core.window.find_by_id_started", id = id);

    let window = list_target_windows(server, matcher)?
        .into_iter()
        .find(|w| w.id() == id)
        .ok_or(WindowError::WindowNotFoundById { id })?;

    info!(
        event = "core.window.find_by_id_completed",
        id = id,
        title = window.title()
    );
    Ok(window)
}

/// Normalize one window-list entry
///
/// Only the window number is required. Missing owner falls back to
/// "Unknown", missing title to empty, missing pid and layer to 0 and
/// missing bounds to an empty rectangle at the origin.
fn descriptor_from_raw(raw: RawWindow) -> Option<WindowDescriptor> {
    let Some(id) = raw.id else {
        debug!(
            event = "core.window.property_access_failed",
            property = "id",
            owner = ?raw.owner_name
        );
        return None;
    };

    let bounds = raw.bounds.unwrap_or_else(|| {
        debug!(
            event = "core.window.property_access_failed",
            property = "bounds",
            window_id = id
        );
        Bounds::default()
    });

    Some(WindowDescriptor::new(
        id,
        raw.title.unwrap_or_default(),
        raw.owner_pid.unwrap_or(0),
        raw.owner_name.unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
        bounds,
        raw.layer.unwrap_or(0),
    ))
}
