use std::time::Duration;

use tracing::{info, warn};

use super::errors::AutomationError;
use super::runner::ScriptRunner;
use super::script::close_frontmost_window_script;
use crate::errors::BridgeError;
use crate::platform::WindowServer;
use crate::window::{TargetMatcher, find_target_window_by_id};

/// Ask the target application to close a window
///
/// Re-resolves `window_id` to its owning process, raises that process and
/// clicks the close button of its frontmost window. See the module docs for
/// why this may close a different window of the same process.
///
/// # Errors
///
/// Returns `AutomationError::Window` when the id is not a current target
/// window, and the runner's error when the script cannot be delivered.
pub fn close_window(
    server: &dyn WindowServer,
    runner: &dyn ScriptRunner,
    matcher: &TargetMatcher,
    window_id: u32,
    timeout: Duration,
) -> Result<(), AutomationError> {
    info!(event = "core.close.window_started", window_id = window_id);

    let window = find_target_window_by_id(server, matcher, window_id)?;
    let script = close_frontmost_window_script(window.owner_pid(), window.owner_name());

    runner.run(&script, timeout)?;

    info!(
        event = "core.close.window_completed",
        window_id = window_id,
        owner_pid = window.owner_pid(),
        title = window.title()
    );
    Ok(())
}

/// Best-effort close that never fails
///
/// Returns `true` when the close click was delivered and `false` otherwise.
/// `true` does not guarantee that the requested window is gone.
pub fn request_close_window(
    server: &dyn WindowServer,
    runner: &dyn ScriptRunner,
    matcher: &TargetMatcher,
    window_id: u32,
    timeout: Duration,
) -> bool {
    match close_window(server, runner, matcher, window_id, timeout) {
        Ok(()) => true,
        Err(e) => {
            warn!(
                event = "core.close.window_failed",
                window_id = window_id,
                error_code = e.error_code(),
                error = %e
            );
            false
        }
    }
}
