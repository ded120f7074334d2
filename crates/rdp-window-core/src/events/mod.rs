use tracing::{error, info, warn};

use crate::errors::BridgeError;

pub fn log_command_started(command: &str) {
    info!(
        event = "core.bridge.command_started",
        command = command,
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_command_finished(command: &str, success: bool) {
    info!(
        event = "core.bridge.command_finished",
        command = command,
        success = success
    );
}

/// User errors (unknown window id, ...) are logged at warn level.
pub fn log_operation_failed(error: &dyn BridgeError) {
    if error.is_user_error() {
        warn!(
            event = "core.bridge.operation_failed",
            error = %error,
            error_code = error.error_code(),
            user_error = true
        );
    } else {
        error!(
            event = "core.bridge.operation_failed",
            error = %error,
            error_code = error.error_code(),
            user_error = false
        );
    }
}
