use crate::errors::BridgeError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum AutomationError {
    #[error(
        "Automation permission required: allow control of System Events in System Settings > Privacy & Security > Automation and Accessibility"
    )]
    PermissionDenied { stderr: String },

    #[error("Failed to execute osascript: {message}")]
    ScriptSpawnFailed { message: String },

    #[error("Close script failed: {stderr}")]
    ScriptFailed { stderr: String },

    #[error("Close script did not finish within {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },

    #[error("UI automation is only supported on macOS")]
    UnsupportedPlatform,

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl BridgeError for AutomationError {
    fn error_code(&self) -> &'static str {
        match self {
            AutomationError::PermissionDenied { .. } => "AUTOMATION_PERMISSION_DENIED",
            AutomationError::ScriptSpawnFailed { .. } => "AUTOMATION_SPAWN_FAILED",
            AutomationError::ScriptFailed { .. } => "AUTOMATION_SCRIPT_FAILED",
            AutomationError::TimedOut { .. } => "AUTOMATION_TIMED_OUT",
            AutomationError::UnsupportedPlatform => "AUTOMATION_UNSUPPORTED_PLATFORM",
            AutomationError::Window(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            AutomationError::PermissionDenied { .. } => true,
            AutomationError::Window(e) => e.is_user_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_error() {
        let error = AutomationError::PermissionDenied {
            stderr: "Not authorized to send Apple events to System Events. (-1743)".to_string(),
        };
        assert!(error.to_string().contains("Automation permission required"));
        assert_eq!(error.error_code(), "AUTOMATION_PERMISSION_DENIED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_timed_out_error() {
        let error = AutomationError::TimedOut { timeout_ms: 3000 };
        assert_eq!(
            error.to_string(),
            "Close script did not finish within 3000ms"
        );
        assert_eq!(error.error_code(), "AUTOMATION_TIMED_OUT");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_window_error_keeps_its_code() {
        let error = AutomationError::from(WindowError::WindowNotFoundById { id: 3 });
        assert_eq!(error.to_string(), "Target window not found with id: 3");
        assert_eq!(error.error_code(), "WINDOW_NOT_FOUND_BY_ID");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AutomationError>();
    }
}
