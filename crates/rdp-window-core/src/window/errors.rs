use crate::errors::BridgeError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Target window not found with id: {id}")]
    WindowNotFoundById { id: u32 },
}

impl BridgeError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::WindowNotFoundById { .. } => "WINDOW_NOT_FOUND_BY_ID",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::WindowNotFoundById { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_enumeration_failed_error() {
        let error = WindowError::EnumerationFailed {
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to enumerate windows: permission denied"
        );
        assert_eq!(error.error_code(), "WINDOW_ENUMERATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_window_not_found_by_id_error() {
        let error = WindowError::WindowNotFoundById { id: 4242 };
        assert_eq!(error.to_string(), "Target window not found with id: 4242");
        assert_eq!(error.error_code(), "WINDOW_NOT_FOUND_BY_ID");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WindowError>();
    }

    #[test]
    fn test_error_source() {
        let error = WindowError::WindowNotFoundById { id: 1 };
        assert!(error.source().is_none());
    }
}
