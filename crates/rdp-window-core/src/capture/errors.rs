use crate::errors::BridgeError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Window {window_id} could not be captured: {reason}")]
    CaptureUnavailable { window_id: u32, reason: String },

    #[error("Failed to encode window {window_id} as PNG: {reason}")]
    EncodingFailed { window_id: u32, reason: String },

    #[error("Failed to write image to '{path}': {source}")]
    SaveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl BridgeError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::CaptureUnavailable { .. } => "CAPTURE_UNAVAILABLE",
            CaptureError::EncodingFailed { .. } => "CAPTURE_ENCODING_FAILED",
            CaptureError::SaveFailed { .. } => "CAPTURE_SAVE_FAILED",
            CaptureError::Window(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            CaptureError::CaptureUnavailable { .. } | CaptureError::SaveFailed { .. } => true,
            CaptureError::Window(e) => e.is_user_error(),
            CaptureError::EncodingFailed { .. } => false,
        }
    }
}
