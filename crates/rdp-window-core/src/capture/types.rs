use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::CaptureError;

/// PNG image of a captured window. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    window_id: u32,
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl CapturedImage {
    pub(crate) fn new(window_id: u32, width: u32, height: u32, png: Vec<u8>) -> Self {
        debug_assert!(!png.is_empty(), "Captured image must not be empty");
        Self {
            window_id,
            width,
            height,
            png,
        }
    }

    pub fn window_id(&self) -> u32 {
        self.window_id
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.png
    }

    /// PNG bytes as standard base64
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), CaptureError> {
        std::fs::write(path, &self.png).map_err(|source| CaptureError::SaveFailed {
            path: path.display().to_string(),
            source,
        })
    }
}
