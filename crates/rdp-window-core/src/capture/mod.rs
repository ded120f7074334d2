pub mod encode;
pub mod errors;
pub mod handler;
pub mod types;

pub use errors::CaptureError;
pub use handler::{capture_target_window, capture_window_image};
pub use types::CapturedImage;
