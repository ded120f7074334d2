pub mod errors;
pub mod handler;
pub mod matching;
pub mod types;

pub use errors::WindowError;
pub use handler::{find_target_window_by_id, list_target_windows};
pub use matching::TargetMatcher;
pub use types::{Bounds, WindowDescriptor};
