//! Access to the OS window server.
//!
//! Everything above this module talks to the window server through the
//! [`WindowServer`] trait so enumeration, region and capture logic can be
//! exercised against a fake in tests. The macOS implementation is backed by
//! CoreGraphics; other platforms get an implementation that reports every
//! query as unavailable.

#[cfg(target_os = "macos")]
pub mod macos;
pub mod traits;
pub mod types;
#[cfg(not(target_os = "macos"))]
pub mod unsupported;

#[cfg(test)]
pub(crate) mod fake;

pub use traits::WindowServer;
pub use types::{Raster, RawWindow};

#[cfg(target_os = "macos")]
pub type SystemWindowServer = macos::CoreGraphicsWindowServer;

#[cfg(not(target_os = "macos"))]
pub type SystemWindowServer = unsupported::UnsupportedWindowServer;

/// The window server of the running system.
pub fn system_window_server() -> SystemWindowServer {
    SystemWindowServer::default()
}
