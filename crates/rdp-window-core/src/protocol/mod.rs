//! Host boundary.
//!
//! The host application talks to rdp-window with one JSON object per line.
//! A request names a method and carries its arguments:
//!
//! ```json
//! {"method": "captureWindow", "args": {"windowId": 4242}}
//! ```
//!
//! Every request gets exactly one response line. Operational failures
//! (enumeration denied, window gone, automation refused) are not protocol
//! errors: they come back as `ok: true` with an empty list, `null` or
//! `false`. Only malformed requests and unknown methods produce `ok: false`.

pub mod handler;
pub mod types;

pub use handler::{handle_line, handle_request, serve_lines};
pub use types::{HostError, HostErrorCode, HostMethod, HostRequest, HostResponse, WindowRecord};
