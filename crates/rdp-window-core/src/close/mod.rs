//! Best-effort close of a target window.
//!
//! The remote-desktop client offers no API to close one of its windows, so
//! closing is done by UI automation: bring the owning process to the front
//! and click the close button of its frontmost window.
//!
//! Known limitation: the click lands on the *frontmost window of the owning
//! process*, not necessarily on the window id that was asked for. With
//! several client windows open, the wrong one may close. A `true` result only
//! means the click was delivered.

pub mod errors;
pub mod handler;
pub mod runner;
pub mod script;

pub use errors::AutomationError;
pub use handler::{close_window, request_close_window};
pub use runner::{OsascriptRunner, ScriptRunner};
