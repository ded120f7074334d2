use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::window::{Bounds, WindowDescriptor};

/// One request line from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRequest {
    pub method: String,
    #[serde(default)]
    pub args: Value,
}

impl HostRequest {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Methods understood on the host boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMethod {
    ListWindows,
    CloseWindow,
    CaptureWindow,
}

impl HostMethod {
    /// Resolve a method name as sent by the host.
    ///
    /// `getWindowsAppWindows` is the name older hosts use for `listWindows`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "listWindows" | "getWindowsAppWindows" => Some(HostMethod::ListWindows),
            "closeWindow" => Some(HostMethod::CloseWindow),
            "captureWindow" => Some(HostMethod::CaptureWindow),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HostMethod::ListWindows => "listWindows",
            HostMethod::CloseWindow => "closeWindow",
            HostMethod::CaptureWindow => "captureWindow",
        }
    }
}

/// Arguments of `closeWindow` and `captureWindow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct WindowIdArgs {
    #[serde(rename = "windowId")]
    pub window_id: u32,
}

/// Window descriptor as the host sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    #[serde(rename = "windowId")]
    pub window_id: u32,
    #[serde(rename = "windowName")]
    pub window_name: String,
    #[serde(rename = "ownerPID")]
    pub owner_pid: i32,
    pub bounds: Bounds,
}

impl From<&WindowDescriptor> for WindowRecord {
    fn from(window: &WindowDescriptor) -> Self {
        Self {
            window_id: window.id(),
            window_name: window.title().to_string(),
            owner_pid: window.owner_pid(),
            bounds: window.bounds(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostErrorCode {
    InvalidArguments,
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostError {
    pub code: HostErrorCode,
    pub message: String,
}

/// One response line to the host.
///
/// `result` is present whenever `ok` is true, and may itself be `null`.
/// `error` is present whenever `ok` is false.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<HostError>,
}

impl HostResponse {
    pub fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::failure(HostErrorCode::InvalidArguments, message.into())
    }

    pub fn not_implemented(method: &str) -> Self {
        Self::failure(
            HostErrorCode::NotImplemented,
            format!("Unknown method: {}", method),
        )
    }

    fn failure(code: HostErrorCode, message: String) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(HostError { code, message }),
        }
    }
}
