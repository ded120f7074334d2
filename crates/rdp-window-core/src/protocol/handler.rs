use std::io::{self, BufRead, Write};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::types::{HostMethod, HostRequest, HostResponse, WindowIdArgs, WindowRecord};
use crate::capture::capture_target_window;
use crate::close::{ScriptRunner, request_close_window};
use crate::config::BridgeConfig;
use crate::errors::BridgeError;
use crate::platform::WindowServer;
use crate::window::{TargetMatcher, list_target_windows};

/// Answer one host request.
///
/// Never fails: malformed requests become `ok: false` responses and
/// operational failures become the uniform negative result of the method.
pub fn handle_request(
    server: &dyn WindowServer,
    runner: &dyn ScriptRunner,
    config: &BridgeConfig,
    request: &HostRequest,
) -> HostResponse {
    let Some(method) = HostMethod::from_name(&request.method) else {
        warn!(event = "core.protocol.method_unknown", method = %request.method);
        return HostResponse::not_implemented(&request.method);
    };

    debug!(event = "core.protocol.request_started", method = method.name());
    let matcher = TargetMatcher::from_config(&config.target);

    match method {
        HostMethod::ListWindows => list_windows(server, &matcher),
        HostMethod::CloseWindow => match window_id_arg(method, &request.args) {
            Ok(window_id) => HostResponse::success(Value::Bool(request_close_window(
                server,
                runner,
                &matcher,
                window_id,
                config.close.timeout(),
            ))),
            Err(response) => response,
        },
        HostMethod::CaptureWindow => match window_id_arg(method, &request.args) {
            Ok(window_id) => capture_window(server, &matcher, config, window_id),
            Err(response) => response,
        },
    }
}

/// Parse and answer one request line.
pub fn handle_line(
    server: &dyn WindowServer,
    runner: &dyn ScriptRunner,
    config: &BridgeConfig,
    line: &str,
) -> HostResponse {
    match serde_json::from_str::<HostRequest>(line) {
        Ok(request) => handle_request(server, runner, config, &request),
        Err(e) => {
            warn!(event = "core.protocol.request_malformed", error = %e);
            HostResponse::invalid_arguments(format!("Malformed request: {}", e))
        }
    }
}

/// Answer request lines from `reader` until end of input.
///
/// Blank lines are skipped. Each response is written as one JSON line and
/// flushed before the next request is read.
///
/// # Errors
///
/// Returns an error only when reading or writing the streams fails.
pub fn serve_lines<R: BufRead, W: Write>(
    server: &dyn WindowServer,
    runner: &dyn ScriptRunner,
    config: &BridgeConfig,
    reader: R,
    mut writer: W,
) -> io::Result<()> {
    info!(event = "core.protocol.serve_started");
    let mut handled = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(server, runner, config, &line);
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        handled += 1;
    }

    info!(event = "core.protocol.serve_completed", requests = handled);
    Ok(())
}

fn list_windows(server: &dyn WindowServer, matcher: &TargetMatcher) -> HostResponse {
    let records: Vec<WindowRecord> = match list_target_windows(server, matcher) {
        Ok(windows) => windows.iter().map(WindowRecord::from).collect(),
        Err(e) => {
            warn!(
                event = "core.protocol.list_failed",
                error_code = e.error_code(),
                error = %e
            );
            Vec::new()
        }
    };

    match serde_json::to_value(records) {
        Ok(value) => HostResponse::success(value),
        Err(e) => {
            warn!(event = "core.protocol.list_serialize_failed", error = %e);
            HostResponse::success(Value::Array(Vec::new()))
        }
    }
}

fn capture_window(
    server: &dyn WindowServer,
    matcher: &TargetMatcher,
    config: &BridgeConfig,
    window_id: u32,
) -> HostResponse {
    match capture_target_window(server, matcher, &config.region, window_id, false) {
        Ok(image) => HostResponse::success(Value::String(image.to_base64())),
        Err(e) => {
            warn!(
                event = "core.protocol.capture_failed",
                window_id = window_id,
                error_code = e.error_code(),
                error = %e
            );
            HostResponse::success(Value::Null)
        }
    }
}

fn window_id_arg(method: HostMethod, args: &Value) -> Result<u32, HostResponse> {
    WindowIdArgs::deserialize(args)
        .map(|parsed| parsed.window_id)
        .map_err(|e| {
            warn!(
                event = "core.protocol.arguments_invalid",
                method = method.name(),
                error = %e
            );
            HostResponse::invalid_arguments(format!(
                "{} requires an unsigned integer windowId: {}",
                method.name(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Mutex;
    use std::time::Duration;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde_json::json;

    use super::*;
    use crate::close::AutomationError;
    use crate::platform::Raster;
    use crate::platform::fake::{FakeWindowServer, raw_window};
    use crate::protocol::HostErrorCode;
    use crate::window::Bounds;

    #[derive(Default)]
    struct CountingRunner {
        calls: Mutex<usize>,
        fail: bool,
    }

    impl ScriptRunner for CountingRunner {
        fn run(&self, _script: &str, _timeout: Duration) -> Result<(), AutomationError> {
            *self.calls.lock().unwrap() += 1;
            if self.fail {
                Err(AutomationError::TimedOut { timeout_ms: 3000 })
            } else {
                Ok(())
            }
        }
    }

    fn server() -> FakeWindowServer {
        FakeWindowServer::with_windows(vec![
            raw_window(
                4242,
                "Windows App",
                "Session",
                600,
                Bounds::new(100.0, 100.0, 800.0, 600.0),
                0,
            ),
            raw_window(7, "Mail", "Inbox", 80, Bounds::new(0.0, 0.0, 500.0, 500.0), 0),
        ])
        .with_raster(4242, Raster::packed_bgra(2, 2, vec![90; 16]))
    }

    fn call(server: &FakeWindowServer, runner: &CountingRunner, line: &str) -> Value {
        let response = handle_line(server, runner, &BridgeConfig::default(), line);
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_list_windows_returns_target_records() {
        let value = call(
            &server(),
            &CountingRunner::default(),
            r#"{"method":"listWindows","args":{}}"#,
        );
        assert_eq!(value["ok"], json!(true));
        let windows = value["result"].as_array().unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0]["windowId"], json!(4242));
        assert_eq!(windows[0]["windowName"], json!("Session"));
        assert_eq!(windows[0]["ownerPID"], json!(600));
    }

    #[test]
    fn test_legacy_list_method_name() {
        let value = call(
            &server(),
            &CountingRunner::default(),
            r#"{"method":"getWindowsAppWindows"}"#,
        );
        assert_eq!(value["result"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_list_windows_enumeration_failure_is_empty() {
        let server = FakeWindowServer {
            deny_enumeration: true,
            ..FakeWindowServer::default()
        };
        let value = call(
            &server,
            &CountingRunner::default(),
            r#"{"method":"listWindows"}"#,
        );
        assert_eq!(value, json!({"ok": true, "result": []}));
    }

    #[test]
    fn test_capture_window_returns_base64_png() {
        let value = call(
            &server(),
            &CountingRunner::default(),
            r#"{"method":"captureWindow","args":{"windowId":4242}}"#,
        );
        let encoded = value["result"].as_str().unwrap();
        let png = STANDARD.decode(encoded).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_capture_unknown_window_is_null() {
        let value = call(
            &server(),
            &CountingRunner::default(),
            r#"{"method":"captureWindow","args":{"windowId":999999}}"#,
        );
        assert_eq!(value, json!({"ok": true, "result": null}));
    }

    #[test]
    fn test_capture_non_target_window_is_null() {
        let value = call(
            &server(),
            &CountingRunner::default(),
            r#"{"method":"captureWindow","args":{"windowId":7}}"#,
        );
        assert_eq!(value["result"], Value::Null);
    }

    #[test]
    fn test_capture_missing_window_id_is_invalid() {
        let value = call(
            &server(),
            &CountingRunner::default(),
            r#"{"method":"captureWindow","args":{}}"#,
        );
        assert_eq!(value["ok"], json!(false));
        assert_eq!(value["error"]["code"], json!("invalid_arguments"));
    }

    #[test]
    fn test_close_window_reports_delivery() {
        let runner = CountingRunner::default();
        let value = call(
            &server(),
            &runner,
            r#"{"method":"closeWindow","args":{"windowId":4242}}"#,
        );
        assert_eq!(value, json!({"ok": true, "result": true}));
        assert_eq!(*runner.calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_close_window_automation_failure_is_false() {
        let runner = CountingRunner {
            fail: true,
            ..CountingRunner::default()
        };
        let value = call(
            &server(),
            &runner,
            r#"{"method":"closeWindow","args":{"windowId":4242}}"#,
        );
        assert_eq!(value, json!({"ok": true, "result": false}));
    }

    #[test]
    fn test_close_window_string_id_is_invalid() {
        let runner = CountingRunner::default();
        let value = call(
            &server(),
            &runner,
            r#"{"method":"closeWindow","args":{"windowId":"4242"}}"#,
        );
        assert_eq!(value["error"]["code"], json!("invalid_arguments"));
        assert_eq!(*runner.calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_unknown_method_is_not_implemented() {
        let response = handle_request(
            &server(),
            &CountingRunner::default(),
            &BridgeConfig::default(),
            &HostRequest::new("minimizeWindow", json!({"windowId": 1})),
        );
        assert!(!response.ok);
        assert_eq!(
            response.error.map(|e| e.code),
            Some(HostErrorCode::NotImplemented)
        );
    }

    #[test]
    fn test_malformed_line_is_invalid_arguments() {
        let value = call(&server(), &CountingRunner::default(), "{not json");
        assert_eq!(value["ok"], json!(false));
        assert_eq!(value["error"]["code"], json!("invalid_arguments"));
    }

    #[test]
    fn test_serve_lines_answers_each_request() {
        let input = concat!(
            r#"{"method":"listWindows"}"#,
            "\n\n",
            r#"{"method":"nope"}"#,
            "\n",
        );
        let mut output = Vec::new();
        serve_lines(
            &server(),
            &CountingRunner::default(),
            &BridgeConfig::default(),
            Cursor::new(input),
            &mut output,
        )
        .unwrap();

        let lines: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["ok"], json!(true));
        assert_eq!(lines[1]["error"]["code"], json!("not_implemented"));
    }
}
