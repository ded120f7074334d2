use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::errors::AutomationError;

/// Executes automation scripts.
pub trait ScriptRunner: Send + Sync {
    /// Run `script`, blocking for at most `timeout`.
    fn run(&self, script: &str, timeout: Duration) -> Result<(), AutomationError>;
}

/// Runs AppleScript through `osascript`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsascriptRunner;

/// How often a running script is checked for completion
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// osascript error numbers reported when the caller lacks automation or
/// accessibility rights
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
const PERMISSION_ERROR_MARKERS: &[&str] = &["-1743", "-25211", "not allowed assistive access"];

#[cfg(target_os = "macos")]
impl ScriptRunner for OsascriptRunner {
    fn run(&self, script: &str, timeout: Duration) -> Result<(), AutomationError> {
        let mut command = Command::new("osascript");
        command.arg("-e").arg(script);
        run_with_timeout(command, timeout)
    }
}

#[cfg(not(target_os = "macos"))]
impl ScriptRunner for OsascriptRunner {
    fn run(&self, _script: &str, _timeout: Duration) -> Result<(), AutomationError> {
        Err(AutomationError::UnsupportedPlatform)
    }
}

/// Run `command` to completion, killing it once `timeout` has elapsed.
///
/// Stderr is drained on a reader thread while the child runs, so a chatty
/// child cannot stall on a full pipe. A non-zero exit is classified from the
/// collected stderr.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn run_with_timeout(
    mut command: Command,
    timeout: Duration,
) -> Result<(), AutomationError> {
    debug!(
        event = "core.close.script_started",
        timeout_ms = timeout.as_millis() as u64
    );

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AutomationError::ScriptSpawnFailed {
            message: e.to_string(),
        })?;

    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut stderr = String::new();
            let _ = pipe.read_to_string(&mut stderr);
            stderr
        })
    });

    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if start.elapsed() >= timeout => {
                if let Err(e) = child.kill() {
                    warn!(event = "core.close.script_kill_failed", error = %e);
                }
                let _ = child.wait();
                warn!(
                    event = "core.close.script_timeout",
                    timeout_ms = timeout.as_millis() as u64
                );
                // The reader thread ends on its own once the pipe closes.
                return Err(AutomationError::TimedOut {
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AutomationError::ScriptSpawnFailed {
                    message: e.to_string(),
                });
            }
        }
    };

    if status.success() {
        debug!(event = "core.close.script_completed");
        return Ok(());
    }

    let stderr = stderr_reader
        .and_then(|reader| reader.join().ok())
        .unwrap_or_default();
    Err(classify_failure(stderr.trim()))
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn classify_failure(stderr: &str) -> AutomationError {
    if PERMISSION_ERROR_MARKERS
        .iter()
        .any(|marker| stderr.contains(marker))
    {
        AutomationError::PermissionDenied {
            stderr: stderr.to_string(),
        }
    } else {
        AutomationError::ScriptFailed {
            stderr: stderr.to_string(),
        }
    }
}
