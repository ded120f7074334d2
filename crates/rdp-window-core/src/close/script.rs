//! AppleScript for closing the frontmost window of a process.

/// Escape a string for use inside an AppleScript string literal.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Build the close script for the process owning a window.
///
/// The process is addressed by pid when known, which is exact even when
/// several processes share a name. Otherwise it is addressed by owner name.
/// The script raises the process, then clicks the close button of its
/// frontmost window (falling back to the window's first button when no
/// button reports the close subrole).
pub fn close_frontmost_window_script(owner_pid: i32, owner_name: &str) -> String {
    let process = if owner_pid > 0 {
        format!("first process whose unix id is {}", owner_pid)
    } else {
        format!("process \"{}\"", applescript_escape(owner_name))
    };

    format!(
        r#"tell application "System Events"
    set targetProcess to {process}
    set frontmost of targetProcess to true
    delay 0.1
    tell targetProcess
        set closeButtons to (buttons of window 1 whose subrole is "AXCloseButton")
        if (count of closeButtons) > 0 then
            click item 1 of closeButtons
        else
            click button 1 of window 1
        end if
    end tell
end tell"#
    )
}
