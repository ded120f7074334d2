use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
///
/// Logs go to stderr as JSON so stdout stays free for command output and
/// the JSON-lines host protocol.
pub fn init_logging(quiet: bool) {
    let directives: &[&str] = if quiet {
        &["rdp_window=error", "rdp_window_core=error"]
    } else {
        &["rdp_window=info", "rdp_window_core=info"]
    };

    let mut filter = EnvFilter::from_default_env();
    for directive in directives {
        filter = filter.add_directive(directive.parse().expect("Invalid log directive"));
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
