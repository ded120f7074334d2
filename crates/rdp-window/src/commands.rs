use std::io;
use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info, warn};

use rdp_window_core::config::BridgeConfig;
use rdp_window_core::events;
use rdp_window_core::protocol::serve_lines;
use rdp_window_core::{
    OsascriptRunner, RegionContext, TargetMatcher, WindowDescriptor, capture_target_window,
    close_window, find_target_window_by_id, list_target_windows, resolve_content_region,
    system_window_server,
};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches.subcommand_name().unwrap_or("none");
    events::log_command_started(command);

    let config = load_config_with_warning();

    let result = match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches, &config),
        Some(("region", sub_matches)) => handle_region_command(sub_matches, &config),
        Some(("capture", sub_matches)) => handle_capture_command(sub_matches, &config),
        Some(("close", sub_matches)) => handle_close_command(sub_matches, &config),
        Some(("serve", _)) => handle_serve_command(&config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_command_finished(command, result.is_ok());
    result
}

/// Load config, falling back to defaults when a config file is broken.
fn load_config_with_warning() -> BridgeConfig {
    match BridgeConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.rdp-window/config.toml and ./.rdp-window/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            BridgeConfig::default()
        }
    }
}

fn handle_list_command(
    matches: &ArgMatches,
    config: &BridgeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let server = system_window_server();
    let matcher = TargetMatcher::from_config(&config.target);

    match list_target_windows(&server, &matcher) {
        Ok(windows) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&windows)?);
            } else if windows.is_empty() {
                println!("No remote-desktop windows found.");
            } else {
                println!("Remote-desktop windows:");
                print_windows_table(&windows);
            }

            info!(event = "cli.list_completed", count = windows.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_operation_failed(&e);
            Err(e.into())
        }
    }
}

fn print_windows_table(windows: &[WindowDescriptor]) {
    let title_width = windows
        .iter()
        .map(|w| w.title().chars().count())
        .max()
        .unwrap_or(0)
        .clamp(5, 40);

    println!(
        "{:>8}  {:>7}  {:<title_width$}  BOUNDS",
        "ID", "PID", "TITLE"
    );
    for window in windows {
        let bounds = window.bounds();
        let title: String = window.title().chars().take(title_width).collect();
        println!(
            "{:>8}  {:>7}  {:<title_width$}  {},{} {}x{}",
            window.id(),
            window.owner_pid(),
            title,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
    }
}

fn handle_region_command(
    matches: &ArgMatches,
    config: &BridgeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let window_id = window_id(matches)?;

    info!(event = "cli.region_started", window_id = window_id);

    let server = system_window_server();
    let matcher = TargetMatcher::from_config(&config.target);

    match find_target_window_by_id(&server, &matcher, window_id) {
        Ok(window) => {
            let context = RegionContext::detect(&server, &config.region);
            let region = resolve_content_region(&window, &context);
            println!("{}", serde_json::to_string_pretty(&region)?);

            info!(
                event = "cli.region_completed",
                window_id = window_id,
                rule = ?region.rule
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to resolve window {}: {}", window_id, e);
            error!(event = "cli.region_failed", window_id = window_id, error = %e);
            events::log_operation_failed(&e);
            Err(e.into())
        }
    }
}

fn handle_capture_command(
    matches: &ArgMatches,
    config: &BridgeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let window_id = window_id(matches)?;
    let output_path = matches.get_one::<String>("output");
    let base64_flag = matches.get_flag("base64");
    let full = matches.get_flag("full");

    // Default to base64 output if no output path specified
    let use_base64 = base64_flag || output_path.is_none();

    info!(
        event = "cli.capture_started",
        window_id = window_id,
        output = ?output_path,
        base64 = use_base64,
        full = full
    );

    let server = system_window_server();
    let matcher = TargetMatcher::from_config(&config.target);

    match capture_target_window(&server, &matcher, &config.region, window_id, full) {
        Ok(image) => {
            if let Some(path) = output_path {
                let path = PathBuf::from(path);
                image.save_to_file(&path)?;
                println!("Capture saved: {}", path.display());
                println!("  Size: {}x{}", image.width(), image.height());
            }
            if use_base64 {
                println!("{}", image.to_base64());
            }

            info!(
                event = "cli.capture_completed",
                window_id = window_id,
                width = image.width(),
                height = image.height()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to capture window {}: {}", window_id, e);
            error!(event = "cli.capture_failed", window_id = window_id, error = %e);
            events::log_operation_failed(&e);
            Err(e.into())
        }
    }
}

fn handle_close_command(
    matches: &ArgMatches,
    config: &BridgeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let window_id = window_id(matches)?;

    info!(event = "cli.close_started", window_id = window_id);

    let server = system_window_server();
    let matcher = TargetMatcher::from_config(&config.target);

    match close_window(
        &server,
        &OsascriptRunner,
        &matcher,
        window_id,
        config.close.timeout(),
    ) {
        Ok(()) => {
            println!("Close requested for window {}", window_id);
            info!(event = "cli.close_completed", window_id = window_id);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to close window {}: {}", window_id, e);
            error!(event = "cli.close_failed", window_id = window_id, error = %e);
            events::log_operation_failed(&e);
            Err(e.into())
        }
    }
}

fn handle_serve_command(config: &BridgeConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.serve_started");

    let server = system_window_server();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match serve_lines(&server, &OsascriptRunner, config, stdin, stdout) {
        Ok(()) => {
            info!(event = "cli.serve_completed");
            Ok(())
        }
        Err(e) => {
            error!(event = "cli.serve_failed", error = %e);
            Err(e.into())
        }
    }
}

fn window_id(matches: &ArgMatches) -> Result<u32, Box<dyn std::error::Error>> {
    matches
        .get_one::<u32>("window-id")
        .copied()
        .ok_or_else(|| "--window-id is required".into())
}
