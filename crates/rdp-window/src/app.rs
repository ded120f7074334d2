use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("rdp-window")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Locate, capture and close remote-desktop client windows")
        .long_about(
            "rdp-window finds the on-screen windows of the remote-desktop client, computes \
             their content area without the title bar, captures them as PNG images and asks \
             the client to close them. `serve` exposes the same operations to a host \
             application as JSON lines on stdin/stdout.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List on-screen remote-desktop client windows")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("region")
                .about("Show the content region of a window")
                .arg(window_id_arg()),
        )
        .subcommand(
            Command::new("capture")
                .about("Capture a window as a PNG image")
                .arg(window_id_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Save to file path (default: output base64 to stdout)"),
                )
                .arg(
                    Arg::new("base64")
                        .long("base64")
                        .help("Output base64 encoded image (default if no --output)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("full")
                        .long("full")
                        .help("Capture the whole window, title bar included")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("close")
                .about("Ask the client to close a window (best effort)")
                .long_about(
                    "Brings the owning process to the front and clicks the close button of its \
                     frontmost window. With several client windows open, a different window of \
                     the same process may close.",
                )
                .arg(window_id_arg()),
        )
        .subcommand(
            Command::new("serve")
                .about("Answer JSON-lines host requests on stdin until end of input"),
        )
}

fn window_id_arg() -> Arg {
    Arg::new("window-id")
        .long("window-id")
        .help("Window ID as reported by `list`")
        .value_parser(clap::value_parser!(u32))
        .required(true)
}
