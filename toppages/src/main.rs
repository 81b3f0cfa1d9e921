use colored::Colorize;
use toppages::commands::command_argument_builder;
use toppages::handlers::handle_report;
use toppages_core::ReportError;
use tracing::Level;

fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();

    // Logs go to stderr so stdout only ever carries the report
    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = handle_report(&matches) {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ReportError>()
        .map(ReportError::exit_code)
        .unwrap_or(1)
}
