//! Taskboard CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use taskboard_cli::cli::Cli;
use taskboard_cli::shell::Shell;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let mut shell = Shell::new();
    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
