// tvp/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::{debug, error};
use tracing::level_filters::LevelFilter;
use tvp_common::config::Config;
use tvp_common::error::Result;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn run(cli_args: &CliArgs) -> Result<()> {
    let config = Config::load()?;
    let mode = cli_args.mode();
    debug!("Running in {:?} mode", mode);

    cli::report::banner();
    mode.run(&config)
}

fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    if let Err(e) = run(&cli_args) {
        error!("Command failed: {}", e);
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
