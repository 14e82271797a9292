//! Fretwork CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use fretwork_cli::{Args, error_adapter::render_reports};

fn init_logger(level: &str) -> LevelFilter {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    log_level
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logger(&args.log_level);

    info!(log_level:?; "Starting Fretwork");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = fretwork_cli::run(&args) {
        // Reports go to stderr regardless of the log level
        let reports = render_reports(&err, &GraphicalReportHandler::new());
        for report in &reports {
            eprintln!("{report}");
        }
        error!(reports = reports.len(); "Diagram was not rendered");

        process::exit(1);
    }

    info!(output_file = args.output; "Completed successfully");
}
