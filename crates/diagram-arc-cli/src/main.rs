//! Diagram arc checker entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use diagram_arc_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    // Logs go to stderr so the normalized records on stdout stay clean
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting diagram arc checker");
    debug!(args:?; "Parsed arguments");

    match diagram_arc_cli::run(&args) {
        Ok(output) => {
            println!("{output}");
            info!("Completed successfully");
        }
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();

            for reportable in to_reportables(&err) {
                let mut writer = String::new();
                reporter
                    .render_report(&mut writer, &reportable)
                    .expect("Writing to String buffer is infallible");

                error!("{writer}");
            }

            process::exit(1);
        }
    }
}
