//! covered CLI Binary
//!
//! Reports files of `--src` that have no content-identical copy under `--cov`.

use clap::Parser;
use covered::cli::{Cli, RunContext, EXIT_ERROR};
use covered::config::ConfigLoader;
use covered::logging::{init_logging, LoggingConfig};
use std::io::Write;
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_ERROR);
    }

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!("Configuration load failed");
            eprintln!("{}", covered::cli::map_error(&e));
            process::exit(EXIT_ERROR);
        }
    };

    match context.execute(&cli) {
        Ok(outcome) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout
                .write_all(&outcome.rendered)
                .and_then(|_| stdout.flush())
            {
                eprintln!("covered: failed to write report: {}", e);
                process::exit(EXIT_ERROR);
            }
            debug!(exit_code = outcome.exit_code, "Report written");
            process::exit(outcome.exit_code);
        }
        Err(e) => {
            debug!("Coverage check failed");
            eprintln!("{}", covered::cli::map_error(&e));
            process::exit(EXIT_ERROR);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::resolve(cli.config.as_deref())
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.verbose {
        config.enabled = true;
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.enabled = true;
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
