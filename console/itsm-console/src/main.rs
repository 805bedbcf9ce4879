//! itsm-console - preferences and access checks for the ITSM console
//!
//! # Examples
//!
//! ```bash
//! # Switch to the dark theme and 50 rows per page
//! itsm-console prefs set --theme dark --page-size 50
//!
//! # Configure the tickets table
//! itsm-console prefs table tickets --columns id,title,status --sort-field created_at --sort-direction desc
//!
//! # Check whether a saved session may manage incidents
//! itsm-console guard check --session session.json --permission incident:update --any --pretty
//! ```

use itsm_console::{Cli, ConsoleResult, initialize_logger, run};
use itsm_config::Config;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(cli.command, &config).and_then(|value| {
        let output = if cli.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(output)
    });

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads and validates configuration, then starts logging.
fn load_config() -> ConsoleResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    initialize_logger(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    Ok(config)
}
