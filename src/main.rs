// Bikeshare Explorer - Main executable
// Author: Gabriel Demetrios Lafis

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, Command};
use log::error;

use bikeshare_explorer::{
    shell::{LinePrompt, Shell},
    utils::{init_logging, AppError, Config},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_err) if app_err.is_data_not_found() => {
                    println!(
                        "{}\nPlease place this data file in the data folder and restart.",
                        app_err
                    );
                },
                _ => {
                    error!("{:#}", err);
                    eprintln!("Error: {:#}", err);
                },
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = Command::new("Bikeshare Explorer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Explore US bikeshare trip data interactively")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file (JSON or YAML)"),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding the city CSV files"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Sets the log level (off, error, warn, info, debug, trace)"),
        )
        .get_matches();

    // Load configuration
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Error loading config file {}", path))?,
        None => Config::default(),
    };

    // Override config with command line arguments
    if let Some(dir) = matches.get_one::<String>("data-dir") {
        config.data.dir = PathBuf::from(dir);
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    let prompt = LinePrompt::new()?;
    let mut shell = Shell::new(prompt, std::io::stdout(), config);
    shell.run()?;

    Ok(())
}
