//! Platform logging initialization for the payables app.
//!
//! The dashboard owns stdout, so the default destination is `./payables.log`
//! in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./payables.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to ./payables.log in current directory.
    #[default]
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the logger with the specified destination and level.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => vec![terminal_logger(level, config)],
        LogDestination::Both => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<dyn SharedLogger>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file) as Box<dyn SharedLogger>),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
