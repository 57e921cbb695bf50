use std::fs::File;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::GameError;

const LOG_FILE_NAME: &str = "grid-snake.log";

/// Verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Default log location; stdout belongs to the game screen.
#[must_use]
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Installs a file logger. `LogLevel::Off` installs nothing.
pub fn init(path: &Path, level: LogLevel) -> Result<(), GameError> {
    if level == LogLevel::Off {
        return Ok(());
    }

    let file = File::create(path).map_err(|error| {
        GameError::Logger(format!("cannot create {}: {error}", path.display()))
    })?;
    WriteLogger::init(level.into(), Config::default(), file)
        .map_err(|error| GameError::Logger(error.to_string()))
}
