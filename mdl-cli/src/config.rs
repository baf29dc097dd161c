//! Loading textfield configuration and setting up logging.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use mdl::components::TextfieldProps;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::paths;

/// Logging setup for one run.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Explicit log file. `None` uses the cache directory and falls back to
    /// stderr when that cannot be written.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Install the logger. Logging stays off when the level is `Off`.
    pub fn init(&self) -> Result<(), CliError> {
        if self.level == LevelFilter::Off {
            return Ok(());
        }
        WriteLogger::init(self.level, Config::default(), self.open_target()?)?;
        Ok(())
    }

    /// Where log lines go. Only an explicitly requested file is an error.
    fn open_target(&self) -> Result<Box<dyn Write + Send>, CliError> {
        if let Some(path) = &self.file {
            return Ok(Box::new(open_log_file(path)?));
        }
        match open_log_file(&paths::log_file()) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) => {
                eprintln!("Warning: {e}; logging to stderr");
                Ok(Box::new(std::io::stderr()))
            }
        }
    }
}

fn open_log_file(path: &Path) -> Result<File, CliError> {
    let to_error = |source: std::io::Error| CliError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(to_error)?;
    }
    File::create(path).map_err(to_error)
}

/// Read a configuration from a file, or stdin when `path` is `None`.
pub fn load_props(path: Option<&Path>) -> Result<TextfieldProps, CliError> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    parse_props(&text)
}

pub fn parse_props(text: &str) -> Result<TextfieldProps, CliError> {
    let props: TextfieldProps = serde_json::from_str(text)?;
    log::debug!("Loaded textfield configuration: {props:?}");
    Ok(props)
}
