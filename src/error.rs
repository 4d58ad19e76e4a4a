//! Error handling for foldergen.
//! Only configuration loading and output writing can fail; structure
//! generation itself is total over a well-typed `Configuration`.

use std::io;
use thiserror::Error;

/// Errors raised around the generation engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while locating or parsing a configuration file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents failures while rendering the folder tree as JSON
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents failures while rendering the folder tree as YAML
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with foldergen's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
