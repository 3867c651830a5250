//! Errors raised while reading a `pwlgen.toml` project file.

use std::io;
use std::path::PathBuf;

/// Errors that can occur when loading or validating a project file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The project file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    IoError {
        /// The project file that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The TOML is malformed or has a value of the wrong type.
    #[error("invalid pwlgen.toml: {0}")]
    ParseError(String),

    /// A required field is missing or blank.
    #[error("pwlgen.toml is missing required field `{0}`")]
    MissingField(String),

    /// A project-level value is out of range.
    #[error("invalid project setting: {0}")]
    ValidationError(String),

    /// A `[[signals]]` entry cannot be turned into a waveform.
    #[error("invalid {signal}: {reason}")]
    InvalidSignal {
        /// The signal's label, or its position when unlabeled.
        signal: String,
        /// What is wrong with its pattern or pulses.
        reason: String,
    },
}
