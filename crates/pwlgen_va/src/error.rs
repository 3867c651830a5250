//! Export error types for the Verilog-A compiler.
//!
//! Every failure aborts the export before any output is written.

use std::io;
use std::path::PathBuf;

use pwlgen_common::ParseTimeError;

/// Errors that can occur while validating export parameters or writing output.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A time string's numeric part could not be parsed.
    #[error(transparent)]
    InvalidTimeFormat(#[from] ParseTimeError),

    /// The clock period resolved to zero or a negative value.
    #[error("clock period must be greater than zero, got '{input}'")]
    NonPositiveClockPeriod {
        /// The clock period string as supplied.
        input: String,
    },

    /// The edge (transition) time resolved to a negative value.
    #[error("edge time cannot be negative, got '{input}'")]
    NegativeEdgeTime {
        /// The edge time string as supplied.
        input: String,
    },

    /// A voltage level is not a finite real number.
    #[error("invalid {field} voltage: '{input}'")]
    InvalidVoltageValue {
        /// Which level failed (`vlow` or `vhigh`).
        field: &'static str,
        /// The voltage string as supplied.
        input: String,
    },

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    OutputWriteFailure {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_time_display() {
        let e = ExportError::from(ParseTimeError {
            input: "abc".into(),
        });
        assert_eq!(e.to_string(), "invalid time format: 'abc'");
    }

    #[test]
    fn non_positive_clock_display() {
        let e = ExportError::NonPositiveClockPeriod { input: "0ns".into() };
        assert_eq!(
            e.to_string(),
            "clock period must be greater than zero, got '0ns'"
        );
    }

    #[test]
    fn negative_edge_display() {
        let e = ExportError::NegativeEdgeTime {
            input: "-1ps".into(),
        };
        assert_eq!(e.to_string(), "edge time cannot be negative, got '-1ps'");
    }

    #[test]
    fn invalid_voltage_display() {
        let e = ExportError::InvalidVoltageValue {
            field: "vhigh",
            input: "high".into(),
        };
        assert_eq!(e.to_string(), "invalid vhigh voltage: 'high'");
    }

    #[test]
    fn write_failure_display() {
        let e = ExportError::OutputWriteFailure {
            path: PathBuf::from("/ro/out.va"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().starts_with("failed to write /ro/out.va"));
    }
}
