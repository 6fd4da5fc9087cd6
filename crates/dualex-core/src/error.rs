//! Error types for the conversion engine.
//!
//! This module provides structured error types for usage validation,
//! command rewriting, and file I/O during a conversion run.

use std::io;
use thiserror::Error;

/// Errors that can occur during a conversion run.
///
/// All errors are terminal for the current run: nothing is retried and
/// nothing is recovered mid-stream. A partially written output file is
/// invalid and should be discarded by the caller.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// I/O error opening, reading, or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file already references both extruders.
    #[error("file already uses both extruders (line {line})")]
    BothExtrudersUsed { line: u64 },

    /// No extruder activation was found anywhere in the input file.
    #[error("couldn't find a used extruder in the input file")]
    NoExtruderFound,

    /// An M108 speed command carried no R-tagged speed value.
    #[error("no speed in command in line {line}")]
    NoSpeed { line: u64 },

    /// An M108 speed token exceeded the 15-character limit.
    #[error("speed command too long in line {line}")]
    SpeedTooLong { line: u64 },

    /// A G1 extrusion parameter value exceeded the 15-character limit.
    #[error("E parameter too long in line {line}")]
    ParameterTooLong { line: u64 },

    /// A non-positive filament diameter was supplied to the ratio
    /// calculator. Range checking belongs to the caller; this only
    /// defends against a zero or negative ratio.
    #[error("invalid filament diameter: {0}")]
    InvalidDiameter(f64),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConvertError::BothExtrudersUsed { line: 42 };
        assert_eq!(
            err.to_string(),
            "file already uses both extruders (line 42)"
        );

        let err = ConvertError::NoExtruderFound;
        assert_eq!(
            err.to_string(),
            "couldn't find a used extruder in the input file"
        );
    }

    #[test]
    fn test_conversion_error_display() {
        let err = ConvertError::NoSpeed { line: 7 };
        assert_eq!(err.to_string(), "no speed in command in line 7");

        let err = ConvertError::SpeedTooLong { line: 9 };
        assert_eq!(err.to_string(), "speed command too long in line 9");

        let err = ConvertError::ParameterTooLong { line: 13 };
        assert_eq!(err.to_string(), "E parameter too long in line 13");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ConvertError = io_err.into();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
