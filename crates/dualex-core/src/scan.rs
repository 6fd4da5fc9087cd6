//! Usage scanner: the validation pass.
//!
//! Reads the input once and determines which single extruder it
//! drives. A file that references both sides, or neither, is rejected
//! before any output is written.

use std::io::BufRead;

use tracing::debug;

use crate::commands::Command;
use crate::error::{ConvertError, Result};
use crate::state::Extruder;

/// Outcome of a successful usage scan.
#[derive(Debug, Clone, Copy)]
pub struct UsageScan {
    /// The single extruder the input file uses.
    pub active: Extruder,
    /// Number of input lines examined.
    pub lines_checked: u64,
}

/// Scan the input and determine the active extruder.
///
/// An extruder counts as used when an on-command (`M101`/`M102`)
/// addresses its toolhead selector, or when an `M104` sets a strictly
/// positive temperature with its selector present on the line. A zero
/// or negative temperature does not activate a side.
///
/// Fails with [`ConvertError::BothExtrudersUsed`] the moment evidence
/// for a second side appears, and [`ConvertError::NoExtruderFound`]
/// when the whole file names neither.
pub fn scan_usage<R: BufRead>(reader: R) -> Result<UsageScan> {
    let mut left_used = false;
    let mut right_used = false;
    let mut line_no: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;

        let mut tokens = line.split_whitespace();
        match Command::classify(tokens.next()) {
            Some(Command::ExtruderForward) | Some(Command::ExtruderReverse) => {
                match tokens.next() {
                    Some("T0") => {
                        if left_used {
                            return Err(ConvertError::BothExtrudersUsed { line: line_no });
                        }
                        right_used = true;
                    }
                    Some("T1") => {
                        if right_used {
                            return Err(ConvertError::BothExtrudersUsed { line: line_no });
                        }
                        left_used = true;
                    }
                    _ => {}
                }
            }
            Some(Command::SetTemperature) => {
                let mut saw_right = false;
                let mut saw_left = false;
                let mut temp: i32 = 0;

                for token in tokens {
                    match token {
                        "T0" => saw_right = true,
                        "T1" => saw_left = true,
                        _ => {
                            if let Some(value) = token.strip_prefix('S') {
                                // Malformed temperatures read as zero.
                                temp = value.parse().unwrap_or(0);
                            }
                        }
                    }
                }

                // A heat-up only counts as usage above zero degrees.
                if saw_right && temp > 0 {
                    if left_used {
                        return Err(ConvertError::BothExtrudersUsed { line: line_no });
                    }
                    right_used = true;
                } else if saw_left && temp > 0 {
                    if right_used {
                        return Err(ConvertError::BothExtrudersUsed { line: line_no });
                    }
                    left_used = true;
                }
            }
            _ => {}
        }
    }

    debug!(lines = line_no, "usage scan complete");

    let active = if right_used {
        Extruder::Right
    } else if left_used {
        Extruder::Left
    } else {
        return Err(ConvertError::NoExtruderFound);
    };

    Ok(UsageScan {
        active,
        lines_checked: line_no,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(input: &str) -> Result<UsageScan> {
        scan_usage(Cursor::new(input))
    }

    #[test]
    fn test_on_command_marks_right() {
        let result = scan("G21\nM101 T0\nG1 X10 E5.0\n").unwrap();
        assert_eq!(result.active, Extruder::Right);
        assert_eq!(result.lines_checked, 3);
    }

    #[test]
    fn test_on_command_marks_left() {
        let result = scan("M102 T1\n").unwrap();
        assert_eq!(result.active, Extruder::Left);
    }

    #[test]
    fn test_temperature_marks_side() {
        let result = scan("M104 S220 T1\n").unwrap();
        assert_eq!(result.active, Extruder::Left);
    }

    #[test]
    fn test_zero_temperature_does_not_mark() {
        // Cooling a head down is not evidence of use.
        assert!(matches!(
            scan("M104 S0 T0\n"),
            Err(ConvertError::NoExtruderFound)
        ));
    }

    #[test]
    fn test_malformed_temperature_reads_as_zero() {
        assert!(matches!(
            scan("M104 Sabc T0\n"),
            Err(ConvertError::NoExtruderFound)
        ));
    }

    #[test]
    fn test_both_extruders_rejected() {
        let err = scan("M101 T0\nM101 T1\n").unwrap_err();
        assert!(matches!(err, ConvertError::BothExtrudersUsed { line: 2 }));
    }

    #[test]
    fn test_both_extruders_rejected_regardless_of_order() {
        let err = scan("M104 S200 T1\nM102 T0\n").unwrap_err();
        assert!(matches!(err, ConvertError::BothExtrudersUsed { line: 2 }));
    }

    #[test]
    fn test_no_extruder_found() {
        assert!(matches!(
            scan("G21\nG90\nG1 X10 Y10\n"),
            Err(ConvertError::NoExtruderFound)
        ));
    }

    #[test]
    fn test_unaddressed_on_command_marks_nothing() {
        assert!(matches!(
            scan("M101\nM103\n"),
            Err(ConvertError::NoExtruderFound)
        ));
    }
}
