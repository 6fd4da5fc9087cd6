//! Command rewriter: the transformation pass.
//!
//! Re-reads the validated input line by line and writes the
//! dual-extruder version. Each recognized command is duplicated onto
//! both toolheads (or dropped when it addresses the unused side);
//! extrusion distances on motion lines are split into per-head A/B
//! values with the diameter-ratio correction applied. Everything else
//! passes through untouched.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands::Command;
use crate::error::{ConvertError, Result};
use crate::state::{ConversionState, Extruder};

/// Longest accepted speed token / extrusion value, matching the
/// fixed parameter buffers of classic firmware toolchains.
const MAX_PARAM_LEN: usize = 15;

/// Rewrite the input stream into its dual-extruder form.
///
/// `state.active` must already be set from the usage scan; the side
/// that was *not* active decides which addressed commands get dropped.
/// Returns the number of input lines processed. One input line may
/// produce zero, one, or two output lines.
pub fn rewrite<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    state: &mut ConversionState,
) -> Result<u64> {
    let not_used = state.active.other().selector();
    let mut line_no: u64 = 0;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;

        let mut tokens = line.split_whitespace();
        match Command::classify(tokens.next()) {
            Some(
                cmd @ (Command::ExtruderForward
                | Command::ExtruderReverse
                | Command::ExtruderOff
                | Command::ToolChange),
            ) => {
                if let Some(token) = tokens.next() {
                    if token == not_used {
                        // Addressed to the unused head, drop it.
                        continue;
                    }
                }
                writeln!(writer, "{} T1", cmd.token())?;
                writeln!(writer, "{} T0", cmd.token())?;
            }
            Some(Command::SetTemperature) => {
                let mut temp: i32 = 0;
                for token in tokens {
                    if token == not_used {
                        break;
                    }
                    if let Some(value) = token.strip_prefix('S') {
                        temp = value.parse().unwrap_or(0);
                    }
                }
                writeln!(writer, "M104 S{} T1", temp)?;
                writeln!(writer, "M104 S{} T0", temp)?;
            }
            Some(Command::SetSpeed) => {
                let mut speed: Option<&str> = None;
                for token in tokens.by_ref() {
                    if token == not_used {
                        break;
                    }
                    if token.starts_with('R') {
                        if token.len() > MAX_PARAM_LEN {
                            return Err(ConvertError::SpeedTooLong { line: line_no });
                        }
                        speed = Some(token);
                    }
                }
                let speed = speed.ok_or(ConvertError::NoSpeed { line: line_no })?;
                writeln!(writer, "M108 {} T1", speed)?;
                writeln!(writer, "M108 {} T0", speed)?;
            }
            Some(Command::Motion) => {
                let out = rewrite_motion(tokens, state, line_no)?;
                writeln!(writer, "{}", out)?;
            }
            _ => {
                // Not one of ours, pass through unchanged.
                writeln!(writer, "{}", line)?;
            }
        }
    }

    debug!(lines = line_no, "rewrite pass complete");

    Ok(line_no)
}

/// Rebuild a G1 line, splitting each extrusion-distance parameter
/// (tags `E`, `A`, or `B`) into a corrected value for the added head
/// and the original value for the source head.
fn rewrite_motion<'a, I>(tokens: I, state: &mut ConversionState, line_no: u64) -> Result<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut out = String::from("G1");

    for token in tokens {
        if matches!(token.as_bytes()[0], b'E' | b'A' | b'B') {
            let value = &token[1..];
            if value.len() > MAX_PARAM_LEN {
                return Err(ConvertError::ParameterTooLong { line: line_no });
            }

            let current: f64 = value.parse().unwrap_or(0.0);

            if state.first_e > 0.0 {
                let new_e = ((current - state.first_e) * state.ratio) + state.first_e;
                // Round half-up to the nearest 0.00001.
                let new_e = ((new_e * 100_000.0) + 0.5).floor() / 100_000.0;

                // The corrected value goes to the added head; which
                // alias tag that is depends on the side the source
                // file was driving.
                match state.active {
                    Extruder::Right => {
                        out.push_str(&format!(" B{:.5} A{}", new_e, value));
                    }
                    Extruder::Left => {
                        out.push_str(&format!(" A{:.5} B{}", new_e, value));
                    }
                }
            } else {
                // No origin yet: both heads get the value verbatim
                // and it becomes the origin for later deltas.
                out.push_str(&format!(" A{0} B{0}", value));
                state.first_e = current;
            }
        } else {
            out.push(' ');
            out.push_str(token);
        }
    }

    Ok(out)
}
