//! Command-line argument handling.
//!
//! Two invocation shapes are accepted, mirroring the classic tool:
//! `dualex INFILE OUTFILE` for equal filament diameters, or
//! `dualex INFILE DIA_IN OUTFILE DIA_NEW` to correct extrusion
//! distances for a different filament on the added extruder.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Parser;

/// Filament diameter validity band, exclusive on both ends (mm).
const DIA_MIN: f64 = 1.5;
const DIA_MAX: f64 = 2.2;

/// Diameter used when none is given; any equal pair yields ratio 1.0.
const DEFAULT_DIAMETER: f64 = 1.75;

#[derive(Parser, Debug)]
#[command(
    name = "dualex",
    version,
    about = "Generate a both-extruders-on G-code file from a single extruder file",
    after_help = "NOTE: If you are using different diameter filaments,\n\
                  BOTH DIA_IN and DIA_NEW must be given."
)]
pub struct Cli {
    /// INFILE OUTFILE, or INFILE DIA_IN OUTFILE DIA_NEW
    #[arg(value_name = "ARGS", num_args = 2..=4, required = true)]
    args: Vec<String>,
}

/// A fully validated conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dia_in: f64,
    pub dia_new: f64,
}

impl Cli {
    /// Validate the positional arguments into a conversion job.
    ///
    /// Diameter violations are reported here, before any file I/O.
    pub fn into_job(self) -> Result<Job> {
        match self.args.as_slice() {
            [input, output] => Ok(Job {
                input: input.into(),
                output: output.into(),
                dia_in: DEFAULT_DIAMETER,
                dia_new: DEFAULT_DIAMETER,
            }),
            [input, dia_in, output, dia_new] => Ok(Job {
                input: input.into(),
                output: output.into(),
                dia_in: parse_diameter(dia_in)?,
                dia_new: parse_diameter(dia_new)?,
            }),
            _ => bail!("usage: dualex INFILE [DIA_IN] OUTFILE [DIA_NEW]"),
        }
    }
}

fn parse_diameter(arg: &str) -> Result<f64> {
    let value: f64 = arg
        .parse()
        .map_err(|_| anyhow!("filament diameter '{}' is not a number", arg))?;
    if value <= DIA_MIN || value >= DIA_MAX {
        bail!(
            "filament diameter {} too big/small (expected between {} and {} mm)",
            arg,
            DIA_MIN,
            DIA_MAX
        );
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli {
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_two_args_default_to_equal_diameters() {
        let job = cli(&["in.gcode", "out.gcode"]).into_job().unwrap();
        assert_eq!(job.input, PathBuf::from("in.gcode"));
        assert_eq!(job.output, PathBuf::from("out.gcode"));
        assert_eq!(job.dia_in, job.dia_new);
    }

    #[test]
    fn test_four_args_carry_diameters() {
        let job = cli(&["in.gcode", "1.75", "out.gcode", "2.0"])
            .into_job()
            .unwrap();
        assert_eq!(job.dia_in, 1.75);
        assert_eq!(job.dia_new, 2.0);
    }

    #[test]
    fn test_three_args_rejected() {
        assert!(cli(&["in.gcode", "1.75", "out.gcode"]).into_job().is_err());
    }

    #[test]
    fn test_out_of_band_diameter_rejected() {
        // 2.85 mm filament is outside the supported band.
        let err = cli(&["in.gcode", "1.75", "out.gcode", "2.85"])
            .into_job()
            .unwrap_err();
        assert!(err.to_string().contains("too big/small"));
    }

    #[test]
    fn test_band_edges_rejected() {
        assert!(cli(&["a", "1.5", "b", "1.75"]).into_job().is_err());
        assert!(cli(&["a", "1.75", "b", "2.2"]).into_job().is_err());
    }

    #[test]
    fn test_non_numeric_diameter_rejected() {
        let err = cli(&["a", "thin", "b", "1.75"]).into_job().unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }
}
