//! Whole-file conversion: runs both passes in order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::rewrite::rewrite;
use crate::scan::scan_usage;
use crate::state::{diameter_ratio, ConversionState, Extruder};

/// Summary of a completed conversion run.
#[derive(Debug, Clone, Copy)]
pub struct ConversionReport {
    /// The extruder the source file used.
    pub active: Extruder,
    /// Lines examined by the validation pass.
    pub lines_checked: u64,
    /// Lines processed by the rewrite pass.
    pub lines_processed: u64,
}

/// Convert a single-extruder G-code file into a dual-extruder one.
///
/// Validates the input first (exactly one extruder in use), then
/// streams the rewritten file to `output`. The diameters feed the
/// extrusion correction ratio; pass equal values for a pure
/// duplication with no numeric correction.
///
/// The input is opened once per pass and every handle is closed on all
/// exit paths. On failure a partially written output file may remain;
/// it is invalid and should be discarded.
pub fn convert_file(
    input: &Path,
    output: &Path,
    dia_in: f64,
    dia_new: f64,
) -> Result<ConversionReport> {
    let ratio = diameter_ratio(dia_in, dia_new)?;

    let scan = {
        let reader = BufReader::new(File::open(input)?);
        scan_usage(reader)?
    };
    info!(lines = scan.lines_checked, "input file checked");
    info!(
        "file uses {} extruder, adding {}",
        scan.active.name(),
        scan.active.other().name()
    );

    let mut state = ConversionState::new(scan.active, ratio);
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let lines_processed = rewrite(reader, &mut writer, &mut state)?;
    writer.flush()?;

    info!(lines = lines_processed, "conversion complete");

    Ok(ConversionReport {
        active: scan.active,
        lines_checked: scan.lines_checked,
        lines_processed,
    })
}
