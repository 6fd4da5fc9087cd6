//! # DualEx Core
//!
//! Conversion engine that turns a single-extruder 3D-printer G-code
//! file into a dual-extruder one: the same part printed by both
//! toolheads at once.
//!
//! ## How it works
//!
//! Two strictly sequential passes over the input:
//!
//! 1. **Usage scan** ([`scan_usage`]) - determines which single
//!    extruder the source file drives and rejects files that already
//!    reference both (or neither).
//! 2. **Rewrite** ([`rewrite`]) - duplicates extruder on/off,
//!    temperature, speed, and tool-change commands onto both
//!    toolheads, and splits each motion line's extrusion distance into
//!    per-head values, optionally corrected for differing filament
//!    diameters ([`diameter_ratio`]).
//!
//! Only seven G/M codes are recognized ([`Command`]); every other line
//! passes through byte-for-byte. [`convert_file`] wires both passes
//! together for whole-file conversion.

pub mod commands;
pub mod convert;
pub mod error;
pub mod rewrite;
pub mod scan;
pub mod state;

// Re-export commonly used items
pub use commands::Command;
pub use convert::{convert_file, ConversionReport};
pub use error::{ConvertError, Result};
pub use rewrite::rewrite;
pub use scan::{scan_usage, UsageScan};
pub use state::{diameter_ratio, ConversionState, Extruder};
