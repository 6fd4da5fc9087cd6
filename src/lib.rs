//! # DualEx
//!
//! Converts a single-extruder 3D-printer G-code file into a
//! dual-extruder one, printing two copies of the part in the time of
//! one. Extruder on/off, temperature, speed, and tool-change commands
//! are duplicated onto both toolheads, and extrusion distances are
//! split into per-head values with an optional correction for
//! differing filament diameters.
//!
//! The conversion engine lives in the `dualex-core` crate; this crate
//! is the command-line front end.

pub mod cli;

pub use dualex_core::{
    convert_file, diameter_ratio, scan_usage, Command, ConversionReport, ConversionState,
    ConvertError, Extruder, UsageScan,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
