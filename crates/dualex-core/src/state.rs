//! Conversion state shared between the two passes.
//!
//! The usage scanner decides which extruder the input uses; the
//! rewriter reads that decision along with the diameter ratio and the
//! first extrusion distance. All of it lives in an explicit state
//! struct threaded through the passes rather than process globals.

use crate::error::{ConvertError, Result};

/// A physical extruder side, identified on the wire by its toolhead
/// selector token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extruder {
    /// Toolhead `T0`.
    Right,
    /// Toolhead `T1`.
    Left,
}

impl Extruder {
    /// The toolhead selector token for this side.
    pub fn selector(&self) -> &'static str {
        match self {
            Extruder::Right => "T0",
            Extruder::Left => "T1",
        }
    }

    /// The opposite side.
    pub fn other(&self) -> Extruder {
        match self {
            Extruder::Right => Extruder::Left,
            Extruder::Left => Extruder::Right,
        }
    }

    /// Human-readable side name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Extruder::Right => "right",
            Extruder::Left => "left",
        }
    }
}

/// Mutable state for one conversion run.
///
/// `active` is fixed by the usage scan before the rewrite pass starts.
/// `first_e` is zero until the rewriter sees the first extrusion
/// distance, then stays put for the rest of the run. `ratio` is
/// computed once up front and never changes.
#[derive(Debug, Clone)]
pub struct ConversionState {
    /// The extruder the source file drives.
    pub active: Extruder,
    /// First cumulative extrusion distance seen in the source.
    pub first_e: f64,
    /// Filament area ratio applied to extrusion deltas.
    pub ratio: f64,
}

impl ConversionState {
    /// Create state for a run with a known active side and ratio.
    pub fn new(active: Extruder, ratio: f64) -> Self {
        Self {
            active,
            first_e: 0.0,
            ratio,
        }
    }
}

/// Ratio of the filament cross-section areas for two diameters,
/// `((d1/2)^2) / ((d2/2)^2)`.
///
/// Range validation of user-supplied diameters belongs to the caller;
/// this only rejects non-positive input, which would produce a zero or
/// negative ratio.
pub fn diameter_ratio(d1: f64, d2: f64) -> Result<f64> {
    if d1 <= 0.0 {
        return Err(ConvertError::InvalidDiameter(d1));
    }
    if d2 <= 0.0 {
        return Err(ConvertError::InvalidDiameter(d2));
    }

    let r1 = d1 / 2.0;
    let r2 = d2 / 2.0;
    Ok((r1 * r1) / (r2 * r2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_tokens() {
        assert_eq!(Extruder::Right.selector(), "T0");
        assert_eq!(Extruder::Left.selector(), "T1");
        assert_eq!(Extruder::Right.other(), Extruder::Left);
        assert_eq!(Extruder::Left.other(), Extruder::Right);
    }

    #[test]
    fn test_equal_diameters_give_unit_ratio() {
        assert_eq!(diameter_ratio(1.75, 1.75).unwrap(), 1.0);
        assert_eq!(diameter_ratio(2.0, 2.0).unwrap(), 1.0);
    }

    #[test]
    fn test_ratio_is_squared_radius_ratio() {
        let ratio = diameter_ratio(2.0, 1.0).unwrap();
        assert!((ratio - 4.0).abs() < 1e-12);

        let ratio = diameter_ratio(1.75, 3.0).unwrap();
        let expected = (0.875 * 0.875) / (1.5 * 1.5);
        assert!((ratio - expected).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_diameter_rejected() {
        assert!(matches!(
            diameter_ratio(0.0, 1.75),
            Err(ConvertError::InvalidDiameter(_))
        ));
        assert!(matches!(
            diameter_ratio(1.75, -1.0),
            Err(ConvertError::InvalidDiameter(_))
        ));
    }
}
