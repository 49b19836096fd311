//! Groove geometry read from the host, and the nominal cross-section seam.

use crate::float_types::Real;
use crate::section::CrossSection;

/// Per-pass groove dimensions the bulge models read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrooveGeometry {
    /// Fillet radius at the groove edge.
    pub r1: Real,
    /// Forming radius of the groove ground.
    pub r2: Real,
    pub usable_width: Real,
    /// Pass height (groove depth on both rolls plus the roll gap).
    pub height: Real,
}

impl GrooveGeometry {
    pub const fn new(r1: Real, r2: Real, usable_width: Real, height: Real) -> Self {
        Self {
            r1,
            r2,
            usable_width,
            height,
        }
    }
}

/// Produces the cross-section bounded purely by groove contact.
///
/// `target_width` bounds the section across the bar; `Real::INFINITY` asks for
/// the full contour. Implementations must be deterministic.
pub trait NominalSection: std::fmt::Debug {
    fn nominal_cross_section(&self, target_width: Real) -> CrossSection;
}
