//! Reference groove contours implementing [`NominalSection`].
//!
//! These describe the groove by a handful of dimensions and bound the
//! material purely by roll contact. Fillets (`r1`) are not modelled, so the
//! contours are exact only up to the groove edge rounding.

use crate::float_types::{Real, circle_segments, tolerance};
use crate::groove::{GrooveGeometry, NominalSection};
use crate::section::CrossSection;
use crate::traits::SectionOps;
use nalgebra::Point2;

/// Ground shape of a two-roll groove.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrooveGround {
    /// Circular arc of radius `r2` (round and oval grooves).
    Arc { r2: Real },
    /// Straight flanks meeting at the groove ground (square and diamond grooves).
    ///
    /// `r2` is the ground rounding the host reports; the contour itself keeps
    /// the sharp tip.
    Vee { usable_width: Real, r2: Real },
}

/// Contour of a two-roll pass, mirror-symmetric about both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct TwoRollContour {
    pub ground: GrooveGround,
    /// Groove depth on each roll.
    pub depth: Real,
    /// Distance between the roll barrels.
    pub gap: Real,
    /// Width covered by the roll contour; the section is never wider.
    pub contour_width: Real,
}

impl TwoRollContour {
    /// Round groove whose arcs close into a circle of radius `r2` around the origin.
    pub fn round(r2: Real, gap: Real) -> Self {
        Self::with_default_width(GrooveGround::Arc { r2 }, r2 - 0.5 * gap, gap)
    }

    pub fn oval(r2: Real, depth: Real, gap: Real) -> Self {
        Self::with_default_width(GrooveGround::Arc { r2 }, depth, gap)
    }

    /// V groove; used for both diamond and square grooves.
    pub fn vee(usable_width: Real, r2: Real, depth: Real, gap: Real) -> Self {
        Self::with_default_width(GrooveGround::Vee { usable_width, r2 }, depth, gap)
    }

    fn with_default_width(ground: GrooveGround, depth: Real, gap: Real) -> Self {
        let mut contour = Self {
            ground,
            depth,
            gap,
            contour_width: 0.0,
        };
        contour.contour_width = 1.5 * contour.usable_width();
        contour
    }

    pub fn with_contour_width(mut self, contour_width: Real) -> Self {
        self.contour_width = contour_width;
        self
    }

    /// Width at which the groove ground meets the roll barrel.
    pub fn usable_width(&self) -> Real {
        match self.ground {
            GrooveGround::Arc { r2 } => {
                let offset = r2 - self.depth;
                2.0 * (r2 * r2 - offset * offset).max(0.0).sqrt()
            },
            GrooveGround::Vee { usable_width, .. } => usable_width,
        }
    }

    /// Pass height: groove depth on both rolls plus the gap.
    pub fn height(&self) -> Real {
        2.0 * self.depth + self.gap
    }

    /// Groove record for this contour with fillet radius `r1`.
    pub fn geometry(&self, r1: Real) -> GrooveGeometry {
        let r2 = match self.ground {
            GrooveGround::Arc { r2 } | GrooveGround::Vee { r2, .. } => r2,
        };
        GrooveGeometry::new(r1, r2, self.usable_width(), self.height())
    }

    /// Upper contour height at `x`.
    fn upper(&self, x: Real) -> Real {
        let barrel = 0.5 * self.gap;
        let ground = match self.ground {
            GrooveGround::Arc { r2 } => {
                let center = barrel + self.depth - r2;
                if x.abs() < r2 {
                    center + (r2 * r2 - x * x).sqrt()
                } else {
                    barrel
                }
            },
            GrooveGround::Vee { usable_width, .. } => {
                barrel + self.depth * (1.0 - 2.0 * x.abs() / usable_width)
            },
        };
        ground.max(barrel)
    }
}

impl NominalSection for TwoRollContour {
    fn nominal_cross_section(&self, target_width: Real) -> CrossSection {
        let width = target_width.min(self.contour_width);
        if width.is_nan() || width <= 0.0 {
            return CrossSection::new();
        }
        let half = 0.5 * width;
        let segments = circle_segments();

        let mut xs: Vec<Real> = (0..=segments)
            .map(|i| -half + width * (i as Real) / (segments as Real))
            .collect();
        // keep the kinks of the contour exact
        let edge = 0.5 * self.usable_width();
        for kink in [-edge, 0.0, edge] {
            if kink > -half && kink < half {
                xs.push(kink);
            }
        }
        xs.sort_by(Real::total_cmp);
        xs.dedup_by(|a, b| (*a - *b).abs() < tolerance());

        // counter-clockwise: lower contour left to right, upper contour back
        let mut points: Vec<[Real; 2]> = xs.iter().map(|&x| [x, -self.upper(x)]).collect();
        points.extend(xs.iter().rev().map(|&x| [x, self.upper(x)]));
        CrossSection::polygon(&points)
    }
}

/// Directions from the pass centre to the three roll contacts, in degrees.
pub const ROLL_CONTACT_ANGLES: [Real; 3] = [-90.0, 30.0, 150.0];

/// Contour of a three-roll pass with rolls at 120°.
#[derive(Clone, Debug, PartialEq)]
pub struct ThreeRollContour {
    pub inscribed_circle_diameter: Real,
    /// Groove arc radius; `None` for flat rolls.
    pub r2: Option<Real>,
    /// Diameter covered by the roll flanks; the section never extends beyond it.
    pub contour_diameter: Real,
}

impl ThreeRollContour {
    pub fn arc(inscribed_circle_diameter: Real, r2: Real, contour_diameter: Real) -> Self {
        Self {
            inscribed_circle_diameter,
            r2: Some(r2),
            contour_diameter,
        }
    }

    pub fn flat(inscribed_circle_diameter: Real, contour_diameter: Real) -> Self {
        Self {
            inscribed_circle_diameter,
            r2: None,
            contour_diameter,
        }
    }

    /// Region left free by the roll contacting from straight below.
    fn lower_roll_region(&self) -> CrossSection {
        let half = 0.5 * self.inscribed_circle_diameter;
        match self.r2 {
            Some(r2) => CrossSection::disk(Point2::new(0.0, r2 - half), r2),
            None => {
                let side = 2.0 * self.contour_diameter;
                CrossSection::centered_rectangle(side, side).translate(0.0, 0.5 * side - half)
            },
        }
    }
}

impl NominalSection for ThreeRollContour {
    fn nominal_cross_section(&self, target_width: Real) -> CrossSection {
        let diameter = target_width.min(self.contour_diameter);
        if diameter.is_nan() || diameter <= 0.0 {
            return CrossSection::new();
        }
        let lower = self.lower_roll_region();
        let rolls: Vec<CrossSection> = ROLL_CONTACT_ANGLES
            .iter()
            .map(|angle| lower.rotate(angle - ROLL_CONTACT_ANGLES[0]))
            .collect();
        let bound = CrossSection::disk(Point2::origin(), 0.5 * diameter);
        CrossSection::intersection_all(rolls.iter().chain(std::iter::once(&bound)))
    }
}
