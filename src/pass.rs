//! One roll stand as seen by the bulge models.

use crate::float_types::Real;
use crate::groove::{GrooveGeometry, NominalSection};
use crate::profile::Profile;
use crate::section::CrossSection;
use crate::shape::{ShapeSet, ShapeTag, Transition};

/// Mill topology of a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    /// Two rolls; results are attached to the outgoing profile.
    TwoRoll,
    /// Two rolls, mirror-symmetric about the rolling plane; the correction runs
    /// after the pass solve and is attached to the *incoming* profile.
    Symmetric,
    /// Three rolls at 120°.
    ThreeRoll,
}

/// Host-derived values the three-roll eccentricity models read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriContact {
    pub inscribed_circle_diameter: Real,
    /// Area of the incoming section pushed aside by the rolls.
    pub displaced_area: Real,
}

/// A pass created and chained by the host pipeline.
///
/// The bulge models only read it; the single exception is the symmetric
/// adapter, which writes onto `in_profile`.
#[derive(Debug)]
pub struct Pass {
    pub label: String,
    pub kind: PassKind,
    pub in_profile: Profile,
    pub groove: GrooveGeometry,
    pub classifiers: ShapeSet,
    /// Groove of the previous pass of the same topology.
    pub previous_groove: Option<GrooveGeometry>,
    pub contact: Option<TriContact>,
    nominal: Box<dyn NominalSection>,
}

impl Pass {
    pub fn new(
        label: impl Into<String>,
        kind: PassKind,
        in_profile: Profile,
        groove: GrooveGeometry,
        classifiers: ShapeSet,
        nominal: impl NominalSection + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            in_profile,
            groove,
            classifiers,
            previous_groove: None,
            contact: None,
            nominal: Box::new(nominal),
        }
    }

    pub fn with_previous_groove(mut self, previous: GrooveGeometry) -> Self {
        self.previous_groove = Some(previous);
        self
    }

    pub fn with_contact(mut self, contact: TriContact) -> Self {
        self.contact = Some(contact);
        self
    }

    pub const fn height(&self) -> Real {
        self.groove.height
    }

    /// Three-roll passes, and symmetric passes tagged three-fold.
    pub fn is_three_fold(&self) -> bool {
        match self.kind {
            PassKind::ThreeRoll => true,
            PassKind::Symmetric => self.classifiers.contains(ShapeTag::ThreeFold),
            PassKind::TwoRoll => false,
        }
    }

    /// Whether the incoming profile and this pass carry `transition`.
    pub const fn has_transition(&self, transition: Transition) -> bool {
        transition.matches(self.in_profile.classifiers, self.classifiers)
    }

    /// Groove-bounded section at `target_width` (`Real::INFINITY` for the full contour).
    pub fn nominal_cross_section(&self, target_width: Real) -> CrossSection {
        self.nominal.nominal_cross_section(target_width)
    }

    /// Outgoing profile as the host hands it over: nominal section at `width`,
    /// classified like the pass.
    pub fn out_profile(&self, width: Real) -> Profile {
        let section = self.nominal_cross_section(width);
        let height = self.height();
        Profile::new(width, height, section, self.classifiers)
    }
}
