//! Bar profile entering or leaving a pass.

use crate::errors::BulgeError;
use crate::float_types::{PI, Real, circle_segments};
use crate::section::CrossSection;
use crate::shape::{ShapeSet, ShapeTag};
use crate::traits::SectionOps;
use std::sync::OnceLock;

/// Profile state the bulge models read and write.
///
/// `bulge_radius` is written at most once. `cross_section` starts as the
/// nominal section and is replaced at most once, by the corrected one.
#[derive(Clone, Debug)]
pub struct Profile {
    pub width: Real,
    pub height: Real,
    pub classifiers: ShapeSet,
    cross_section: CrossSection,
    bulge_radius: OnceLock<Real>,
    corrected: bool,
}

impl Profile {
    pub fn new(
        width: Real,
        height: Real,
        cross_section: CrossSection,
        classifiers: ShapeSet,
    ) -> Self {
        Self {
            width,
            height,
            classifiers,
            cross_section,
            bulge_radius: OnceLock::new(),
            corrected: false,
        }
    }

    /// Takes width and height from the section's bounding rectangle.
    pub fn from_section(cross_section: CrossSection, classifiers: ShapeSet) -> Self {
        let (width, height) = cross_section
            .bounding_rect()
            .map(|rect| (rect.width(), rect.height()))
            .unwrap_or((0.0, 0.0));
        Self::new(width, height, cross_section, classifiers)
    }

    pub fn round(diameter: Real) -> Self {
        let section = CrossSection::circle(0.5 * diameter, circle_segments());
        Self::new(diameter, diameter, section, ShapeSet::of(ShapeTag::Round))
    }

    /// Square with its sides parallel to the axes.
    pub fn square(side: Real) -> Self {
        let section = CrossSection::centered_rectangle(side, side);
        Self::new(side, side, section, ShapeSet::of(ShapeTag::Square))
    }

    pub fn with_classifiers(mut self, classifiers: ShapeSet) -> Self {
        self.classifiers = classifiers;
        self
    }

    pub const fn cross_section(&self) -> &CrossSection {
        &self.cross_section
    }

    pub fn bulge_radius(&self) -> Option<Real> {
        self.bulge_radius.get().copied()
    }

    /// Records the bulge radius resolved for this profile.
    pub fn set_bulge_radius(&self, radius: Real) -> Result<(), BulgeError> {
        self.bulge_radius
            .set(radius)
            .map_err(|_| BulgeError::AlreadyResolved("bulge radius"))
    }

    /// Swaps the nominal section for the corrected one.
    pub fn replace_cross_section(&mut self, corrected: CrossSection) -> Result<(), BulgeError> {
        if self.corrected {
            return Err(BulgeError::AlreadyResolved("cross-section"));
        }
        self.cross_section = corrected;
        self.corrected = true;
        Ok(())
    }

    /// Whether the cross-section has already been replaced by a corrected one.
    pub const fn is_corrected(&self) -> bool {
        self.corrected
    }

    pub fn area(&self) -> Real {
        self.cross_section.area()
    }

    /// Radius of the circle with the same area as the cross-section.
    pub fn equivalent_radius(&self) -> Real {
        (self.area() / PI).sqrt()
    }
}
