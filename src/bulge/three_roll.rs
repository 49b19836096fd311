//! Bulged cross-sections of three-roll passes.

use crate::bulge::lobe_radius;
use crate::errors::BulgeError;
use crate::float_types::Real;
use crate::pass::Pass;
use crate::profile::Profile;
use crate::section::CrossSection;
use crate::shape::ShapeTag::{Flat, Oval, Round};
use crate::shape::Transition;
use crate::traits::SectionOps;
use nalgebra::Point2;
use tracing::debug;

/// Directions of the free surfaces between the rolls, in degrees.
pub const LOBE_ANGLES: [Real; 3] = [90.0, 210.0, -30.0];

/// How the capped lobes form the final section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThreeRollCombination {
    /// Union of the lobes with the nominal section re-bounded to this
    /// fraction of the profile width.
    UnionWithCore(Real),
    /// Successive intersection of the three lobes.
    LobeIntersection,
}

pub static THREE_ROLL_SECTION: [(Transition, ThreeRollCombination); 6] = [
    (Transition::new(Round, Flat), ThreeRollCombination::UnionWithCore(0.7)),
    (Transition::new(Flat, Flat), ThreeRollCombination::LobeIntersection),
    (Transition::new(Round, Oval), ThreeRollCombination::UnionWithCore(0.9)),
    (Transition::new(Round, Round), ThreeRollCombination::UnionWithCore(0.9)),
    (Transition::new(Oval, Oval), ThreeRollCombination::UnionWithCore(0.9)),
    (Transition::new(Oval, Round), ThreeRollCombination::LobeIntersection),
];

pub fn select_three_roll_combination(pass: &Pass) -> Option<ThreeRollCombination> {
    THREE_ROLL_SECTION
        .iter()
        .find(|(transition, _)| pass.has_transition(*transition))
        .map(|(_, combination)| *combination)
}

/// Lobe centres at distance `width/2 − radius` from the pass centre along
/// [`LOBE_ANGLES`], so every lobe reaches exactly `width/2` in its direction.
pub fn lobe_centers(width: Real, radius: Real) -> [Point2<Real>; 3] {
    let offset = width / 2.0 - radius;
    LOBE_ANGLES.map(|degrees| {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Point2::new(offset * cos, offset * sin)
    })
}

/// The three lobes, each cut down to `section`.
pub fn capped_lobes(
    section: &CrossSection,
    width: Real,
    radius: Real,
) -> Result<[CrossSection; 3], BulgeError> {
    let radius = lobe_radius(radius)?;
    Ok(lobe_centers(width, radius)
        .map(|center| section.intersection(&CrossSection::disk(center, radius))))
}

/// Bulged section of `profile`, whose current section is the pass's nominal
/// one, or `None` when the transition has no rule.
pub fn correct(
    pass: &Pass,
    profile: &Profile,
    radius: Real,
) -> Result<Option<CrossSection>, BulgeError> {
    let Some(combination) = select_three_roll_combination(pass) else {
        return Ok(None);
    };
    debug!(pass = %pass.label, ?combination, radius, "correcting three-roll cross-section");

    let lobes = capped_lobes(profile.cross_section(), profile.width, radius)?;
    let corrected = match combination {
        ThreeRollCombination::UnionWithCore(fraction) => {
            let core = pass.nominal_cross_section(profile.width * fraction);
            CrossSection::union_all(std::iter::once(&core).chain(lobes.iter()))
        },
        ThreeRollCombination::LobeIntersection => CrossSection::intersection_all(lobes.iter()),
    };
    Ok(Some(corrected))
}
