//! Bulged cross-sections of two-roll passes.
//!
//! Both families place two lobes of the bulge radius at
//! `(±(width/2 − radius), 0)`, touching the profile edges, and splice them
//! into the groove-bounded nominal section.

use crate::bulge::{lobe_radius, nonzero};
use crate::errors::BulgeError;
use crate::float_types::{Real, tolerance};
use crate::pass::Pass;
use crate::profile::Profile;
use crate::section::CrossSection;
use crate::shape::ShapeTag::{Diamond, Oval, Round, Square};
use crate::shape::Transition;
use crate::traits::SectionOps;
use nalgebra::Point2;
use tracing::{debug, info};

/// How the clipped lobes are merged when the bulge dominates the pass height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LobeCombination {
    /// Square-diamond: either lobe's material counts.
    Union,
    /// Square-oval: only material both lobes cover counts.
    Intersection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwoRollCorrector {
    RoundOval,
    SquareDiamond(LobeCombination),
}

/// Corrector per transition, tried in order.
pub static TWO_ROLL_SECTION: [(Transition, TwoRollCorrector); 6] = [
    (Transition::new(Square, Diamond), TwoRollCorrector::SquareDiamond(LobeCombination::Union)),
    (Transition::new(Diamond, Square), TwoRollCorrector::SquareDiamond(LobeCombination::Union)),
    (Transition::new(Round, Oval), TwoRollCorrector::RoundOval),
    (Transition::new(Oval, Round), TwoRollCorrector::RoundOval),
    (Transition::new(Square, Oval), TwoRollCorrector::SquareDiamond(LobeCombination::Intersection)),
    (Transition::new(Oval, Square), TwoRollCorrector::SquareDiamond(LobeCombination::Intersection)),
];

pub fn select_two_roll_corrector(pass: &Pass) -> Option<TwoRollCorrector> {
    TWO_ROLL_SECTION
        .iter()
        .find(|(transition, _)| pass.has_transition(*transition))
        .map(|(_, corrector)| *corrector)
}

/// Bulged section of `profile` for `radius`, or `None` when the transition
/// has no corrector.
pub fn correct(
    pass: &Pass,
    profile: &Profile,
    radius: Real,
) -> Result<Option<CrossSection>, BulgeError> {
    let Some(corrector) = select_two_roll_corrector(pass) else {
        return Ok(None);
    };
    debug!(pass = %pass.label, ?corrector, radius, "correcting two-roll cross-section");
    let corrected = match corrector {
        TwoRollCorrector::RoundOval => round_oval(pass, profile, radius)?,
        TwoRollCorrector::SquareDiamond(combination) => {
            square_diamond(pass, profile, radius, combination)?
        },
    };
    Ok(Some(corrected))
}

/// Left and right lobe touching the profile edges at `±width/2`.
pub fn side_lobes(width: Real, radius: Real) -> Result<(CrossSection, CrossSection), BulgeError> {
    let radius = lobe_radius(radius)?;
    let center = width / 2.0 - radius;
    Ok((
        CrossSection::disk(Point2::new(-center, 0.0), radius),
        CrossSection::disk(Point2::new(center, 0.0), radius),
    ))
}

/// Round-oval family.
///
/// The right lobe's boundary is cut with the full groove contour. The
/// crossing closest to the rolling plane marks where the free surface leaves
/// the groove; material inside the contour and inside that width is kept,
/// beyond it only what a lobe covers.
///
/// Falls back to the profile's nominal section when the lobe never meets
/// the contour.
pub fn round_oval(
    pass: &Pass,
    profile: &Profile,
    radius: Real,
) -> Result<CrossSection, BulgeError> {
    let (left, right) = side_lobes(profile.width, radius)?;
    let full = pass.nominal_cross_section(Real::INFINITY);

    let cutover = full
        .boundary_intersections(&right)
        .into_iter()
        .min_by(|a, b| a.y.abs().total_cmp(&b.y.abs()));
    let Some(cutover) = cutover else {
        info!(
            pass = %pass.label,
            radius,
            "no intersection point found, continuing without bulging"
        );
        return Ok(profile.cross_section().clone());
    };

    if 2.0 * radius > full.horizontal_extent() {
        return Ok(CrossSection::intersection_all([&left, &right, &full]));
    }

    let inner = pass.nominal_cross_section(2.0 * cutover.x.abs());
    Ok(CrossSection::union_all([
        &full.intersection(&left),
        &inner,
        &full.intersection(&right),
    ]))
}

/// Square-diamond and square-oval families; they differ only in `combination`.
///
/// The separation point, where the lobe leaves the groove ground arc, bounds
/// the nominal core between the lobes. Lobes taller than the pass are instead
/// clipped to the nominal section at the profile width and merged.
pub fn square_diamond(
    pass: &Pass,
    profile: &Profile,
    radius: Real,
    combination: LobeCombination,
) -> Result<CrossSection, BulgeError> {
    const MODEL: &str = "separation angle";
    let r2 = pass.groove.r2;
    let width = profile.width;

    let ratio = (width / 2.0 - radius) / nonzero(MODEL, "r2 minus bulge radius", r2 - radius)?;
    if ratio.is_nan() || ratio.abs() > 1.0 + tolerance() {
        return Err(BulgeError::OutOfDomain { model: MODEL, value: ratio });
    }
    let separation_angle = ratio.clamp(-1.0, 1.0).asin();
    let separation_z = r2 * separation_angle.sin();

    let (left, right) = side_lobes(width, radius)?;

    if 2.0 * radius < pass.height() {
        let core = pass.nominal_cross_section(2.0 * separation_z.abs());
        return Ok(CrossSection::union_all([&left, &core, &right]));
    }

    let helper = pass.nominal_cross_section(width);
    let left = left.intersection(&helper);
    let right = right.intersection(&helper);
    Ok(match combination {
        LobeCombination::Union => left.union(&right),
        LobeCombination::Intersection => left.intersection(&right),
    })
}
