//! Empirical bulge radius models, selected by shape transition.
//!
//! Every model maps (incoming profile, pass groove, profile width) to a
//! radius. Which model applies is decided by an ordered strategy table per
//! topology; the first transition carried by both the incoming profile and
//! the pass wins. No match means no bulging.

use crate::bulge::{finite, nonzero};
use crate::errors::BulgeError;
use crate::float_types::{Real, nearly_equal};
use crate::pass::Pass;
use crate::shape::ShapeTag::{self, Diamond, Flat, Oval, Round, Square};
use crate::shape::Transition;
use tracing::debug;

/// Eccentricity factor of Byon's three-roll round/oval models.
pub const BYON_ECCENTRICITY_FACTOR: Real = 3.133;
/// Eccentricity factor of Min's three-roll flat models.
pub const MIN_ECCENTRICITY_FACTOR: Real = 2.40;

/// Radius model: `(pass, profile width) -> radius`.
pub type RadiusModel = fn(&Pass, Real) -> Result<Real, BulgeError>;

/// One row of a radius strategy table.
#[derive(Clone, Copy, Debug)]
pub struct RadiusStrategy {
    pub transition: Transition,
    pub name: &'static str,
    pub model: RadiusModel,
}

const fn strategy(
    from: ShapeTag,
    to: ShapeTag,
    name: &'static str,
    model: RadiusModel,
) -> RadiusStrategy {
    RadiusStrategy {
        transition: Transition::new(from, to),
        name,
        model,
    }
}

/// Two-roll passes (plain and symmetric).
pub static TWO_ROLL_RADIUS: [RadiusStrategy; 6] = [
    strategy(Round, Oval, "Lee round-oval", lee_round_oval),
    strategy(Oval, Round, "Lee oval-round", lee_oval_round),
    strategy(Square, Diamond, "Schmidt", schmidt),
    strategy(Diamond, Square, "Schmidt", schmidt),
    strategy(Oval, Square, "Schmidt", schmidt),
    strategy(Square, Oval, "Schmidt", schmidt),
];

/// Three-roll passes and three-fold symmetric passes.
pub static THREE_ROLL_RADIUS: [RadiusStrategy; 6] = [
    strategy(Round, Round, "Byon geometric", byon_geometric),
    strategy(Round, Flat, "Min round-flat", min_round_flat),
    strategy(Round, Oval, "Byon round-oval", byon_round_oval),
    strategy(Oval, Oval, "Byon geometric", byon_geometric),
    strategy(Oval, Round, "Byon oval-round", byon_oval_round),
    strategy(Flat, Flat, "Min flat-flat", min_flat_flat),
];

/// The strategy table for the pass's topology.
pub fn radius_strategies(pass: &Pass) -> &'static [RadiusStrategy] {
    if pass.is_three_fold() {
        &THREE_ROLL_RADIUS
    } else {
        &TWO_ROLL_RADIUS
    }
}

/// First strategy whose transition the pass carries.
pub fn select_radius_model(pass: &Pass) -> Option<&'static RadiusStrategy> {
    radius_strategies(pass)
        .iter()
        .find(|candidate| pass.has_transition(candidate.transition))
}

/// Bulge radius of a profile of `width` leaving (or, for symmetric passes,
/// entering) `pass`. `Ok(None)` when no model covers the transition.
pub fn bulge_radius(pass: &Pass, width: Real) -> Result<Option<Real>, BulgeError> {
    let Some(strategy) = select_radius_model(pass) else {
        debug!(pass = %pass.label, "no bulge radius model for this transition");
        return Ok(None);
    };
    let radius = finite(strategy.name, (strategy.model)(pass, width)?)?;
    debug!(
        pass = %pass.label,
        model = strategy.name,
        transition = %strategy.transition,
        radius,
        "resolved bulge radius"
    );
    Ok(Some(radius))
}

/// Position of `width` between the groove's usable width (0) and the incoming width (1).
fn lee_weight(model: &'static str, pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    let usable_width = pass.groove.usable_width;
    let span = nonzero(
        model,
        "usable width minus incoming width",
        usable_width - pass.in_profile.width,
    )?;
    Ok((usable_width - width) / span)
}

/// Lee, round to oval: blends the incoming equivalent radius with the radius
/// of the arc through the usable-width edges and the pass height.
pub fn lee_round_oval(pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    const MODEL: &str = "Lee round-oval";
    let groove = &pass.groove;
    let weight = lee_weight(MODEL, pass, width)?;

    let height = pass.height();
    let usable_radius = (groove.r2 * height
        - (groove.usable_width * groove.usable_width + height * height) / 4.0)
        / nonzero(MODEL, "2·r2 minus usable width", 2.0 * groove.r2 - groove.usable_width)?;

    Ok(pass.in_profile.equivalent_radius() * weight + usable_radius * (1.0 - weight))
}

/// Lee, oval to round: blends the previous oval groove's radius with a
/// usable radius of the round groove.
pub fn lee_oval_round(pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    const MODEL: &str = "Lee oval-round";
    let previous = pass.previous_groove.ok_or(BulgeError::MissingInput {
        model: MODEL,
        input: "the groove of the previous pass",
    })?;
    let weight = lee_weight(MODEL, pass, width)?;

    let r2 = pass.groove.r2;
    let height = pass.height();
    let usable_radius = if nearly_equal(height, 2.0 * r2) {
        2.0 * r2
    } else {
        r2 + (height - 2.0 * r2)
    };

    Ok(previous.r2 * weight + usable_radius * (1.0 - weight))
}

/// Schmidt: circle through the pass-height tip and the profile edge, tangent
/// to the groove ground arc.
pub fn schmidt(pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    const MODEL: &str = "Schmidt";
    let r2 = pass.groove.r2;
    let half_height = pass.height() / 2.0;
    let half_width = width / 2.0;

    let denominator = nonzero(MODEL, "half width minus r2", 2.0 * (half_width - r2))?;
    Ok((half_height * half_height + half_width * half_width - 2.0 * r2 * half_height) / denominator)
}

/// Byon, three-roll round-round and oval-oval: lobe tangent to the profile edge.
pub fn byon_geometric(_pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    Ok(width / 2.0)
}

/// Offset of the lobe centre derived from the share of displaced material.
pub fn eccentricity(model: &'static str, pass: &Pass, factor: Real) -> Result<Real, BulgeError> {
    let contact = pass.contact.ok_or(BulgeError::MissingInput {
        model,
        input: "the displaced cross-section area",
    })?;
    let incoming_area = nonzero(model, "incoming cross-section area", pass.in_profile.area())?;
    Ok(factor * contact.displaced_area / incoming_area * pass.in_profile.width / 2.0)
}

pub fn byon_round_oval(pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    let eccentricity = eccentricity("Byon round-oval", pass, BYON_ECCENTRICITY_FACTOR)?;
    Ok((width / 2.0 - eccentricity).abs())
}

pub fn byon_oval_round(pass: &Pass, _width: Real) -> Result<Real, BulgeError> {
    const MODEL: &str = "Byon oval-round";
    let eccentricity = eccentricity(MODEL, pass, BYON_ECCENTRICITY_FACTOR)?;
    let contact = pass.contact.ok_or(BulgeError::MissingInput {
        model: MODEL,
        input: "the inscribed circle diameter",
    })?;
    Ok(contact.inscribed_circle_diameter / 2.0 + eccentricity)
}

pub fn min_round_flat(pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    let eccentricity = eccentricity("Min round-flat", pass, MIN_ECCENTRICITY_FACTOR)?;
    Ok((width / 2.0 - eccentricity).abs())
}

/// Min, flat to flat. Uses the full width, unlike round-flat.
pub fn min_flat_flat(pass: &Pass, width: Real) -> Result<Real, BulgeError> {
    let eccentricity = eccentricity("Min flat-flat", pass, MIN_ECCENTRICITY_FACTOR)?;
    Ok((width - eccentricity).abs())
}
