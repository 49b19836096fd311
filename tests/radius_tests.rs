mod support;

use rollbulge::{
    BulgeError, GrooveGeometry, Pass, PassKind, Profile, Real, ShapeSet, ShapeTag, TriContact,
    bulge::radius::{self, BYON_ECCENTRICITY_FACTOR, MIN_ECCENTRICITY_FACTOR},
    bulge_radius,
};
use support::{RectNominal, approx_eq, rect_pass, round_oval_pass, three_roll_pass};

fn two_roll(incoming: ShapeTag, outgoing: ShapeTag, groove: GrooveGeometry) -> Pass {
    let in_profile = Profile::square(10.0).with_classifiers(ShapeSet::of(incoming));
    let nominal = RectNominal { height: groove.height, extent: groove.usable_width };
    let classifiers = ShapeSet::of(outgoing);
    Pass::new("two-roll", PassKind::TwoRoll, in_profile, groove, classifiers, nominal)
}

const CONTACT: TriContact = TriContact {
    inscribed_circle_diameter: 8.0,
    displaced_area: 20.0,
};

#[test]
fn lee_round_oval_blends_equivalent_and_usable_radius() {
    let pass = round_oval_pass(PassKind::TwoRoll);
    let radius = bulge_radius(&pass, 69.0)
        .expect("valid geometry")
        .expect("round -> oval has a model");

    let usable_width = pass.groove.usable_width;
    let weight = (usable_width - 69.0) / (usable_width - 71.0);
    let usable_radius = 5.195641852173586;
    let expected = pass.in_profile.equivalent_radius() * weight + usable_radius * (1.0 - weight);
    assert!(approx_eq(radius, expected, 1e-6), "radius {radius}, expected {expected}");
    assert!(approx_eq(radius, 19.8553, 1e-3));
    assert!(radius > 0.0 && radius < pass.in_profile.equivalent_radius());
}

#[test]
fn lee_round_oval_at_incoming_width_is_equivalent_radius() {
    let pass = round_oval_pass(PassKind::TwoRoll);
    let radius = radius::lee_round_oval(&pass, pass.in_profile.width).expect("valid geometry");
    assert!(approx_eq(radius, pass.in_profile.equivalent_radius(), 1e-9));
}

#[test]
fn lee_round_oval_rejects_incoming_width_equal_to_usable_width() {
    let groove = GrooveGeometry::new(0.0, 20.0, 10.0, 8.0);
    let pass = two_roll(ShapeTag::Round, ShapeTag::Oval, groove);
    assert_eq!(
        radius::lee_round_oval(&pass, 9.0),
        Err(BulgeError::ZeroDenominator {
            model: "Lee round-oval",
            quantity: "usable width minus incoming width",
        })
    );
}

#[test]
fn lee_oval_round_needs_previous_groove() {
    let groove = GrooveGeometry::new(0.0, 20.0, 30.0, 40.0);
    let pass = two_roll(ShapeTag::Oval, ShapeTag::Round, groove);
    let error = bulge_radius(&pass, 20.0).expect_err("no previous groove");
    assert!(matches!(error, BulgeError::MissingInput { model: "Lee oval-round", .. }));
    assert!(!error.is_invalid_geometry());
}

#[test]
fn lee_oval_round_usable_radius() {
    let previous = GrooveGeometry::new(0.0, 64.5, 67.0, 25.0);

    // Height equal to the groove diameter: usable radius is 2·r2.
    let groove = GrooveGeometry::new(0.0, 20.0, 30.0, 40.0);
    let full = two_roll(ShapeTag::Oval, ShapeTag::Round, groove).with_previous_groove(previous);
    // weight = (30 - 20) / (30 - 10) = 0.5
    let radius = radius::lee_oval_round(&full, 20.0).expect("valid geometry");
    assert!(approx_eq(radius, 64.5 * 0.5 + 40.0 * 0.5, 1e-12));

    // Otherwise r2 + (height - 2·r2).
    let groove = GrooveGeometry::new(0.0, 20.0, 30.0, 38.0);
    let open = two_roll(ShapeTag::Oval, ShapeTag::Round, groove).with_previous_groove(previous);
    let radius = radius::lee_oval_round(&open, 20.0).expect("valid geometry");
    assert!(approx_eq(radius, 64.5 * 0.5 + 18.0 * 0.5, 1e-12));
}

#[test]
fn schmidt_closed_form() {
    let groove = GrooveGeometry::new(0.0, 8.0, 76.55, 47.2);
    let pass = two_roll(ShapeTag::Square, ShapeTag::Diamond, groove);
    let radius = radius::schmidt(&pass, 60.0).expect("valid geometry");
    // ((23.6)² + 30² - 2·8·23.6) / (2·(30 - 8))
    assert!(approx_eq(radius, 1079.36 / 44.0, 1e-9));
}

#[test]
fn schmidt_rejects_half_width_equal_to_r2() {
    let groove = GrooveGeometry::new(0.0, 8.0, 76.55, 47.2);
    let pass = two_roll(ShapeTag::Square, ShapeTag::Diamond, groove);
    let error = bulge_radius(&pass, 16.0).expect_err("vanishing denominator");
    assert!(error.is_invalid_geometry());
    assert!(matches!(error, BulgeError::ZeroDenominator { model: "Schmidt", .. }));
}

#[test]
fn schmidt_covers_every_square_family_transition() {
    let groove = GrooveGeometry::new(0.0, 8.0, 76.55, 47.2);
    for (incoming, outgoing) in [
        (ShapeTag::Square, ShapeTag::Diamond),
        (ShapeTag::Diamond, ShapeTag::Square),
        (ShapeTag::Oval, ShapeTag::Square),
        (ShapeTag::Square, ShapeTag::Oval),
    ] {
        let pass = two_roll(incoming, outgoing, groove);
        let strategy = radius::select_radius_model(&pass).expect("registered transition");
        assert_eq!(strategy.name, "Schmidt", "{incoming} -> {outgoing}");
    }
}

#[test]
fn unknown_transition_has_no_radius() {
    let groove = GrooveGeometry::new(0.0, 8.0, 20.0, 20.0);
    let pass = two_roll(ShapeTag::Round, ShapeTag::Square, groove);
    assert_eq!(bulge_radius(&pass, 15.0), Ok(None));

    // Three-roll models are not consulted for two-roll passes.
    let pass = two_roll(ShapeTag::Flat, ShapeTag::Flat, groove);
    assert_eq!(bulge_radius(&pass, 15.0), Ok(None));
}

#[test]
fn first_registered_transition_wins() {
    let groove = GrooveGeometry::new(0.0, 8.0, 76.55, 47.2);
    let in_profile =
        Profile::square(10.0).with_classifiers(ShapeSet::from([ShapeTag::Square, ShapeTag::Oval]));
    let pass = Pass::new(
        "ambiguous",
        PassKind::TwoRoll,
        in_profile,
        groove,
        ShapeSet::from([ShapeTag::Square, ShapeTag::Diamond]),
        RectNominal { height: 47.2, extent: 76.55 },
    );
    let strategy = radius::select_radius_model(&pass).expect("registered transition");
    assert_eq!(strategy.transition.to_string(), "square -> diamond");
}

#[test]
fn byon_geometric_is_half_width() {
    let pass = three_roll_pass(ShapeTag::Round, ShapeTag::Round, CONTACT);
    assert_eq!(bulge_radius(&pass, 12.0), Ok(Some(6.0)));
    let pass = three_roll_pass(ShapeTag::Oval, ShapeTag::Oval, CONTACT);
    assert_eq!(bulge_radius(&pass, 12.0), Ok(Some(6.0)));
}

#[test]
fn eccentricity_scales_displaced_share() {
    let pass = three_roll_pass(ShapeTag::Round, ShapeTag::Oval, CONTACT);
    // factor · 20 / 100 · 10 / 2
    let eccentricity =
        radius::eccentricity("test", &pass, BYON_ECCENTRICITY_FACTOR).expect("contact present");
    assert!(approx_eq(eccentricity, 3.133, 1e-12));
    let eccentricity =
        radius::eccentricity("test", &pass, MIN_ECCENTRICITY_FACTOR).expect("contact present");
    assert!(approx_eq(eccentricity, 2.4, 1e-12));
}

#[test]
fn three_roll_eccentricity_models() {
    let cases: [(ShapeTag, ShapeTag, Real); 4] = [
        (ShapeTag::Round, ShapeTag::Oval, (6.0 - 3.133 as Real).abs()),
        (ShapeTag::Oval, ShapeTag::Round, 4.0 + 3.133),
        (ShapeTag::Round, ShapeTag::Flat, 6.0 - 2.4),
        (ShapeTag::Flat, ShapeTag::Flat, 12.0 - 2.4),
    ];
    for (incoming, outgoing, expected) in cases {
        let pass = three_roll_pass(incoming, outgoing, CONTACT);
        let radius = bulge_radius(&pass, 12.0)
            .expect("valid geometry")
            .expect("registered transition");
        assert!(
            approx_eq(radius, expected, 1e-9),
            "{incoming} -> {outgoing}: {radius} vs {expected}"
        );
    }
}

#[test]
fn byon_round_oval_takes_absolute_value() {
    let pass = three_roll_pass(ShapeTag::Round, ShapeTag::Oval, CONTACT);
    let radius = radius::byon_round_oval(&pass, 2.0).expect("valid geometry");
    assert!(approx_eq(radius, 3.133 - 1.0, 1e-9));
}

#[test]
fn eccentricity_models_need_contact() {
    let pass = rect_pass(
        PassKind::ThreeRoll,
        ShapeTag::Flat,
        ShapeSet::of(ShapeTag::Flat),
        12.0,
        RectNominal { height: 10.0, extent: 10.0 },
    );
    let error = bulge_radius(&pass, 12.0).expect_err("no contact");
    assert!(matches!(error, BulgeError::MissingInput { model: "Min flat-flat", .. }));
}

#[test]
fn symmetric_three_fold_pass_uses_three_roll_models() {
    let pass = rect_pass(
        PassKind::Symmetric,
        ShapeTag::Round,
        ShapeSet::from([ShapeTag::Round, ShapeTag::ThreeFold]),
        12.0,
        RectNominal { height: 10.0, extent: 10.0 },
    );
    assert!(pass.is_three_fold());
    assert_eq!(bulge_radius(&pass, 12.0), Ok(Some(6.0)));
}

#[test]
fn non_finite_radius_is_reported() {
    let pass = three_roll_pass(ShapeTag::Round, ShapeTag::Round, CONTACT);
    let error = bulge_radius(&pass, Real::INFINITY).expect_err("infinite width");
    assert!(matches!(error, BulgeError::NonFinite { model: "Byon geometric", .. }));
    assert!(error.is_invalid_geometry());
}
