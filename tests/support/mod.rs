//! Test support library
//! Provides pass fixtures and a synthetic groove for the bulge tests.
#![allow(dead_code)]

use rollbulge::{
    CrossSection, GrooveGeometry, NominalSection, Pass, PassKind, Profile, Real, SectionOps,
    ShapeSet, ShapeTag, TriContact, TwoRollContour,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Groove whose nominal section is an axis-aligned rectangle: `height` tall,
/// as wide as the requested width but never wider than `extent`.
#[derive(Clone, Copy, Debug)]
pub struct RectNominal {
    pub height: Real,
    pub extent: Real,
}

impl NominalSection for RectNominal {
    fn nominal_cross_section(&self, target_width: Real) -> CrossSection {
        let width = target_width.min(self.extent);
        if width.is_nan() || width <= 0.0 {
            return CrossSection::new();
        }
        CrossSection::centered_rectangle(width, self.height)
    }
}

/// Pass over a [`RectNominal`] groove of forming radius `r2`.
pub fn rect_pass(
    kind: PassKind,
    incoming: ShapeTag,
    classifiers: ShapeSet,
    r2: Real,
    nominal: RectNominal,
) -> Pass {
    let in_profile = Profile::square(10.0).with_classifiers(ShapeSet::of(incoming));
    let groove = GrooveGeometry::new(0.0, r2, nominal.extent, nominal.height);
    Pass::new("rect", kind, in_profile, groove, classifiers, nominal)
}

/// Oval pass fed by a round bar of 71 mm.
pub fn round_oval_pass(kind: PassKind) -> Pass {
    let contour = TwoRollContour::oval(64.5, 9.42, 6.0);
    let groove = contour.geometry(6.0);
    Pass::new("oval", kind, Profile::round(71.0), groove, ShapeSet::of(ShapeTag::Oval), contour)
}

/// Diamond pass fed by a 45 mm square.
pub fn square_diamond_pass() -> Pass {
    let contour = TwoRollContour::vee(76.55, 8.0, 22.1, 3.0);
    let groove = contour.geometry(4.0);
    Pass::new(
        "diamond",
        PassKind::TwoRoll,
        Profile::square(45.0),
        groove,
        ShapeSet::of(ShapeTag::Diamond),
        contour,
    )
}

/// Three-roll pass fed by a 10 mm square (area 100) tagged `incoming`.
pub fn three_roll_pass(incoming: ShapeTag, outgoing: ShapeTag, contact: TriContact) -> Pass {
    let in_profile = Profile::square(10.0).with_classifiers(ShapeSet::of(incoming));
    let groove = GrooveGeometry::new(0.0, 12.0, 10.0, 10.0);
    Pass::new(
        "tri",
        PassKind::ThreeRoll,
        in_profile,
        groove,
        ShapeSet::from([outgoing, ShapeTag::ThreeFold]),
        RectNominal { height: 10.0, extent: 10.0 },
    )
    .with_contact(contact)
}
