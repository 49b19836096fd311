//! Wires the bulge models into a host pass pipeline.
//!
//! Derived attributes are resolved through [`ResolverChain`]s: ordered lists
//! of named strategies where the first `Some` wins. The default chains are
//! `[bulge model]` for the radius and `[bulged, nominal]` for the
//! cross-section, so a transition without a model leaves the nominal section
//! in place.

use crate::bulge::{radius, three_roll, two_roll};
use crate::errors::BulgeError;
use crate::float_types::Real;
use crate::pass::{Pass, PassKind};
use crate::profile::Profile;
use crate::section::CrossSection;
use tracing::{debug, warn};

/// Resolves one derived attribute of `profile` in the context of `pass`.
pub type Resolver<T> = fn(&Pass, &Profile) -> Result<Option<T>, BulgeError>;

/// Ordered resolver strategies for one derived attribute.
#[derive(Clone, Debug)]
pub struct ResolverChain<T> {
    strategies: Vec<(&'static str, Resolver<T>)>,
}

impl<T> Default for ResolverChain<T> {
    fn default() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }
}

impl<T> ResolverChain<T> {
    /// Appends a strategy with lower priority than every one already present.
    pub fn then(mut self, name: &'static str, resolver: Resolver<T>) -> Self {
        self.strategies.push((name, resolver));
        self
    }

    /// Strategy names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|(name, _)| *name)
    }

    /// Value of the first strategy that yields one. Errors stop the chain.
    pub fn resolve(&self, pass: &Pass, profile: &Profile) -> Result<Option<T>, BulgeError> {
        for (name, resolver) in &self.strategies {
            if let Some(value) = resolver(pass, profile)? {
                debug!(pass = %pass.label, resolver = name, "attribute resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

impl ResolverChain<Real> {
    pub fn bulge_radius() -> Self {
        ResolverChain::default().then("bulge model", resolve_bulge_radius)
    }
}

impl ResolverChain<CrossSection> {
    pub fn cross_section() -> Self {
        ResolverChain::default()
            .then("bulged", resolve_bulged_section)
            .then("nominal", resolve_nominal_section)
    }
}

fn resolve_bulge_radius(pass: &Pass, profile: &Profile) -> Result<Option<Real>, BulgeError> {
    radius::bulge_radius(pass, profile.width)
}

/// Bulged section for the profile's radius; `None` without a radius or a
/// matching corrector.
pub fn resolve_bulged_section(
    pass: &Pass,
    profile: &Profile,
) -> Result<Option<CrossSection>, BulgeError> {
    let Some(radius) = profile.bulge_radius() else {
        return Ok(None);
    };
    if pass.is_three_fold() {
        three_roll::correct(pass, profile, radius)
    } else {
        two_roll::correct(pass, profile, radius)
    }
}

fn resolve_nominal_section(
    _pass: &Pass,
    profile: &Profile,
) -> Result<Option<CrossSection>, BulgeError> {
    Ok(Some(profile.cross_section().clone()))
}

/// Corrected section of `profile`, or its current section unchanged when no
/// radius is present or no corrector applies.
pub fn corrected_cross_section(pass: &Pass, profile: &Profile) -> Result<CrossSection, BulgeError> {
    Ok(resolve_bulged_section(pass, profile)?.unwrap_or_else(|| profile.cross_section().clone()))
}

/// Runs the radius chain, then the cross-section chain, for each pass.
#[derive(Clone, Debug)]
pub struct BulgeAdapter {
    pub radius: ResolverChain<Real>,
    pub cross_section: ResolverChain<CrossSection>,
}

impl Default for BulgeAdapter {
    fn default() -> Self {
        Self {
            radius: ResolverChain::bulge_radius(),
            cross_section: ResolverChain::cross_section(),
        }
    }
}

impl BulgeAdapter {
    /// Resolves both attributes onto a copy of `profile` and commits the copy
    /// only if both succeed, so a failure leaves `profile` untouched.
    ///
    /// A resolved section equal to the current one (the nominal fallback, or
    /// a degenerate bulge) is not a correction and leaves the profile
    /// uncorrected.
    pub fn resolve_onto(&self, pass: &Pass, profile: &mut Profile) -> Result<(), BulgeError> {
        let mut resolved = profile.clone();
        if let Some(radius) = self.radius.resolve(pass, &resolved)? {
            resolved.set_bulge_radius(radius)?;
        }
        if let Some(section) = self.cross_section.resolve(pass, &resolved)? {
            if section != *resolved.cross_section() {
                resolved.replace_cross_section(section)?;
            }
        }
        *profile = resolved;
        Ok(())
    }

    /// Attaches bulge radius and corrected section for one pass.
    ///
    /// Two-roll and three-roll passes write onto `out_profile`. Symmetric
    /// passes run as a post-processing step against the *incoming* profile
    /// and write onto `pass.in_profile`, leaving `out_profile` untouched.
    pub fn apply(&self, pass: &mut Pass, out_profile: &mut Profile) -> Result<(), BulgeError> {
        match pass.kind {
            PassKind::Symmetric => {
                let mut incoming = pass.in_profile.clone();
                self.resolve_onto(pass, &mut incoming)?;
                pass.in_profile = incoming;
                Ok(())
            },
            PassKind::TwoRoll | PassKind::ThreeRoll => self.resolve_onto(pass, out_profile),
        }
    }

    /// Like [`apply`](Self::apply), but an invalid-geometry failure only skips
    /// this pass's correction. Returns whether the correction was applied.
    pub fn apply_or_skip(
        &self,
        pass: &mut Pass,
        out_profile: &mut Profile,
    ) -> Result<bool, BulgeError> {
        match self.apply(pass, out_profile) {
            Ok(()) => Ok(true),
            Err(error) if error.is_invalid_geometry() => {
                warn!(pass = %pass.label, %error, "skipping bulge correction");
                Ok(false)
            },
            Err(error) => Err(error),
        }
    }
}
