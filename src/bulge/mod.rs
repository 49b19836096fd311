//! Bulge radius estimation and cross-section correction.

use crate::errors::BulgeError;
use crate::float_types::{Real, tolerance};

pub mod adapter;
pub mod radius;
pub mod three_roll;
pub mod two_roll;

pub use adapter::{BulgeAdapter, ResolverChain, corrected_cross_section};
pub use radius::bulge_radius;

pub(crate) fn finite(model: &'static str, value: Real) -> Result<Real, BulgeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BulgeError::NonFinite { model, value })
    }
}

pub(crate) fn nonzero(
    model: &'static str,
    quantity: &'static str,
    value: Real,
) -> Result<Real, BulgeError> {
    if value.abs() < tolerance() {
        Err(BulgeError::ZeroDenominator { model, quantity })
    } else {
        Ok(value)
    }
}

/// Lobes need a finite, strictly positive radius.
pub(crate) fn lobe_radius(radius: Real) -> Result<Real, BulgeError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(BulgeError::NonPositiveRadius(radius))
    }
}
