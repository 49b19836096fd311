//! Bulge computation errors

use crate::float_types::Real;
use std::fmt::Display;

/// Everything that can stop a single pass's bulge correction.
///
/// A transition without a registered model is *not* an error: it resolves to
/// `Ok(None)`. Likewise the degenerate round-oval case falls back to the
/// nominal section and never surfaces here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BulgeError {
    /// (ZeroDenominator) A formula divides by a quantity that vanished
    ZeroDenominator { model: &'static str, quantity: &'static str },
    /// (OutOfDomain) An `asin` argument left `[-1, 1]`
    OutOfDomain { model: &'static str, value: Real },
    /// (NonFinite) A formula produced NaN or an infinity
    NonFinite { model: &'static str, value: Real },
    /// (NonPositiveRadius) A lobe cannot be built from this radius
    NonPositiveRadius(Real),
    /// (MissingInput) The host did not provide an input the model reads
    MissingInput { model: &'static str, input: &'static str },
    /// (AlreadyResolved) A write-once profile field was written twice
    AlreadyResolved(&'static str),
}

impl BulgeError {
    /// Geometry inconsistencies the host may turn into a skipped correction.
    pub const fn is_invalid_geometry(&self) -> bool {
        matches!(
            self,
            BulgeError::ZeroDenominator { .. }
                | BulgeError::OutOfDomain { .. }
                | BulgeError::NonFinite { .. }
                | BulgeError::NonPositiveRadius(_)
        )
    }
}

impl Display for BulgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BulgeError::ZeroDenominator { model, quantity } => {
                write!(f, "(ZeroDenominator) {} divides by a vanishing {}", model, quantity)
            },
            BulgeError::OutOfDomain { model, value } => {
                write!(f, "(OutOfDomain) {} evaluated asin({}) outside [-1, 1]", model, value)
            },
            BulgeError::NonFinite { model, value } => {
                write!(f, "(NonFinite) {} produced a non-finite value: {}", model, value)
            },
            BulgeError::NonPositiveRadius(radius) => write!(
                f,
                "(NonPositiveRadius) A bulge lobe needs a positive radius, got: {}",
                radius
            ),
            BulgeError::MissingInput { model, input } => {
                write!(f, "(MissingInput) {} requires {}", model, input)
            },
            BulgeError::AlreadyResolved(field) => write!(
                f,
                "(AlreadyResolved) The profile's {} was already set for this pass",
                field
            ),
        }
    }
}
