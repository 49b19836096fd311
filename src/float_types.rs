// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `ROLLBULGE_TOLERANCE`
///     (e.g. `ROLLBULGE_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Polygonal resolution of bulge lobes and reference groove arcs.
/// Overridable through `ROLLBULGE_CIRCLE_SEGMENTS` or [`set_circle_segments`].
static CIRCLE_SEGMENTS_CELL: OnceLock<usize> = OnceLock::new();

/// Fewer segments than this turn a lobe into a visibly faceted polygon.
pub const MIN_CIRCLE_SEGMENTS: usize = 8;

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

#[inline]
const fn default_circle_segments() -> usize {
    128
}

/// Returns the current tolerance.
/// If not set yet, it tries `ROLLBULGE_TOLERANCE` (parsed as the active `Real`)
/// and falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("ROLLBULGE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `rollbulge::float_types::set_tolerance(1e-9);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Number of polygon edges used for every full circle.
pub fn circle_segments() -> usize {
    *CIRCLE_SEGMENTS_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("ROLLBULGE_CIRCLE_SEGMENTS") {
            if let Ok(value) = usize::from_str(environment_variable) {
                return value.max(MIN_CIRCLE_SEGMENTS);
            }
        }
        default_circle_segments()
    })
}

/// Set the circle resolution once (subsequent calls are ignored).
pub fn set_circle_segments(segments: usize) {
    let _ = CIRCLE_SEGMENTS_CELL.set(segments.max(MIN_CIRCLE_SEGMENTS));
}

/// `true` when `a` and `b` differ by less than [`tolerance`].
#[inline]
pub fn nearly_equal(a: Real, b: Real) -> bool {
    (a - b).abs() < tolerance()
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
