//! Free-surface **bulging** of rolled bar cross-sections.
//!
//! A bar squeezed between rolls spreads sideways, and its free surfaces bulge
//! outward instead of following the groove. This crate estimates a *bulge
//! radius* per pass from empirical models and corrects the groove-bounded
//! nominal cross-section by splicing in circular lobes of that radius, using
//! Boolean operations on planar regions stored as [`geo`] multipolygons.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Pipeline
//! The host owns the pass chain. For every solved pass it hands the pass and
//! its outgoing [`Profile`] to a [`BulgeAdapter`], which
//! 1. selects a radius model by the [`Transition`] between the incoming
//!    profile's and the pass's [`ShapeTag`]s,
//! 2. records the radius on the profile (write-once),
//! 3. replaces the profile's nominal [`CrossSection`] with the bulged one.
//!
//! Transitions without a model leave the profile unchanged.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod bulge;
pub mod contour;
pub mod errors;
pub mod float_types;
pub mod groove;
pub mod pass;
pub mod profile;
pub mod section;
pub mod shape;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bulge::{BulgeAdapter, ResolverChain, bulge_radius, corrected_cross_section};
pub use contour::{GrooveGround, ThreeRollContour, TwoRollContour};
pub use errors::BulgeError;
pub use float_types::Real;
pub use groove::{GrooveGeometry, NominalSection};
pub use pass::{Pass, PassKind, TriContact};
pub use profile::Profile;
pub use section::CrossSection;
pub use shape::{ShapeSet, ShapeTag, Transition};
pub use traits::SectionOps;
