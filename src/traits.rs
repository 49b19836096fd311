use crate::float_types::Real;
use geo::Rect;
use nalgebra::{Matrix3, Rotation2, Translation2};

/// Boolean operations + transformations on planar regions.
///
/// Implementations never mutate their operands: every operation returns a new
/// region.
pub trait SectionOps: Sized + Clone {
    /// The empty region.
    fn new() -> Self;
    fn union(&self, other: &Self) -> Self;
    fn difference(&self, other: &Self) -> Self;
    fn intersection(&self, other: &Self) -> Self;
    /// Applies a homogeneous 2D transform.
    fn transform(&self, matrix: &Matrix3<Real>) -> Self;
    fn bounding_rect(&self) -> Option<Rect<Real>>;
    fn area(&self) -> Real;

    /// Returns a new Self translated by x and y.
    fn translate(&self, x: Real, y: Real) -> Self {
        self.transform(&Translation2::new(x, y).to_homogeneous())
    }

    /// Rotates counter-clockwise about the origin.
    fn rotate(&self, degrees: Real) -> Self {
        self.transform(&Rotation2::new(degrees.to_radians()).to_homogeneous())
    }

    /// Union of every region in `parts`; empty when `parts` is.
    fn union_all<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        parts
            .into_iter()
            .fold(Self::new(), |accumulated, part| accumulated.union(part))
    }

    /// Successive intersection of `parts`, left to right; empty when `parts` is.
    fn intersection_all<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut parts = parts.into_iter();
        let Some(first) = parts.next() else {
            return Self::new();
        };
        parts.fold(first.clone(), |accumulated, part| accumulated.intersection(part))
    }

    /// Total horizontal extent `|min x| + max x`; zero for an empty region.
    fn horizontal_extent(&self) -> Real {
        self.bounding_rect()
            .map(|rect| rect.min().x.abs() + rect.max().x)
            .unwrap_or(0.0)
    }
}
