//! `CrossSection` struct and its implementation of the `SectionOps` trait.

use crate::float_types::{Real, tolerance};
use crate::traits::SectionOps;
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{
    AffineOps, AffineTransform, Area, BooleanOps as GeoBool, BoundingRect, Coord, Line,
    MultiPolygon, Polygon as GeoPolygon, Rect,
};
use nalgebra::Matrix3;
use std::sync::OnceLock;

pub mod shapes;

/// Material cross-section of a bar: a possibly multi-part planar region.
///
/// The x axis runs across the bar (width), the y axis along the pass height.
#[derive(Clone, Debug)]
pub struct CrossSection {
    pub polygons: MultiPolygon<Real>,

    /// Lazily calculated bounding rectangle of `polygons`.
    pub bounding_rect: OnceLock<Option<Rect<Real>>>,
}

impl PartialEq for CrossSection {
    fn eq(&self, other: &Self) -> bool {
        self.polygons == other.polygons
    }
}

impl CrossSection {
    pub fn from_geo(polygons: MultiPolygon<Real>) -> Self {
        Self {
            polygons,
            bounding_rect: OnceLock::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }

    /// Number of disjoint parts.
    pub fn part_count(&self) -> usize {
        self.polygons.0.len()
    }

    /// A single part without holes.
    pub fn is_simply_connected(&self) -> bool {
        matches!(self.polygons.0.as_slice(), [only] if only.interiors().is_empty())
    }

    /// Every edge of every ring, outer shells and holes alike.
    pub fn boundary_lines(&self) -> impl Iterator<Item = Line<Real>> + '_ {
        self.polygons.iter().flat_map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .flat_map(|ring| ring.lines())
        })
    }

    /// Points where the boundary of `self` crosses or touches the boundary of `other`.
    ///
    /// Collinear overlaps contribute both end points of the shared segment.
    /// Points closer than the tolerance are reported once.
    pub fn boundary_intersections(&self, other: &CrossSection) -> Vec<Coord<Real>> {
        let Some((own_rect, other_rect)) = self.bounding_rect().zip(other.bounding_rect())
        else {
            return Vec::new();
        };
        if !rects_overlap(&own_rect, &other_rect) {
            return Vec::new();
        }

        let other_lines: Vec<Line<Real>> = other.boundary_lines().collect();
        let mut points: Vec<Coord<Real>> = Vec::new();

        for own in self.boundary_lines() {
            for theirs in &other_lines {
                match line_intersection(own, *theirs) {
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        push_unique(&mut points, intersection);
                    },
                    Some(LineIntersection::Collinear { intersection }) => {
                        push_unique(&mut points, intersection.start);
                        push_unique(&mut points, intersection.end);
                    },
                    None => {},
                }
            }
        }
        points
    }
}

fn rects_overlap(a: &Rect<Real>, b: &Rect<Real>) -> bool {
    a.max().x >= b.min().x
        && a.min().x <= b.max().x
        && a.max().y >= b.min().y
        && a.min().y <= b.max().y
}

fn push_unique(points: &mut Vec<Coord<Real>>, candidate: Coord<Real>) {
    let eps = tolerance();
    let seen = points
        .iter()
        .any(|p| (p.x - candidate.x).abs() < eps && (p.y - candidate.y).abs() < eps);
    if !seen {
        points.push(candidate);
    }
}

impl From<GeoPolygon<Real>> for CrossSection {
    fn from(polygon: GeoPolygon<Real>) -> Self {
        CrossSection::from_geo(MultiPolygon::new(vec![polygon]))
    }
}

impl From<MultiPolygon<Real>> for CrossSection {
    fn from(polygons: MultiPolygon<Real>) -> Self {
        CrossSection::from_geo(polygons)
    }
}

impl SectionOps for CrossSection {
    fn new() -> Self {
        CrossSection::from_geo(MultiPolygon::new(Vec::new()))
    }

    fn union(&self, other: &CrossSection) -> CrossSection {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        CrossSection::from_geo(GeoBool::union(&self.polygons, &other.polygons))
    }

    fn difference(&self, other: &CrossSection) -> CrossSection {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        CrossSection::from_geo(GeoBool::difference(&self.polygons, &other.polygons))
    }

    fn intersection(&self, other: &CrossSection) -> CrossSection {
        if self.is_empty() || other.is_empty() {
            return CrossSection::new();
        }
        CrossSection::from_geo(GeoBool::intersection(&self.polygons, &other.polygons))
    }

    fn transform(&self, m: &Matrix3<Real>) -> CrossSection {
        // Only the affine part of the homogeneous matrix is meaningful in the plane.
        let affine = AffineTransform::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
        );
        CrossSection::from_geo(self.polygons.affine_transform(&affine))
    }

    fn bounding_rect(&self) -> Option<Rect<Real>> {
        *self
            .bounding_rect
            .get_or_init(|| BoundingRect::bounding_rect(&self.polygons))
    }

    fn area(&self) -> Real {
        self.polygons.unsigned_area()
    }
}
