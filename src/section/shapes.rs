//! 2D shapes as `CrossSection`s

use crate::float_types::{Real, TAU, circle_segments};
use crate::section::CrossSection;
use crate::traits::SectionOps;
use geo::{LineString, Polygon as GeoPolygon, line_string};
use nalgebra::Point2;

impl CrossSection {
    /// Creates a rectangle centred on the origin.
    pub fn centered_rectangle(width: Real, height: Real) -> Self {
        let (hw, hh) = (0.5 * width, 0.5 * height);
        let outer = line_string![
            (x: -hw, y: -hh),
            (x:  hw, y: -hh),
            (x:  hw, y:  hh),
            (x: -hw, y:  hh),
            (x: -hw, y: -hh),  // close explicitly
        ];
        GeoPolygon::new(outer, vec![]).into()
    }

    /// Creates a polygon from a list of `[x, y]` points describing its boundary in order.
    ///
    /// Fewer than three points give an empty section.
    pub fn polygon(points: &[[Real; 2]]) -> Self {
        let Some(first) = points.first() else {
            return CrossSection::new();
        };
        if points.len() < 3 {
            return CrossSection::new();
        }
        let mut coords: Vec<(Real, Real)> = points.iter().map(|p| (p[0], p[1])).collect();
        // close
        if coords.last() != Some(&(first[0], first[1])) {
            coords.push((first[0], first[1]));
        }
        GeoPolygon::new(LineString::from(coords), vec![]).into()
    }

    /// Circle of `radius` around the origin, discretised into `segments` edges.
    ///
    /// Vertices sit at `θᵢ = 2πi/n`, so the first one is `(radius, 0)` and an
    /// even `segments` count gives a polygon mirror-symmetric about both axes.
    pub fn circle(radius: Real, segments: usize) -> Self {
        if segments < 3 || radius <= 0.0 {
            return CrossSection::new();
        }
        let mut coords: Vec<(Real, Real)> = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                (radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        // close it
        coords.push(coords[0]);
        GeoPolygon::new(LineString::from(coords), vec![]).into()
    }

    /// Disk of `radius` around `center` at the configured circle resolution.
    pub fn disk(center: Point2<Real>, radius: Real) -> Self {
        CrossSection::circle(radius, circle_segments()).translate(center.x, center.y)
    }
}
