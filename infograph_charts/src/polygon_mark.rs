// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon marks (pyramid and funnel bands).

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use smallvec::SmallVec;

use crate::style::StrokeStyle;
use crate::z_order;

/// A closed, filled polygon.
///
/// Bands are trapezoids (or a triangle at a pyramid apex), so four points are stored inline.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonMark {
    /// Vertices in drawing order; the outline closes back to the first point.
    pub points: SmallVec<[Point; 4]>,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PolygonMark {
    /// Creates a polygon from its vertices.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill: Brush::default(),
            stroke: None,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Creates a horizontal trapezoid centered on `center_x`.
    ///
    /// A zero-width edge collapses to a single vertex, so the apex of a pyramid is a triangle.
    pub fn trapezoid(center_x: f64, y_top: f64, top_width: f64, y_bottom: f64, bottom_width: f64) -> Self {
        let mut points: SmallVec<[Point; 4]> = SmallVec::new();
        if top_width > 0.0 {
            points.push(Point::new(center_x - 0.5 * top_width, y_top));
            points.push(Point::new(center_x + 0.5 * top_width, y_top));
        } else {
            points.push(Point::new(center_x, y_top));
        }
        if bottom_width > 0.0 {
            points.push(Point::new(center_x + 0.5 * bottom_width, y_bottom));
            points.push(Point::new(center_x - 0.5 * bottom_width, y_bottom));
        } else {
            points.push(Point::new(center_x, y_bottom));
        }
        Self::new(points)
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Unsigned area (shoelace formula).
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        0.5 * twice.abs()
    }

    /// Bounding box of the vertices.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.points.iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        iter.fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
    }

    /// Converts the polygon to a closed path.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, p) in self.points.iter().enumerate() {
            if i == 0 {
                path.move_to(*p);
            } else {
                path.line_to(*p);
            }
        }
        if !self.points.is_empty() {
            path.close_path();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn trapezoid_area_matches_formula() {
        let band = PolygonMark::trapezoid(50.0, 10.0, 20.0, 30.0, 60.0);
        assert_eq!(band.points.len(), 4);
        // (20 + 60) / 2 * 20
        assert!((band.area() - 800.0).abs() < 1e-9);
    }

    #[test]
    fn zero_top_width_collapses_to_a_triangle() {
        let apex = PolygonMark::trapezoid(50.0, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(apex.points.len(), 3);
        assert!((apex.area() - 50.0).abs() < 1e-9);
        let b = apex.bounds();
        assert_eq!(b, Rect::new(45.0, 0.0, 55.0, 10.0));
    }
}
