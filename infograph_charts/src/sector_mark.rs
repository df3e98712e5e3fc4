// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) marks.
//!
//! Radial bars, gauge tracks and donut slices are all annular sectors described by inner/outer
//! radii and start/end angles.
//!
//! Angles are in radians and follow the d3 convention used by the chart templates: `0` points
//! to 12 o'clock and angles grow clockwise. [`polar`] maps such an angle to scene coordinates
//! (y pointing down).

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Arc, BezPath, Circle, Point, Rect, Shape, Vec2};
use peniko::Brush;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::style::StrokeStyle;
use crate::z_order;

/// Returns the point at `radius` from `center` in direction `angle` (12 o'clock, clockwise).
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.sin(),
        center.y - radius * angle.cos(),
    )
}

/// An annular sector.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcMark {
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
    /// Angular gap reserved inside `[start_angle, end_angle]`, split evenly between both ends.
    pub pad_angle: f64,
    /// Corner rounding radius, clamped to half the ring thickness when drawn.
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl ArcMark {
    /// Creates a new sector.
    pub fn new(
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            pad_angle: 0.0,
            corner_radius: 0.0,
            fill: Brush::default(),
            stroke: None,
            z_index: z_order::SERIES_FILL,
        }
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

    /// Sets the pad angle.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle.max(0.0);
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius.max(0.0);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Total angular extent, pad included.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Start/end angles of the painted region, after removing the pad.
    pub fn visible_angles(&self) -> (f64, f64) {
        let half_pad = (0.5 * self.pad_angle).min(0.5 * self.span().abs());
        (self.start_angle + half_pad, self.end_angle - half_pad)
    }

    /// Angular extent of the painted region.
    pub fn visible_span(&self) -> f64 {
        let (a0, a1) = self.visible_angles();
        a1 - a0
    }

    /// The midpoint of the sector (middle angle, middle radius), where inline labels go.
    pub fn centroid(&self) -> Point {
        let mid_angle = 0.5 * (self.start_angle + self.end_angle);
        let mid_radius = 0.5 * (self.inner_radius + self.outer_radius);
        polar(self.center, mid_radius, mid_angle)
    }

    /// Converts the painted region to a path.
    ///
    /// With a corner radius, each corner becomes a circular arc tangent to both of its edges.
    pub fn path(&self, tolerance: f64) -> BezPath {
        let (a0, a1) = self.visible_angles();
        let rc = self.drawn_corner_radius(a1 - a0);
        if rc <= 0.0 {
            return Circle::new(self.center, self.outer_radius)
                .segment(self.inner_radius, a0 - FRAC_PI_2, a1 - a0)
                .path_elements(tolerance)
                .collect();
        }

        let c = self.center;
        let (ro, ri) = (self.outer_radius, self.inner_radius);
        let mut path = BezPath::new();

        // Outer corners sit inside the outer circle.
        let d = ro - rc;
        let delta = (rc / d).asin();
        let foot = (d * d - rc * rc).sqrt();
        path.move_to(polar(c, foot, a0));
        corner(&mut path, polar(c, d, a0 + delta), rc, polar(c, ro, a0 + delta), tolerance);
        ring_arc(&mut path, c, ro, a0 + delta, a1 - delta, tolerance);
        corner(&mut path, polar(c, d, a1 - delta), rc, polar(c, foot, a1), tolerance);

        if ri > 0.0 {
            // Inner corners sit outside the inner circle.
            let d = ri + rc;
            let delta = (rc / d).asin();
            let foot = (d * d - rc * rc).sqrt();
            path.line_to(polar(c, foot, a1));
            corner(&mut path, polar(c, d, a1 - delta), rc, polar(c, ri, a1 - delta), tolerance);
            ring_arc(&mut path, c, ri, a1 - delta, a0 + delta, tolerance);
            corner(&mut path, polar(c, d, a0 + delta), rc, polar(c, foot, a0), tolerance);
        } else {
            path.line_to(c);
        }
        path.close_path();
        path
    }

    /// The corner radius that fits this sector's thickness and the visible span `span`.
    fn drawn_corner_radius(&self, span: f64) -> f64 {
        let thickness = self.outer_radius - self.inner_radius;
        if self.corner_radius <= 0.0 || thickness <= 0.0 || span <= 0.0 {
            return 0.0;
        }
        // Opposite corners on the same circle must not overlap.
        let s = (0.5 * span.min(PI)).sin();
        let mut rc = self.corner_radius.min(0.5 * thickness);
        rc = rc.min(self.outer_radius * s / (1.0 + s));
        if self.inner_radius > 0.0 && s < 1.0 {
            rc = rc.min(self.inner_radius * s / (1.0 - s));
        }
        rc
    }

    /// Bounding box of the painted region.
    pub fn bounds(&self) -> Rect {
        self.path(0.1).bounding_box()
    }
}

/// Appends the arc of `circle_radius` around `center` from `from` to `to` (12 o'clock, clockwise
/// angles). The current point must already sit at `from`.
fn ring_arc(
    path: &mut BezPath,
    center: Point,
    circle_radius: f64,
    from: f64,
    to: f64,
    tolerance: f64,
) {
    let arc = Arc::new(
        center,
        Vec2::new(circle_radius, circle_radius),
        from - FRAC_PI_2,
        to - from,
        0.0,
    );
    path.extend(arc.append_iter(tolerance));
}

/// Appends the short arc of radius `radius` around `center` from the current point to `to`.
fn corner(path: &mut BezPath, center: Point, radius: f64, to: Point, tolerance: f64) {
    let Some(from) = path.elements().last().and_then(|el| el.end_point()) else {
        return;
    };
    let start = (from - center).atan2();
    let mut sweep = (to - center).atan2() - start;
    if sweep > PI {
        sweep -= TAU;
    } else if sweep < -PI {
        sweep += TAU;
    }
    let arc = Arc::new(center, Vec2::new(radius, radius), start, sweep, 0.0);
    path.extend(arc.append_iter(tolerance));
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use peniko::color::palette::css;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn polar_zero_points_up_and_grows_clockwise() {
        let c = Point::new(50.0, 50.0);
        let top = polar(c, 10.0, 0.0);
        assert!(close(top.x, 50.0) && close(top.y, 40.0), "{top:?}");
        let right = polar(c, 10.0, FRAC_PI_2);
        assert!(close(right.x, 60.0) && close(right.y, 50.0), "{right:?}");
    }

    #[test]
    fn pad_is_removed_symmetrically() {
        let arc = ArcMark::new(Point::ZERO, 5.0, 10.0, 0.0, PI).with_pad_angle(0.2);
        let (a0, a1) = arc.visible_angles();
        assert!(close(a0, 0.1));
        assert!(close(a1, PI - 0.1));
        assert!(close(arc.visible_span(), PI - 0.2));
    }

    #[test]
    fn quarter_sector_bounds_sit_in_the_upper_right_quadrant() {
        let arc = ArcMark::new(Point::new(50.0, 50.0), 10.0, 20.0, 0.0, FRAC_PI_2)
            .with_fill(css::TOMATO);
        let b = arc.bounds();
        assert!(b.x0 >= 50.0 - 1e-3, "{b:?}");
        assert!(b.y1 <= 50.0 + 1e-3, "{b:?}");
        assert!((b.x1 - 70.0).abs() < 1e-3, "{b:?}");
        assert!((b.y0 - 30.0).abs() < 1e-3, "{b:?}");
    }

    #[test]
    fn rounded_corners_trim_the_sharp_outline() {
        let sharp = ArcMark::new(Point::new(100.0, 100.0), 40.0, 80.0, 0.0, FRAC_PI_2);
        let rounded = sharp.clone().with_corner_radius(4.0);
        let (p0, p1) = (sharp.path(1e-4), rounded.path(1e-4));
        assert_ne!(p0.elements(), p1.elements());

        let (b0, b1) = (p0.bounding_box(), p1.bounding_box());
        let outer = b0.inflate(1e-3, 1e-3);
        assert!(outer.contains(b1.origin()), "{b1:?} outside {b0:?}");
        assert!(outer.contains(Point::new(b1.x1, b1.y1)), "{b1:?} outside {b0:?}");

        let (a0, a1) = (p0.area().abs(), p1.area().abs());
        assert!(a1 < a0, "rounded area {a1} should be below {a0}");
        // Four corners each remove (1 - pi/4) r^2, give or take the curvature of the ring.
        let cut = 4.0 * (1.0 - PI / 4.0) * 16.0;
        assert!((a0 - a1 - cut).abs() < 0.5 * cut, "{}", a0 - a1);
        // The sharp corner at 12 o'clock on the outer edge is no longer painted.
        assert!(!p1.contains(Point::new(100.3, 20.3)));
        assert!(p0.contains(Point::new(100.3, 20.3)));
    }

    #[test]
    fn corner_radius_is_clamped_to_half_the_ring() {
        let arc = ArcMark::new(Point::ZERO, 40.0, 50.0, 0.0, PI).with_corner_radius(100.0);
        assert!(close(arc.drawn_corner_radius(arc.visible_span()), 5.0));
        let path = arc.path(1e-3);
        assert!(path.area().abs() > 0.0);
        let b = path.bounding_box();
        assert!(b.x1 <= 50.0 + 1e-3 && b.y0 >= -50.0 - 1e-3, "{b:?}");
    }

    #[test]
    fn pie_slices_round_only_the_outer_corners() {
        let arc = ArcMark::new(Point::ZERO, 0.0, 50.0, 0.0, FRAC_PI_2).with_corner_radius(6.0);
        let path = arc.path(1e-3);
        assert!(path.contains(Point::new(1.0, -1.0)));
        assert!(!path.contains(Point::new(0.2, -49.9)));
    }
}
