// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule marks.
//!
//! A "rule" is a straight stroked segment: radial tick lines, gauge tick marks and gridlines.

use kurbo::Point;

use crate::style::StrokeStyle;
use crate::z_order;

/// A stroked line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMark {
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Stroke paint and width.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMark {
    /// Creates a new rule between two points.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            p0,
            p1,
            stroke: StrokeStyle::default(),
            z_index: z_order::GRID_LINES,
        }
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }
}
