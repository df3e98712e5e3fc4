// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text marks.

extern crate alloc;

use alloc::string::String;

use infograph_text::{TextMeasurer, TextStyle};
use kurbo::{Point, Rect};
use peniko::Brush;

use crate::primitive::{TextAnchor, TextBaseline};

/// A positioned, unshaped text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font settings.
    pub style: TextStyle,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation around `pos`, in degrees.
    pub angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMark {
    /// Creates a centered label with default styling.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            style: TextStyle::default(),
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            angle: 0.0,
            fill: Brush::default(),
            z_index: crate::z_order::DATA_LABELS,
        }
    }

    /// Sets the font style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Unrotated bounds estimated with `measurer`.
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        let metrics = measurer.measure(&self.text, &self.style);
        let (w, h) = (metrics.advance_width, metrics.line_height());
        let Point { x, y } = self.pos;
        let (x0, x1) = match self.anchor {
            TextAnchor::Start => (x, x + w),
            TextAnchor::Middle => (x - 0.5 * w, x + 0.5 * w),
            TextAnchor::End => (x - w, x),
        };
        let (y0, y1) = match self.baseline {
            TextBaseline::Middle => (y - 0.5 * h, y + 0.5 * h),
            TextBaseline::Alphabetic => (y - metrics.ascent, y + metrics.descent),
            TextBaseline::Hanging => (y, y + h),
        };
        Rect::new(x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use infograph_text::HeuristicTextMeasurer;

    use super::*;

    #[test]
    fn anchors_shift_bounds_horizontally() {
        let m = HeuristicTextMeasurer;
        let base = TextMark::new(Point::new(100.0, 50.0), "abcd").with_style(TextStyle::new(10.0));
        let mid = base.bounds(&m);
        let start = base.clone().with_anchor(TextAnchor::Start).bounds(&m);
        let end = base.with_anchor(TextAnchor::End).bounds(&m);
        assert!((mid.width() - start.width()).abs() < 1e-9);
        assert_eq!(start.x0, 100.0);
        assert_eq!(end.x1, 100.0);
        assert!((mid.center().x - 100.0).abs() < 1e-9);
    }
}
