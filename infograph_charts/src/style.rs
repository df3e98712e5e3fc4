// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved paint and typography shared by every chart family.
//!
//! Layout code never consults the payload directly; the input normalizer resolves a
//! [`ChartStyle`] once and every emitter reads from it.

use infograph_text::{TextRole, TextStyle};
use peniko::Brush;
use peniko::color::palette::css;

/// A stroke paint and width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Font styles per text role.
#[derive(Clone, Debug, PartialEq)]
pub struct Fonts {
    /// Tick values on radial and gauge scales.
    pub axis_tick: TextStyle,
    /// Category names (axis labels, treemap tiles, band labels).
    pub category: TextStyle,
    /// Formatted values and percentages.
    pub value: TextStyle,
    /// Legend entries.
    pub legend: TextStyle,
}

impl Fonts {
    /// Returns the style for a role.
    pub fn get(&self, role: TextRole) -> &TextStyle {
        match role {
            TextRole::AxisTick => &self.axis_tick,
            TextRole::CategoryLabel => &self.category,
            TextRole::ValueLabel => &self.value,
            TextRole::LegendLabel => &self.legend,
        }
    }
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            axis_tick: TextRole::AxisTick.style(),
            category: TextRole::CategoryLabel.style(),
            value: TextRole::ValueLabel.style(),
            legend: TextRole::LegendLabel.style(),
        }
    }
}

/// Non-series paint for a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Text paint for every label.
    pub text_fill: Brush,
    /// Light reference gridlines.
    pub grid: StrokeStyle,
    /// Background ring of a gauge.
    pub track_fill: Brush,
    /// Optional full-view background.
    pub background: Option<Brush>,
    /// Optional outline drawn around each series shape.
    ///
    /// Library-only: JSON payloads have no field for it, so payload renders never stroke.
    pub segment_stroke: Option<StrokeStyle>,
    /// Fonts per role.
    pub fonts: Fonts,
}

impl ChartStyle {
    /// Sets the text paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Sets the track paint.
    pub fn with_track_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.track_fill = fill.into();
        self
    }

    /// Sets the background paint.
    pub fn with_background(mut self, fill: impl Into<Brush>) -> Self {
        self.background = Some(fill.into());
        self
    }

    /// Sets the series outline.
    pub fn with_segment_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.segment_stroke = Some(stroke);
        self
    }

    /// Sets the fonts.
    pub fn with_fonts(mut self, fonts: Fonts) -> Self {
        self.fonts = fonts;
        self
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            text_fill: css::BLACK.into(),
            grid: StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0),
            track_fill: css::LIGHT_GRAY.into(),
            background: None,
            segment_stroke: None,
            fonts: Fonts::default(),
        }
    }
}
