// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart labels.
//!
//! Infograph charts measure text for two reasons: to reserve space for guides (legends) and to
//! make label placement decisions (truncating a treemap label, hiding a value that would
//! overflow its cell). Glyph shaping stays downstream, so chart code only depends on the tiny
//! [`TextMeasurer`] interface defined here.
//!
//! The crate also owns the font-size tiers used across chart families ([`TextRole`]) and the
//! ellipsis truncation helper ([`truncate_to_width`]).

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

/// The ellipsis appended by [`truncate_to_width`].
pub const ELLIPSIS: char = '\u{2026}';

/// A minimal text measurement interface used by label placement and legends.
///
/// Implementations can be heuristic (fast, inaccurate) or backed by a real shaping engine.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// The semantic role of a piece of chart text.
///
/// Each role maps to a fixed default size tier so charts of different families read
/// consistently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Tick values along a radial or gauge scale.
    AxisTick,
    /// Category names next to bars, bands and cells.
    CategoryLabel,
    /// Inline values and percentages.
    ValueLabel,
    /// Legend entries.
    LegendLabel,
}

impl TextRole {
    /// Default font size for this role, in pixels.
    #[must_use]
    pub fn default_font_size(self) -> f64 {
        match self {
            Self::AxisTick => 12.0,
            Self::CategoryLabel => 14.0,
            Self::ValueLabel => 16.0,
            Self::LegendLabel => 10.0,
        }
    }

    /// Returns the default style for this role.
    #[must_use]
    pub fn style(self) -> TextStyle {
        TextStyle::new(self.default_font_size())
    }
}

/// Text styling inputs relevant to measurement and emission.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        TextRole::AxisTick.style()
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Parses a CSS-ish family name, mapping the generic keywords to their variants.
    #[must_use]
    pub fn from_css(name: &str) -> Self {
        match name.trim() {
            "serif" => Self::Serif,
            "sans-serif" | "" => Self::SansSerif,
            "monospace" => Self::Monospace,
            other => Self::Named(Arc::from(other)),
        }
    }

    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A heuristic text measurer.
///
/// Assumes an average glyph width of ~0.6em (a little wider for bold text) and a baseline at
/// ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em = if style.font_weight >= FontWeight::BOLD {
            0.65
        } else {
            0.6
        };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

/// Shortens `text` until it fits in `max_width`.
///
/// Characters are dropped from the end one at a time and an ellipsis is appended, until the
/// measured width fits. Returns the text unchanged when it already fits, and `None` when not
/// even a single character plus the ellipsis fits.
pub fn truncate_to_width(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
    max_width: f64,
) -> Option<String> {
    if measurer.measure(text, style).advance_width <= max_width {
        return Some(String::from(text));
    }
    let mut kept: String = String::from(text);
    while kept.pop().is_some() {
        if kept.is_empty() {
            break;
        }
        let mut candidate = kept.clone();
        candidate.push(ELLIPSIS);
        if measurer.measure(&candidate, style).advance_width <= max_width {
            return Some(candidate);
        }
    }
    None
}
