// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend generation: one swatch and label per entry, on fixed-height rows.
//!
//! Use this with the measure/arrange pass in [`crate::layout`]:
//! - Measure: [`LegendSpec::measure`] returns the desired size.
//! - Arrange: [`LegendSpec::primitives`] emits the legend at a known origin.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use infograph_text::{TextMeasurer, TextRole, TextStyle};
use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::image_mark::ImageMark;
use crate::layout::Size;
use crate::palette::CategoryFills;
use crate::primitive::{Primitive, TextAnchor, TextBaseline};
use crate::rect_mark::RectMark;
use crate::text_mark::TextMark;
use crate::z_order;

/// A legend row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Label shown next to the swatch.
    pub label: String,
    /// Swatch paint.
    pub fill: Brush,
    /// Optional icon drawn between the swatch and the label.
    pub icon: Option<String>,
}

impl LegendItem {
    /// Creates an item without an icon.
    pub fn new(label: impl Into<String>, fill: impl Into<Brush>) -> Self {
        Self {
            label: label.into(),
            fill: fill.into(),
            icon: None,
        }
    }

    /// Sets the icon location.
    pub fn with_icon(mut self, href: impl Into<String>) -> Self {
        self.icon = Some(href.into());
        self
    }
}

/// An unpositioned legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSpec {
    /// Row height.
    pub row_height: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Icon square size.
    pub icon_size: f64,
    /// Horizontal gap between swatch, icon and label.
    pub label_dx: f64,
    /// Label font.
    pub font: TextStyle,
    /// Label paint.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSpec {
    /// Creates a legend with 20px rows and 10px text.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            row_height: 20.0,
            swatch_size: 10.0,
            icon_size: 16.0,
            label_dx: 6.0,
            font: TextRole::LegendLabel.style(),
            text_fill: css::BLACK.into(),
            items,
        }
    }

    /// One item per key of `fills`, in display order.
    pub fn from_fills(fills: &CategoryFills) -> Self {
        Self::new(
            fills
                .entries()
                .map(|(key, fill)| LegendItem::new(key, fill))
                .collect(),
        )
    }

    /// Sets the label font.
    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    /// Sets the label paint.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn has_icons(&self) -> bool {
        self.items.iter().any(|i| i.icon.is_some())
    }

    fn label_x(&self) -> f64 {
        let mut x = self.swatch_size + self.label_dx;
        if self.has_icons() {
            x += self.icon_size + self.label_dx;
        }
        x
    }

    /// Measures the desired legend size.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        if self.items.is_empty() {
            return Size::default();
        }
        let label_w = self
            .items
            .iter()
            .map(|i| measurer.measure(&i.label, &self.font).advance_width)
            .fold(0.0_f64, f64::max);
        Size {
            width: self.label_x() + label_w,
            height: self.row_height * self.items.len() as f64,
        }
    }

    /// Emits swatches, icons and labels with the top-left corner at `origin`.
    pub fn primitives(&self, origin: Point) -> Vec<Primitive> {
        let mut out = Vec::new();
        let label_x = origin.x + self.label_x();
        for (i, item) in self.items.iter().enumerate() {
            let y = origin.y + i as f64 * self.row_height;
            let mid_y = y + 0.5 * self.row_height;

            let s = self.swatch_size;
            out.push(
                RectMark::new(Rect::new(origin.x, mid_y - 0.5 * s, origin.x + s, mid_y + 0.5 * s))
                    .with_fill(item.fill.clone())
                    .with_z_index(z_order::LEGEND_SWATCHES)
                    .into(),
            );

            if let Some(href) = &item.icon {
                let x0 = origin.x + s + self.label_dx;
                let k = self.icon_size;
                out.push(
                    ImageMark::new(Rect::new(x0, mid_y - 0.5 * k, x0 + k, mid_y + 0.5 * k), href.clone())
                        .into(),
                );
            }

            out.push(
                TextMark::new(Point::new(label_x, mid_y), item.label.clone())
                    .with_style(self.font.clone())
                    .with_fill(self.text_fill.clone())
                    .with_anchor(TextAnchor::Start)
                    .with_baseline(TextBaseline::Middle)
                    .with_z_index(z_order::LEGEND_LABELS)
                    .into(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use infograph_text::HeuristicTextMeasurer;

    use super::*;
    use crate::primitive::PrimitiveKind;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem::new("A", css::RED),
            LegendItem::new("BBBB", css::BLUE),
            LegendItem::new("CC", css::GREEN),
        ]
    }

    #[test]
    fn rows_are_twenty_pixels_tall() {
        let spec = LegendSpec::new(items());
        let size = spec.measure(&HeuristicTextMeasurer);
        assert_eq!(size.height, 60.0);
        // swatch 10 + gap 6 + "BBBB" at 6px per glyph.
        assert!((size.width - (16.0 + 24.0)).abs() < 1e-9);

        let prims = spec.primitives(Point::new(100.0, 50.0));
        let labels: Vec<_> = prims.iter().filter_map(Primitive::as_label).collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[2].pos.y, 50.0 + 2.0 * 20.0 + 10.0);
        assert_eq!(labels[0].style.font_size, 10.0);
    }

    #[test]
    fn bounds_match_measure() {
        let spec = LegendSpec::new(items());
        let size = spec.measure(&HeuristicTextMeasurer);
        let b = spec
            .primitives(Point::new(10.0, 20.0))
            .iter()
            .map(|p| p.bounds(&HeuristicTextMeasurer))
            .reduce(|a, b| a.union(b))
            .unwrap();
        assert_eq!(b.x0, 10.0);
        assert!((b.width() - size.width).abs() < 1e-9);
        assert!(b.height() <= size.height);
    }

    #[test]
    fn icons_add_image_primitives_and_shift_labels() {
        let mut it = items();
        it[0] = it[0].clone().with_icon("icons/a.svg");
        let spec = LegendSpec::new(it);
        let prims = spec.primitives(Point::ZERO);
        assert_eq!(prims.iter().filter(|p| p.kind() == PrimitiveKind::Image).count(), 1);
        let label = prims.iter().find_map(Primitive::as_label).unwrap();
        assert_eq!(label.pos.x, 10.0 + 6.0 + 16.0 + 6.0);
    }
}
