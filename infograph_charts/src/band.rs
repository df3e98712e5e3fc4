// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bands shared by pyramids and funnels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use infograph_text::TextRole;
use infograph_transforms::{Frame, shares};
use kurbo::Point;

use crate::emit::EmitContext;
use crate::format::format_percent;
use crate::polygon_mark::PolygonMark;
use crate::primitive::{Primitive, TextAnchor, TextBaseline};

/// One horizontal trapezoid, centered on the chart axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    /// Category of the source record.
    pub category: String,
    /// Value of the source record.
    pub value: f64,
    /// Share of the total, in percent (`0` when the total is not positive).
    pub percent: f64,
    /// Width of the top edge (`0` at a pyramid apex).
    pub top_width: f64,
    /// Width of the bottom edge.
    pub bottom_width: f64,
    /// Scene y of the top edge.
    pub y_top: f64,
    /// Scene y of the bottom edge.
    pub y_bottom: f64,
}

impl Band {
    /// Band height.
    pub fn height(&self) -> f64 {
        self.y_bottom - self.y_top
    }

    /// Trapezoid area.
    pub fn area(&self) -> f64 {
        0.5 * self.height() * (self.top_width + self.bottom_width)
    }

    /// The band's outline centered on `center_x`.
    pub fn polygon(&self, center_x: f64) -> PolygonMark {
        PolygonMark::trapezoid(
            center_x,
            self.y_top,
            self.top_width,
            self.y_bottom,
            self.bottom_width,
        )
    }
}

/// Emits band polygons, in-band percentage labels and right-hand category labels.
///
/// `label_x` is the left edge of the category label column.
pub(crate) fn band_primitives(
    bands: &[Band],
    center_x: f64,
    label_x: f64,
    cx: &EmitContext<'_>,
) -> Vec<Primitive> {
    let mut out: Vec<Primitive> = Vec::new();
    for band in bands {
        let mut polygon = band.polygon(center_x).with_fill(cx.fills.fill_for(&band.category));
        if let Some(stroke) = &cx.style.segment_stroke {
            polygon = polygon.with_stroke(stroke.clone());
        }
        out.push(polygon.into());

        let mid_y = 0.5 * (band.y_top + band.y_bottom);
        if cx.labels.shows_share(band.percent) {
            out.push(
                cx.label(
                    Point::new(center_x, mid_y),
                    format_percent(band.percent),
                    TextRole::ValueLabel,
                )
                .into(),
            );
        }
        out.push(
            cx.label(
                Point::new(label_x, mid_y),
                band.category.clone(),
                TextRole::CategoryLabel,
            )
            .with_anchor(TextAnchor::Start)
            .with_baseline(TextBaseline::Middle)
            .into(),
        );
    }
    out
}

/// Percent shares of the frame's values, counting negative values as zero.
pub(crate) fn clamped_percents(frame: &Frame, chart: &str) -> Vec<f64> {
    if frame.values().any(|v| v < 0.0) {
        log::warn!("{chart}: negative values are drawn as zero");
    }
    let percents: Vec<f64> = shares(frame.values().map(|v| v.max(0.0)))
        .iter()
        .map(|s| s.percent)
        .collect();
    if !frame.is_empty() && percents.iter().all(|p| *p == 0.0) {
        log::warn!("{chart} total is not positive; using equal bands");
    }
    percents
}

/// Fractions used to size bands: the shares, or an equal split when the total is not positive.
pub(crate) fn band_fractions(percents: &[f64]) -> Vec<f64> {
    let total: f64 = percents.iter().sum();
    if total > 0.0 {
        percents.iter().map(|p| p / 100.0).collect()
    } else {
        let n = percents.len().max(1) as f64;
        alloc::vec![1.0 / n; percents.len()]
    }
}
