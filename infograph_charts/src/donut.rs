// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut (and pie) charts.
//!
//! Slices keep record order and start at 12 o'clock. A fixed pad angle is reserved per slice:
//!
//! ```text
//! pa   = min(TAU / n, pad_angle)
//! k    = (TAU - n·pa) / total
//! span = v·k + pa        (painted span v·k, half the pad trimmed at each end)
//! ```
//!
//! Non-positive values get only their pad and paint nothing. When no value is positive, no
//! slice is painted.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use infograph_text::TextRole;
use infograph_transforms::{Frame, shares};
use kurbo::{Point, Rect};

use crate::emit::EmitContext;
use crate::error::{LayoutError, check_bounds};
use crate::format::format_percent;
use crate::primitive::Primitive;
use crate::sector_mark::ArcMark;

/// Donut configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSpec {
    /// `inner_radius / outer_radius`; `0` draws a pie.
    pub inner_ratio: f64,
    /// Angular gap reserved per slice, in radians.
    pub pad_angle: f64,
    /// Corner rounding recorded on every slice.
    pub corner_radius: f64,
    /// Space kept between the ring and the plot edge.
    pub margin: f64,
}

impl Default for DonutSpec {
    fn default() -> Self {
        Self {
            inner_ratio: 0.55,
            pad_angle: 0.02,
            corner_radius: 4.0,
            margin: 10.0,
        }
    }
}

impl DonutSpec {
    /// A pie: no hole.
    pub fn pie() -> Self {
        Self {
            inner_ratio: 0.0,
            ..Self::default()
        }
    }

    /// Sets the inner radius ratio.
    pub fn with_inner_ratio(mut self, inner_ratio: f64) -> Self {
        self.inner_ratio = inner_ratio;
        self
    }

    /// Sets the pad angle.
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Sets the corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Partitions the circle for `frame` inside `plot`.
    pub fn layout(&self, frame: &Frame, plot: Rect) -> Result<DonutLayout, LayoutError> {
        check_bounds(plot)?;
        if !(0.0..1.0).contains(&self.inner_ratio) {
            return Err(LayoutError::InvalidParameter {
                name: "inner_ratio",
                value: self.inner_ratio,
            });
        }
        if self.pad_angle.is_nan() || self.pad_angle < 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "pad_angle",
                value: self.pad_angle,
            });
        }
        let outer_radius = 0.5 * plot.width().min(plot.height()) - self.margin;
        if outer_radius <= 0.0 {
            return Err(LayoutError::InsufficientSpace {
                chart: "donut",
                detail: "margin leaves no room for the ring",
            });
        }
        let inner_radius = outer_radius * self.inner_ratio;

        let values: Vec<f64> = frame.values().map(|v| v.max(0.0)).collect();
        let total: f64 = values.iter().sum();
        let n = values.len();
        let pad = if n == 0 {
            0.0
        } else {
            (TAU / n as f64).min(self.pad_angle)
        };
        let k = if total > 0.0 {
            (TAU - n as f64 * pad) / total
        } else {
            log::warn!("donut total is not positive; no slice is painted");
            0.0
        };

        let mut angle = 0.0;
        let slices = frame
            .records()
            .iter()
            .zip(&values)
            .zip(shares(values.iter().copied()))
            .map(|((r, v), share)| {
                let start = angle;
                angle += v * k + pad;
                DonutSlice {
                    category: r.category.clone(),
                    value: r.value,
                    percent: share.percent,
                    start_angle: start,
                    end_angle: angle,
                    pad_angle: pad,
                }
            })
            .collect();

        log::trace!("donut: {n} slices, pad {pad:.4}, radii {inner_radius:.2}..{outer_radius:.2}");

        Ok(DonutLayout {
            center: plot.center(),
            inner_radius,
            outer_radius,
            corner_radius: self.corner_radius.max(0.0),
            slices,
        })
    }
}

/// One donut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    /// Category of the source record.
    pub category: String,
    /// Value of the source record.
    pub value: f64,
    /// Share of the total, in percent.
    pub percent: f64,
    /// Start angle, pad included.
    pub start_angle: f64,
    /// End angle, pad included.
    pub end_angle: f64,
    /// Pad reserved inside `[start_angle, end_angle]`.
    pub pad_angle: f64,
}

impl DonutSlice {
    /// Painted angular extent.
    pub fn visible_span(&self) -> f64 {
        (self.end_angle - self.start_angle - self.pad_angle).max(0.0)
    }
}

/// Computed donut geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutLayout {
    /// Center of the ring.
    pub center: Point,
    /// Hole radius.
    pub inner_radius: f64,
    /// Ring radius.
    pub outer_radius: f64,
    /// Corner rounding recorded on every arc.
    pub corner_radius: f64,
    /// Slices in record order.
    pub slices: Vec<DonutSlice>,
}

impl DonutLayout {
    /// The arc for one slice.
    pub fn arc(&self, slice: &DonutSlice) -> ArcMark {
        ArcMark::new(
            self.center,
            self.inner_radius,
            self.outer_radius,
            slice.start_angle,
            slice.end_angle,
        )
        .with_pad_angle(slice.pad_angle)
        .with_corner_radius(self.corner_radius)
    }

    /// Emits painted slices and their percentage labels.
    pub fn primitives(&self, cx: &EmitContext<'_>) -> Vec<Primitive> {
        let mut out: Vec<Primitive> = Vec::new();
        for slice in &self.slices {
            if slice.visible_span() <= 0.0 {
                continue;
            }
            let mut arc = self.arc(slice).with_fill(cx.fills.fill_for(&slice.category));
            if let Some(stroke) = &cx.style.segment_stroke {
                arc = arc.with_stroke(stroke.clone());
            }
            let centroid = arc.centroid();
            out.push(arc.into());
            if cx.labels.shows_share(slice.percent) {
                out.push(
                    cx.label(centroid, format_percent(slice.percent), TextRole::ValueLabel)
                        .into(),
                );
            }
        }
        out
    }
}
