// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauges: concentric 270° rings, one per record.
//!
//! The scale runs from `-135°` to `+135°` (12 o'clock is `0`), leaving the opening at the
//! bottom. Record 0 is the outermost ring. Every ring draws a full-sweep track and a value arc
//! on top of it. Category and value labels sit in the opening, left and right of the center
//! line, at each ring's mid radius.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::PI;

use infograph_text::TextRole;
use infograph_transforms::Frame;
use kurbo::{Point, Rect};

use crate::emit::EmitContext;
use crate::error::{LayoutError, check_bounds};
use crate::primitive::{Primitive, TextAnchor, TextBaseline};
use crate::radial::{Rings, Tick};
use crate::rule_mark::RuleMark;
use crate::scale::ScaleLinear;
use crate::sector_mark::{ArcMark, polar};
use crate::z_order;

/// Start angle of the gauge scale (`-135°`).
pub const GAUGE_START: f64 = -0.75 * PI;
/// Sweep of the gauge scale (270°).
pub const GAUGE_SWEEP: f64 = 1.5 * PI;

/// Gauge configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeSpec {
    /// Angle of the domain minimum.
    pub start_angle: f64,
    /// Angular extent of the domain.
    pub sweep: f64,
    /// Space kept between the tick labels and the plot edge.
    pub margin: f64,
    /// Radial band reserved outside the rings for tick marks and labels.
    pub label_band: f64,
    /// `min_radius / max_radius`.
    pub inner_ratio: f64,
    /// Radial gap between rings.
    pub gap: f64,
    /// Number of tick intervals.
    pub tick_count: usize,
    /// Explicit domain maximum; defaults to the largest value.
    pub max: Option<f64>,
}

impl Default for GaugeSpec {
    fn default() -> Self {
        Self {
            start_angle: GAUGE_START,
            sweep: GAUGE_SWEEP,
            margin: 10.0,
            label_band: 28.0,
            inner_ratio: 0.3,
            gap: 4.0,
            tick_count: 5,
            max: None,
        }
    }
}

impl GaugeSpec {
    /// Sets an explicit domain maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the gap between rings.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the inner radius ratio.
    pub fn with_inner_ratio(mut self, inner_ratio: f64) -> Self {
        self.inner_ratio = inner_ratio;
        self
    }

    /// Sets the number of tick intervals.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Computes ring geometry for `frame` inside `plot`.
    pub fn layout(&self, frame: &Frame, plot: Rect) -> Result<GaugeLayout, LayoutError> {
        check_bounds(plot)?;
        if let Some(max) = self.max
            && (!max.is_finite() || max < 0.0)
        {
            return Err(LayoutError::InvalidParameter { name: "max", value: max });
        }
        if self.sweep.is_nan() || self.sweep <= 0.0 || self.sweep > 2.0 * PI {
            return Err(LayoutError::InvalidParameter {
                name: "sweep",
                value: self.sweep,
            });
        }
        if !(0.0..1.0).contains(&self.inner_ratio) {
            return Err(LayoutError::InvalidParameter {
                name: "inner_ratio",
                value: self.inner_ratio,
            });
        }
        let rings = Rings::new(
            plot,
            self.margin,
            self.label_band,
            self.inner_ratio,
            self.gap.max(0.0),
            frame.len(),
            "gauge",
        )?;

        let max = self.max.unwrap_or_else(|| frame.max_value());
        let scale = ScaleLinear::angular(max, self.start_angle, self.sweep);

        let ring_list = frame
            .records()
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let outer = rings.max_bar_radius - i as f64 * (rings.bar_width + rings.gap);
                GaugeRing {
                    category: r.category.clone(),
                    value: r.value,
                    inner_radius: outer - rings.bar_width,
                    outer_radius: outer,
                    value_angle: scale.map_clamped(r.value),
                }
            })
            .collect();

        let ticks = scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick {
                value,
                angle: scale.map(value),
            })
            .collect();

        log::trace!(
            "gauge: {} rings, width {:.2}, max {max}",
            frame.len(),
            rings.bar_width
        );

        Ok(GaugeLayout {
            center: rings.center,
            outer_radius: rings.max_bar_radius,
            min_radius: rings.min_radius,
            ring_width: rings.bar_width,
            label_band: self.label_band,
            start_angle: self.start_angle,
            end_angle: self.start_angle + self.sweep,
            rings: ring_list,
            ticks,
        })
    }
}

/// One gauge ring.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeRing {
    /// Category of the source record.
    pub category: String,
    /// Value of the source record.
    pub value: f64,
    /// Inner radius.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// End angle of the value arc.
    pub value_angle: f64,
}

impl GaugeRing {
    fn mid_radius(&self) -> f64 {
        0.5 * (self.inner_radius + self.outer_radius)
    }
}

/// Computed gauge geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeLayout {
    /// Center of all rings.
    pub center: Point,
    /// Outer radius of ring 0.
    pub outer_radius: f64,
    /// Inner radius of the innermost ring slot.
    pub min_radius: f64,
    /// Radial width of every ring.
    pub ring_width: f64,
    /// Width of the tick band outside the rings.
    pub label_band: f64,
    /// Start of every track and value arc.
    pub start_angle: f64,
    /// End of every track.
    pub end_angle: f64,
    /// Rings in record order, outermost first.
    pub rings: Vec<GaugeRing>,
    /// Scale ticks.
    pub ticks: Vec<Tick>,
}

impl GaugeLayout {
    /// Emits tracks, value arcs, tick marks and labels.
    pub fn primitives(&self, cx: &EmitContext<'_>) -> Vec<Primitive> {
        let mut out: Vec<Primitive> = Vec::new();
        let c = self.center;

        for tick in &self.ticks {
            out.push(
                RuleMark::new(
                    polar(c, self.outer_radius + 2.0, tick.angle),
                    polar(c, self.outer_radius + 8.0, tick.angle),
                )
                .with_stroke(cx.style.grid.clone())
                .into(),
            );
            out.push(
                cx.label(
                    polar(c, self.outer_radius + 0.65 * self.label_band, tick.angle),
                    cx.format(tick.value),
                    TextRole::AxisTick,
                )
                .with_z_index(z_order::AXIS_LABELS)
                .into(),
            );
        }

        for ring in &self.rings {
            out.push(
                ArcMark::new(c, ring.inner_radius, ring.outer_radius, self.start_angle, self.end_angle)
                    .with_fill(cx.style.track_fill.clone())
                    .with_z_index(z_order::TRACKS)
                    .into(),
            );
            if ring.value_angle > self.start_angle {
                let mut arc = ArcMark::new(
                    c,
                    ring.inner_radius,
                    ring.outer_radius,
                    self.start_angle,
                    ring.value_angle,
                )
                .with_fill(cx.fills.fill_for(&ring.category));
                if let Some(stroke) = &cx.style.segment_stroke {
                    arc = arc.with_stroke(stroke.clone());
                }
                out.push(arc.into());
            }

            let y = c.y + ring.mid_radius();
            out.push(
                cx.label(Point::new(c.x - 6.0, y), ring.category.clone(), TextRole::CategoryLabel)
                    .with_anchor(TextAnchor::End)
                    .with_baseline(TextBaseline::Middle)
                    .into(),
            );
            out.push(
                cx.label(Point::new(c.x + 6.0, y), cx.format(ring.value), TextRole::ValueLabel)
                    .with_anchor(TextAnchor::Start)
                    .with_baseline(TextBaseline::Middle)
                    .into(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use infograph_text::HeuristicTextMeasurer;
    use infograph_transforms::Record;

    use super::*;
    use crate::palette::CategoryFills;
    use crate::primitive::PrimitiveKind;
    use crate::style::ChartStyle;

    fn frame(values: &[(&str, f64)]) -> Frame {
        Frame::new(values.iter().map(|(c, v)| Record::new(*c, *v)).collect()).unwrap()
    }

    const PLOT: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

    #[test]
    fn row_zero_is_the_outermost_ring() {
        let f = frame(&[("cpu", 40.0), ("mem", 80.0), ("disk", 20.0)]);
        let l = GaugeSpec::default().layout(&f, PLOT).unwrap();
        assert!((l.rings[0].outer_radius - l.outer_radius).abs() < 1e-9);
        for pair in l.rings.windows(2) {
            assert!((pair[0].inner_radius - pair[1].outer_radius - 4.0).abs() < 1e-9);
        }
        assert!(l.rings[2].inner_radius >= l.min_radius - 1e-9);
    }

    #[test]
    fn value_arcs_span_minus_135_to_plus_135() {
        let f = frame(&[("a", 50.0), ("b", 100.0)]);
        let l = GaugeSpec::default().layout(&f, PLOT).unwrap();
        assert!((l.start_angle + 0.75 * PI).abs() < 1e-12);
        assert!((l.end_angle - 0.75 * PI).abs() < 1e-12);
        assert!((l.rings[1].value_angle - 0.75 * PI).abs() < 1e-12);
        assert!(l.rings[0].value_angle.abs() < 1e-12);
    }

    #[test]
    fn explicit_max_overrides_the_data() {
        let f = frame(&[("a", 50.0)]);
        let l = GaugeSpec::default().with_max(200.0).layout(&f, PLOT).unwrap();
        assert!((l.rings[0].value_angle - (GAUGE_START + 0.25 * GAUGE_SWEEP)).abs() < 1e-12);
        assert_eq!(l.ticks.last().map(|t| t.value), Some(200.0));
    }

    #[test]
    fn each_ring_has_a_track_and_a_value_arc() {
        let f = frame(&[("a", 50.0), ("b", 0.0)]);
        let l = GaugeSpec::default().layout(&f, PLOT).unwrap();
        let style = ChartStyle::default();
        let fills = CategoryFills::new(f.categories());
        let prims = l.primitives(&EmitContext::new(&style, &fills, &HeuristicTextMeasurer));
        let arcs_at = |z: i32| {
            prims
                .iter()
                .filter(|p| p.kind() == PrimitiveKind::Arc && p.z_index() == z)
                .count()
        };
        assert_eq!(arcs_at(z_order::TRACKS), 2);
        // The zero value draws only its track.
        assert_eq!(arcs_at(z_order::SERIES_FILL), 1);

        let texts: Vec<&str> = prims
            .iter()
            .filter_map(Primitive::as_label)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts[..6], ["0", "10", "20", "30", "40", "50"]);
        assert!(texts.contains(&"a") && texts.contains(&"50"));
    }
}
