// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial bar charts.
//!
//! Each record becomes one concentric ring segment that starts at 12 o'clock and sweeps
//! clockwise in proportion to its value. Record 0 is the innermost ring. Rings share a constant
//! width and are separated by a constant gap:
//!
//! ```text
//! max_radius     = min(w, h) / 2 - margin
//! max_bar_radius = max_radius - label_band
//! min_radius     = max_radius * inner_ratio
//! bar_width      = (max_bar_radius - min_radius - gap * (n - 1)) / n
//! inner(i)       = min_radius + i * (bar_width + gap)
//! ```
//!
//! The band between `max_bar_radius` and `max_radius` holds the tick labels.

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
use crate::rule_mark::RuleMark;
use crate::scale::ScaleLinear;
use crate::sector_mark::{ArcMark, polar};
use crate::z_order;

/// Sweep of the standard radial bar chart (270°).
pub const RADIAL_SWEEP: f64 = 1.5 * PI;
/// Sweep of the compact radial bar variant (120°).
pub const COMPACT_RADIAL_SWEEP: f64 = 2.0 * PI / 3.0;

/// Radial bar configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialBarSpec {
    /// Angle reached by the domain maximum, in radians.
    pub sweep: f64,
    /// Space kept between the outermost tick labels and the plot edge.
    pub margin: f64,
    /// Radial band reserved outside the bars for tick labels.
    pub label_band: f64,
    /// `min_radius / max_radius`.
    pub inner_ratio: f64,
    /// Radial gap between consecutive bars.
    pub gap: f64,
    /// Number of tick intervals (`tick_count + 1` ticks).
    pub tick_count: usize,
    /// Explicit domain maximum; defaults to the largest value.
    pub max: Option<f64>,
}

impl Default for RadialBarSpec {
    fn default() -> Self {
        Self {
            sweep: RADIAL_SWEEP,
            margin: 10.0,
            label_band: 30.0,
            inner_ratio: 0.2,
            gap: 2.0,
            tick_count: 4,
            max: None,
        }
    }
}

impl RadialBarSpec {
    /// The 120° variant.
    pub fn compact() -> Self {
        Self {
            sweep: COMPACT_RADIAL_SWEEP,
            ..Self::default()
        }
    }

    /// Sets the sweep angle (radians).
    pub fn with_sweep(mut self, sweep: f64) -> Self {
        self.sweep = sweep;
        self
    }

    /// Sets the outer margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the tick label band.
    pub fn with_label_band(mut self, label_band: f64) -> Self {
        self.label_band = label_band;
        self
    }

    /// Sets the inner radius ratio.
    pub fn with_inner_ratio(mut self, inner_ratio: f64) -> Self {
        self.inner_ratio = inner_ratio;
        self
    }

    /// Sets the gap between bars.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the number of tick intervals.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets an explicit domain maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    fn validate(&self) -> Result<(), LayoutError> {
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
        if self.gap.is_nan() || self.gap < 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "gap",
                value: self.gap,
            });
        }
        if let Some(max) = self.max
            && (!max.is_finite() || max < 0.0)
        {
            return Err(LayoutError::InvalidParameter { name: "max", value: max });
        }
        Ok(())
    }

    /// Computes ring geometry for `frame` inside `plot`.
    pub fn layout(&self, frame: &Frame, plot: Rect) -> Result<RadialBarLayout, LayoutError> {
        self.validate()?;
        check_bounds(plot)?;
        let rings = Rings::new(
            plot,
            self.margin,
            self.label_band,
            self.inner_ratio,
            self.gap,
            frame.len(),
            "radial bar",
        )?;

        let max = self.max.unwrap_or_else(|| frame.max_value());
        let scale = ScaleLinear::angular(max, 0.0, self.sweep);
        let first = frame.first_occurrences();

        let bars = frame
            .records()
            .iter()
            .zip(first)
            .enumerate()
            .map(|(i, (r, first))| {
                let inner = rings.min_radius + i as f64 * (rings.bar_width + rings.gap);
                RadialBar {
                    category: r.category.clone(),
                    group: r.group.clone(),
                    value: r.value,
                    inner_radius: inner,
                    outer_radius: inner + rings.bar_width,
                    end_angle: scale.map_clamped(r.value),
                    axis_label: first,
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
            "radial bar: {} bars, width {:.2}, radii {:.2}..{:.2}, max {max}",
            frame.len(),
            rings.bar_width,
            rings.min_radius,
            rings.max_bar_radius
        );

        Ok(RadialBarLayout {
            center: rings.center,
            max_radius: rings.max_radius,
            max_bar_radius: rings.max_bar_radius,
            min_radius: rings.min_radius,
            bar_width: rings.bar_width,
            gap: rings.gap,
            label_band: self.label_band,
            bars,
            ticks,
        })
    }
}

/// Concentric ring partition shared by radial bars and gauges.
pub(crate) struct Rings {
    pub(crate) center: Point,
    pub(crate) max_radius: f64,
    pub(crate) max_bar_radius: f64,
    pub(crate) min_radius: f64,
    pub(crate) bar_width: f64,
    pub(crate) gap: f64,
}

impl Rings {
    pub(crate) fn new(
        plot: Rect,
        margin: f64,
        label_band: f64,
        inner_ratio: f64,
        gap: f64,
        n: usize,
        chart: &'static str,
    ) -> Result<Self, LayoutError> {
        let max_radius = 0.5 * plot.width().min(plot.height()) - margin;
        let max_bar_radius = max_radius - label_band;
        let min_radius = max_radius * inner_ratio;
        if max_radius.is_nan() || max_radius <= 0.0 || min_radius >= max_bar_radius {
            return Err(LayoutError::InsufficientSpace {
                chart,
                detail: "inner radius does not fit inside the bar area",
            });
        }
        let n_f = n.max(1) as f64;
        let band = max_bar_radius - min_radius;
        let mut gap = gap;
        let mut bar_width = (band - gap * (n_f - 1.0)) / n_f;
        if bar_width <= 0.0 {
            // Too many rows for the requested gap: gaps get at most half the band.
            gap = 0.5 * band / (n_f - 1.0);
            bar_width = 0.5 * band / n_f;
            log::warn!("{chart}: {n} rings do not fit with their gaps; shrinking gaps to {gap:.3}");
        }
        Ok(Self {
            center: plot.center(),
            max_radius,
            max_bar_radius,
            min_radius,
            bar_width,
            gap,
        })
    }
}

/// A scale tick on an angular axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Domain value.
    pub value: f64,
    /// Angle in radians (12 o'clock, clockwise).
    pub angle: f64,
}

/// One radial bar.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialBar {
    /// Category of the source record.
    pub category: String,
    /// Group of the source record, if any.
    pub group: Option<String>,
    /// Value of the source record.
    pub value: f64,
    /// Inner radius.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// End angle; every bar starts at `0`.
    pub end_angle: f64,
    /// Whether this is the first bar of its category and gets the axis label.
    pub axis_label: bool,
}

impl RadialBar {
    /// The key used to look up this bar's fill: its group, else its category.
    pub fn fill_key(&self) -> &str {
        self.group.as_deref().unwrap_or(&self.category)
    }
}

/// Computed radial bar geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialBarLayout {
    /// Center of all rings.
    pub center: Point,
    /// Outer radius including the tick label band.
    pub max_radius: f64,
    /// Outer radius of the outermost bar.
    pub max_bar_radius: f64,
    /// Inner radius of the innermost bar.
    pub min_radius: f64,
    /// Constant radial width of every bar.
    pub bar_width: f64,
    /// Radial gap between consecutive bars.
    pub gap: f64,
    /// Width of the tick label band.
    pub label_band: f64,
    /// Bars in record order, innermost first.
    pub bars: Vec<RadialBar>,
    /// Scale ticks.
    pub ticks: Vec<Tick>,
}

impl RadialBarLayout {
    /// Emits gridlines, tick labels, bars and category labels.
    pub fn primitives(&self, cx: &EmitContext<'_>) -> Vec<Primitive> {
        let mut out: Vec<Primitive> = Vec::new();
        let c = self.center;

        for tick in &self.ticks {
            out.push(
                RuleMark::new(
                    polar(c, self.min_radius, tick.angle),
                    polar(c, self.max_bar_radius, tick.angle),
                )
                .with_stroke(cx.style.grid.clone())
                .into(),
            );
            out.push(
                cx.label(
                    polar(c, self.max_bar_radius + 0.5 * self.label_band, tick.angle),
                    cx.format(tick.value),
                    TextRole::AxisTick,
                )
                .with_z_index(z_order::AXIS_LABELS)
                .into(),
            );
        }

        for bar in &self.bars {
            if bar.end_angle > 0.0 {
                let mut arc = ArcMark::new(c, bar.inner_radius, bar.outer_radius, 0.0, bar.end_angle)
                    .with_fill(cx.fills.fill_for(bar.fill_key()));
                if let Some(stroke) = &cx.style.segment_stroke {
                    arc = arc.with_stroke(stroke.clone());
                }
                out.push(arc.into());
            }
            if bar.axis_label {
                let mid = 0.5 * (bar.inner_radius + bar.outer_radius);
                out.push(
                    cx.label(
                        Point::new(c.x - 6.0, c.y - mid),
                        bar.category.clone(),
                        TextRole::CategoryLabel,
                    )
                    .with_anchor(TextAnchor::End)
                    .with_baseline(TextBaseline::Middle)
                    .with_z_index(z_order::AXIS_LABELS)
                    .into(),
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use infograph_text::HeuristicTextMeasurer;
    use infograph_transforms::Record;

    use super::*;
    use crate::palette::CategoryFills;
    use crate::style::ChartStyle;

    fn frame(rows: &[(&str, Option<&str>, f64)]) -> Frame {
        Frame::new(
            rows.iter()
                .map(|(c, g, v)| {
                    let r = Record::new(*c, *v);
                    match g {
                        Some(g) => r.with_group(*g),
                        None => r,
                    }
                })
                .collect(),
        )
        .unwrap()
    }

    const PLOT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    #[test]
    fn rings_are_contiguous_and_innermost_first() {
        let f = frame(&[("a", None, 10.0), ("b", None, 20.0), ("c", None, 40.0)]);
        let spec = RadialBarSpec::default();
        let l = spec.layout(&f, PLOT).unwrap();

        // min(400, 300) / 2 - 10 = 140.
        assert!((l.max_radius - 140.0).abs() < 1e-9);
        assert!((l.max_bar_radius - 110.0).abs() < 1e-9);
        assert!((l.min_radius - 28.0).abs() < 1e-9);
        assert!(l.min_radius < l.max_bar_radius && l.max_bar_radius <= l.max_radius);
        for pair in l.bars.windows(2) {
            assert!((pair[1].inner_radius - (pair[0].outer_radius + spec.gap)).abs() < 1e-9);
        }
        for bar in &l.bars {
            assert!((bar.outer_radius - bar.inner_radius - l.bar_width).abs() < 1e-9);
        }
        assert!((l.bars[2].outer_radius - l.max_bar_radius).abs() < 1e-9);
    }

    #[test]
    fn max_value_reaches_the_full_sweep() {
        let f = frame(&[("a", None, 25.0), ("b", None, 100.0)]);
        let l = RadialBarSpec::default().layout(&f, PLOT).unwrap();
        assert!((l.bars[1].end_angle - RADIAL_SWEEP).abs() < 1e-12);
        assert!((l.bars[0].end_angle - 0.25 * RADIAL_SWEEP).abs() < 1e-12);
        assert_eq!(l.ticks.len(), 5);
        assert_eq!(l.ticks[4].value, 100.0);

        let compact = RadialBarSpec::compact().layout(&f, PLOT).unwrap();
        assert!((compact.bars[1].end_angle - COMPACT_RADIAL_SWEEP).abs() < 1e-12);
    }

    #[test]
    fn only_first_occurrence_gets_an_axis_label() {
        let f = frame(&[
            ("2023", Some("north"), 10.0),
            ("2023", Some("south"), 12.0),
            ("2024", Some("north"), 14.0),
            ("2024", Some("south"), 9.0),
        ]);
        let l = RadialBarSpec::default().layout(&f, PLOT).unwrap();
        let flags: Vec<bool> = l.bars.iter().map(|b| b.axis_label).collect();
        assert_eq!(flags, vec![true, false, true, false]);

        let style = ChartStyle::default();
        let fills = CategoryFills::new(f.groups());
        let cx = EmitContext::new(&style, &fills, &HeuristicTextMeasurer);
        let prims = l.primitives(&cx);
        let category_labels: Vec<&str> = prims
            .iter()
            .filter_map(Primitive::as_label)
            .filter(|t| t.anchor == TextAnchor::End)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(category_labels, vec!["2023", "2024"]);
        // Bars are coloured by group.
        let arcs: Vec<_> = prims.iter().filter_map(Primitive::as_arc).collect();
        assert_eq!(arcs[0].fill, fills.fill_for("north"));
        assert_eq!(arcs[1].fill, fills.fill_for("south"));
    }

    #[test]
    fn zero_max_yields_a_single_tick_and_empty_bars() {
        let f = frame(&[("a", None, 0.0), ("b", None, 0.0)]);
        let l = RadialBarSpec::default().layout(&f, PLOT).unwrap();
        assert_eq!(l.ticks.len(), 1);
        assert_eq!(l.ticks[0].value, 0.0);
        assert!(l.bars.iter().all(|b| b.end_angle == 0.0));
    }

    #[test]
    fn tiny_container_is_a_configuration_error() {
        let f = frame(&[("a", None, 1.0)]);
        let err = RadialBarSpec::default()
            .layout(&f, Rect::new(0.0, 0.0, 60.0, 60.0))
            .unwrap_err();
        assert!(matches!(err, LayoutError::InsufficientSpace { .. }), "{err:?}");
    }

    #[test]
    fn many_rows_shrink_the_gaps_instead_of_failing() {
        let f = Frame::new(
            (0..80)
                .map(|i| Record::new(alloc::format!("r{i}"), f64::from(i)))
                .collect(),
        )
        .unwrap();
        let plot = Rect::new(0.0, 0.0, 640.0, 420.0);
        let spec = RadialBarSpec::default();
        let l = spec.layout(&f, plot).unwrap();

        assert_eq!(l.bars.len(), 80);
        assert!(l.bar_width > 0.0);
        assert!(l.gap < spec.gap && l.gap > 0.0, "gap {}", l.gap);
        for pair in l.bars.windows(2) {
            assert!((pair[1].inner_radius - (pair[0].outer_radius + l.gap)).abs() < 1e-9);
        }
        assert!((l.bars[79].outer_radius - l.max_bar_radius).abs() < 1e-9);
        assert!((l.bars[0].inner_radius - l.min_radius).abs() < 1e-9);
    }

    #[test]
    fn equal_values_make_equal_bars() {
        let f = frame(&[("a", None, 5.0), ("b", None, 5.0), ("c", None, 5.0)]);
        let l = RadialBarSpec::default().layout(&f, PLOT).unwrap();
        assert!(l.bars.iter().all(|b| b.end_angle == l.bars[0].end_angle));
    }
}
