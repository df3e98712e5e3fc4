// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional funnels.
//!
//! Records are sorted descending. Band `i` has top width `percent_i / 100 · max_width` and its
//! bottom edge meets the next band's top. The last band tapers to `tail_ratio` of its own top
//! width. Every band has the same height.

extern crate alloc;

use alloc::vec::Vec;

use infograph_transforms::{Frame, SortOrder, Transform};
use kurbo::Rect;

use crate::band::{Band, band_fractions, band_primitives, clamped_percents};
use crate::emit::EmitContext;
use crate::error::{LayoutError, check_bounds};
use crate::primitive::Primitive;

/// Funnel configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FunnelSpec {
    /// Bottom/top width ratio of the last band.
    pub tail_ratio: f64,
    /// Width reserved right of the funnel for category labels.
    pub label_width: f64,
    /// Horizontal gap between the funnel and the label column.
    pub label_gap: f64,
}

impl Default for FunnelSpec {
    fn default() -> Self {
        Self {
            tail_ratio: 0.8,
            label_width: 120.0,
            label_gap: 12.0,
        }
    }
}

impl FunnelSpec {
    /// Sets the taper of the last band.
    pub fn with_tail_ratio(mut self, tail_ratio: f64) -> Self {
        self.tail_ratio = tail_ratio;
        self
    }

    /// Sets the label column width.
    pub fn with_label_width(mut self, label_width: f64) -> Self {
        self.label_width = label_width.max(0.0);
        self
    }

    /// Computes bands for `frame` inside `plot`.
    pub fn layout(&self, frame: &Frame, plot: Rect) -> Result<FunnelLayout, LayoutError> {
        check_bounds(plot)?;
        if !(0.0..=1.0).contains(&self.tail_ratio) {
            return Err(LayoutError::InvalidParameter {
                name: "tail_ratio",
                value: self.tail_ratio,
            });
        }
        let max_width = plot.width() - self.label_width - self.label_gap;
        if max_width <= 0.0 {
            return Err(LayoutError::InsufficientSpace {
                chart: "funnel",
                detail: "label column leaves no room for the funnel",
            });
        }
        let sorted = frame.apply(&[Transform::Sort(SortOrder::Desc)]);
        let percents = clamped_percents(&sorted, "funnel");
        let fractions = band_fractions(&percents);

        let n = sorted.len();
        let band_height = plot.height() / n.max(1) as f64;
        let tops: Vec<f64> = fractions.iter().map(|f| f * max_width).collect();
        let bands = sorted
            .records()
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let top_width = tops[i];
                let bottom_width = tops
                    .get(i + 1)
                    .copied()
                    .unwrap_or(self.tail_ratio * top_width);
                let y_top = plot.y0 + i as f64 * band_height;
                Band {
                    category: r.category.clone(),
                    value: r.value,
                    percent: percents[i],
                    top_width,
                    bottom_width,
                    y_top,
                    y_bottom: y_top + band_height,
                }
            })
            .collect();

        log::trace!("funnel: {n} bands, max width {max_width:.2}, band height {band_height:.2}");

        Ok(FunnelLayout {
            center_x: plot.x0 + 0.5 * max_width,
            label_x: plot.x0 + max_width + self.label_gap,
            max_width,
            bands,
        })
    }
}

/// Computed funnel geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelLayout {
    /// Scene x of the funnel axis.
    pub center_x: f64,
    /// Left edge of the category label column.
    pub label_x: f64,
    /// Width of a band holding 100% of the total.
    pub max_width: f64,
    /// Bands from top (largest value) to bottom.
    pub bands: Vec<Band>,
}

impl FunnelLayout {
    /// Emits band polygons and labels.
    pub fn primitives(&self, cx: &EmitContext<'_>) -> Vec<Primitive> {
        band_primitives(&self.bands, self.center_x, self.label_x, cx)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use infograph_transforms::Record;

    use super::*;

    fn frame(values: &[(&str, f64)]) -> Frame {
        Frame::new(values.iter().map(|(c, v)| Record::new(*c, *v)).collect()).unwrap()
    }

    const PLOT: Rect = Rect::new(0.0, 0.0, 332.0, 300.0);

    #[test]
    fn widths_follow_percent_and_chain() {
        let f = frame(&[("visits", 50.0), ("orders", 20.0), ("carts", 30.0)]);
        let l = FunnelSpec::default().layout(&f, PLOT).unwrap();
        let cats: Vec<&str> = l.bands.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(cats, vec!["visits", "carts", "orders"]);

        let tops: Vec<f64> = l.bands.iter().map(|b| b.top_width).collect();
        assert!((tops[0] - 100.0).abs() < 1e-9);
        assert!((tops[1] - 60.0).abs() < 1e-9);
        assert!((tops[2] - 40.0).abs() < 1e-9);

        assert_eq!(l.bands[0].bottom_width, l.bands[1].top_width);
        assert_eq!(l.bands[1].bottom_width, l.bands[2].top_width);
        assert!((l.bands[2].bottom_width - 0.8 * l.bands[2].top_width).abs() < 1e-12);
    }

    #[test]
    fn bands_share_one_height() {
        let f = frame(&[("a", 3.0), ("b", 2.0), ("c", 1.0)]);
        let l = FunnelSpec::default().layout(&f, PLOT).unwrap();
        for b in &l.bands {
            assert!((b.height() - 100.0).abs() < 1e-9);
        }
        assert_eq!(l.bands[2].y_bottom, 300.0);
    }

    #[test]
    fn equal_values_make_equal_bands() {
        let f = frame(&[("a", 4.0), ("b", 4.0), ("c", 4.0), ("d", 4.0)]);
        let l = FunnelSpec::default().layout(&f, PLOT).unwrap();
        assert!(l.bands.iter().all(|b| (b.top_width - 50.0).abs() < 1e-9));
    }

    #[test]
    fn negative_values_count_as_zero() {
        let f = frame(&[("refunds", -10.0), ("sales", 50.0)]);
        let l = FunnelSpec::default().layout(&f, PLOT).unwrap();
        let percents: Vec<f64> = l.bands.iter().map(|b| b.percent).collect();
        assert_eq!(percents, vec![100.0, 0.0]);
        assert!((l.bands[0].top_width - l.max_width).abs() < 1e-9);
        for b in &l.bands {
            assert!((0.0..=l.max_width).contains(&b.top_width), "{b:?}");
            assert!((0.0..=l.max_width).contains(&b.bottom_width), "{b:?}");
        }
    }

    #[test]
    fn zero_total_uses_equal_widths() {
        let f = frame(&[("a", 0.0), ("b", 0.0)]);
        let l = FunnelSpec::default().layout(&f, PLOT).unwrap();
        assert!(l.bands.iter().all(|b| (b.top_width - 100.0).abs() < 1e-9));
        assert!(l.bands.iter().all(|b| b.percent == 0.0));
    }
}
