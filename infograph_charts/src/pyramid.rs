// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area-preserving pyramids.
//!
//! A triangle of base `W` and height `H` is cut into horizontal bands whose areas are
//! proportional to each record's share. Records are sorted ascending, so the smallest value
//! sits at the apex.
//!
//! Bands are built from the base up. With `s = W / H` (width lost per unit of height), a band
//! with bottom width `w_b` and target area `A` has height
//!
//! ```text
//! h = 2A / (w_b + sqrt(w_b² - 2·s·A))
//! ```
//!
//! which is the physical root of `(s/2)·h² - w_b·h + A = 0` written without the cancellation
//! of the textbook form. The apex band takes whatever height remains, so the band areas add up
//! to the whole triangle.

extern crate alloc;

use alloc::vec::Vec;

use infograph_transforms::{Frame, SortOrder, Transform};
use kurbo::Rect;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::band::{Band, band_fractions, band_primitives, clamped_percents};
use crate::emit::EmitContext;
use crate::error::{LayoutError, check_bounds};
use crate::primitive::Primitive;

/// Pyramid configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PyramidSpec {
    /// Width reserved right of the pyramid for category labels.
    pub label_width: f64,
    /// Horizontal gap between the pyramid base and the label column.
    pub label_gap: f64,
}

impl Default for PyramidSpec {
    fn default() -> Self {
        Self {
            label_width: 120.0,
            label_gap: 12.0,
        }
    }
}

impl PyramidSpec {
    /// Sets the label column width.
    pub fn with_label_width(mut self, label_width: f64) -> Self {
        self.label_width = label_width.max(0.0);
        self
    }

    /// Computes bands for `frame` inside `plot`.
    pub fn layout(&self, frame: &Frame, plot: Rect) -> Result<PyramidLayout, LayoutError> {
        check_bounds(plot)?;
        let max_width = plot.width() - self.label_width - self.label_gap;
        if max_width <= 0.0 {
            return Err(LayoutError::InsufficientSpace {
                chart: "pyramid",
                detail: "label column leaves no room for the pyramid",
            });
        }
        let height = plot.height();
        let sorted = frame.apply(&[Transform::Sort(SortOrder::Asc)]);
        let percents = clamped_percents(&sorted, "pyramid");
        let fractions = band_fractions(&percents);

        let slope = max_width / height;
        let total_area = 0.5 * max_width * height;
        let n = sorted.len();
        let mut bands: Vec<Band> = Vec::with_capacity(n);
        // Built base-first, reversed at the end.
        let mut lifted = 0.0_f64;
        let mut bottom_width = max_width;
        for (i, r) in sorted.records().iter().enumerate().rev() {
            let h = if i == 0 {
                (height - lifted).max(0.0)
            } else {
                let area = fractions[i] * total_area;
                let disc = (bottom_width * bottom_width - 2.0 * slope * area).max(0.0);
                let denom = bottom_width + disc.sqrt();
                if denom > 0.0 {
                    (2.0 * area / denom).min(height - lifted)
                } else {
                    0.0
                }
            };
            let top_width = if i == 0 {
                0.0
            } else {
                (bottom_width - slope * h).max(0.0)
            };
            bands.push(Band {
                category: r.category.clone(),
                value: r.value,
                percent: percents[i],
                top_width,
                bottom_width,
                y_top: plot.y1 - lifted - h,
                y_bottom: plot.y1 - lifted,
            });
            lifted += h;
            bottom_width = top_width;
        }
        bands.reverse();

        log::trace!("pyramid: {n} bands, base {max_width:.2}, height {height:.2}");

        Ok(PyramidLayout {
            center_x: plot.x0 + 0.5 * max_width,
            label_x: plot.x0 + max_width + self.label_gap,
            max_width,
            height,
            bands,
        })
    }
}

/// Computed pyramid geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PyramidLayout {
    /// Scene x of the pyramid axis.
    pub center_x: f64,
    /// Left edge of the category label column.
    pub label_x: f64,
    /// Base width.
    pub max_width: f64,
    /// Apex-to-base height.
    pub height: f64,
    /// Bands from apex (smallest value) to base.
    pub bands: Vec<Band>,
}

impl PyramidLayout {
    /// Area of the whole triangle.
    pub fn total_area(&self) -> f64 {
        0.5 * self.max_width * self.height
    }

    /// Emits band polygons and labels.
    pub fn primitives(&self, cx: &EmitContext<'_>) -> Vec<Primitive> {
        band_primitives(&self.bands, self.center_x, self.label_x, cx)
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
    use crate::primitive::PrimitiveKind;
    use crate::style::ChartStyle;

    fn frame(values: &[(&str, f64)]) -> Frame {
        Frame::new(values.iter().map(|(c, v)| Record::new(*c, *v)).collect()).unwrap()
    }

    const PLOT: Rect = Rect::new(0.0, 0.0, 332.0, 200.0);

    #[test]
    fn bands_preserve_area_and_sort_ascending() {
        let f = frame(&[("big", 50.0), ("small", 10.0), ("mid", 40.0)]);
        let l = PyramidSpec::default().layout(&f, PLOT).unwrap();
        assert_eq!(l.max_width, 200.0);
        let cats: Vec<&str> = l.bands.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(cats, vec!["small", "mid", "big"]);

        let sum: f64 = l.bands.iter().map(Band::area).sum();
        assert!((sum - l.total_area()).abs() < 1e-6);
        for b in &l.bands {
            let expected = b.percent / 100.0 * l.total_area();
            assert!((b.area() - expected).abs() < 1e-6, "{b:?}");
        }

        // Apex is a point, base spans the full width and touches the bottom.
        assert_eq!(l.bands[0].top_width, 0.0);
        assert!((l.bands[0].y_top - PLOT.y0).abs() < 1e-9);
        assert_eq!(l.bands[2].bottom_width, 200.0);
        assert_eq!(l.bands[2].y_bottom, PLOT.y1);
        for pair in l.bands.windows(2) {
            assert!((pair[0].y_bottom - pair[1].y_top).abs() < 1e-9);
            assert!((pair[0].bottom_width - pair[1].top_width).abs() < 1e-9);
        }
    }

    #[test]
    fn single_row_is_the_whole_triangle() {
        let f = frame(&[("only", 7.0)]);
        let l = PyramidSpec::default().layout(&f, PLOT).unwrap();
        assert_eq!(l.bands.len(), 1);
        assert!((l.bands[0].area() - l.total_area()).abs() < 1e-9);
        assert!((l.bands[0].percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_falls_back_to_equal_areas_without_labels() {
        let f = frame(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]);
        let l = PyramidSpec::default().layout(&f, PLOT).unwrap();
        let third = l.total_area() / 3.0;
        for b in &l.bands {
            assert!((b.area() - third).abs() < 1e-6, "{b:?}");
            assert_eq!(b.percent, 0.0);
        }

        let style = ChartStyle::default();
        let fills = CategoryFills::new(f.categories());
        let prims = l.primitives(&EmitContext::new(&style, &fills, &HeuristicTextMeasurer));
        assert_eq!(prims.iter().filter(|p| p.kind() == PrimitiveKind::Polygon).count(), 3);
        assert!(prims.iter().filter_map(Primitive::as_label).all(|t| !t.text.ends_with('%')));
    }

    #[test]
    fn negative_values_count_as_zero() {
        let f = frame(&[("loss", -10.0), ("gain", 50.0)]);
        let l = PyramidSpec::default().layout(&f, PLOT).unwrap();
        let percents: Vec<f64> = l.bands.iter().map(|b| b.percent).collect();
        assert_eq!(percents, vec![0.0, 100.0]);
        assert!((l.bands[1].area() - l.total_area()).abs() < 1e-6, "{:?}", l.bands);
        for b in &l.bands {
            assert!(b.top_width >= 0.0 && b.bottom_width <= l.max_width, "{b:?}");
            assert!(b.height() >= 0.0, "{b:?}");
        }
    }

    #[test]
    fn small_shares_get_no_percentage_label() {
        let f = frame(&[("tiny", 2.0), ("rest", 98.0)]);
        let l = PyramidSpec::default().layout(&f, PLOT).unwrap();
        let style = ChartStyle::default();
        let fills = CategoryFills::new(f.categories());
        let prims = l.primitives(&EmitContext::new(&style, &fills, &HeuristicTextMeasurer));
        let percents: Vec<&str> = prims
            .iter()
            .filter_map(Primitive::as_label)
            .map(|t| t.text.as_str())
            .filter(|t| t.ends_with('%'))
            .collect();
        assert_eq!(percents, vec!["98.0%"]);
    }
}
