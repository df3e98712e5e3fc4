// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-level squarified treemaps.
//!
//! Records are summed per category, non-positive sums are dropped, and the rest are sorted
//! descending (ties keep first-encounter order). Tiles are packed with the squarified algorithm
//! (Bruls, Huizing, van Wijk) targeting the golden ratio, then every tile is inset by a fixed
//! padding.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use infograph_text::TextRole;
use infograph_transforms::{Frame, Predicate, SortOrder, Transform};
use kurbo::{Point, Rect};

use crate::emit::EmitContext;
use crate::error::{LayoutError, check_bounds};
use crate::primitive::{Primitive, TextAnchor, TextBaseline};
use crate::rect_mark::RectMark;

/// Target aspect ratio of squarified rows.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Treemap configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreemapSpec {
    /// Inset applied to every tile.
    pub padding: f64,
    /// Target aspect ratio of a row (`>= 1`).
    pub ratio: f64,
}

impl Default for TreemapSpec {
    fn default() -> Self {
        Self {
            padding: 2.0,
            ratio: GOLDEN_RATIO,
        }
    }
}

impl TreemapSpec {
    /// Sets the tile inset.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Sets the target aspect ratio.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Aggregates `frame` and packs it into `plot`.
    pub fn layout(&self, frame: &Frame, plot: Rect) -> Result<TreemapLayout, LayoutError> {
        check_bounds(plot)?;
        if self.ratio.is_nan() || self.ratio < 1.0 {
            return Err(LayoutError::InvalidParameter {
                name: "ratio",
                value: self.ratio,
            });
        }
        let nodes = frame.apply(&[
            Transform::AggregateSum,
            Transform::Filter(Predicate::POSITIVE),
            Transform::Sort(SortOrder::Desc),
        ]);
        let values: Vec<f64> = nodes.values().collect();
        let cells = squarify(&values, plot, self.ratio);
        let tiles = nodes
            .records()
            .iter()
            .zip(cells)
            .map(|(r, cell)| TreemapTile {
                category: r.category.clone(),
                value: r.value,
                cell,
                rect: inset(cell, self.padding),
            })
            .collect::<Vec<_>>();

        log::trace!(
            "treemap: {} records -> {} tiles",
            frame.len(),
            tiles.len()
        );
        Ok(TreemapLayout { tiles })
    }
}

/// One treemap tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TreemapTile {
    /// Aggregated category.
    pub category: String,
    /// Sum of the category's values.
    pub value: f64,
    /// Packed cell, before padding. Cell areas are proportional to values.
    pub cell: Rect,
    /// Painted rectangle (`cell` inset by the padding).
    pub rect: Rect,
}

/// Computed treemap geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct TreemapLayout {
    /// Tiles in packing order (largest first).
    pub tiles: Vec<TreemapTile>,
}

impl TreemapLayout {
    /// Emits tiles with fitted category and value labels.
    ///
    /// Labels are measured against the painted rectangle.
    pub fn primitives(&self, cx: &EmitContext<'_>) -> Vec<Primitive> {
        let mut out: Vec<Primitive> = Vec::new();
        let category_style = cx.style.fonts.get(TextRole::CategoryLabel);
        let value_style = cx.style.fonts.get(TextRole::ValueLabel);
        let pad = cx.labels.cell_padding;
        for tile in &self.tiles {
            let mut rect = RectMark::new(tile.rect).with_fill(cx.fills.fill_for(&tile.category));
            if let Some(stroke) = &cx.style.segment_stroke {
                rect = rect.with_stroke(stroke.clone());
            }
            out.push(rect.into());

            let value_text = cx.format(tile.value);
            let labels = cx.labels.fit_cell(
                cx.measurer,
                tile.rect,
                (&tile.category, category_style),
                (&value_text, value_style),
            );
            let x = tile.rect.x0 + pad;
            let mut y = tile.rect.y0 + pad;
            if let Some(text) = labels.category {
                let line = cx.measurer.measure(&text, category_style).line_height();
                out.push(
                    cx.label(Point::new(x, y), text, TextRole::CategoryLabel)
                        .with_anchor(TextAnchor::Start)
                        .with_baseline(TextBaseline::Hanging)
                        .into(),
                );
                y += line + 4.0;
            }
            if let Some(text) = labels.value {
                out.push(
                    cx.label(Point::new(x, y), text, TextRole::ValueLabel)
                        .with_anchor(TextAnchor::Start)
                        .with_baseline(TextBaseline::Hanging)
                        .into(),
                );
            }
        }
        out
    }
}

fn inset(cell: Rect, padding: f64) -> Rect {
    let px = padding.min(0.5 * cell.width());
    let py = padding.min(0.5 * cell.height());
    Rect::new(cell.x0 + px, cell.y0 + py, cell.x1 - px, cell.y1 - py)
}

/// Squarified packing of positive `values` (sorted descending) into `bounds`.
///
/// Rows are laid along the shorter side; a row keeps growing while its worst aspect ratio
/// (scaled by `ratio`) does not get worse.
pub(crate) fn squarify(values: &[f64], bounds: Rect, ratio: f64) -> Vec<Rect> {
    let n = values.len();
    let mut out: Vec<Rect> = Vec::with_capacity(n);
    let (mut x0, mut y0, x1, y1) = (bounds.x0, bounds.y0, bounds.x1, bounds.y1);
    let mut remaining: f64 = values.iter().sum();
    let mut i0 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        let mut i1 = i0 + 1;
        let mut sum = values[i0];
        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);
        while i1 < n {
            let v = values[i1];
            let next_sum = sum + v;
            let next_min = min_value.min(v);
            let next_max = max_value.max(v);
            beta = next_sum * next_sum * alpha;
            let new_ratio = (next_max / beta).max(beta / next_min);
            if new_ratio > min_ratio {
                break;
            }
            sum = next_sum;
            min_value = next_min;
            max_value = next_max;
            min_ratio = new_ratio;
            i1 += 1;
        }

        let row = &values[i0..i1];
        if dx < dy {
            // Dice: the row spans the full width at the top of the free area.
            let row_y1 = if remaining > 0.0 { y0 + dy * sum / remaining } else { y1 };
            let k = if sum > 0.0 { dx / sum } else { 0.0 };
            let mut x = x0;
            for v in row {
                let next = x + v * k;
                out.push(Rect::new(x, y0, next, row_y1));
                x = next;
            }
            y0 = row_y1;
        } else {
            // Slice: the row spans the full height at the left of the free area.
            let row_x1 = if remaining > 0.0 { x0 + dx * sum / remaining } else { x1 };
            let k = if sum > 0.0 { dy / sum } else { 0.0 };
            let mut y = y0;
            for v in row {
                let next = y + v * k;
                out.push(Rect::new(x0, y, row_x1, next));
                y = next;
            }
            x0 = row_x1;
        }
        remaining -= sum;
        i0 = i1;
    }
    out
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

    fn frame(values: &[(&str, f64)]) -> Frame {
        Frame::new(values.iter().map(|(c, v)| Record::new(*c, *v)).collect()).unwrap()
    }

    fn area(r: Rect) -> f64 {
        r.width() * r.height()
    }

    const PLOT: Rect = Rect::new(0.0, 0.0, 600.0, 400.0);

    #[test]
    fn cells_tile_the_bounds_proportionally() {
        let values = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        let cells = squarify(&values, PLOT, GOLDEN_RATIO);
        assert_eq!(cells.len(), values.len());
        let total: f64 = values.iter().sum();
        for (v, c) in values.iter().zip(&cells) {
            let expected = v / total * area(PLOT);
            assert!((area(*c) - expected).abs() < 1e-6, "{c:?}");
            assert!(c.x0 >= -1e-9 && c.y0 >= -1e-9 && c.x1 <= 600.0 + 1e-9 && c.y1 <= 400.0 + 1e-9);
        }
        let covered: f64 = cells.iter().map(|c| area(*c)).sum();
        assert!((covered - area(PLOT)).abs() < 1e-6);
    }

    #[test]
    fn aggregates_filters_and_sorts_before_packing() {
        let f = frame(&[
            ("b", 2.0),
            ("a", 1.0),
            ("b", 3.0),
            ("z", 0.0),
            ("n", -4.0),
            ("c", 5.0),
        ]);
        let l = TreemapSpec::default().layout(&f, PLOT).unwrap();
        let cats: Vec<&str> = l.tiles.iter().map(|t| t.category.as_str()).collect();
        // b (5) ties with c (5) and was seen first.
        assert_eq!(cats, vec!["b", "c", "a"]);
        assert_eq!(l.tiles[0].value, 5.0);
    }

    #[test]
    fn tiles_are_inset_by_the_padding() {
        let f = frame(&[("a", 1.0), ("b", 1.0)]);
        let l = TreemapSpec::default().with_padding(3.0).layout(&f, PLOT).unwrap();
        for t in &l.tiles {
            assert!((t.rect.x0 - t.cell.x0 - 3.0).abs() < 1e-9);
            assert!((t.cell.y1 - t.rect.y1 - 3.0).abs() < 1e-9);
        }
        // Equal values produce equal cells.
        assert!((area(l.tiles[0].cell) - area(l.tiles[1].cell)).abs() < 1e-6);
    }

    #[test]
    fn empty_after_filtering_is_not_an_error() {
        let f = frame(&[("a", 0.0), ("b", -1.0)]);
        let l = TreemapSpec::default().layout(&f, PLOT).unwrap();
        assert!(l.tiles.is_empty());
    }

    fn label_texts(l: &TreemapLayout, f: &Frame) -> Vec<std::string::String> {
        let style = ChartStyle::default();
        let fills = CategoryFills::new(f.categories());
        let cx = EmitContext::new(&style, &fills, &HeuristicTextMeasurer);
        l.primitives(&cx)
            .iter()
            .filter_map(Primitive::as_label)
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn narrow_tiles_truncate_the_category() {
        let f = frame(&[("Enormous category", 80.0), ("Small but long name", 20.0)]);
        let l = TreemapSpec::default().layout(&f, PLOT).unwrap();
        // 600 * 0.2 wide, inset by 2 on each side.
        assert!((l.tiles[1].rect.width() - 116.0).abs() < 1e-9);
        let texts = label_texts(&l, &f);
        assert!(texts.iter().any(|t| t == "Enormous category"));
        assert!(texts.iter().any(|t| t == "80"));
        // 104px at 8.4px per glyph leaves room for 11 characters and the ellipsis.
        assert!(texts.iter().any(|t| t == "Small but l\u{2026}"), "{texts:?}");
    }

    #[test]
    fn short_tiles_drop_the_value() {
        let f = frame(&[("tall", 90.0), ("short", 10.0)]);
        let l = TreemapSpec::default()
            .layout(&f, Rect::new(0.0, 0.0, 300.0, 600.0))
            .unwrap();
        assert!(l.tiles[1].rect.height() < 70.0);
        let texts = label_texts(&l, &f);
        assert!(texts.iter().any(|t| t == "short"));
        assert!(texts.iter().any(|t| t == "90"));
        assert!(!texts.iter().any(|t| t == "10"));
    }
}
