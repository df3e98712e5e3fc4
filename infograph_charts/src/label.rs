// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label visibility and fitting rules.

extern crate alloc;

use alloc::string::String;

use infograph_text::{TextMeasurer, TextStyle, truncate_to_width};
use kurbo::Rect;

/// Shares below this percentage get no inline label.
pub const MIN_LABEL_SHARE: f64 = 3.0;

/// Treemap cells shorter than this get no value label.
pub const MIN_VALUE_CELL_HEIGHT: f64 = 70.0;

/// Label rules applied by the emitters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPolicy {
    /// Minimum share (in percent) for an inline percentage/value label.
    pub min_share: f64,
    /// Minimum cell height for a treemap value label.
    pub min_value_cell_height: f64,
    /// Horizontal padding kept on each side of a label inside a cell.
    pub cell_padding: f64,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            min_share: MIN_LABEL_SHARE,
            min_value_cell_height: MIN_VALUE_CELL_HEIGHT,
            cell_padding: 6.0,
        }
    }
}

/// The labels that survived fitting for one cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellLabels {
    /// Category text, possibly truncated with an ellipsis.
    pub category: Option<String>,
    /// Value text, unchanged.
    pub value: Option<String>,
}

impl LabelPolicy {
    /// Whether a segment holding `percent` of the total gets an inline label.
    ///
    /// A NaN share never does.
    pub fn shows_share(&self, percent: f64) -> bool {
        percent >= self.min_share
    }

    /// Fits a category label and a value label into `cell`.
    ///
    /// The category is truncated until it fits `cell.width() - 2 * cell_padding`. The value is
    /// dropped when the cell is shorter than `min_value_cell_height` or the text overflows.
    pub fn fit_cell(
        &self,
        measurer: &dyn TextMeasurer,
        cell: Rect,
        category: (&str, &TextStyle),
        value: (&str, &TextStyle),
    ) -> CellLabels {
        let max_width = cell.width() - 2.0 * self.cell_padding;
        if max_width <= 0.0 {
            return CellLabels::default();
        }
        let category = truncate_to_width(measurer, category.0, category.1, max_width);
        let value_fits = cell.height() >= self.min_value_cell_height
            && measurer.measure(value.0, value.1).advance_width <= max_width;
        CellLabels {
            category,
            value: value_fits.then(|| String::from(value.0)),
        }
    }
}
