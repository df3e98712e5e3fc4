// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for charts.
//!
//! - **Measure**: the caller measures the legend (if any) to get its desired size.
//! - **Arrange**: [`ChartLayout::arrange`] reserves outer padding and a legend strip inside the
//!   view and hands the remaining plot rectangle to a chart family.

use kurbo::Rect;

use crate::error::{LayoutError, check_bounds};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where the legend strip is reserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendOrient {
    /// Left of the plot.
    Left,
    /// Right of the plot.
    #[default]
    Right,
    /// Above the plot.
    Top,
    /// Below the plot.
    Bottom,
}

/// Legend placement options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendPlacement {
    /// Legend orientation.
    pub orient: LegendOrient,
    /// Gap between the plot and the legend strip.
    pub offset: f64,
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self {
            orient: LegendOrient::Right,
            offset: 18.0,
        }
    }
}

/// Layout inputs for a single chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayoutSpec {
    /// Outer chart bounds.
    pub view_size: Size,
    /// Padding applied on all sides of the view.
    pub outer_padding: f64,
    /// An optional legend, given by its measured size and placement.
    pub legend: Option<(Size, LegendPlacement)>,
}

impl ChartLayoutSpec {
    /// Creates a layout spec for a view with default padding and no legend.
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            outer_padding: 10.0,
            legend: None,
        }
    }

    /// Sets the outer padding.
    pub fn with_outer_padding(mut self, outer_padding: f64) -> Self {
        self.outer_padding = outer_padding.max(0.0);
        self
    }

    /// Reserves a legend strip.
    pub fn with_legend(mut self, size: Size, placement: LegendPlacement) -> Self {
        self.legend = Some((size, placement));
        self
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// The rectangle handed to the chart family.
    pub plot: Rect,
    /// Legend rectangle (if any), vertically centered on a side strip or left-aligned on a
    /// top/bottom strip.
    pub legend: Option<Rect>,
}

impl ChartLayout {
    /// Splits the view into plot and legend rectangles.
    pub fn arrange(spec: &ChartLayoutSpec) -> Result<Self, LayoutError> {
        let view = Rect::new(0.0, 0.0, spec.view_size.width, spec.view_size.height);
        check_bounds(view)?;
        let pad = spec.outer_padding.max(0.0);

        let (mut left, mut right, mut top, mut bottom) = (pad, pad, pad, pad);
        if let Some((size, placement)) = spec.legend {
            let offset = placement.offset.max(0.0);
            match placement.orient {
                LegendOrient::Left => left += size.width.max(0.0) + offset,
                LegendOrient::Right => right += size.width.max(0.0) + offset,
                LegendOrient::Top => top += size.height.max(0.0) + offset,
                LegendOrient::Bottom => bottom += size.height.max(0.0) + offset,
            }
        }

        let plot = Rect::new(
            left,
            top,
            (view.x1 - right).max(left),
            (view.y1 - bottom).max(top),
        );

        let legend = spec
            .legend
            .map(|(size, placement)| legend_rect(plot, size, placement));

        Ok(Self { view, plot, legend })
    }
}

fn legend_rect(plot: Rect, size: Size, placement: LegendPlacement) -> Rect {
    let w = size.width.max(0.0);
    let h = size.height.max(0.0);
    let offset = placement.offset.max(0.0);
    let mid_y = plot.center().y;

    match placement.orient {
        LegendOrient::Right => {
            let x0 = plot.x1 + offset;
            Rect::new(x0, mid_y - 0.5 * h, x0 + w, mid_y + 0.5 * h)
        }
        LegendOrient::Left => {
            let x1 = plot.x0 - offset;
            Rect::new(x1 - w, mid_y - 0.5 * h, x1, mid_y + 0.5 * h)
        }
        LegendOrient::Top => {
            let y1 = plot.y0 - offset;
            Rect::new(plot.x0, y1 - h, plot.x0 + w, y1)
        }
        LegendOrient::Bottom => {
            let y0 = plot.y1 + offset;
            Rect::new(plot.x0, y0, plot.x0 + w, y0 + h)
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn right_legend_shrinks_the_plot() {
        let spec = ChartLayoutSpec::new(Size::new(400.0, 300.0))
            .with_legend(Size::new(80.0, 40.0), LegendPlacement::default());
        let layout = ChartLayout::arrange(&spec).unwrap();
        assert_eq!(layout.plot, Rect::new(10.0, 10.0, 400.0 - 10.0 - 80.0 - 18.0, 290.0));
        let legend = layout.legend.unwrap();
        assert_eq!(legend.x0, layout.plot.x1 + 18.0);
        assert!((legend.center().y - layout.plot.center().y).abs() < 1e-9);
    }

    #[test]
    fn non_positive_view_is_rejected() {
        let spec = ChartLayoutSpec::new(Size::new(0.0, 300.0));
        assert!(matches!(
            ChartLayout::arrange(&spec),
            Err(LayoutError::NonPositiveBounds { .. })
        ));
    }
}
