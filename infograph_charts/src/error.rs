// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout errors.
//!
//! Only configuration problems are errors. Degenerate data (zero totals, a single row, an
//! all-zero scale domain) is handled by each layout's documented fallback instead.

use infograph_transforms::FrameError;

/// Errors returned by chart layouts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The container has a zero, negative or non-finite dimension.
    #[error("container bounds must be positive, got {width}x{height}")]
    NonPositiveBounds {
        /// Container width.
        width: f64,
        /// Container height.
        height: f64,
    },
    /// The plot area left after padding and guides cannot host the chart.
    #[error("{chart} needs more room: {detail}")]
    InsufficientSpace {
        /// Chart family name.
        chart: &'static str,
        /// What did not fit.
        detail: &'static str,
    },
    /// A configuration parameter is out of range.
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The input records could not be copied into a frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Validates a plot rectangle.
pub(crate) fn check_bounds(rect: kurbo::Rect) -> Result<(), LayoutError> {
    let (w, h) = (rect.width(), rect.height());
    if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::NonPositiveBounds {
            width: w,
            height: h,
        })
    }
}
