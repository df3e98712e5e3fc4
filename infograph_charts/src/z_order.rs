// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for generated primitives.
//!
//! Every primitive carries an explicit `z_index`. [`Scene`](crate::Scene) sorts stably by it, so
//! primitives with equal z keep their emission order.

/// Chart background fill.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines and reference ticks drawn behind series.
pub const GRID_LINES: i32 = -50;
/// Unfilled value tracks (gauge rings).
pub const TRACKS: i32 = -10;

/// Filled series marks (arcs, bands, tiles).
pub const SERIES_FILL: i32 = 0;
/// Outlines drawn over series fills.
pub const SERIES_STROKE: i32 = 10;

/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Inline category and value labels.
pub const DATA_LABELS: i32 = 50;

/// Legend swatches and icons.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
