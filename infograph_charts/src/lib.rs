// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic chart geometry.
//!
//! Every chart family follows the same two steps:
//! - **Layout**: a `*Spec` (configuration with builder setters) turns a [`Frame`] and a plot
//!   rectangle into plain geometry (rings, bands, tiles, slices).
//! - **Emit**: the layout turns itself into an ordered list of [`Primitive`]s using an
//!   [`EmitContext`] (resolved style, series fills, text measurement, label rules).
//!
//! Families:
//! - [`RadialBarSpec`]: concentric bars on a 270° (or 120°) angular scale.
//! - [`GaugeSpec`]: concentric rings from `-135°` to `+135°`.
//! - [`PyramidSpec`]: area-preserving horizontal bands of a triangle.
//! - [`FunnelSpec`]: proportional trapezoids.
//! - [`TreemapSpec`]: squarified single-level treemap.
//! - [`DonutSpec`]: padded angular partition.
//!
//! Layouts never mutate their input: sorting and aggregation happen on a private copy of the
//! frame. No randomness or clock is involved, so identical input yields identical primitives.
//!
//! Serializing primitives (SVG, GPU scenes) is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod band;
mod donut;
mod emit;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod funnel;
mod gauge;
mod image_mark;
mod label;
mod layout;
mod legend;
mod palette;
mod polygon_mark;
mod primitive;
mod pyramid;
mod radial;
mod rect_mark;
mod rule_mark;
mod scale;
mod scene;
mod sector_mark;
mod style;
mod text_mark;
mod treemap;
mod z_order;

pub use band::Band;
pub use donut::{DonutLayout, DonutSlice, DonutSpec};
pub use emit::EmitContext;
pub use error::LayoutError;
pub use format::{format_percent, format_value, format_with_unit};
pub use funnel::{FunnelLayout, FunnelSpec};
pub use gauge::{GAUGE_START, GAUGE_SWEEP, GaugeLayout, GaugeRing, GaugeSpec};
pub use image_mark::ImageMark;
pub use label::{CellLabels, LabelPolicy, MIN_LABEL_SHARE, MIN_VALUE_CELL_HEIGHT};
pub use layout::{ChartLayout, ChartLayoutSpec, LegendOrient, LegendPlacement, Size};
pub use legend::{LegendItem, LegendSpec};
pub use palette::{CategoryFills, DEFAULT_PALETTE};
pub use polygon_mark::PolygonMark;
pub use primitive::{Primitive, PrimitiveKind, TextAnchor, TextBaseline};
pub use pyramid::{PyramidLayout, PyramidSpec};
pub use radial::{COMPACT_RADIAL_SWEEP, RADIAL_SWEEP, RadialBar, RadialBarLayout, RadialBarSpec, Tick};
pub use rect_mark::RectMark;
pub use rule_mark::RuleMark;
pub use scale::{ScaleLinear, even_ticks};
pub use scene::Scene;
pub use sector_mark::{ArcMark, polar};
pub use style::{ChartStyle, Fonts, StrokeStyle};
pub use text_mark::TextMark;
pub use treemap::{GOLDEN_RATIO, TreemapLayout, TreemapSpec, TreemapTile};
pub use z_order::*;

pub use infograph_text::{HeuristicTextMeasurer, TextMeasurer, TextRole, TextStyle};
pub use infograph_transforms::{Frame, FrameError, Record};
