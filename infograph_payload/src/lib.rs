// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart payloads for infograph.
//!
//! This crate is the input side of the engine. It:
//! - deserializes the JSON [`ChartPayload`] (rows, column roles, size, colours, typography,
//!   images),
//! - binds the `x`/`y`/`group` roles to row fields ([`Bindings`]),
//! - resolves every paint and font fallback in one place ([`style`]),
//! - dispatches to the chart family selected by [`ChartKind`] and returns a
//!   [`Scene`](infograph_charts::Scene).
//!
//! ```
//! use infograph_payload::{ChartKind, ChartPayload, render};
//!
//! let payload = ChartPayload::from_json(r#"{
//!     "data": {
//!         "data": [{ "name": "A", "v": 30 }, { "name": "B", "v": 70 }],
//!         "columns": [{ "name": "name", "role": "x" }, { "name": "v", "role": "y" }]
//!     },
//!     "variables": { "width": 400, "height": 300 }
//! }"#)?;
//! let scene = render(&payload, ChartKind::Donut)?;
//! assert_eq!(scene.arcs().count(), 2);
//! # Ok::<(), infograph_payload::RenderError>(())
//! ```

mod bindings;
mod error;
mod payload;
mod render;
pub mod style;

pub use bindings::{Bindings, NO_UNIT};
pub use error::RenderError;
pub use payload::{
    ChartPayload, Colors, ColumnDescriptor, DataSection, FontSpec, FontWeightSpec, Images,
    OtherColors, Role, Row, Typography, Variables,
};
pub use render::{ChartKind, render, render_with};
