// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record frames and the small transform IR chart layouts run before computing geometry.
//!
//! This crate provides:
//! - [`Frame`], an owned copy of the rows a chart reads (category, optional group, value), so a
//!   layout can sort and annotate without touching the caller's payload, and
//! - a tiny transform IR ([`Transform`]) covering what the chart families need: numeric
//!   filtering, stable sorting by value, and summing by category, plus
//! - percentage shares ([`Share`]) with cumulative start/end positions.
//!
//! Everything here is deterministic: sorts are stable and grouping keeps first-encounter order.

#![no_std]

extern crate alloc;

mod share;
mod table;
mod transform;

pub use share::{Share, shares};
pub use table::{Frame, FrameError, Record};
pub use transform::{CompareOp, Predicate, SortOrder, Transform};
