// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs shared by every primitive emitter.

extern crate alloc;

use alloc::string::String;

use infograph_text::{TextMeasurer, TextRole};
use kurbo::Point;

use crate::format::format_with_unit;
use crate::label::LabelPolicy;
use crate::palette::CategoryFills;
use crate::style::ChartStyle;
use crate::text_mark::TextMark;

/// Resolved style, fills and text services for one emission pass.
#[derive(Clone, Copy)]
pub struct EmitContext<'a> {
    /// Non-series paint and fonts.
    pub style: &'a ChartStyle,
    /// Series fills by category or group.
    pub fills: &'a CategoryFills,
    /// Text measurement for label fitting.
    pub measurer: &'a dyn TextMeasurer,
    /// Label visibility rules.
    pub labels: LabelPolicy,
    /// Unit appended to formatted values.
    pub unit: Option<&'a str>,
}

impl<'a> EmitContext<'a> {
    /// Creates a context with the default label policy and no unit.
    pub fn new(
        style: &'a ChartStyle,
        fills: &'a CategoryFills,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        Self {
            style,
            fills,
            measurer,
            labels: LabelPolicy::default(),
            unit: None,
        }
    }

    /// Sets the value unit.
    pub fn with_unit(mut self, unit: Option<&'a str>) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the label policy.
    ///
    /// Payload renders always use [`LabelPolicy::default`]; this is for callers driving the
    /// layouts directly.
    pub fn with_label_policy(mut self, labels: LabelPolicy) -> Self {
        self.labels = labels;
        self
    }

    /// Formats a value with the context's unit.
    pub fn format(&self, value: f64) -> String {
        format_with_unit(value, self.unit)
    }

    /// A label using the font for `role` and the chart's text paint.
    pub(crate) fn label(&self, pos: Point, text: impl Into<String>, role: TextRole) -> TextMark {
        TextMark::new(pos, text)
            .with_style(self.style.fonts.get(role).clone())
            .with_fill(self.style.text_fill.clone())
    }
}

impl core::fmt::Debug for EmitContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EmitContext")
            .field("style", self.style)
            .field("fills", self.fills)
            .field("labels", &self.labels)
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}
