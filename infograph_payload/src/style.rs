// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style resolution.
//!
//! Every paint and font fallback the renderer uses is decided here, once:
//!
//! | What                    | Order                                                         |
//! |-------------------------|---------------------------------------------------------------|
//! | category / group fill   | `colors.field[key]`, palette by dedup index                   |
//! | single-series fill      | `colors.field[key]`, `colors.other.primary`, palette          |
//! | track fill              | `colors.other.secondary`, light grey                          |
//! | text fill               | `colors.other.text`, black                                    |
//! | background              | `colors.other.background`, none                               |
//! | font size               | `typography.<role>.fontSize`, role tier (12/14/16/10)         |
//! | font family / weight    | `typography.<role>.fontFamily` / `fontWeight`, sans-serif/400 |
//! | icon                    | `images.field[key]`, none                                     |
//!
//! Colour strings that fail to parse are errors; they are never silently replaced.

use infograph_charts::{CategoryFills, ChartStyle, Fonts};
use infograph_text::{FontFamily, FontWeight, TextRole, TextStyle};
use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::error::RenderError;
use crate::payload::{ChartPayload, FontSpec, FontWeightSpec, Typography};

/// How series keys pick their fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// One colour per key from the palette.
    Categorical,
    /// One series colour (`colors.other.primary`) shared by every key.
    SingleSeries,
}

/// Parses a CSS colour string.
pub fn parse_css_color(target: &str, value: &str) -> Result<Color, RenderError> {
    parse_color(value.trim())
        .map(|c| c.to_alpha_color::<Srgb>())
        .map_err(|_| RenderError::InvalidColor {
            target: target.to_owned(),
            value: value.to_owned(),
        })
}

/// Resolves non-series paint and fonts.
pub fn chart_style(payload: &ChartPayload) -> Result<ChartStyle, RenderError> {
    let mut style = ChartStyle::default().with_fonts(fonts(payload.typography.as_ref()));
    let Some(other) = payload.colors.as_ref().and_then(|c| c.other.as_ref()) else {
        return Ok(style);
    };
    if let Some(text) = &other.text {
        style = style.with_text_fill(parse_css_color("colors.other.text", text)?);
    }
    if let Some(secondary) = &other.secondary {
        style = style.with_track_fill(parse_css_color("colors.other.secondary", secondary)?);
    }
    if let Some(background) = &other.background {
        style = style.with_background(parse_css_color("colors.other.background", background)?);
    }
    Ok(style)
}

/// Resolves the fill lookup for `keys` (in display order).
pub fn category_fills<'a>(
    payload: &ChartPayload,
    keys: impl IntoIterator<Item = &'a str>,
    mode: FillMode,
) -> Result<CategoryFills, RenderError> {
    let mut fills = CategoryFills::new(keys);
    if mode == FillMode::SingleSeries
        && let Some(primary) = payload
            .colors
            .as_ref()
            .and_then(|c| c.other.as_ref())
            .and_then(|o| o.primary.as_deref())
    {
        fills = fills.with_default(parse_css_color("colors.other.primary", primary)?);
    }
    let keys: Vec<String> = fills.keys().map(str::to_owned).collect();
    for key in keys {
        if let Some(color) = payload.field_color(&key) {
            let fill = parse_css_color(&format!("colors.field.{key}"), color)?;
            fills = fills.with_override(key, fill);
        }
    }
    Ok(fills)
}

/// Resolves the font of every text role.
pub fn fonts(typography: Option<&Typography>) -> Fonts {
    let t = typography;
    Fonts {
        axis_tick: font(TextRole::AxisTick, t.and_then(|t| t.axis.as_ref())),
        category: font(TextRole::CategoryLabel, t.and_then(|t| t.label.as_ref())),
        value: font(TextRole::ValueLabel, t.and_then(|t| t.value.as_ref())),
        legend: font(TextRole::LegendLabel, t.and_then(|t| t.legend.as_ref())),
    }
}

fn font(role: TextRole, spec: Option<&FontSpec>) -> TextStyle {
    let Some(spec) = spec else {
        return role.style();
    };
    let size = spec
        .font_size
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or_else(|| role.default_font_size());
    let mut style = TextStyle::new(size);
    if let Some(family) = spec.font_family.as_deref() {
        style = style.with_family(FontFamily::from_css(family));
    }
    match spec.font_weight.as_ref().map(FontWeightSpec::to_weight) {
        Some(Some(weight)) => style = style.with_weight(FontWeight(weight)),
        Some(None) => log::warn!("ignoring unrecognized font weight for {role:?}"),
        None => {}
    }
    style
}
