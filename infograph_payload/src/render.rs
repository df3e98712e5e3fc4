// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render dispatch: payload in, [`Scene`] out.

use core::fmt;
use core::str::FromStr;

use infograph_charts::{
    ChartLayout, ChartLayoutSpec, DonutSpec, EmitContext, Frame, FunnelSpec, GaugeSpec,
    HeuristicTextMeasurer, LegendPlacement, LegendSpec, PLOT_BACKGROUND, Primitive, PyramidSpec,
    RadialBarSpec, RectMark, Scene, Size, TextMeasurer, TreemapSpec,
};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::payload::ChartPayload;
use crate::style::{FillMode, category_fills, chart_style};

/// Chart family to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Concentric bars on a 270° scale.
    RadialBar,
    /// Concentric bars on a 120° scale.
    RadialBarCompact,
    /// Concentric gauge rings.
    Gauge,
    /// Area-preserving pyramid.
    Pyramid,
    /// Proportional funnel.
    Funnel,
    /// Squarified treemap.
    Treemap,
    /// Padded donut.
    Donut,
}

impl ChartKind {
    /// Every kind, in documentation order.
    pub const ALL: [Self; 7] = [
        Self::RadialBar,
        Self::RadialBarCompact,
        Self::Gauge,
        Self::Pyramid,
        Self::Funnel,
        Self::Treemap,
        Self::Donut,
    ];

    /// The `snake_case` name used in payloads and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::RadialBar => "radial_bar",
            Self::RadialBarCompact => "radial_bar_compact",
            Self::Gauge => "gauge",
            Self::Pyramid => "pyramid",
            Self::Funnel => "funnel",
            Self::Treemap => "treemap",
            Self::Donut => "donut",
        }
    }

    fn is_radial(self) -> bool {
        matches!(self, Self::RadialBar | Self::RadialBarCompact)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| RenderError::UnknownKind(s.to_owned()))
    }
}

/// Renders `payload` as `kind` with the built-in heuristic text measurer.
pub fn render(payload: &ChartPayload, kind: ChartKind) -> Result<Scene, RenderError> {
    render_with(payload, kind, &HeuristicTextMeasurer)
}

/// Renders `payload` as `kind`, measuring text with `measurer`.
///
/// The payload is only read: rows are copied into a private frame before any sorting or
/// aggregation.
pub fn render_with(
    payload: &ChartPayload,
    kind: ChartKind,
    measurer: &dyn TextMeasurer,
) -> Result<Scene, RenderError> {
    let (width, height) = (payload.variables.width, payload.variables.height);
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(RenderError::NonPositiveBounds { width, height });
    }

    let (frame, unit) = payload.data.to_frame()?;
    log::debug!(
        "rendering {kind} with {} rows into {width}x{height}",
        frame.len()
    );

    let style = chart_style(payload)?;
    let grouped = kind.is_radial() && frame.is_grouped();
    let (keys, mode) = if grouped {
        (frame.groups(), FillMode::Categorical)
    } else if kind.is_radial() || kind == ChartKind::Gauge {
        (frame.categories(), FillMode::SingleSeries)
    } else {
        (frame.categories(), FillMode::Categorical)
    };
    let fills = category_fills(payload, keys, mode)?;

    let legend = if grouped || kind == ChartKind::Donut {
        let mut legend = LegendSpec::from_fills(&fills)
            .with_font(style.fonts.legend.clone())
            .with_text_fill(style.text_fill.clone());
        for item in &mut legend.items {
            item.icon = payload.icon(&item.label).map(str::to_owned);
        }
        Some(legend).filter(|l| !l.is_empty())
    } else {
        None
    };

    let mut frame_spec = ChartLayoutSpec::new(Size::new(width, height));
    if let Some(legend) = &legend {
        frame_spec = frame_spec.with_legend(legend.measure(measurer), LegendPlacement::default());
    }
    let chart = ChartLayout::arrange(&frame_spec)?;

    let mut scene = Scene::new(chart.view);
    if let Some(background) = &style.background {
        scene.push(
            RectMark::new(chart.view)
                .with_fill(background.clone())
                .with_z_index(PLOT_BACKGROUND),
        );
    }

    let cx = EmitContext::new(&style, &fills, measurer).with_unit(unit);
    scene.extend(family_primitives(
        kind,
        &frame,
        chart,
        payload.variables.max,
        &cx,
    )?);

    if let (Some(legend), Some(rect)) = (&legend, chart.legend) {
        scene.extend(legend.primitives(rect.origin()));
    }
    log::trace!("{kind} scene holds {} primitives", scene.len());
    Ok(scene)
}

fn family_primitives(
    kind: ChartKind,
    frame: &Frame,
    chart: ChartLayout,
    max: Option<f64>,
    cx: &EmitContext<'_>,
) -> Result<Vec<Primitive>, RenderError> {
    let plot = chart.plot;
    Ok(match kind {
        ChartKind::RadialBar | ChartKind::RadialBarCompact => {
            let mut spec = if kind == ChartKind::RadialBarCompact {
                RadialBarSpec::compact()
            } else {
                RadialBarSpec::default()
            };
            if let Some(max) = max {
                spec = spec.with_max(max);
            }
            spec.layout(frame, plot)?.primitives(cx)
        }
        ChartKind::Gauge => {
            let mut spec = GaugeSpec::default();
            if let Some(max) = max {
                spec = spec.with_max(max);
            }
            spec.layout(frame, plot)?.primitives(cx)
        }
        ChartKind::Pyramid => PyramidSpec::default().layout(frame, plot)?.primitives(cx),
        ChartKind::Funnel => FunnelSpec::default().layout(frame, plot)?.primitives(cx),
        ChartKind::Treemap => TreemapSpec::default().layout(frame, plot)?.primitives(cx),
        ChartKind::Donut => DonutSpec::default().layout(frame, plot)?.primitives(cx),
    })
}
