// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in sample payloads, one per chart family.

use infograph_payload::{ChartKind, ChartPayload};
use serde_json::{Value, json};

/// The sample payload for `kind`.
pub(crate) fn sample(kind: ChartKind) -> anyhow::Result<ChartPayload> {
    let value = match kind {
        ChartKind::RadialBar | ChartKind::RadialBarCompact => energy_mix(),
        ChartKind::Gauge => json!({
            "data": {
                "data": [
                    { "metric": "CPU", "load": 72 },
                    { "metric": "Memory", "load": 54 },
                    { "metric": "Disk", "load": 31 }
                ],
                "columns": [
                    { "name": "metric", "role": "x" },
                    { "name": "load", "role": "y", "unit": "%" }
                ]
            },
            "variables": { "width": 480, "height": 420, "max": 100 },
            "colors": { "other": { "primary": "#4e79a7", "secondary": "#e8e8e8" } }
        }),
        ChartKind::Pyramid => json!({
            "data": {
                "data": [
                    { "tier": "Self-actualization", "people": 5 },
                    { "tier": "Esteem", "people": 15 },
                    { "tier": "Belonging", "people": 25 },
                    { "tier": "Safety", "people": 25 },
                    { "tier": "Physiological", "people": 30 }
                ],
                "columns": [
                    { "name": "tier", "role": "x" },
                    { "name": "people", "role": "y" }
                ]
            },
            "variables": { "width": 560, "height": 400 }
        }),
        ChartKind::Funnel => json!({
            "data": {
                "data": [
                    { "stage": "Visits", "count": 12000 },
                    { "stage": "Sign-ups", "count": 4200 },
                    { "stage": "Trials", "count": 1800 },
                    { "stage": "Purchases", "count": 640 }
                ],
                "columns": [
                    { "name": "stage", "role": "x" },
                    { "name": "count", "role": "y" }
                ]
            },
            "variables": { "width": 560, "height": 400 },
            "colors": { "field": { "Purchases": "#e15759" } }
        }),
        ChartKind::Treemap => json!({
            "data": {
                "data": [
                    { "lang": "Rust", "loc": 48000 },
                    { "lang": "TypeScript", "loc": 31000 },
                    { "lang": "Python", "loc": 12500 },
                    { "lang": "Shell", "loc": 2100 },
                    { "lang": "Rust", "loc": 6000 },
                    { "lang": "Other", "loc": 900 }
                ],
                "columns": [
                    { "name": "lang", "role": "x" },
                    { "name": "loc", "role": "y", "unit": "lines" }
                ]
            },
            "variables": { "width": 640, "height": 400 }
        }),
        ChartKind::Donut => json!({
            "data": {
                "data": [
                    { "channel": "Search", "share": 42 },
                    { "channel": "Direct", "share": 27 },
                    { "channel": "Social", "share": 18 },
                    { "channel": "Email", "share": 11 },
                    { "channel": "Other", "share": 2 }
                ],
                "columns": [
                    { "name": "channel", "role": "x" },
                    { "name": "share", "role": "y" }
                ]
            },
            "variables": { "width": 520, "height": 360 },
            "typography": { "value": { "fontSize": 13, "fontWeight": "bold" } }
        }),
    };
    Ok(serde_json::from_value(value)?)
}

fn energy_mix() -> Value {
    json!({
        "data": {
            "data": [
                { "source": "Solar", "twh": 1630, "kind": "Renewable" },
                { "source": "Wind", "twh": 2330, "kind": "Renewable" },
                { "source": "Hydro", "twh": 4210, "kind": "Renewable" },
                { "source": "Gas", "twh": 6630, "kind": "Fossil" },
                { "source": "Coal", "twh": 10430, "kind": "Fossil" }
            ],
            "columns": [
                { "name": "source", "role": "x" },
                { "name": "twh", "role": "y", "unit": "TWh" },
                { "name": "kind", "role": "group" }
            ]
        },
        "variables": { "width": 640, "height": 480 },
        "colors": { "field": { "Renewable": "seagreen", "Fossil": "#7f7f7f" } }
    })
}
