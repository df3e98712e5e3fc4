// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The serde model of a chart payload.
//!
//! Field names follow the JSON documents produced by the chart backend (`camelCase` for
//! typography keys). Every optional section may be absent; resolution of the fallbacks lives in
//! [`crate::style`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RenderError;

/// One data row: field name to JSON value.
pub type Row = Map<String, Value>;

/// A complete chart payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Rows and column roles.
    pub data: DataSection,
    /// Container size and scale overrides.
    pub variables: Variables,
    /// Explicit colours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
    /// Font overrides per text role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    /// Icons per category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
}

impl ChartPayload {
    /// Parses a payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a payload from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RenderError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Explicit colour for a category or group key, if the payload assigns one.
    pub fn field_color(&self, key: &str) -> Option<&str> {
        self.colors
            .as_ref()
            .and_then(|c| c.field.get(key))
            .map(String::as_str)
    }

    /// Icon reference for a category, if the payload assigns one.
    pub fn icon(&self, key: &str) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.field.get(key))
            .map(String::as_str)
    }
}

/// Rows plus their column descriptors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    /// Data rows in input order.
    #[serde(default)]
    pub data: Vec<Row>,
    /// Column descriptors; bindings are looked up by role.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
}

/// Describes one field of the rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Field name in each row.
    pub name: String,
    /// Encoding role.
    pub role: Role,
    /// Display unit; `"none"` means no unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ColumnDescriptor {
    /// Creates a descriptor without a unit.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            unit: None,
        }
    }

    /// Sets the unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Encoding role of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Category field.
    X,
    /// Numeric value field.
    Y,
    /// Series (group) field.
    Group,
    /// Any role the engine does not bind.
    #[serde(other)]
    Other,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Group => "group",
            Self::Other => "other",
        })
    }
}

/// Container size and scale overrides.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variables {
    /// Container width in pixels.
    pub width: f64,
    /// Container height in pixels.
    pub height: f64,
    /// Explicit domain maximum for the radial and gauge scales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Variables {
    /// Creates a size without a domain override.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            max: None,
        }
    }
}

/// Explicit colours.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    /// Colour per category or group key.
    #[serde(default)]
    pub field: HashMap<String, String>,
    /// Non-series colours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<OtherColors>,
}

/// Non-series colours. Any CSS colour string is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherColors {
    /// Single-series fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Track and secondary fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Full-view background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Label text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Font overrides per text role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Axis tick text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<FontSpec>,
    /// Category labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<FontSpec>,
    /// Value and percentage labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FontSpec>,
    /// Legend entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<FontSpec>,
}

/// A partial font description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    /// Size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// CSS family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// CSS weight, numeric (`700`) or keyword (`"bold"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeightSpec>,
}

/// A CSS font weight as it appears in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeightSpec {
    /// `400`, `700`, ...
    Numeric(u16),
    /// `"normal"`, `"bold"` or a numeric string.
    Keyword(String),
}

impl FontWeightSpec {
    /// Numeric weight, or `None` for an unrecognized keyword.
    pub fn to_weight(&self) -> Option<u16> {
        match self {
            Self::Numeric(w) => Some(*w),
            Self::Keyword(k) => match k.trim() {
                "normal" => Some(400),
                "bold" => Some(700),
                other => other.parse().ok(),
            },
        }
    }
}

/// Icons per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    /// Image reference (URL or data URI) per category key.
    #[serde(default)]
    pub field: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn optional_sections_default_to_none() {
        let p: ChartPayload = serde_json::from_value(json!({
            "data": { "data": [], "columns": [] },
            "variables": { "width": 400, "height": 300 }
        }))
        .unwrap();
        assert_eq!(p.variables, Variables::new(400.0, 300.0));
        assert!(p.colors.is_none() && p.typography.is_none() && p.images.is_none());
    }

    #[test]
    fn unknown_roles_are_tolerated() {
        let c: ColumnDescriptor =
            serde_json::from_value(json!({ "name": "note", "role": "tooltip" })).unwrap();
        assert_eq!(c.role, Role::Other);
    }

    #[test]
    fn typography_uses_camel_case_keys() {
        let t: Typography = serde_json::from_value(json!({
            "value": { "fontSize": 20, "fontFamily": "Georgia", "fontWeight": "bold" }
        }))
        .unwrap();
        let v = t.value.unwrap();
        assert_eq!(v.font_size, Some(20.0));
        assert_eq!(v.font_family.as_deref(), Some("Georgia"));
        assert_eq!(v.font_weight.and_then(|w| w.to_weight()), Some(700));
    }

    #[test]
    fn font_weights_accept_numbers_and_keywords() {
        assert_eq!(FontWeightSpec::Numeric(300).to_weight(), Some(300));
        assert_eq!(FontWeightSpec::Keyword("600".into()).to_weight(), Some(600));
        assert_eq!(FontWeightSpec::Keyword("normal".into()).to_weight(), Some(400));
        assert_eq!(FontWeightSpec::Keyword("heavy-ish".into()).to_weight(), None);
    }
}
