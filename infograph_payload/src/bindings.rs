// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field binding: which row fields feed the category, value and group roles.
//!
//! Bindings are resolved by role: the first column declaring `x`, `y` or `group` wins. The
//! position of a column in the descriptor list is never consulted.

use infograph_transforms::{Frame, Record};
use serde_json::Value;

use crate::error::RenderError;
use crate::payload::{ColumnDescriptor, DataSection, Role, Row};

/// Unit sentinel meaning "no unit".
pub const NO_UNIT: &str = "none";

/// The columns bound to each role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bindings<'a> {
    /// Category column.
    pub x: &'a ColumnDescriptor,
    /// Value column.
    pub y: &'a ColumnDescriptor,
    /// Optional series column.
    pub group: Option<&'a ColumnDescriptor>,
}

impl<'a> Bindings<'a> {
    /// Binds roles by looking up the first column with each role.
    pub fn resolve(columns: &'a [ColumnDescriptor]) -> Result<Self, RenderError> {
        let find = |role| columns.iter().find(|c| c.role == role);
        Ok(Self {
            x: find(Role::X).ok_or(RenderError::MissingRole(Role::X))?,
            y: find(Role::Y).ok_or(RenderError::MissingRole(Role::Y))?,
            group: find(Role::Group),
        })
    }

    /// Display unit of the value column; absent and `"none"` both mean no unit.
    pub fn unit(&self) -> Option<&'a str> {
        self.y
            .unit
            .as_deref()
            .filter(|u| *u != NO_UNIT && !u.is_empty())
    }

    /// Reads every row into a record, in input order.
    pub fn records(&self, rows: &[Row]) -> Result<Vec<Record>, RenderError> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| self.record(i, row))
            .collect()
    }

    fn record(&self, row: usize, fields: &Row) -> Result<Record, RenderError> {
        let category = label(row, fields, &self.x.name)?;
        let value = number(row, fields, &self.y.name)?;
        let mut record = Record::new(category, value);
        if let Some(group) = self.group {
            record = record.with_group(label(row, fields, &group.name)?);
        }
        Ok(record)
    }
}

impl DataSection {
    /// Binds the columns and copies the rows into a validated frame.
    pub fn to_frame(&self) -> Result<(Frame, Option<&str>), RenderError> {
        let bindings = Bindings::resolve(&self.columns)?;
        let frame = Frame::new(bindings.records(&self.data)?)?;
        Ok((frame, bindings.unit()))
    }
}

fn field<'r>(row: usize, fields: &'r Row, name: &str) -> Result<&'r Value, RenderError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(RenderError::MissingField {
            row,
            field: name.to_owned(),
        }),
        Some(v) => Ok(v),
    }
}

fn label(row: usize, fields: &Row, name: &str) -> Result<String, RenderError> {
    Ok(match field(row, fields, name)? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn number(row: usize, fields: &Row, name: &str) -> Result<f64, RenderError> {
    let value = field(row, fields, name)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| RenderError::NonNumeric {
        row,
        field: name.to_owned(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("amount", Role::Y).with_unit("kg"),
            ColumnDescriptor::new("region", Role::Group),
            ColumnDescriptor::new("name", Role::X),
        ]
    }

    fn rows(value: Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn roles_bind_regardless_of_column_order() {
        let cols = columns();
        let b = Bindings::resolve(&cols).unwrap();
        assert_eq!(b.x.name, "name");
        assert_eq!(b.y.name, "amount");
        assert_eq!(b.group.map(|g| g.name.as_str()), Some("region"));
        assert_eq!(b.unit(), Some("kg"));
    }

    #[test]
    fn missing_value_role_is_an_error() {
        let cols = vec![ColumnDescriptor::new("name", Role::X)];
        let err = Bindings::resolve(&cols).unwrap_err();
        assert!(matches!(err, RenderError::MissingRole(Role::Y)), "{err:?}");
    }

    #[test]
    fn none_unit_means_no_unit() {
        let cols = vec![
            ColumnDescriptor::new("name", Role::X),
            ColumnDescriptor::new("v", Role::Y).with_unit(NO_UNIT),
        ];
        assert_eq!(Bindings::resolve(&cols).unwrap().unit(), None);
    }

    #[test]
    fn numeric_strings_and_numeric_categories_are_accepted() {
        let cols = vec![
            ColumnDescriptor::new("year", Role::X),
            ColumnDescriptor::new("v", Role::Y),
        ];
        let b = Bindings::resolve(&cols).unwrap();
        let records = b
            .records(&rows(json!([{ "year": 2024, "v": " 12.5 " }, { "year": "2025", "v": 3 }])))
            .unwrap();
        assert_eq!(records[0], Record::new("2024", 12.5));
        assert_eq!(records[1], Record::new("2025", 3.0));
    }

    #[test]
    fn non_numeric_values_name_the_row_and_field() {
        let cols = columns();
        let b = Bindings::resolve(&cols).unwrap();
        let err = b
            .records(&rows(json!([
                { "name": "a", "amount": 1, "region": "n" },
                { "name": "b", "amount": "lots", "region": "s" }
            ])))
            .unwrap_err();
        match err {
            RenderError::NonNumeric { row, field, .. } => {
                assert_eq!((row, field.as_str()), (1, "amount"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn null_fields_count_as_missing() {
        let cols = columns();
        let b = Bindings::resolve(&cols).unwrap();
        let err = b
            .records(&rows(json!([{ "name": "a", "amount": 1, "region": null }])))
            .unwrap_err();
        assert!(
            matches!(err, RenderError::MissingField { row: 0, ref field } if field == "region"),
            "{err:?}"
        );
    }

    #[test]
    fn nan_strings_are_rejected_by_the_frame() {
        let section = DataSection {
            data: rows(json!([{ "year": "a", "v": "NaN" }])),
            columns: vec![
                ColumnDescriptor::new("year", Role::X),
                ColumnDescriptor::new("v", Role::Y),
            ],
        };
        let err = section.to_frame().unwrap_err();
        assert!(matches!(err, RenderError::Frame(_)), "{err:?}");
    }
}
