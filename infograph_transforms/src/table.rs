// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned record frame used as the input of every layout.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

/// One chart row, reduced to the roles the geometry engine reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Categorical value (`x` role).
    pub category: String,
    /// Optional grouping value (`group` role).
    pub group: Option<String>,
    /// Numerical value (`y` role).
    pub value: f64,
}

impl Record {
    /// Creates an ungrouped record.
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            group: None,
            value,
        }
    }

    /// Sets the group value.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Errors returned when building a [`Frame`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    /// A record carries a NaN or infinite value.
    #[error("row {row} has a non-finite value ({value})")]
    NonFiniteValue {
        /// Index of the offending record.
        row: usize,
        /// The rejected value.
        value: f64,
    },
}

/// An owned, validated list of records.
///
/// Layouts never see the caller's rows directly: they copy them into a frame first, so sorting
/// and aggregation stay private to one render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    records: Vec<Record>,
}

impl Frame {
    /// Builds a frame, rejecting non-finite values.
    pub fn new(records: Vec<Record>) -> Result<Self, FrameError> {
        if let Some((row, r)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !r.value.is_finite())
        {
            return Err(FrameError::NonFiniteValue {
                row,
                value: r.value,
            });
        }
        Ok(Self { records })
    }

    /// Copies records out of a slice.
    pub fn from_records(records: &[Record]) -> Result<Self, FrameError> {
        Self::new(records.to_vec())
    }

    /// Returns the records in their current order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the frame has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over values in record order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.value)
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// Largest value, or `0.0` for an empty frame.
    ///
    /// Negative values never raise the maximum above zero, so scales anchored at zero stay
    /// well-formed.
    pub fn max_value(&self) -> f64 {
        self.values().fold(0.0_f64, f64::max)
    }

    /// Distinct categories in first-encounter order.
    pub fn categories(&self) -> Vec<&str> {
        dedup(self.records.iter().map(|r| r.category.as_str()))
    }

    /// Distinct groups in first-encounter order (records without a group are skipped).
    pub fn groups(&self) -> Vec<&str> {
        dedup(self.records.iter().filter_map(|r| r.group.as_deref()))
    }

    /// Whether any record carries a group.
    pub fn is_grouped(&self) -> bool {
        self.records.iter().any(|r| r.group.is_some())
    }

    /// For each record, whether it is the first one (in record order) with its category.
    pub fn first_occurrences(&self) -> Vec<bool> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.records
            .iter()
            .map(|r| seen.insert(r.category.as_str()))
            .collect()
    }
}

fn dedup<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    keys.filter(|k| seen.insert(*k)).collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn rejects_non_finite_values() {
        let err = Frame::new(vec![Record::new("A", 1.0), Record::new("B", f64::NAN)]);
        assert!(
            matches!(err, Err(FrameError::NonFiniteValue { row: 1, .. })),
            "NaN must be rejected with its row index"
        );
    }

    #[test]
    fn categories_and_groups_keep_first_encounter_order() {
        let frame = Frame::new(vec![
            Record::new("B", 1.0).with_group("g2"),
            Record::new("A", 2.0).with_group("g1"),
            Record::new("B", 3.0).with_group("g1"),
        ])
        .unwrap();
        assert_eq!(frame.categories(), vec!["B", "A"]);
        assert_eq!(frame.groups(), vec!["g2", "g1"]);
        assert_eq!(frame.first_occurrences(), vec![true, true, false]);
    }

    #[test]
    fn max_value_of_empty_frame_is_zero() {
        let frame = Frame::default();
        assert_eq!(frame.max_value(), 0.0);
        assert_eq!(frame.total(), 0.0);
    }
}
