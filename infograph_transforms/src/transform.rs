// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform IR types and their execution over a [`Frame`].

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::table::{Frame, Record};

/// Sorting order for [`Transform::Sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// Comparison operators for value predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

/// A predicate over a record's value, used by [`Transform::Filter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predicate {
    /// Comparison operator.
    pub op: CompareOp,
    /// Right-hand constant.
    pub value: f64,
}

impl Predicate {
    /// Keeps strictly positive values.
    pub const POSITIVE: Self = Self {
        op: CompareOp::Gt,
        value: 0.0,
    };

    /// Evaluate the predicate for a given value.
    pub fn eval(&self, v: f64) -> bool {
        match self.op {
            CompareOp::Lt => v < self.value,
            CompareOp::Le => v <= self.value,
            CompareOp::Gt => v > self.value,
            CompareOp::Ge => v >= self.value,
        }
    }
}

/// A frame-to-frame transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Keep only records whose value satisfies the predicate.
    Filter(Predicate),
    /// Stable sort by value. Ties keep their current relative order.
    Sort(SortOrder),
    /// Sum values per category.
    ///
    /// Output records appear in first-encounter order of their category and carry the group of
    /// the first record seen for that category.
    AggregateSum,
}

impl Frame {
    /// Runs `transforms` in order over a copy of this frame.
    pub fn apply(&self, transforms: &[Transform]) -> Self {
        let mut out = self.clone();
        for t in transforms {
            out = out.apply_one(*t);
        }
        out
    }

    fn apply_one(mut self, transform: Transform) -> Self {
        match transform {
            Transform::Filter(predicate) => {
                self.records_mut().retain(|r| predicate.eval(r.value));
                self
            }
            Transform::Sort(order) => {
                self.records_mut().sort_by(|a, b| match order {
                    SortOrder::Asc => a.value.total_cmp(&b.value),
                    SortOrder::Desc => b.value.total_cmp(&a.value),
                });
                self
            }
            Transform::AggregateSum => {
                let mut index: HashMap<&str, usize> = HashMap::new();
                let mut out: Vec<Record> = Vec::new();
                for r in self.records() {
                    match index.entry(r.category.as_str()) {
                        Entry::Occupied(slot) => out[*slot.get()].value += r.value,
                        Entry::Vacant(slot) => {
                            slot.insert(out.len());
                            out.push(r.clone());
                        }
                    }
                }
                log::trace!(
                    "aggregated {} records into {} categories",
                    self.len(),
                    out.len()
                );
                // Finite sums can still overflow; saturate so the frame stays finite.
                for r in &mut out {
                    if !r.value.is_finite() {
                        r.value = if r.value > 0.0 { f64::MAX } else { f64::MIN };
                    }
                }
                Self::new(out).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn frame(values: &[(&str, f64)]) -> Frame {
        Frame::new(values.iter().map(|(c, v)| Record::new(*c, *v)).collect()).unwrap()
    }

    fn cats(frame: &Frame) -> Vec<&str> {
        frame.records().iter().map(|r| r.category.as_str()).collect()
    }

    #[test]
    fn sort_desc_is_stable_for_ties() {
        let f = frame(&[("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 3.0)]);
        let sorted = f.apply(&[Transform::Sort(SortOrder::Desc)]);
        assert_eq!(cats(&sorted), vec!["b", "d", "a", "c"]);
        // The input frame is untouched.
        assert_eq!(cats(&f), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn aggregate_sums_per_category_in_encounter_order() {
        let f = frame(&[("x", 1.0), ("y", 2.0), ("x", 4.0)]);
        let agg = f.apply(&[Transform::AggregateSum]);
        assert_eq!(cats(&agg), vec!["x", "y"]);
        assert_eq!(agg.values().collect::<Vec<_>>(), vec![5.0, 2.0]);
    }

    #[test]
    fn filter_positive_drops_zero_and_negative() {
        let f = frame(&[("a", 0.0), ("b", -1.0), ("c", 2.0)]);
        let kept = f.apply(&[Transform::Filter(Predicate::POSITIVE)]);
        assert_eq!(cats(&kept), vec!["c"]);
    }
}
