// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage shares.
//!
//! Percent-based layouts (donut, funnel, pyramid) need each record's share of the total plus
//! its cumulative start/end position along the 0..100 axis.

extern crate alloc;

use alloc::vec::Vec;

use crate::table::Frame;

/// A record's share of the frame total, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Share {
    /// `value / total * 100`.
    pub percent: f64,
    /// Sum of the percents of all preceding records.
    pub cumulative_start: f64,
    /// `cumulative_start + percent`.
    pub cumulative_end: f64,
}

/// Computes shares for `values` in order.
///
/// When the total is not positive every share is zero, so callers can fall back without
/// dividing by zero.
pub fn shares(values: impl IntoIterator<Item = f64>) -> Vec<Share> {
    let values: Vec<f64> = values.into_iter().collect();
    let total: f64 = values.iter().sum();
    if total.is_nan() || total <= 0.0 {
        if !values.is_empty() {
            log::warn!("share total is {total}; all percents fall back to zero");
        }
        return alloc::vec![Share::default(); values.len()];
    }
    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            let percent = v / total * 100.0;
            let share = Share {
                percent,
                cumulative_start: acc,
                cumulative_end: acc + percent,
            };
            acc += percent;
            share
        })
        .collect()
}

impl Frame {
    /// Shares of every record in the frame's current order.
    pub fn shares(&self) -> Vec<Share> {
        shares(self.values())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn shares_sum_to_one_hundred() {
        let s = shares([30.0, 70.0]);
        assert!((s[0].percent - 30.0).abs() < 1e-9);
        assert!((s[1].percent - 70.0).abs() < 1e-9);
        assert!((s[1].cumulative_start - 30.0).abs() < 1e-9);
        assert!((s[1].cumulative_end - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_yields_zero_shares() {
        let s = shares([0.0, 0.0, 0.0]);
        assert_eq!(s.len(), 3);
        assert!(s.iter().all(|s| *s == Share::default()));
    }
}
