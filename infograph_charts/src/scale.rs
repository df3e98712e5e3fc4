// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales and evenly spaced ticks.
//!
//! Radial bars and gauges map values onto an angular sweep with a zero-anchored linear scale.

extern crate alloc;

use alloc::vec::Vec;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A scale from `[0, max]` onto `[start, start + sweep]`.
    pub fn angular(max: f64, start: f64, sweep: f64) -> Self {
        Self::new((0.0, max), (start, start + sweep))
    }

    /// Maps a value from domain space into range space.
    ///
    /// A collapsed domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Like [`ScaleLinear::map`], clamped to the range.
    pub fn map_clamped(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        self.map(x).clamp(lo, hi)
    }

    /// Returns the minimum of the configured domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Evenly spaced ticks over `[0, domain_max]`; see [`even_ticks`].
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        even_ticks(self.domain.1, count)
    }
}

/// `count + 1` evenly spaced values from `0` to `max` inclusive.
///
/// A zero (or non-finite) `max`, or a zero `count`, yields the single tick `[0]`.
pub fn even_ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 || max == 0.0 || !max.is_finite() {
        return alloc::vec![0.0];
    }
    let step = max / count as f64;
    (0..=count)
        .map(|i| if i == count { max } else { i as f64 * step })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::PI;

    use super::*;

    #[test]
    fn ticks_are_evenly_spaced_and_inclusive() {
        assert_eq!(even_ticks(100.0, 4), [0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn zero_max_yields_a_single_zero_tick() {
        assert_eq!(even_ticks(0.0, 5), [0.0]);
        let s = ScaleLinear::angular(0.0, 0.0, PI);
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.ticks(5), [0.0]);
    }

    #[test]
    fn angular_scale_maps_max_to_the_end_of_the_sweep() {
        let s = ScaleLinear::angular(50.0, -0.75 * PI, 1.5 * PI);
        assert!((s.map(50.0) - 0.75 * PI).abs() < 1e-12);
        assert!((s.map(25.0)).abs() < 1e-12);
        assert!((s.map_clamped(80.0) - 0.75 * PI).abs() < 1e-12);
        assert!((s.map_clamped(-10.0) + 0.75 * PI).abs() < 1e-12);
    }
}
