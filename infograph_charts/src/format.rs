// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting shared by every chart family.
//!
//! Large magnitudes are abbreviated with `K`/`M`/`B` suffixes and one decimal; smaller numbers
//! keep up to two decimals. Trailing zeros are always trimmed, so `4e9` reads `4B` and `1500`
//! reads `1.5K`.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const TIERS: [(f64, &str); 4] = [(1.0, ""), (1e3, "K"), (1e6, "M"), (1e9, "B")];

/// Formats a value with magnitude suffixes.
///
/// A value whose rounded mantissa reaches `1000` moves to the next tier (`999_999` is `1M`).
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs();
    let mut tier = TIERS
        .iter()
        .rposition(|(threshold, _)| magnitude >= *threshold)
        .unwrap_or(0);
    let mut mantissa = round_for_tier(magnitude / TIERS[tier].0, tier);
    if mantissa >= 1000.0 && tier + 1 < TIERS.len() {
        tier += 1;
        mantissa = round_for_tier(magnitude / TIERS[tier].0, tier);
    }
    let digits = if tier == 0 {
        trim_zeros(format!("{mantissa:.2}"))
    } else {
        trim_zeros(format!("{mantissa:.1}"))
    };
    let sign = if value < 0.0 && mantissa != 0.0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{digits}{}", TIERS[tier].1)
}

/// Formats a value and appends `unit`.
///
/// `%` attaches directly; any other unit is separated by a space.
pub fn format_with_unit(value: f64, unit: Option<&str>) -> String {
    let text = format_value(value);
    match unit {
        None | Some("") => text,
        Some("%") => format!("{text}%"),
        Some(unit) => format!("{text} {unit}"),
    }
}

/// Formats a percentage with one decimal (`30.0%`).
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

fn round_for_tier(x: f64, tier: usize) -> f64 {
    let scale = if tier == 0 { 100.0 } else { 10.0 };
    (x * scale).round() / scale
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn suffix_tiers() {
        assert_eq!(format_value(999.0), "999");
        assert_eq!(format_value(1500.0), "1.5K");
        assert_eq!(format_value(2_300_000.0), "2.3M");
        assert_eq!(format_value(4_000_000_000.0), "4B");
    }

    #[test]
    fn small_numbers_keep_two_decimals() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(3.14159), "3.14");
        assert_eq!(format_value(0.001), "0");
    }

    #[test]
    fn rounding_promotes_to_the_next_tier() {
        assert_eq!(format_value(999_999.0), "1M");
        assert_eq!(format_value(999.999), "1K");
        assert_eq!(format_value(1_250_000_000_000.0), "1250B");
    }

    #[test]
    fn sign_is_kept() {
        assert_eq!(format_value(-1500.0), "-1.5K");
        assert_eq!(format_value(-0.001), "0");
    }

    #[test]
    fn units_and_percent() {
        assert_eq!(format_with_unit(1500.0, Some("kg")), "1.5K kg");
        assert_eq!(format_with_unit(42.0, Some("%")), "42%");
        assert_eq!(format_with_unit(42.0, None), "42");
        assert_eq!(format_percent(30.0), "30.0%");
        assert_eq!(format_percent(2.96), "3.0%");
    }
}
