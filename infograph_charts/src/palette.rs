// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical fills.
//!
//! Series colours are looked up by category (or group) key. Keys are assigned palette entries
//! by their position in the first-encounter dedup order, so the same data always gets the same
//! colours.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::color::palette::css;
use peniko::{Brush, Color};

/// Palette used when the payload does not assign a colour.
pub const DEFAULT_PALETTE: [Color; 10] = [
    css::STEEL_BLUE,
    css::DARK_ORANGE,
    css::SEA_GREEN,
    css::CRIMSON,
    css::MEDIUM_PURPLE,
    css::SIENNA,
    css::HOT_PINK,
    css::GRAY,
    css::OLIVE,
    css::DARK_TURQUOISE,
];

/// Fill lookup for a fixed, ordered set of keys.
///
/// Resolution for a key: explicit override, then the uniform default (if set), then
/// `palette[index % palette.len()]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryFills {
    keys: Vec<String>,
    index: HashMap<String, usize>,
    palette: Vec<Color>,
    overrides: HashMap<String, Brush>,
    default: Option<Brush>,
}

impl CategoryFills {
    /// Creates a lookup for `keys` in display order, using [`DEFAULT_PALETTE`].
    ///
    /// Duplicate keys keep their first position.
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out = Self {
            keys: Vec::new(),
            index: HashMap::new(),
            palette: DEFAULT_PALETTE.to_vec(),
            overrides: HashMap::new(),
            default: None,
        };
        for key in keys {
            if !out.index.contains_key(key) {
                out.index.insert(String::from(key), out.keys.len());
                out.keys.push(String::from(key));
            }
        }
        out
    }

    /// Replaces the palette. An empty palette keeps the current one.
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        let palette: Vec<Color> = palette.into_iter().collect();
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Pins the fill for one key.
    pub fn with_override(mut self, key: impl Into<String>, fill: impl Into<Brush>) -> Self {
        self.overrides.insert(key.into(), fill.into());
        self
    }

    /// Uses `fill` for every key without an override, instead of the palette.
    pub fn with_default(mut self, fill: impl Into<Brush>) -> Self {
        self.default = Some(fill.into());
        self
    }

    /// Keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Resolves the fill for `key`.
    ///
    /// Unknown keys resolve like a key appended after the known ones.
    pub fn fill_for(&self, key: &str) -> Brush {
        if let Some(fill) = self.overrides.get(key) {
            return fill.clone();
        }
        if let Some(fill) = &self.default {
            return fill.clone();
        }
        let i = self.index.get(key).copied().unwrap_or(self.keys.len());
        Brush::Solid(self.palette[i % self.palette.len()])
    }

    /// `(key, fill)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Brush)> + '_ {
        self.keys().map(|k| (k, self.fill_for(k)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn palette_index_follows_first_encounter_order() {
        let fills = CategoryFills::new(["b", "a", "b", "c"]);
        assert_eq!(fills.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(fills.fill_for("b"), Brush::Solid(DEFAULT_PALETTE[0]));
        assert_eq!(fills.fill_for("c"), Brush::Solid(DEFAULT_PALETTE[2]));
    }

    #[test]
    fn palette_wraps_around() {
        let fills = CategoryFills::new(["x", "y", "z"]).with_palette([css::RED, css::BLUE]);
        assert_eq!(fills.fill_for("z"), Brush::Solid(css::RED));
    }

    #[test]
    fn override_beats_default_beats_palette() {
        let fills = CategoryFills::new(["a", "b"])
            .with_default(css::GOLD)
            .with_override("a", css::BLACK);
        assert_eq!(fills.fill_for("a"), Brush::Solid(css::BLACK));
        assert_eq!(fills.fill_for("b"), Brush::Solid(css::GOLD));
    }
}
