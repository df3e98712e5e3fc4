// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image marks (pictogram icons next to legend entries).

extern crate alloc;

use alloc::string::String;

use kurbo::Rect;

use crate::z_order;

/// A reference to an external image drawn into `rect`.
///
/// The href is passed through untouched; resolving and loading assets is up to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMark {
    /// Target rectangle.
    pub rect: Rect,
    /// Image location.
    pub href: String,
    /// Rendering order hint.
    pub z_index: i32,
}

impl ImageMark {
    /// Creates an image mark.
    pub fn new(rect: Rect, href: impl Into<String>) -> Self {
        Self {
            rect,
            href: href.into(),
            z_index: z_order::LEGEND_SWATCHES,
        }
    }
}
