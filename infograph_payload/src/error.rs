// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while rendering a payload.

use infograph_charts::LayoutError;
use infograph_transforms::FrameError;

use crate::payload::Role;

/// Configuration errors raised while turning a payload into a scene.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No column carries a required role.
    #[error("no column has role `{0}`")]
    MissingRole(Role),
    /// A row lacks the bound field (or holds `null`).
    #[error("row {row} has no value for field `{field}`")]
    MissingField {
        /// Zero-based row index.
        row: usize,
        /// Field name.
        field: String,
    },
    /// The value field holds something that is neither a number nor a numeric string.
    #[error("row {row}: field `{field}` is not numeric: {value}")]
    NonNumeric {
        /// Zero-based row index.
        row: usize,
        /// Field name.
        field: String,
        /// The offending JSON value.
        value: String,
    },
    /// `variables.width` or `variables.height` is zero, negative or non-finite.
    #[error("variables.width and variables.height must be positive, got {width}x{height}")]
    NonPositiveBounds {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// A colour string could not be parsed.
    #[error("invalid colour `{value}` for {target}")]
    InvalidColor {
        /// Where the colour was used (`colors.field.A`, `colors.other.text`, ...).
        target: String,
        /// The rejected string.
        value: String,
    },
    /// A chart kind name was not recognized.
    #[error("unknown chart kind `{0}`")]
    UnknownKind(String),
    /// The bound rows could not be copied into a frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
    /// The chart layout rejected the configuration.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The payload is not valid JSON for the payload model.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}
