// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives.
//!
//! A layout's contract ends at an ordered list of [`Primitive`]s: arcs, polygons, rectangles,
//! labels, rules and images. Serializing them (SVG, a GPU scene, ...) is the caller's business.

use kurbo::Rect;

use infograph_text::TextMeasurer;

use crate::image_mark::ImageMark;
use crate::polygon_mark::PolygonMark;
use crate::rect_mark::RectMark;
use crate::rule_mark::RuleMark;
use crate::sector_mark::ArcMark;
use crate::text_mark::TextMark;

/// Horizontal text anchor, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is the start of the text.
    Start,
    /// The anchor point is the middle of the text.
    Middle,
    /// The anchor point is the end of the text.
    End,
}

/// Vertical text baseline, matching SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is the vertical middle of the line.
    Middle,
    /// The anchor point is the alphabetic baseline.
    Alphabetic,
    /// The anchor point is the top of the line.
    Hanging,
}

/// Kind tag for a [`Primitive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// [`Primitive::Arc`]
    Arc,
    /// [`Primitive::Polygon`]
    Polygon,
    /// [`Primitive::Rect`]
    Rect,
    /// [`Primitive::Label`]
    Label,
    /// [`Primitive::Rule`]
    Rule,
    /// [`Primitive::Image`]
    Image,
}

/// One drawable instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// An annular sector.
    Arc(ArcMark),
    /// A filled polygon (pyramid and funnel bands).
    Polygon(PolygonMark),
    /// An axis-aligned rectangle.
    Rect(RectMark),
    /// A positioned text label.
    Label(TextMark),
    /// A stroked line segment (ticks, gridlines).
    Rule(RuleMark),
    /// A positioned image reference.
    Image(ImageMark),
}

impl Primitive {
    /// Returns the kind tag.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Arc(_) => PrimitiveKind::Arc,
            Self::Polygon(_) => PrimitiveKind::Polygon,
            Self::Rect(_) => PrimitiveKind::Rect,
            Self::Label(_) => PrimitiveKind::Label,
            Self::Rule(_) => PrimitiveKind::Rule,
            Self::Image(_) => PrimitiveKind::Image,
        }
    }

    /// Rendering order hint. Lower values paint first.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Arc(m) => m.z_index,
            Self::Polygon(m) => m.z_index,
            Self::Rect(m) => m.z_index,
            Self::Label(m) => m.z_index,
            Self::Rule(m) => m.z_index,
            Self::Image(m) => m.z_index,
        }
    }

    /// Estimated bounds in scene coordinates.
    ///
    /// Label bounds depend on text metrics, so a measurer is required.
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        match self {
            Self::Arc(m) => m.bounds(),
            Self::Polygon(m) => m.bounds(),
            Self::Rect(m) => m.rect,
            Self::Label(m) => m.bounds(measurer),
            Self::Rule(m) => Rect::from_points(m.p0, m.p1),
            Self::Image(m) => m.rect,
        }
    }

    /// Returns the label payload, if this is a label.
    pub fn as_label(&self) -> Option<&TextMark> {
        match self {
            Self::Label(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the arc payload, if this is an arc.
    pub fn as_arc(&self) -> Option<&ArcMark> {
        match self {
            Self::Arc(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the polygon payload, if this is a polygon.
    pub fn as_polygon(&self) -> Option<&PolygonMark> {
        match self {
            Self::Polygon(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the rectangle payload, if this is a rectangle.
    pub fn as_rect(&self) -> Option<&RectMark> {
        match self {
            Self::Rect(m) => Some(m),
            _ => None,
        }
    }
}

impl From<ArcMark> for Primitive {
    fn from(value: ArcMark) -> Self {
        Self::Arc(value)
    }
}

impl From<PolygonMark> for Primitive {
    fn from(value: PolygonMark) -> Self {
        Self::Polygon(value)
    }
}

impl From<RectMark> for Primitive {
    fn from(value: RectMark) -> Self {
        Self::Rect(value)
    }
}

impl From<TextMark> for Primitive {
    fn from(value: TextMark) -> Self {
        Self::Label(value)
    }
}

impl From<RuleMark> for Primitive {
    fn from(value: RuleMark) -> Self {
        Self::Rule(value)
    }
}

impl From<ImageMark> for Primitive {
    fn from(value: ImageMark) -> Self {
        Self::Image(value)
    }
}
