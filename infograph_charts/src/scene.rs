// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output of a render: a view rectangle plus primitives.

extern crate alloc;

use alloc::vec::Vec;

use infograph_text::TextMeasurer;
use kurbo::Rect;

use crate::primitive::{Primitive, PrimitiveKind};
use crate::sector_mark::ArcMark;
use crate::text_mark::TextMark;

/// An ordered list of primitives inside a view rectangle.
///
/// Primitives are stored in emission order. [`Scene::paint_order`] sorts them stably by
/// `z_index`, so primitives sharing a z keep the order the layout produced them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Outer bounds (`0, 0, width, height`).
    pub view: Rect,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(view: Rect) -> Self {
        Self {
            view,
            primitives: Vec::new(),
        }
    }

    /// Appends one primitive.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Primitives in emission order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives sorted by `z_index`, ties in emission order.
    pub fn paint_order(&self) -> Vec<&Primitive> {
        let mut out: Vec<&Primitive> = self.primitives.iter().collect();
        out.sort_by_key(|p| p.z_index());
        out
    }

    /// Consumes the scene, returning primitives in paint order.
    pub fn into_paint_order(mut self) -> Vec<Primitive> {
        self.primitives.sort_by_key(Primitive::z_index);
        self.primitives
    }

    /// Iterates over primitives of one kind.
    pub fn of_kind(&self, kind: PrimitiveKind) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(move |p| p.kind() == kind)
    }

    /// Iterates over all labels.
    pub fn labels(&self) -> impl Iterator<Item = &TextMark> + '_ {
        self.primitives.iter().filter_map(Primitive::as_label)
    }

    /// Iterates over all arcs.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcMark> + '_ {
        self.primitives.iter().filter_map(Primitive::as_arc)
    }

    /// Union of the view and every primitive's estimated bounds.
    pub fn bounds(&self, measurer: &dyn TextMeasurer) -> Rect {
        self.primitives
            .iter()
            .fold(self.view, |acc, p| acc.union(p.bounds(measurer)))
    }
}

impl Extend<Primitive> for Scene {
    fn extend<T: IntoIterator<Item = Primitive>>(&mut self, iter: T) {
        self.primitives.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Point;

    use super::*;
    use crate::rect_mark::RectMark;
    use crate::z_order;

    #[test]
    fn paint_order_is_stable_within_a_z_tier() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        scene.push(TextMark::new(Point::new(1.0, 1.0), "first"));
        scene.push(RectMark::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        scene.push(TextMark::new(Point::new(2.0, 2.0), "second"));
        scene.push(
            RectMark::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_z_index(z_order::PLOT_BACKGROUND),
        );

        let order = scene.paint_order();
        assert_eq!(order[0].z_index(), z_order::PLOT_BACKGROUND);
        assert_eq!(order[1].kind(), PrimitiveKind::Rect);
        let texts: Vec<&str> = order
            .iter()
            .filter_map(|p| p.as_label())
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, ["first", "second"]);
    }
}
