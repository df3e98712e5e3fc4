// Copyright 2025 the Infograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG serialization of a [`Scene`].

use infograph_charts::{Primitive, Scene, StrokeStyle, TextAnchor, TextBaseline};
use peniko::Brush;

/// Curve flattening tolerance for arc outlines, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

/// Writes `scene` as a standalone SVG document, primitives in paint order.
pub(crate) fn scene_to_svg(scene: &Scene) -> String {
    let view = scene.view;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="sans-serif">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));
    out.push('\n');

    for primitive in scene.paint_order() {
        match primitive {
            Primitive::Arc(a) => {
                let d = a.path(ARC_TOLERANCE).to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_paint_attr(&mut out, "fill", &a.fill);
                write_stroke(&mut out, a.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Polygon(p) => {
                let d = p.path().to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_paint_attr(&mut out, "fill", &p.fill);
                write_stroke(&mut out, p.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Rect(r) => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    r.rect.x0,
                    r.rect.y0,
                    r.rect.width(),
                    r.rect.height(),
                ));
                write_paint_attr(&mut out, "fill", &r.fill);
                write_stroke(&mut out, r.stroke.as_ref());
                out.push_str("/>\n");
            }
            Primitive::Rule(r) => {
                out.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    r.p0.x, r.p0.y, r.p1.x, r.p1.y
                ));
                write_stroke(&mut out, Some(&r.stroke));
                out.push_str("/>\n");
            }
            Primitive::Image(i) => {
                out.push_str(&format!(
                    r#"<image href="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
                    escape_xml(&i.href),
                    i.rect.x0,
                    i.rect.y0,
                    i.rect.width(),
                    i.rect.height(),
                ));
                out.push('\n');
            }
            Primitive::Label(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Middle => "middle",
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Hanging => "hanging",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                    t.pos.x, t.pos.y, t.style.font_size, baseline
                ));
                let family = t.style.font_family.as_css_family();
                if family != "sans-serif" {
                    out.push_str(&format!(r#" font-family="{}""#, escape_xml(family)));
                }
                if t.style.font_weight.0 != 400 {
                    out.push_str(&format!(r#" font-weight="{}""#, t.style.font_weight.0));
                }
                if t.angle != 0.0 {
                    out.push_str(&format!(
                        r#" transform="rotate({} {} {})""#,
                        t.angle, t.pos.x, t.pos.y
                    ));
                }
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_paint_attr(&mut out, "fill", &t.fill);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_stroke(out: &mut String, stroke: Option<&StrokeStyle>) {
    if let Some(s) = stroke.filter(|s| s.stroke_width > 0.0) {
        write_paint_attr(out, "stroke", &s.brush);
        out.push_str(&format!(r#" stroke-width="{}""#, s.stroke_width));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use infograph_charts::{ArcMark, RuleMark, TextMark};
    use kurbo::{Point, Rect};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn primitives_are_written_in_paint_order() {
        let mut scene = Scene::new(Rect::new(0.0, 0.0, 100.0, 80.0));
        scene.push(TextMark::new(Point::new(50.0, 40.0), "A & B").with_fill(css::BLACK));
        scene.push(
            ArcMark::new(Point::new(50.0, 40.0), 10.0, 30.0, 0.0, 1.0).with_fill(css::TOMATO),
        );
        scene.push(RuleMark::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));

        let svg = scene_to_svg(&scene);
        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(svg.contains(r#"viewBox="0 0 100 80""#), "{svg}");
        assert!(svg.contains("A &amp; B"), "{svg}");

        let line = svg.find("<line").unwrap();
        let path = svg.find("<path").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(line < path && path < text, "{svg}");
    }

    #[test]
    fn translucent_paint_gets_an_opacity() {
        let (fill, opacity) = svg_paint(&Brush::from(css::BLACK.with_alpha(0.5)));
        assert_eq!(fill, "#000000");
        assert!(opacity.is_some_and(|o| (o - 128.0 / 255.0).abs() < 1e-9));
    }
}
