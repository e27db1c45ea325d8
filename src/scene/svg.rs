use std::fmt::Write as _;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Rect};
use crate::scene::model::{
    FontFamily, Geometry, Gradient, GradientKind, GroupNode, Node, Paint, Scene, ShapeNode,
    TextAnchor, TextNode,
};

/// Font stack emitted for [`FontFamily::Sans`].
pub const SANS_STACK: &str = "'Suisse Intl', Inter, 'Helvetica Neue', Arial, sans-serif";
/// Font stack emitted for [`FontFamily::Mono`].
pub const MONO_STACK: &str = "'Geist Mono', 'SF Mono', 'DejaVu Sans Mono', monospace";

/// Serialize a scene to a standalone SVG document.
///
/// Output is deterministic: the same scene always produces the same bytes, which is what the
/// static-frame fingerprint relies on.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut w = SvgWriter::default();
    for node in &scene.nodes {
        w.node(node);
    }

    let width = scene.canvas.width;
    let height = scene.canvas.height;
    let mut out = String::with_capacity(w.body.len() + w.defs.len() + 512);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    if !scene.gradients.is_empty() || !w.defs.is_empty() {
        out.push_str("<defs>");
        for g in &scene.gradients {
            write_gradient(&mut out, g);
        }
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{width}" height="{height}"{}/>"#,
        paint_attrs("fill", &Paint::Solid(scene.background))
    );
    out.push_str(&w.body);
    out.push_str("</svg>");
    out
}

#[derive(Default)]
struct SvgWriter {
    body: String,
    defs: String,
    next_filter: u32,
    next_clip: u32,
}

impl SvgWriter {
    fn node(&mut self, node: &Node) {
        match node {
            Node::Shape(s) => self.shape(s),
            Node::Text(t) => self.text(t),
            Node::Group(g) => self.group(g),
        }
    }

    fn shape(&mut self, s: &ShapeNode) {
        if s.opacity <= 0.0 {
            return;
        }
        let has_stroke = s.stroke.as_ref().is_some_and(|st| st.paint != Paint::None);
        if s.fill == Paint::None && !has_stroke {
            return;
        }

        let mut attrs = String::new();
        attrs.push_str(&paint_attrs("fill", &s.fill));
        if let Some(st) = &s.stroke {
            attrs.push_str(&paint_attrs("stroke", &st.paint));
            let _ = write!(attrs, r#" stroke-width="{}""#, num(st.width));
        }
        if s.opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, num(s.opacity));
        }
        if s.blur > 0.0 {
            let id = self.blur_filter(geometry_bounds(&s.geom, stroke_pad(s)), s.blur);
            let _ = write!(attrs, r#" filter="url(#{id})""#);
        }

        match s.geom {
            Geometry::Rect { rect, radius } => {
                let _ = write!(
                    self.body,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    num(rect.x0),
                    num(rect.y0),
                    num(rect.width().max(0.0)),
                    num(rect.height().max(0.0)),
                );
                if radius > 0.0 {
                    let _ = write!(self.body, r#" rx="{}""#, num(radius));
                }
            }
            Geometry::Circle { center, r } => {
                let _ = write!(
                    self.body,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    num(center.x),
                    num(center.y),
                    num(r.max(0.0)),
                );
            }
            Geometry::Ellipse { center, rx, ry } => {
                let _ = write!(
                    self.body,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#,
                    num(center.x),
                    num(center.y),
                    num(rx.max(0.0)),
                    num(ry.max(0.0)),
                );
            }
            Geometry::Line { from, to } => {
                let _ = write!(
                    self.body,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    num(from.x),
                    num(from.y),
                    num(to.x),
                    num(to.y),
                );
            }
        }
        self.body.push_str(&attrs);
        self.body.push_str("/>");
    }

    fn text(&mut self, t: &TextNode) {
        if t.opacity <= 0.0 || t.spans.iter().all(|s| s.text.is_empty()) {
            return;
        }
        let family = match t.family {
            FontFamily::Sans => SANS_STACK,
            FontFamily::Mono => MONO_STACK,
        };
        let anchor = match t.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}" xml:space="preserve""#,
            num(t.pos.x),
            num(t.pos.y),
            escape(family),
            num(t.size),
            t.weight,
        );
        if t.letter_spacing != 0.0 {
            let _ = write!(self.body, r#" letter-spacing="{}""#, num(t.letter_spacing));
        }
        if t.opacity < 1.0 {
            let _ = write!(self.body, r#" opacity="{}""#, num(t.opacity));
        }
        self.body.push('>');
        for span in &t.spans {
            if span.text.is_empty() {
                continue;
            }
            self.body.push_str("<tspan");
            self.body
                .push_str(&paint_attrs("fill", &Paint::Solid(span.fill)));
            if let Some(wt) = span.weight {
                let _ = write!(self.body, r#" font-weight="{wt}""#);
            }
            self.body.push('>');
            self.body.push_str(&escape(&span.text));
            self.body.push_str("</tspan>");
        }
        self.body.push_str("</text>");
    }

    fn group(&mut self, g: &GroupNode) {
        if g.opacity <= 0.0 || g.children.is_empty() {
            return;
        }
        self.body.push_str("<g");
        if g.opacity < 1.0 {
            let _ = write!(self.body, r#" opacity="{}""#, num(g.opacity));
        }
        if g.transform != Affine::IDENTITY {
            let [a, b, c, d, e, f] = g.transform.as_coeffs();
            let _ = write!(
                self.body,
                r#" transform="matrix({} {} {} {} {} {})""#,
                num(a),
                num(b),
                num(c),
                num(d),
                num(e),
                num(f)
            );
        }
        if let Some(clip) = g.clip {
            let id = format!("c{}", self.next_clip);
            self.next_clip += 1;
            let _ = write!(
                self.defs,
                r#"<clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}" rx="{}"/></clipPath>"#,
                num(clip.rect.x0),
                num(clip.rect.y0),
                num(clip.rect.width()),
                num(clip.rect.height()),
                num(clip.radius),
            );
            let _ = write!(self.body, r#" clip-path="url(#{id})""#);
        }
        self.body.push('>');
        for child in &g.children {
            self.node(child);
        }
        self.body.push_str("</g>");
    }

    fn blur_filter(&mut self, bounds: Rect, sigma: f64) -> String {
        let id = format!("f{}", self.next_filter);
        self.next_filter += 1;
        // 3 sigma covers the visible tail of the kernel.
        let region = bounds.inflate(sigma * 3.0, sigma * 3.0);
        let _ = write!(
            self.defs,
            r#"<filter id="{id}" filterUnits="userSpaceOnUse" x="{}" y="{}" width="{}" height="{}"><feGaussianBlur stdDeviation="{}"/></filter>"#,
            num(region.x0),
            num(region.y0),
            num(region.width()),
            num(region.height()),
            num(sigma),
        );
        id
    }
}

fn stroke_pad(s: &ShapeNode) -> f64 {
    s.stroke.as_ref().map_or(0.0, |st| st.width / 2.0)
}

fn geometry_bounds(geom: &Geometry, pad: f64) -> Rect {
    let r = match *geom {
        Geometry::Rect { rect, .. } => rect,
        Geometry::Circle { center, r } => {
            Rect::new(center.x - r, center.y - r, center.x + r, center.y + r)
        }
        Geometry::Ellipse { center, rx, ry } => {
            Rect::new(center.x - rx, center.y - ry, center.x + rx, center.y + ry)
        }
        Geometry::Line { from, to } => Rect::from_points(from, to),
    };
    r.inflate(pad, pad)
}

fn write_gradient(out: &mut String, g: &Gradient) {
    let id = escape(&g.id);
    match g.kind {
        GradientKind::Linear { x1, y1, x2, y2 } => {
            let _ = write!(
                out,
                r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                num(x1),
                num(y1),
                num(x2),
                num(y2)
            );
            write_stops(out, g);
            out.push_str("</linearGradient>");
        }
        GradientKind::Radial { center, rx, ry } => {
            let _ = write!(
                out,
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}""#,
                num(center.x),
                num(center.y),
                num(rx)
            );
            if (rx - ry).abs() > 1e-9 {
                // Squash the circle vertically around the center.
                let k = ry / rx;
                let _ = write!(
                    out,
                    r#" gradientTransform="matrix(1 0 0 {} 0 {})""#,
                    num(k),
                    num(center.y * (1.0 - k))
                );
            }
            out.push('>');
            write_stops(out, g);
            out.push_str("</radialGradient>");
        }
    }
}

fn write_stops(out: &mut String, g: &Gradient) {
    for s in &g.stops {
        let _ = write!(
            out,
            r#"<stop offset="{}" stop-color="{}""#,
            num(s.offset.clamp(0.0, 1.0)),
            s.color.to_hex()
        );
        if s.color.a < 1.0 {
            let _ = write!(out, r#" stop-opacity="{}""#, num(s.color.a.max(0.0)));
        }
        out.push_str("/>");
    }
}

fn paint_attrs(name: &str, paint: &Paint) -> String {
    match paint {
        Paint::None => format!(r#" {name}="none""#),
        Paint::Solid(c) => solid_attrs(name, *c),
        Paint::Gradient(id) => format!(r#" {name}="url(#{})""#, escape(id)),
    }
}

fn solid_attrs(name: &str, c: Color) -> String {
    if c.a >= 1.0 {
        format!(r#" {name}="{}""#, c.to_hex())
    } else {
        format!(
            r#" {name}="{}" {name}-opacity="{}""#,
            c.to_hex(),
            num(c.a.max(0.0))
        )
    }
}

/// Fixed-precision number formatting: at most 3 decimals, trailing zeros trimmed.
pub(crate) fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_owned()
    } else {
        s.to_owned()
    }
}

/// XML-escape text and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
