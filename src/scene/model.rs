use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Canvas, Point, Rect};
use smallvec::SmallVec;

/// Backend-agnostic drawing description of one frame.
///
/// Nodes paint in order (first node at the back). A scene carries no time: everything animated
/// has already been evaluated into plain numbers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Solid background painted under every node.
    pub background: Color,
    /// Gradients referenced by [`Paint::Gradient`].
    pub gradients: Vec<Gradient>,
    /// Painted nodes, back to front.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// Empty scene over `background`.
    pub fn new(canvas: Canvas, background: Color) -> Self {
        Self {
            canvas,
            background,
            gradients: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Register a gradient and return a paint referencing it.
    pub fn define(&mut self, gradient: Gradient) -> Paint {
        let id = gradient.id.clone();
        if !self.gradients.iter().any(|g| g.id == id) {
            self.gradients.push(gradient);
        }
        Paint::Gradient(id)
    }

    /// Append a node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Total node count including group descendants.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    Node::Group(g) => 1 + count(&g.children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.nodes)
    }
}

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Paint {
    /// Nothing.
    None,
    /// Flat color.
    Solid(Color),
    /// Reference to a gradient declared on the scene.
    Gradient(String),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

/// Stroke style.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Line width in pixels.
    pub width: f64,
}

/// One gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Stop color (alpha included).
    pub color: Color,
}

/// Shorthand for a [`GradientStop`].
pub fn stop(offset: f64, color: Color) -> GradientStop {
    GradientStop { offset, color }
}

/// Gradient geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum GradientKind {
    /// Linear gradient in bounding-box fractions of the painted shape.
    Linear {
        /// Start x fraction.
        x1: f64,
        /// Start y fraction.
        y1: f64,
        /// End x fraction.
        x2: f64,
        /// End y fraction.
        y2: f64,
    },
    /// Elliptical radial gradient in canvas pixels.
    Radial {
        /// Center.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
}

/// A named gradient definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Gradient {
    /// Unique id within the scene.
    pub id: String,
    /// Geometry.
    pub kind: GradientKind,
    /// Color stops in ascending offset order.
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Left-to-right linear gradient across the painted shape.
    pub fn horizontal(id: impl Into<String>, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.into(),
            kind: GradientKind::Linear {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 0.0,
            },
            stops,
        }
    }

    /// Radial gradient with a circular extent.
    pub fn radial(id: impl Into<String>, center: Point, r: f64, stops: Vec<GradientStop>) -> Self {
        Self {
            id: id.into(),
            kind: GradientKind::Radial { center, rx: r, ry: r },
            stops,
        }
    }

    /// CSS `radial-gradient(ellipse at fx% fy%, ...)` over `rect`.
    ///
    /// The ending shape is `farthest-corner`: an ellipse with the box's closest-side aspect that
    /// passes through the corner farthest from the center.
    pub fn css_ellipse(
        id: impl Into<String>,
        rect: Rect,
        at: (f64, f64),
        stops: Vec<GradientStop>,
    ) -> Self {
        let cx = rect.x0 + rect.width() * at.0;
        let cy = rect.y0 + rect.height() * at.1;
        let sx = (cx - rect.x0).max(rect.x1 - cx);
        let sy = (cy - rect.y0).max(rect.y1 - cy);
        let k = std::f64::consts::SQRT_2;
        Self {
            id: id.into(),
            kind: GradientKind::Radial {
                center: Point::new(cx, cy),
                rx: (sx * k).max(1e-3),
                ry: (sy * k).max(1e-3),
            },
            stops,
        }
    }
}

/// Geometry of a [`ShapeNode`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum Geometry {
    /// Axis-aligned rectangle with uniform corner radius.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
    },
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        r: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Straight segment (stroke only).
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
}

/// A filled and/or stroked shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeNode {
    /// Geometry.
    pub geom: Geometry,
    /// Fill.
    pub fill: Paint,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
    /// Node opacity in `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur standard deviation in pixels; 0 for none.
    pub blur: f64,
}

impl ShapeNode {
    fn with_geom(geom: Geometry) -> Self {
        Self {
            geom,
            fill: Paint::None,
            stroke: None,
            opacity: 1.0,
            blur: 0.0,
        }
    }

    /// Rectangle.
    pub fn rect(rect: Rect) -> Self {
        Self::with_geom(Geometry::Rect { rect, radius: 0.0 })
    }

    /// Rounded rectangle.
    pub fn rounded(rect: Rect, radius: f64) -> Self {
        Self::with_geom(Geometry::Rect { rect, radius })
    }

    /// Circle.
    pub fn circle(center: Point, r: f64) -> Self {
        Self::with_geom(Geometry::Circle { center, r })
    }

    /// Ellipse inscribed in `rect`.
    pub fn ellipse_in(rect: Rect) -> Self {
        Self::with_geom(Geometry::Ellipse {
            center: rect.center(),
            rx: rect.width() / 2.0,
            ry: rect.height() / 2.0,
        })
    }

    /// Line stroked with `color` at `width`.
    pub fn line(from: Point, to: Point, color: Color, width: f64) -> Self {
        Self::with_geom(Geometry::Line { from, to }).stroke(color, width)
    }

    /// Set the fill.
    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = paint.into();
        self
    }

    /// Set the stroke.
    pub fn stroke(mut self, paint: impl Into<Paint>, width: f64) -> Self {
        self.stroke = Some(Stroke {
            paint: paint.into(),
            width,
        });
        self
    }

    /// Set the opacity (clamped to `[0, 1]`).
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the blur standard deviation.
    pub fn blur(mut self, sigma: f64) -> Self {
        self.blur = sigma.max(0.0);
        self
    }
}

/// Font family class. Concrete faces are resolved by the raster backend's font database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum FontFamily {
    /// UI sans-serif.
    Sans,
    /// Monospace (terminal, code).
    Mono,
}

/// Horizontal anchor of a text node's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TextAnchor {
    /// Position is the left edge.
    Start,
    /// Position is the center.
    Middle,
    /// Position is the right edge.
    End,
}

/// Styled piece of a text line.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextSpan {
    /// Span text; may be empty for layout-only spans.
    pub text: String,
    /// Text color.
    pub fill: Color,
    /// Weight override.
    pub weight: Option<u16>,
}

impl TextSpan {
    /// Span in `fill`.
    pub fn new(text: impl Into<String>, fill: Color) -> Self {
        Self {
            text: text.into(),
            fill,
            weight: None,
        }
    }

    /// Span with a weight override.
    pub fn weighted(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// One line of text; position is the alphabetic baseline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextNode {
    /// Baseline anchor point.
    pub pos: Point,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Family class.
    pub family: FontFamily,
    /// Font size in pixels.
    pub size: f64,
    /// Base weight.
    pub weight: u16,
    /// Extra tracking in pixels.
    pub letter_spacing: f64,
    /// Styled spans, rendered left to right.
    pub spans: SmallVec<[TextSpan; 4]>,
    /// Node opacity.
    pub opacity: f64,
}

impl TextNode {
    /// Single-span text node.
    pub fn new(pos: Point, family: FontFamily, size: f64, span: TextSpan) -> Self {
        let mut spans = SmallVec::new();
        spans.push(span);
        Self {
            pos,
            anchor: TextAnchor::Start,
            family,
            size,
            weight: 400,
            letter_spacing: 0.0,
            spans,
            opacity: 1.0,
        }
    }

    /// Multi-span text node.
    pub fn spans(
        pos: Point,
        family: FontFamily,
        size: f64,
        spans: impl IntoIterator<Item = TextSpan>,
    ) -> Self {
        Self {
            pos,
            anchor: TextAnchor::Start,
            family,
            size,
            weight: 400,
            letter_spacing: 0.0,
            spans: spans.into_iter().collect(),
            opacity: 1.0,
        }
    }

    /// Set the anchor.
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the base weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Set tracking in pixels.
    pub fn tracking(mut self, px: f64) -> Self {
        self.letter_spacing = px;
        self
    }

    /// Set opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Concatenated span text.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Rounded-rectangle clip region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Clip {
    /// Bounds.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
}

/// A group of nodes sharing opacity, transform and clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GroupNode {
    /// Group opacity multiplied into children.
    pub opacity: f64,
    /// Transform applied to children.
    pub transform: Affine,
    /// Optional clip.
    pub clip: Option<Clip>,
    /// Children, back to front.
    pub children: Vec<Node>,
}

impl GroupNode {
    /// Empty identity group.
    pub fn new() -> Self {
        Self {
            opacity: 1.0,
            transform: Affine::IDENTITY,
            clip: None,
            children: Vec::new(),
        }
    }

    /// Set the opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the transform.
    pub fn transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Set the clip.
    pub fn clip(mut self, rect: Rect, radius: f64) -> Self {
        self.clip = Some(Clip { rect, radius });
        self
    }

    /// Append a child.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Builder-style [`GroupNode::push`].
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }
}

impl Default for GroupNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Any scene node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Node {
    /// Shape.
    Shape(ShapeNode),
    /// Text line.
    Text(TextNode),
    /// Group.
    Group(GroupNode),
}

impl From<ShapeNode> for Node {
    fn from(n: ShapeNode) -> Self {
        Self::Shape(n)
    }
}

impl From<TextNode> for Node {
    fn from(n: TextNode) -> Self {
        Self::Text(n)
    }
}

impl From<GroupNode> for Node {
    fn from(n: GroupNode) -> Self {
        Self::Group(n)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
