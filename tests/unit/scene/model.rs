use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 64,
        height: 32,
    }
}

#[test]
fn define_dedups_by_id() {
    let mut scene = Scene::new(canvas(), Color::rgb(0, 0, 0));
    let g = Gradient::horizontal("rim", vec![stop(0.0, Color::rgb(1, 2, 3))]);
    let a = scene.define(g.clone());
    let b = scene.define(g);
    assert_eq!(a, Paint::Gradient("rim".to_string()));
    assert_eq!(a, b);
    assert_eq!(scene.gradients.len(), 1);
}

#[test]
fn node_count_includes_group_children() {
    let mut scene = Scene::new(canvas(), Color::rgb(0, 0, 0));
    scene.push(ShapeNode::circle(Point::new(1.0, 1.0), 1.0));
    scene.push(
        GroupNode::new()
            .with(ShapeNode::rect(Rect::new(0.0, 0.0, 4.0, 4.0)))
            .with(TextNode::new(
                Point::ZERO,
                FontFamily::Sans,
                12.0,
                TextSpan::new("hi", Color::rgb(255, 255, 255)),
            )),
    );
    assert_eq!(scene.node_count(), 4);
}

#[test]
fn css_ellipse_reaches_farthest_corner() {
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    let g = Gradient::css_ellipse("n", rect, (0.5, 1.0), vec![]);
    let GradientKind::Radial { center, rx, ry } = g.kind else {
        panic!("expected radial");
    };
    assert_eq!(center, Point::new(50.0, 50.0));
    // Corner (0, 0) lies on the ellipse.
    let d = ((0.0 - center.x) / rx).powi(2) + ((0.0 - center.y) / ry).powi(2);
    assert!((d - 1.0).abs() < 1e-9);
}

#[test]
fn builders_clamp_opacity() {
    let s = ShapeNode::circle(Point::ZERO, 2.0).opacity(3.0).blur(-1.0);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.blur, 0.0);
    let t = TextNode::spans(
        Point::ZERO,
        FontFamily::Mono,
        13.0,
        [
            TextSpan::new("$ ", Color::rgb(0, 255, 0)),
            TextSpan::new("curl", Color::rgb(255, 255, 255)).weighted(500),
        ],
    );
    assert_eq!(t.plain_text(), "$ curl");
}
