use super::*;
use crate::foundation::core::{Canvas, Point};
use crate::scene::model::{GroupNode, ShapeNode, TextSpan, stop};

fn scene() -> Scene {
    Scene::new(
        Canvas {
            width: 40,
            height: 20,
        },
        Color::rgb(3, 3, 8),
    )
}

#[test]
fn empty_scene_is_background_only() {
    let svg = scene_to_svg(&scene());
    assert!(
        svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"40\" height=\"20\"")
    );
    assert!(svg.contains(r##"fill="#030308""##));
    assert!(!svg.contains("<defs>"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn invisible_nodes_are_skipped() {
    let mut s = scene();
    s.push(
        ShapeNode::circle(Point::new(5.0, 5.0), 2.0)
            .fill(Color::rgb(255, 255, 255))
            .opacity(0.0),
    );
    s.push(GroupNode::new().opacity(0.0).with(ShapeNode::circle(Point::ZERO, 1.0)));
    assert!(!scene_to_svg(&s).contains("<circle"));
}

#[test]
fn blur_emits_user_space_filter() {
    let mut s = scene();
    s.push(
        ShapeNode::ellipse_in(Rect::new(0.0, 0.0, 10.0, 10.0))
            .fill(Color::rgba(147, 51, 234, 0.5))
            .blur(2.0),
    );
    let svg = scene_to_svg(&s);
    assert!(svg.contains(
        r#"<filter id="f0" filterUnits="userSpaceOnUse" x="-6" y="-6" width="22" height="22">"#
    ));
    assert!(svg.contains(r#"filter="url(#f0)""#));
    assert!(svg.contains(r#"fill-opacity="0.5""#));
}

#[test]
fn radial_gradient_is_squashed() {
    let mut s = scene();
    let paint = s.define(Gradient::css_ellipse(
        "g",
        Rect::new(0.0, 0.0, 20.0, 10.0),
        (0.5, 0.5),
        vec![stop(0.0, Color::rgb(255, 0, 0)), stop(1.0, Color::TRANSPARENT)],
    ));
    s.push(ShapeNode::rect(Rect::new(0.0, 0.0, 20.0, 10.0)).fill(paint));
    let svg = scene_to_svg(&s);
    assert!(svg.contains("gradientTransform=\"matrix(1 0 0 0.5 0 2.5)\""));
    assert!(svg.contains(r#"stop-opacity="0""#));
    assert!(svg.contains(r#"fill="url(#g)""#));
}

#[test]
fn text_is_escaped() {
    let mut s = scene();
    s.push(TextNode::new(
        Point::new(1.0, 10.0),
        FontFamily::Mono,
        13.0,
        TextSpan::new("\"a\" & <b>", Color::rgb(255, 189, 46)),
    ));
    let svg = scene_to_svg(&s);
    assert!(svg.contains("&quot;a&quot; &amp; &lt;b&gt;"));
    assert!(svg.contains("xml:space=\"preserve\""));
}

#[test]
fn clip_and_transform_on_groups() {
    let mut s = scene();
    s.push(
        GroupNode::new()
            .clip(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0)
            .transform(Affine::translate((3.0, 4.0)))
            .with(ShapeNode::rect(Rect::new(0.0, 0.0, 40.0, 40.0)).fill(Color::rgb(1, 1, 1))),
    );
    let svg = scene_to_svg(&s);
    assert!(svg.contains(
        r#"<clipPath id="c0"><rect x="0" y="0" width="10" height="10" rx="2"/></clipPath>"#
    ));
    assert!(svg.contains(r#"transform="matrix(1 0 0 1 3 4)""#));
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.125), "0.125");
    assert_eq!(num(2.50001), "2.5");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn output_is_deterministic() {
    let mut s = scene();
    s.push(ShapeNode::line(
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        Color::rgba(148, 122, 252, 0.12),
        1.0,
    ));
    assert_eq!(scene_to_svg(&s), scene_to_svg(&s.clone()));
}
