use super::*;
use crate::scene::model::{GradientKind, Node, Paint};

#[test]
fn star_field_is_fixed_and_in_the_upper_sky() {
    let a = HeroBg::new();
    let b = HeroBg::new();
    assert_eq!(a.stars().len(), 120);
    assert_eq!(a.stars(), b.stars());
    for s in a.stars() {
        assert!(s.pos.x >= 0.0 && s.pos.x < 1920.0);
        assert!(s.pos.y >= 0.0 && s.pos.y < 1080.0 * 0.55);
        assert!(s.size >= 0.5 && s.size < 2.3);
    }
}

#[test]
fn planet_arc_sits_at_46_percent() {
    let (c, r) = planet(1920.0, 1080.0);
    assert_eq!(r, 1440.0);
    assert_eq!(c.x, 960.0);
    assert!((c.y - r - 1080.0 * 0.46).abs() < 1e-9);
}

#[test]
fn rim_opacity_stays_in_band() {
    for f in 0..600 {
        let o = rim_opacity(f as f64);
        assert!((0.12 - 1e-12..=0.3 + 1e-12).contains(&o));
    }
    assert!((rim_opacity(0.0) - 0.21).abs() < 1e-12);
}

#[test]
fn scene_layers_back_to_front() {
    let comp = HeroBg::new();
    let scene = comp.scene(0);
    assert_eq!(scene.background, SPACE);
    // wash + 8 nebulae + 120 stars + planet + 2 rims
    assert_eq!(scene.nodes.len(), 1 + 8 + 120 + 1 + 2);
    assert_eq!(scene.gradients.len(), 1 + 8 + 1);

    let Node::Shape(wash) = &scene.nodes[0] else {
        panic!("wash must be a shape");
    };
    assert_eq!(wash.fill, Paint::Gradient("ambient-wash".to_owned()));
    assert!((wash.opacity - 0.8).abs() < 1e-12);

    let Node::Shape(nebula) = &scene.nodes[1] else {
        panic!("nebula must be a shape");
    };
    assert_eq!(nebula.blur, 60.0);

    let Node::Shape(glow) = scene.nodes.last().unwrap() else {
        panic!("rim glow must be a shape");
    };
    assert_eq!(glow.blur, 14.0);
    assert_eq!(glow.stroke.as_ref().map(|s| s.width), Some(16.0));
}

#[test]
fn nebulae_drift_over_time() {
    let comp = HeroBg::new();
    let a = comp.scene(0);
    let b = comp.scene(300);
    let center = |s: &Scene| match &s.gradients[1].kind {
        GradientKind::Radial { center, .. } => *center,
        GradientKind::Linear { .. } => panic!("nebula gradients are radial"),
    };
    assert_ne!(center(&a), center(&b));
    assert_eq!(comp.scene(300), b);
}
