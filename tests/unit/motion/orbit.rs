use super::*;

fn layout() -> OrbitLayout {
    OrbitLayout::around(Point::new(280.0, 350.0))
}

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn node_opacity_ramp_is_exact_at_edges() {
    let l = layout();
    for i in 0..6 {
        let appear = l.appear_frame(i);
        assert_eq!(l.node_opacity(i, appear - 1.0), 0.0);
        assert_eq!(l.node_opacity(i, appear), 0.0);
        assert_eq!(l.node_opacity(i, appear + 30.0), 1.0);
        let mid = l.node_opacity(i, appear + 15.0);
        assert!(mid > 0.0 && mid < 1.0);
    }
}

#[test]
fn anchor_uses_ellipse_axes() {
    let l = layout();
    let p = l.anchor(0.0);
    assert!((p.x - 480.0).abs() < 1e-9);
    assert!((p.y - 350.0).abs() < 1e-9);
    let p = l.anchor(90.0);
    assert!((p.y - 480.0).abs() < 1e-9);
}

#[test]
fn pulse_hidden_before_delay() {
    let l = layout();
    let node = l.node(0, -60.0, 40.0);
    // appear 30 + lag 20
    assert!(l.pulse(&node, 49.0, fps()).is_none());
    let p = l.pulse(&node, 50.0, fps()).unwrap();
    assert_eq!(p.progress, 0.0);
    assert_eq!(p.opacity, 0.0);
    assert_eq!(p.pos, l.center);
}

#[test]
fn pulse_travels_then_gaps() {
    let l = layout();
    let node = l.node(0, 20.0, 0.0);
    // speed 0.008 -> progress 1.0 after 125 frames, cycle 1.6 -> 200 frames
    let delay = 50.0;
    let mid = l.pulse(&node, delay + 62.5, fps()).unwrap();
    assert!((mid.progress - 0.5).abs() < 1e-9);
    assert!((mid.opacity - 0.9).abs() < 1e-9);
    assert!(l.pulse(&node, delay + 150.0, fps()).is_none());
    assert!(l.pulse(&node, delay + 210.0, fps()).is_some());
}

#[test]
fn pulse_radius_breathes_between_two_and_four() {
    let l = layout();
    let node = l.node(1, -20.0, 0.0);
    for f in 65..200 {
        if let Some(p) = l.pulse(&node, f64::from(f), fps()) {
            assert!(p.radius >= 2.0 - 1e-9 && p.radius <= 4.0 + 1e-9);
        }
    }
}

#[test]
fn hub_glow_band() {
    for f in 0..300 {
        let g = OrbitLayout::hub_glow(f64::from(f));
        assert!((0.15..=0.35).contains(&g));
        let s = OrbitLayout::hub_pulse(f64::from(f));
        assert!((0.85..=1.15).contains(&s));
    }
}
