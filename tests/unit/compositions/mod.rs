use super::*;
use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::scene::model::ShapeNode;

struct Counter;

impl Composition for Counter {
    fn id(&self) -> &str {
        "Counter"
    }

    fn video_config(&self) -> VideoConfig {
        VideoConfig::new(16, 16, Fps::new(30, 1).unwrap(), 300).unwrap()
    }

    fn scene(&self, loop_frame: u64) -> Scene {
        let mut scene = Scene::new(self.video_config().canvas, Color::rgb(0, 0, 0));
        for _ in 0..loop_frame {
            scene.push(ShapeNode::circle(Point::new(8.0, 8.0), 1.0));
        }
        scene
    }
}

#[test]
fn video_config_rejects_empty_canvas_and_duration() {
    let fps = Fps::new(30, 1).unwrap();
    assert!(VideoConfig::new(0, 10, fps, 10).is_err());
    assert!(VideoConfig::new(10, 0, fps, 10).is_err());
    assert!(VideoConfig::new(10, 10, fps, 0).is_err());
    assert!(VideoConfig::new(10, 10, fps, 1).is_ok());
}

#[test]
fn loop_frame_wraps_past_duration() {
    let cfg = VideoConfig::new(10, 10, Fps::new(30, 1).unwrap(), 300).unwrap();
    assert_eq!(cfg.loop_frame(FrameIndex(305)), 5);
    assert_eq!(cfg.loop_frame(FrameIndex(300)), 0);
    assert_eq!(cfg.loop_frame(FrameIndex(299)), 299);
}

#[test]
fn evaluate_frame_applies_the_wrap() {
    let a = evaluate_frame(&Counter, FrameIndex(5));
    let b = evaluate_frame(&Counter, FrameIndex(305));
    assert_eq!(a, b);
    assert_eq!(a.node_count(), 5);
}

#[test]
fn scaled_canvas_rounds_and_never_collapses() {
    let cfg = VideoConfig::new(560, 680, Fps::new(30, 1).unwrap(), 300).unwrap();
    let c = cfg.scaled_canvas(0.5);
    assert_eq!((c.width, c.height), (280, 340));
    let tiny = cfg.scaled_canvas(0.0001);
    assert_eq!((tiny.width, tiny.height), (1, 1));
}
