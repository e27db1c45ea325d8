use super::*;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Rect};
use crate::scene::model::{Scene, ShapeNode};

fn backend(settings: RenderSettings) -> CpuBackend {
    CpuBackend::try_new(settings).unwrap()
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn background_fills_the_canvas() {
    let scene = Scene::new(
        Canvas {
            width: 4,
            height: 4,
        },
        Color::rgb(200, 0, 0),
    );
    let frame = backend(RenderSettings::default())
        .render_scene(&scene)
        .unwrap();
    assert_eq!((frame.width, frame.height), (4, 4));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 4 * 4 * 4);
    assert_eq!(pixel(&frame, 0, 0), [200, 0, 0, 255]);
    assert_eq!(pixel(&frame, 3, 3), [200, 0, 0, 255]);
}

#[test]
fn shapes_are_drawn_over_the_background() {
    let mut scene = Scene::new(
        Canvas {
            width: 8,
            height: 8,
        },
        Color::rgb(0, 0, 0),
    );
    scene.push(ShapeNode::rect(Rect::new(4.0, 0.0, 8.0, 8.0)).fill(Color::rgb(0, 0, 255)));
    let frame = backend(RenderSettings::default())
        .render_scene(&scene)
        .unwrap();
    assert_eq!(pixel(&frame, 1, 4), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 6, 4), [0, 0, 255, 255]);
}

#[test]
fn output_scale_resizes_the_frame() {
    let mut scene = Scene::new(
        Canvas {
            width: 4,
            height: 6,
        },
        Color::rgb(10, 20, 30),
    );
    scene.push(ShapeNode::circle(Point::new(2.0, 3.0), 1.0).fill(Color::rgb(255, 255, 255)));
    let frame = backend(RenderSettings {
        scale: 2.0,
        ..RenderSettings::default()
    })
    .render_scene(&scene)
    .unwrap();
    assert_eq!((frame.width, frame.height), (8, 12));
    assert_eq!(pixel(&frame, 0, 0), [10, 20, 30, 255]);
}

#[test]
fn clear_color_shows_through_transparent_background() {
    let scene = Scene::new(
        Canvas {
            width: 2,
            height: 2,
        },
        Color::TRANSPARENT,
    );
    let frame = backend(RenderSettings {
        clear_rgba: Some([0, 255, 0, 255]),
        ..RenderSettings::default()
    })
    .render_scene(&scene)
    .unwrap();
    assert_eq!(pixel(&frame, 1, 1), [0, 255, 0, 255]);
}

#[test]
fn malformed_svg_is_a_render_error() {
    let err = backend(RenderSettings::default())
        .render_svg(
            "<svg",
            Canvas {
                width: 2,
                height: 2,
            },
        )
        .unwrap_err();
    assert!(matches!(err, StudioError::Render(_)));
}

#[test]
fn oversized_output_is_rejected_before_allocating() {
    let err = backend(RenderSettings {
        scale: 100.0,
        ..RenderSettings::default()
    })
    .render_svg(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1920" height="1080"/>"#,
        Canvas {
            width: 1920,
            height: 1080,
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("too large"));
}
