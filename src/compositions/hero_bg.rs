use crate::animation::interpolate::remap_unit_wave;
use crate::compositions::palette::{SPACE, WHITE};
use crate::compositions::{Composition, VideoConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, Point, Rect};
use crate::motion::field::{FieldSpec, Particle};
use crate::scene::model::{Gradient, GradientStop, Scene, ShapeNode, stop};

/// Which slow drift channel a nebula layer follows, and how strongly.
#[derive(Clone, Copy, Debug)]
struct DriftRef {
    channel: usize,
    k: f64,
}

const fn drift(channel: usize, k: f64) -> DriftRef {
    DriftRef { channel, k }
}

/// A blurred elliptical nebula cloud placed relative to the planet's horizon.
#[derive(Clone, Copy, Debug)]
struct NebulaLayer {
    left_px: f64,
    left_frac: f64,
    top_above_arc: f64,
    width: f64,
    height: f64,
    breath: usize,
    dx: DriftRef,
    dy: DriftRef,
    at: (f64, f64),
    /// `(offset, rgb, alpha)`; a stop with alpha 0 fades the previous hue out.
    stops: &'static [(f64, [u8; 3], f64)],
    blur: f64,
}

const NEBULAE: [NebulaLayer; 8] = [
    // Deep teal mist, far left.
    NebulaLayer {
        left_px: -350.0,
        left_frac: 0.0,
        top_above_arc: 400.0,
        width: 1000.0,
        height: 700.0,
        breath: 0,
        dx: drift(0, 1.0),
        dy: drift(0, 1.0),
        at: (0.65, 0.65),
        stops: &[
            (0.0, [8, 145, 178], 0.6),
            (0.3, [14, 116, 144], 0.3),
            (0.55, [6, 78, 96], 0.1),
            (0.75, [6, 78, 96], 0.0),
        ],
        blur: 60.0,
    },
    // Dark violet base.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.1,
        top_above_arc: 500.0,
        width: 1400.0,
        height: 800.0,
        breath: 1,
        dx: drift(3, 1.0),
        dy: drift(3, 1.0),
        at: (0.5, 0.7),
        stops: &[
            (0.0, [46, 16, 101], 0.7),
            (0.35, [30, 10, 60], 0.4),
            (0.7, [30, 10, 60], 0.0),
        ],
        blur: 50.0,
    },
    // Magenta-purple, center.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.18,
        top_above_arc: 440.0,
        width: 1100.0,
        height: 700.0,
        breath: 0,
        dx: drift(1, 1.0),
        dy: drift(1, 1.0),
        at: (0.52, 0.72),
        stops: &[
            (0.0, [147, 51, 234], 0.5),
            (0.25, [126, 34, 206], 0.3),
            (0.5, [88, 28, 135], 0.15),
            (0.72, [88, 28, 135], 0.0),
        ],
        blur: 45.0,
    },
    // Pink heart.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.28,
        top_above_arc: 360.0,
        width: 800.0,
        height: 500.0,
        breath: 1,
        dx: drift(1, 0.6),
        dy: drift(0, 0.8),
        at: (0.5, 0.75),
        stops: &[
            (0.0, [192, 132, 252], 0.55),
            (0.3, [168, 85, 247], 0.3),
            (0.55, [107, 33, 168], 0.1),
            (0.72, [107, 33, 168], 0.0),
        ],
        blur: 40.0,
    },
    // Indigo drift, right.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.4,
        top_above_arc: 420.0,
        width: 1100.0,
        height: 700.0,
        breath: 2,
        dx: drift(2, 1.0),
        dy: drift(2, 1.0),
        at: (0.55, 0.68),
        stops: &[
            (0.0, [67, 56, 202], 0.5),
            (0.3, [49, 46, 129], 0.3),
            (0.55, [30, 27, 75], 0.1),
            (0.72, [30, 27, 75], 0.0),
        ],
        blur: 50.0,
    },
    // Teal whisper, far right.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.6,
        top_above_arc: 350.0,
        width: 900.0,
        height: 600.0,
        breath: 0,
        dx: drift(0, -0.6),
        dy: drift(1, -0.8),
        at: (0.5, 0.65),
        stops: &[
            (0.0, [8, 145, 178], 0.4),
            (0.3, [14, 116, 144], 0.2),
            (0.65, [14, 116, 144], 0.0),
        ],
        blur: 55.0,
    },
    // Warm core over the horizon.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.3,
        top_above_arc: 250.0,
        width: 550.0,
        height: 350.0,
        breath: 1,
        dx: drift(1, 0.3),
        dy: drift(0, 0.5),
        at: (0.5, 0.85),
        stops: &[
            (0.0, [232, 121, 249], 0.45),
            (0.4, [168, 85, 247], 0.2),
            (0.7, [168, 85, 247], 0.0),
        ],
        blur: 30.0,
    },
    // Hot spot.
    NebulaLayer {
        left_px: 0.0,
        left_frac: 0.38,
        top_above_arc: 140.0,
        width: 280.0,
        height: 160.0,
        breath: 1,
        dx: drift(1, 0.2),
        dy: drift(0, 0.3),
        at: (0.5, 0.85),
        stops: &[
            (0.0, [245, 208, 254], 0.4),
            (0.45, [192, 132, 252], 0.15),
            (0.75, [192, 132, 252], 0.0),
        ],
        blur: 18.0,
    },
];

/// Drift offsets `(dx, dy)` of the four channels at `f`.
fn drifts(f: f64) -> [(f64, f64); 4] {
    [
        ((f * 0.004).sin() * 30.0, (f * 0.003).cos() * 10.0),
        ((f * 0.005 + 1.8).sin() * 25.0, (f * 0.004 + 2.5).cos() * 8.0),
        ((f * 0.006 + 3.2).sin() * 20.0, (f * 0.005 + 1.2).cos() * 7.0),
        ((f * 0.003 + 0.5).sin() * 35.0, (f * 0.004 + 3.8).cos() * 12.0),
    ]
}

/// Breathing scale factors at `f`.
fn breaths(f: f64) -> [f64; 3] {
    [
        1.0 + (f * 0.003).sin() * 0.04,
        1.0 + (f * 0.004 + 1.5).sin() * 0.05,
        1.0 + (f * 0.005 + 3.0).sin() * 0.03,
    ]
}

/// Rim stroke opacity, `[0.12, 0.3]`.
pub fn rim_opacity(f: f64) -> f64 {
    remap_unit_wave((f * 0.008).sin(), 0.12, 0.3)
}

/// Planet disc: center and radius for a canvas of `width x height`.
///
/// The disc is much wider than the canvas; only its top arc shows, at 46% of the height.
pub fn planet(width: f64, height: f64) -> (Point, f64) {
    let r = width * 0.75;
    (Point::new(width / 2.0, height * 0.46 + r), r)
}

fn stops_of(table: &[(f64, [u8; 3], f64)]) -> Vec<GradientStop> {
    table
        .iter()
        .map(|&(offset, [r, g, b], a)| stop(offset, Color::rgba(r, g, b, a)))
        .collect()
}

/// Full-bleed space background with drifting nebulae, a star field and a planet rim.
#[derive(Clone, Debug)]
pub struct HeroBg {
    config: VideoConfig,
    stars: Vec<Particle>,
}

impl HeroBg {
    /// Registry id.
    pub const ID: &'static str = "HeroBG";

    /// 1920x1080 at 30 fps, 600 frames.
    pub fn new() -> Self {
        let config = VideoConfig {
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            fps: Fps { num: 30, den: 1 },
            duration: 600,
        };
        let stars = FieldSpec::stars(config.canvas.w(), config.canvas.h()).generate();
        Self { config, stars }
    }

    /// Generated star field (fixed for the composition's lifetime).
    pub fn stars(&self) -> &[Particle] {
        &self.stars
    }
}

impl Default for HeroBg {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition for HeroBg {
    fn id(&self) -> &str {
        Self::ID
    }

    fn video_config(&self) -> VideoConfig {
        self.config
    }

    fn scene(&self, loop_frame: u64) -> Scene {
        let f = loop_frame as f64;
        let canvas = self.config.canvas;
        let (w, h) = (canvas.w(), canvas.h());
        let (planet_c, planet_r) = planet(w, h);
        let arc_y = planet_c.y - planet_r;

        let mut scene = Scene::new(canvas, SPACE);

        let wash_rect = Rect::new(-100.0, -100.0, w + 100.0, -100.0 + h * 0.6);
        let wash = scene.define(Gradient::css_ellipse(
            "ambient-wash",
            wash_rect,
            (0.5, 1.0),
            vec![
                stop(0.0, Color::rgb(0x0a, 0x0a, 0x2e)),
                stop(0.5, Color::rgb(0x05, 0x05, 0x10)),
                stop(0.8, Color::rgba(0x05, 0x05, 0x10, 0.0)),
            ],
        ));
        scene.push(ShapeNode::rect(wash_rect).fill(wash).opacity(0.8));

        let d = drifts(f);
        let b = breaths(f);
        for (i, layer) in NEBULAE.iter().enumerate() {
            let x = layer.left_px + layer.left_frac * w + d[layer.dx.channel].0 * layer.dx.k;
            let y = arc_y - layer.top_above_arc + d[layer.dy.channel].1 * layer.dy.k;
            let s = b[layer.breath];
            let rect = Rect::new(x, y, x + layer.width * s, y + layer.height * s);
            let paint = scene.define(Gradient::css_ellipse(
                format!("nebula-{i}"),
                rect,
                layer.at,
                stops_of(layer.stops),
            ));
            scene.push(ShapeNode::ellipse_in(rect).fill(paint).blur(layer.blur));
        }

        for star in &self.stars {
            scene.push(
                ShapeNode::circle(star.pos, star.size)
                    .fill(WHITE)
                    .opacity(star.opacity(f)),
            );
        }

        scene.push(ShapeNode::circle(planet_c, planet_r).fill(SPACE));

        let rim = scene.define(Gradient::horizontal(
            "rim",
            stops_of(&[
                (0.0, [0x0e, 0x74, 0x90], 0.0),
                (0.15, [0x08, 0x91, 0xb2], 0.3),
                (0.35, [0x7c, 0x3a, 0xed], 0.5),
                (0.5, [0x93, 0x33, 0xea], 0.7),
                (0.65, [0x63, 0x66, 0xf1], 0.5),
                (0.85, [0x43, 0x38, 0xca], 0.3),
                (1.0, [0x0e, 0x74, 0x90], 0.0),
            ]),
        ));
        let rim_op = rim_opacity(f);
        scene.push(
            ShapeNode::circle(planet_c, planet_r)
                .stroke(rim.clone(), 1.5)
                .opacity(rim_op),
        );
        scene.push(
            ShapeNode::circle(planet_c, planet_r + 6.0)
                .stroke(rim, 16.0)
                .opacity(rim_op * 0.2)
                .blur(14.0),
        );
        scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/hero_bg.rs"]
mod tests;
