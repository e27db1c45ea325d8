use crate::animation::interpolate::remap_unit_wave;
use crate::animation::seeded::SeedChannel;
use crate::foundation::core::{Point, Rect};

const CH_X: SeedChannel = SeedChannel(0);
const CH_Y: SeedChannel = SeedChannel(500);
const CH_SIZE: SeedChannel = SeedChannel(1000);
const CH_RATE: SeedChannel = SeedChannel(2000);
const CH_PHASE: SeedChannel = SeedChannel(3000);
const CH_OPACITY: SeedChannel = SeedChannel(4000);

/// One decorative particle. All fields are fixed at generation; only opacity varies per frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    /// Center position in canvas pixels.
    pub pos: Point,
    /// Radius in pixels.
    pub size: f64,
    /// Twinkle angular rate, radians per frame.
    pub twinkle_rate: f64,
    /// Twinkle phase in radians.
    pub phase: f64,
    /// Peak opacity.
    pub base_opacity: f64,
}

impl Particle {
    /// Twinkling opacity at `frame`: `base * remap(sin(frame * rate + phase), [0.3, 1])`.
    pub fn opacity(&self, frame: f64) -> f64 {
        let s = (frame * self.twinkle_rate + self.phase).sin();
        self.base_opacity * remap_unit_wave(s, 0.3, 1.0)
    }
}

/// Parameters of a seeded particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    /// Number of particles.
    pub count: usize,
    /// Placement area; positions fall in `[x0, x1) x [y0, y1)`.
    pub area: Rect,
    /// Minimum radius.
    pub size_min: f64,
    /// Radius spread above `size_min`.
    pub size_spread: f64,
    /// Minimum twinkle rate.
    pub rate_min: f64,
    /// Twinkle rate spread.
    pub rate_spread: f64,
    /// Minimum peak opacity.
    pub opacity_min: f64,
    /// Peak opacity spread.
    pub opacity_spread: f64,
}

impl FieldSpec {
    /// Star field over the top 55% of a `width x height` canvas.
    pub fn stars(width: f64, height: f64) -> Self {
        Self {
            count: 120,
            area: Rect::new(0.0, 0.0, width, height * 0.55),
            size_min: 0.5,
            size_spread: 1.8,
            rate_min: 0.02,
            rate_spread: 0.04,
            opacity_min: 0.15,
            opacity_spread: 0.5,
        }
    }

    /// Generate the particles. Output depends only on `self`.
    pub fn generate(&self) -> Vec<Particle> {
        (0..self.count as u64)
            .map(|i| Particle {
                pos: Point::new(
                    CH_X.span(i, self.area.x0, self.area.width()),
                    CH_Y.span(i, self.area.y0, self.area.height()),
                ),
                size: CH_SIZE.span(i, self.size_min, self.size_spread),
                twinkle_rate: CH_RATE.span(i, self.rate_min, self.rate_spread),
                phase: CH_PHASE.span(i, 0.0, std::f64::consts::TAU),
                base_opacity: CH_OPACITY.span(i, self.opacity_min, self.opacity_spread),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/field.rs"]
mod tests;
