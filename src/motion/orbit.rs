use crate::animation::interpolate::interpolate_clamped;
use crate::animation::reveal::{Reveal, wobble, wobble_cos};
use crate::foundation::core::{Fps, Point};

/// Layout constants for satellites placed on an ellipse around a hub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLayout {
    /// Hub position.
    pub center: Point,
    /// Horizontal semi-axis.
    pub rx: f64,
    /// Vertical semi-axis.
    pub ry: f64,
    /// Reveal frame of satellite 0.
    pub appear_base: f64,
    /// Extra reveal delay per satellite index.
    pub appear_stagger: f64,
    /// Opacity ramp length in frames.
    pub appear_ramp: f64,
    /// Frames between a satellite's reveal and its first pulse.
    pub pulse_lag: f64,
    /// Pulse cycle length in progress units; the dot travels during `[0, 1]` and hides after.
    pub pulse_cycle: f64,
}

impl OrbitLayout {
    /// Default integration layout around `center`.
    pub fn around(center: Point) -> Self {
        Self {
            center,
            rx: 200.0,
            ry: 130.0,
            appear_base: 30.0,
            appear_stagger: 15.0,
            appear_ramp: 30.0,
            pulse_lag: 20.0,
            pulse_cycle: 1.6,
        }
    }

    /// Reveal frame of satellite `index`.
    pub fn appear_frame(&self, index: usize) -> f64 {
        self.appear_base + (index as f64) * self.appear_stagger
    }

    /// Opacity of satellite `index`: exactly 0 before its reveal, exactly 1 after the ramp.
    pub fn node_opacity(&self, index: usize, frame: f64) -> f64 {
        Reveal::fade_in(self.appear_frame(index), self.appear_ramp).value(frame)
    }

    /// Resting position (no jitter) for a satellite at `angle_deg` (0 = right, clockwise in
    /// screen space).
    pub fn anchor(&self, angle_deg: f64) -> Point {
        let a = angle_deg.to_radians();
        Point::new(
            self.center.x + a.cos() * self.rx,
            self.center.y + a.sin() * self.ry,
        )
    }

    /// Full satellite state at `frame`.
    pub fn node(&self, index: usize, angle_deg: f64, frame: f64) -> NodeState {
        let i = index as f64;
        let base = self.anchor(angle_deg);
        let pos = Point::new(
            base.x + wobble(frame, 0.015, i * 1.2, 6.0),
            base.y + wobble_cos(frame, 0.012, i * 0.9, 4.0),
        );
        NodeState {
            index,
            pos,
            opacity: self.node_opacity(index, frame),
        }
    }

    /// Travel speed of satellite `index`'s pulse, in progress units per frame.
    pub fn pulse_speed(&self, index: usize) -> f64 {
        0.008 + (index as f64) * 0.001
    }

    /// Pulse dot on the spoke from the hub to `node`, or `None` while hidden.
    ///
    /// Hidden before its start frame and during the gap part of each cycle.
    pub fn pulse(&self, node: &NodeState, frame: f64, fps: Fps) -> Option<PulseState> {
        let delay = self.appear_frame(node.index) + self.pulse_lag;
        if frame < delay {
            return None;
        }
        let t = (frame - delay) * self.pulse_speed(node.index);
        let progress = t.rem_euclid(self.pulse_cycle);
        if progress > 1.0 {
            return None;
        }

        let pos = self.center.lerp(node.pos, progress);
        let fade = if progress < 0.1 {
            progress / 0.1
        } else if progress > 0.85 {
            (1.0 - progress) / 0.15
        } else {
            1.0
        };

        // Radius breathes 2..4 px with a 0.8 s period.
        let period_frames = 0.8 * fps.as_f64();
        let radius = 3.0 + (std::f64::consts::TAU * frame / period_frames).sin();

        Some(PulseState {
            pos,
            progress,
            opacity: fade * 0.9,
            radius,
        })
    }

    /// Hub ring radius multiplier.
    pub fn hub_pulse(frame: f64) -> f64 {
        1.0 + (frame * 0.04).sin() * 0.15
    }

    /// Hub ambient glow opacity.
    pub fn hub_glow(frame: f64) -> f64 {
        interpolate_clamped((frame * 0.03).sin(), [-1.0, 1.0], [0.15, 0.35])
    }
}

/// Evaluated satellite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeState {
    /// Satellite index.
    pub index: usize,
    /// Jittered position.
    pub pos: Point,
    /// Reveal opacity.
    pub opacity: f64,
}

/// Evaluated pulse dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseState {
    /// Position along the spoke.
    pub pos: Point,
    /// Progress along the spoke in `[0, 1]`.
    pub progress: f64,
    /// Dot opacity.
    pub opacity: f64,
    /// Dot radius in pixels.
    pub radius: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/motion/orbit.rs"]
mod tests;
