use crate::animation::ease::Ease;
use crate::animation::interpolate::{interpolate_clamped, interpolate_eased, remap_unit_wave};

/// A timed reveal: a property ramps from `from` to `to` over `ramp` frames starting at `trigger`.
///
/// Before `trigger` the value is exactly `from`, at or after `trigger + ramp` it is exactly `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reveal {
    /// First frame of the ramp.
    pub trigger: f64,
    /// Ramp length in frames.
    pub ramp: f64,
    /// Value before the ramp.
    pub from: f64,
    /// Value after the ramp.
    pub to: f64,
    /// Curve applied inside the ramp.
    pub ease: Ease,
}

impl Reveal {
    /// Opacity ramp `0 -> 1`.
    pub fn fade_in(trigger: f64, ramp: f64) -> Self {
        Self {
            trigger,
            ramp,
            from: 0.0,
            to: 1.0,
            ease: Ease::Linear,
        }
    }

    /// Ramp between arbitrary values.
    pub fn between(trigger: f64, ramp: f64, from: f64, to: f64) -> Self {
        Self {
            trigger,
            ramp,
            from,
            to,
            ease: Ease::Linear,
        }
    }

    /// Replace the curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self, frame: f64) -> f64 {
        interpolate_clamped(frame, [self.trigger, self.trigger + self.ramp], [0.0, 1.0])
    }

    /// Property value at `frame`.
    pub fn value(&self, frame: f64) -> f64 {
        interpolate_eased(
            frame,
            [self.trigger, self.trigger + self.ramp],
            [self.from, self.to],
            self.ease,
        )
    }

    /// Return `true` once the ramp has started.
    pub fn started(&self, frame: f64) -> bool {
        frame >= self.trigger
    }
}

/// A sinusoid of the frame, remapped into `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    /// Radians per frame.
    pub rate: f64,
    /// Phase offset in radians.
    pub phase: f64,
    /// Output at `sin = -1`.
    pub lo: f64,
    /// Output at `sin = 1`.
    pub hi: f64,
}

impl Oscillator {
    /// Oscillator over `[lo, hi]` with zero phase.
    pub const fn new(rate: f64, lo: f64, hi: f64) -> Self {
        Self {
            rate,
            phase: 0.0,
            lo,
            hi,
        }
    }

    /// Same oscillator with a phase offset.
    pub const fn phased(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Value at `frame`.
    pub fn at(&self, frame: f64) -> f64 {
        remap_unit_wave((frame * self.rate + self.phase).sin(), self.lo, self.hi)
    }
}

/// `sin(frame * rate + phase) * amp`, the drift/jitter primitive.
pub fn wobble(frame: f64, rate: f64, phase: f64, amp: f64) -> f64 {
    (frame * rate + phase).sin() * amp
}

/// `cos(frame * rate + phase) * amp`.
pub fn wobble_cos(frame: f64, rate: f64, phase: f64, amp: f64) -> f64 {
    (frame * rate + phase).cos() * amp
}

/// Two-state blink: `on` while `sin(frame * rate) > 0`, `off` otherwise.
pub fn blink(frame: f64, rate: f64, on: f64, off: f64) -> f64 {
    if (frame * rate).sin() > 0.0 { on } else { off }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
