use crate::animation::interpolate::{Extrapolation, interpolate};

/// Synthetic waveform: bar heights derived from bar index and frame only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waveform {
    /// Number of bars.
    pub bars: usize,
    /// Bar width in pixels.
    pub bar_width: f64,
    /// Gap between bars in pixels.
    pub gap: f64,
}

impl Waveform {
    /// One bar per 6 px of `width` (3 px bar, 3 px gap).
    pub fn for_width(width: f64) -> Self {
        Self {
            bars: (width / 6.0).floor().max(0.0) as usize,
            bar_width: 3.0,
            gap: 3.0,
        }
    }

    /// Height of bar `index` at `frame` (unclamped `[0, 32] -> [4, 32]` mapping).
    pub fn bar_height(&self, index: usize, frame: f64, active: bool) -> f64 {
        let i = index as f64;
        let wave = if active {
            (frame * 0.12 + i * 0.7).sin().abs() * (20.0 + (i * 1.3 + frame * 0.05).sin() * 12.0)
        } else {
            4.0 + (i * 0.8).sin() * 2.0
        };
        interpolate(wave, [0.0, 32.0], [4.0, 32.0], Extrapolation::EXTEND)
    }

    /// All bar heights at `frame`.
    pub fn heights(&self, frame: f64, active: bool) -> Vec<f64> {
        (0..self.bars)
            .map(|i| self.bar_height(i, frame, active))
            .collect()
    }

    /// Total strip width.
    pub fn strip_width(&self) -> f64 {
        if self.bars == 0 {
            return 0.0;
        }
        (self.bars as f64) * self.bar_width + ((self.bars - 1) as f64) * self.gap
    }
}

/// Active window of a looping transcription: strictly after frame 10 and more than 20 frames
/// before the loop end.
pub fn waveform_active(loop_frame: u64, duration: u64) -> bool {
    loop_frame > 10 && loop_frame + 20 < duration
}

#[cfg(test)]
#[path = "../../tests/unit/motion/waveform.rs"]
mod tests;
