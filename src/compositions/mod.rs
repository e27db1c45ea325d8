//! Registered compositions.
//!
//! A composition is a pure function from a loop frame to a [`Scene`]. The render driver may ask
//! for frames in any order and from any thread.

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{StudioError, StudioResult};
use crate::scene::model::Scene;

/// Hero background: nebula, twinkling stars and a planet rim.
pub mod hero_bg;
/// Hub-and-spoke integration diagram.
pub mod integration_nodes;
/// Typed `curl` command followed by a JSON response.
pub mod integration_terminal;
pub(crate) mod palette;
/// Live transcription bento: waveform, transcript with entity highlights, latency pill.
pub mod performance;
/// Authoritative id -> composition registry.
pub mod registry;

/// Fixed video parameters of a composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VideoConfig {
    /// Output size.
    pub canvas: Canvas,
    /// Frame rate.
    pub fps: Fps,
    /// Loop length in frames.
    pub duration: u64,
}

impl VideoConfig {
    /// Validated config.
    pub fn new(width: u32, height: u32, fps: Fps, duration: u64) -> StudioResult<Self> {
        if width == 0 || height == 0 {
            return Err(StudioError::validation("canvas width/height must be > 0"));
        }
        if duration == 0 {
            return Err(StudioError::validation("duration must be > 0 frames"));
        }
        Ok(Self {
            canvas: Canvas { width, height },
            fps,
            duration,
        })
    }

    /// `frame mod duration`; always in `[0, duration)`.
    pub fn loop_frame(&self, frame: FrameIndex) -> u64 {
        frame.0 % self.duration.max(1)
    }

    /// `[0, duration)`.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    /// Same config with the canvas scaled by `scale` (rounded, at least 1 px).
    pub fn scaled_canvas(&self, scale: f64) -> Canvas {
        self.canvas.scaled(scale)
    }
}

/// A named, fixed-size, fixed-duration animated unit.
pub trait Composition: Send + Sync {
    /// Stable registry id.
    fn id(&self) -> &str;

    /// Fixed video parameters.
    fn video_config(&self) -> VideoConfig;

    /// Build the scene for `loop_frame`, which is already wrapped into `[0, duration)`.
    fn scene(&self, loop_frame: u64) -> Scene;
}

/// Evaluate `comp` at a raw driver frame, wrapping it into the loop first.
#[tracing::instrument(skip(comp), fields(id = comp.id()))]
pub fn evaluate_frame(comp: &dyn Composition, frame: FrameIndex) -> Scene {
    let cfg = comp.video_config();
    let f = cfg.loop_frame(frame);
    comp.scene(f)
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/mod.rs"]
mod tests;
