use std::path::PathBuf;

use crate::foundation::core::Canvas;
use crate::foundation::error::StudioResult;
use crate::foundation::math::unpremul_u8;
use crate::render::cpu::CpuBackend;
use crate::scene::model::Scene;
use crate::scene::svg::scene_to_svg;

/// One rendered frame as tightly packed RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Copy of the pixels with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let a = px[3];
            out.extend_from_slice(&[
                unpremul_u8(px[0], a),
                unpremul_u8(px[1], a),
                unpremul_u8(px[2], a),
                a,
            ]);
        }
        out
    }
}

/// Available render backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// `usvg` + `resvg` rasterizer.
    #[default]
    Cpu,
}

/// Backend configuration shared by every worker of a render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Color painted under the scene before rasterizing (`None` keeps the pixmap transparent).
    pub clear_rgba: Option<[u8; 4]>,
    /// Output scale applied to the composition canvas.
    pub scale: f64,
    /// Extra directory of `.ttf`/`.otf`/`.ttc` fonts loaded next to the system fonts.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            scale: 1.0,
            fonts_dir: None,
        }
    }
}

/// Rasterizes scenes into frames.
pub trait RenderBackend: Send {
    /// Rasterize an SVG document produced for a scene of size `canvas`.
    fn render_svg(&mut self, svg: &str, canvas: Canvas) -> StudioResult<FrameRGBA>;

    /// Rasterize a scene.
    fn render_scene(&mut self, scene: &Scene) -> StudioResult<FrameRGBA> {
        self.render_svg(&scene_to_svg(scene), scene.canvas)
    }

    /// Size of the frames produced for a scene of size `canvas`.
    fn output_canvas(&self, canvas: Canvas) -> Canvas {
        canvas
    }

    /// Settings a parallel worker needs to build an equivalent backend, when supported.
    fn worker_render_settings(&self) -> Option<RenderSettings> {
        None
    }
}

/// Build a backend of `kind`.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> StudioResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(CpuBackend::try_new(settings.clone())?)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
