use std::sync::Arc;

use resvg::tiny_skia::{Color as SkColor, Pixmap, Transform};

use crate::foundation::core::Canvas;
use crate::foundation::error::{StudioError, StudioResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::fonts::{font_resolver, shared_fontdb};

const MAX_DIM: u32 = 16_384;

/// CPU rasterizer: SVG text is parsed with `usvg` and drawn with `resvg` into premultiplied RGBA8.
pub struct CpuBackend {
    settings: RenderSettings,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl CpuBackend {
    /// Backend using the shared font database for `settings.fonts_dir`.
    pub fn try_new(settings: RenderSettings) -> StudioResult<Self> {
        if !settings.scale.is_finite() || settings.scale <= 0.0 {
            return Err(StudioError::validation(format!(
                "render scale must be finite and > 0, got {}",
                settings.scale
            )));
        }
        let fontdb = shared_fontdb(settings.fonts_dir.as_deref());
        Ok(Self { settings, fontdb })
    }

    /// Backend using an explicit font database.
    pub fn with_fontdb(settings: RenderSettings, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { settings, fontdb }
    }

    /// Active settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn parse(&self, svg: &str) -> StudioResult<usvg::Tree> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        usvg::Tree::from_str(svg, &opts)
            .map_err(|e| StudioError::render(format!("svg parse failed: {e}")))
    }
}

impl RenderBackend for CpuBackend {
    fn render_svg(&mut self, svg: &str, canvas: Canvas) -> StudioResult<FrameRGBA> {
        let out = self.output_canvas(canvas);
        if out.width > MAX_DIM || out.height > MAX_DIM {
            return Err(StudioError::render(format!(
                "output size too large: {}x{} (max {MAX_DIM}x{MAX_DIM})",
                out.width, out.height
            )));
        }

        let tree = self.parse(svg)?;
        let mut pixmap = Pixmap::new(out.width, out.height)
            .ok_or_else(|| StudioError::render("failed to allocate pixmap"))?;
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            pixmap.fill(SkColor::from_rgba8(r, g, b, a));
        }

        let sx = (out.width as f32) / tree.size().width();
        let sy = (out.height as f32) / tree.size().height();
        resvg::render(&tree, Transform::from_scale(sx, sy), &mut pixmap.as_mut());

        Ok(FrameRGBA {
            width: out.width,
            height: out.height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }

    fn output_canvas(&self, canvas: Canvas) -> Canvas {
        canvas.scaled(self.settings.scale)
    }

    fn worker_render_settings(&self) -> Option<RenderSettings> {
        Some(self.settings.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
