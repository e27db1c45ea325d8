use std::collections::HashMap;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::compositions::{Composition, evaluate_frame};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{StudioError, StudioResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::cpu::CpuBackend;
use crate::render::fingerprint::{FrameFingerprint, fingerprint_svg};
use crate::render::fonts::shared_fontdb;
use crate::scene::svg::scene_to_svg;

/// Evaluate and render a single frame. Frames past the composition's duration wrap.
///
/// Returns premultiplied RGBA8 pixels.
pub fn render_frame(
    comp: &dyn Composition,
    frame: FrameIndex,
    backend: &mut dyn RenderBackend,
) -> StudioResult<FrameRGBA> {
    let scene = evaluate_frame(comp, frame);
    backend.render_scene(&scene)
}

/// Render `range` sequentially, without elision.
pub fn render_frames(
    comp: &dyn Composition,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
) -> StudioResult<Vec<FrameRGBA>> {
    render_frames_with_stats(comp, range, backend, &RenderThreading::default())
        .map(|(frames, _)| frames)
}

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    /// Render chunks on a `rayon` pool, one CPU backend per worker.
    pub parallel: bool,
    /// Frames evaluated per batch.
    pub chunk_size: usize,
    /// Explicit worker count (`None` lets `rayon` decide).
    pub threads: Option<usize>,
    /// Render each distinct frame of a chunk once and reuse it for identical frames.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames that were rasterized.
    pub frames_rendered: u64,
    /// Frames reused via static-frame elision.
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Render `range` and return the frames in order together with the counters.
#[tracing::instrument(
    skip(comp, backend, threading),
    fields(id = comp.id(), start = range.start.0, end = range.end.0)
)]
pub fn render_frames_with_stats(
    comp: &dyn Composition,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
) -> StudioResult<(Vec<FrameRGBA>, RenderStats)> {
    if range.is_empty() {
        return Err(StudioError::validation("render range must be non-empty"));
    }

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut stats = RenderStats::default();
    let workers = prepare_workers(backend, threading)?;

    for chunk in chunks(range, threading.chunk_size)? {
        let chunk_out = render_chunk(comp, chunk, backend, threading, workers.as_ref())?;
        stats.absorb(chunk_out.stats);
        out.append(&mut chunk_out.into_frames()?);
    }

    tracing::info!(
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "frames rendered"
    );
    Ok((out, stats))
}

/// Render `range` and stream every frame, in order, into `sink`.
///
/// The sink is opened with the backend's output size and the composition's frame rate, and is
/// finalized after the last frame.
#[tracing::instrument(
    skip(comp, backend, threading, sink),
    fields(id = comp.id(), start = range.start.0, end = range.end.0)
)]
pub fn render_range(
    comp: &dyn Composition,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> StudioResult<RenderStats> {
    if range.is_empty() {
        return Err(StudioError::validation("render range must be non-empty"));
    }

    let cfg = comp.video_config();
    let out = backend.output_canvas(cfg.canvas);
    sink.begin(SinkConfig {
        width: out.width,
        height: out.height,
        fps: cfg.fps,
    })?;

    let workers = prepare_workers(backend, threading)?;
    let mut stats = RenderStats::default();
    for chunk in chunks(range, threading.chunk_size)? {
        let chunk_out = render_chunk(comp, chunk, backend, threading, workers.as_ref())?;
        for (offset, &u) in chunk_out.frame_to_unique.iter().enumerate() {
            let frame = chunk_out.unique_frames.get(u).ok_or_else(|| {
                StudioError::render("internal error: unique frame index out of range")
            })?;
            sink.push_frame(FrameIndex(chunk.start.0 + offset as u64), frame)?;
        }
        tracing::debug!(
            chunk_start = chunk.start.0,
            chunk_end = chunk.end.0,
            rendered = chunk_out.stats.frames_rendered,
            "chunk streamed"
        );
        stats.absorb(chunk_out.stats);
    }

    sink.end()?;
    tracing::info!(
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "range streamed"
    );
    Ok(stats)
}

/// Options for [`render_to_mp4_with_stats`].
#[derive(Clone, Debug)]
pub struct RenderToMp4Opts {
    /// Frame range to render (start inclusive, end exclusive).
    pub range: FrameRange,
    /// Background color alpha is flattened over (straight RGBA8).
    pub bg_rgba: [u8; 4],
    /// Overwrite an existing output file.
    pub overwrite: bool,
    /// Threading and chunking.
    pub threading: RenderThreading,
}

impl Default for RenderToMp4Opts {
    fn default() -> Self {
        Self {
            range: FrameRange {
                start: FrameIndex(0),
                end: FrameIndex(1),
            },
            bg_rgba: [0, 0, 0, 255],
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Render a frame range to MP4 through the system `ffmpeg` binary.
pub fn render_to_mp4(
    comp: &dyn Composition,
    out_path: impl Into<PathBuf>,
    opts: RenderToMp4Opts,
    backend: &mut dyn RenderBackend,
) -> StudioResult<()> {
    render_to_mp4_with_stats(comp, out_path, opts, backend).map(|_| ())
}

/// Render a frame range to MP4 and return the counters.
///
/// `ffmpeg` must be on `PATH`; this is checked before any frame is evaluated.
pub fn render_to_mp4_with_stats(
    comp: &dyn Composition,
    out_path: impl Into<PathBuf>,
    opts: RenderToMp4Opts,
    backend: &mut dyn RenderBackend,
) -> StudioResult<RenderStats> {
    if opts.range.is_empty() {
        return Err(StudioError::validation(
            "render_to_mp4 range must be non-empty",
        ));
    }
    if !is_ffmpeg_on_path() {
        return Err(StudioError::encode(
            "ffmpeg is required for MP4 rendering, but was not found on PATH",
        ));
    }

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: out_path.into(),
        overwrite: opts.overwrite,
        bg_rgba: opts.bg_rgba,
    });
    render_range(comp, opts.range, backend, &opts.threading, &mut sink)
}

/// Pool plus the settings each worker builds its backend from.
struct Workers {
    pool: rayon::ThreadPool,
    settings: RenderSettings,
}

fn prepare_workers(
    backend: &dyn RenderBackend,
    threading: &RenderThreading,
) -> StudioResult<Option<Workers>> {
    if !threading.parallel {
        return Ok(None);
    }
    let settings = backend.worker_render_settings().ok_or_else(|| {
        StudioError::render("parallel render requires backend worker settings support (CpuBackend)")
    })?;
    let pool = build_thread_pool(threading.threads)?;
    tracing::debug!(threads = pool.current_num_threads(), "render pool ready");
    Ok(Some(Workers { pool, settings }))
}

fn chunks(range: FrameRange, chunk_size: usize) -> StudioResult<Vec<FrameRange>> {
    let size = normalized_chunk_size(chunk_size);
    let mut out = Vec::new();
    let mut start = range.start.0;
    while start < range.end.0 {
        let end = (start + size).min(range.end.0);
        out.push(
            FrameRange::new(FrameIndex(start), FrameIndex(end))
                .map_err(|e| StudioError::render(format!("invalid chunk range: {e}")))?,
        );
        start = end;
    }
    Ok(out)
}

/// Distinct frames of a chunk and, per requested frame, which distinct frame it shows.
struct ChunkOut {
    unique_frames: Vec<FrameRGBA>,
    frame_to_unique: Vec<usize>,
    stats: RenderStats,
}

impl ChunkOut {
    /// Expand to one frame per request, moving each distinct frame into its last use.
    fn into_frames(self) -> StudioResult<Vec<FrameRGBA>> {
        let mut unique: Vec<Option<FrameRGBA>> = self.unique_frames.into_iter().map(Some).collect();
        let mut remaining = vec![0usize; unique.len()];
        for &u in &self.frame_to_unique {
            remaining[u] += 1;
        }

        let mut out = Vec::with_capacity(self.frame_to_unique.len());
        for u in self.frame_to_unique {
            let slot = unique
                .get_mut(u)
                .ok_or_else(|| StudioError::render("internal error: unique frame out of range"))?;
            let frame = if remaining[u] == 1 {
                slot.take()
            } else {
                slot.clone()
            };
            out.push(frame.ok_or_else(|| {
                StudioError::render("internal error: unique frame already consumed")
            })?);
            remaining[u] -= 1;
        }
        Ok(out)
    }
}

fn render_chunk(
    comp: &dyn Composition,
    range: FrameRange,
    backend: &mut dyn RenderBackend,
    threading: &RenderThreading,
    workers: Option<&Workers>,
) -> StudioResult<ChunkOut> {
    let docs: Vec<(Canvas, String)> = range
        .iter()
        .map(|f| {
            let scene = evaluate_frame(comp, f);
            let svg = scene_to_svg(&scene);
            (scene.canvas, svg)
        })
        .collect();

    let mut unique_indices = Vec::<usize>::with_capacity(docs.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(docs.len());
    if threading.static_frame_elision {
        let mut first = HashMap::<FrameFingerprint, usize>::new();
        for (idx, (canvas, svg)) in docs.iter().enumerate() {
            let fingerprint = fingerprint_svg(*canvas, svg);
            if let Some(&slot) = first.get(&fingerprint) {
                frame_to_unique.push(slot);
            } else {
                let slot = unique_indices.len();
                unique_indices.push(idx);
                first.insert(fingerprint, slot);
                frame_to_unique.push(slot);
            }
        }
    } else {
        unique_indices.extend(0..docs.len());
        frame_to_unique.extend(0..docs.len());
    }

    let unique_frames = match workers {
        Some(w) => {
            let fontdb = shared_fontdb(w.settings.fonts_dir.as_deref());
            let rendered = w.pool.install(|| {
                unique_indices
                    .par_iter()
                    .map_init(
                        || CpuBackend::with_fontdb(w.settings.clone(), fontdb.clone()),
                        |worker, &idx| {
                            let (canvas, svg) = &docs[idx];
                            worker.render_svg(svg, *canvas)
                        },
                    )
                    .collect::<Vec<_>>()
            });
            rendered.into_iter().collect::<StudioResult<Vec<_>>>()?
        }
        None => unique_indices
            .iter()
            .map(|&idx| {
                let (canvas, svg) = &docs[idx];
                backend.render_svg(svg, *canvas)
            })
            .collect::<StudioResult<Vec<_>>>()?,
    };

    let total = docs.len() as u64;
    let rendered = unique_indices.len() as u64;
    Ok(ChunkOut {
        unique_frames,
        frame_to_unique,
        stats: RenderStats {
            frames_total: total,
            frames_rendered: rendered,
            frames_elided: total.saturating_sub(rendered),
        },
    })
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> StudioResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StudioError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StudioError::render(format!("failed to build rayon thread pool: {e}")))
}

pub(crate) fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 { 1 } else { chunk_size as u64 }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
