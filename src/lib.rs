//! gladia-studio renders Gladia's marketing compositions and serves its design-token reference.
//!
//! Compositions are pure functions from a frame number to a [`Scene`]. The pipeline is:
//!
//! - Evaluate a [`Composition`] at a frame into a scene
//! - Rasterize the scene on the CPU ([`render_frame`], [`render_frames_with_stats`])
//! - Stream a range into a [`FrameSink`]: PNG files, memory or MP4 through `ffmpeg`
//!
//! The [`tokens`] module holds the static token catalog with its search, CSS export and viewer
//! state; [`prototypes`] persists builder prototypes behind a small HTTP endpoint.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Render-time configuration file.
pub mod config;
/// Built-in compositions and their registry.
pub mod compositions;
/// Frame sinks.
pub mod encode;
pub(crate) mod motion;
/// Prototype persistence endpoint.
pub mod prototypes;
/// Scene rasterization and frame pipelines.
pub mod render;
/// Backend-agnostic scene model.
pub mod scene;
/// Design tokens and the reference-app view-model.
pub mod tokens;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2,
};
pub use crate::foundation::error::{StudioError, StudioResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::{
    Extrapolate, Extrapolation, interpolate, interpolate_clamped, interpolate_eased,
};
pub use crate::animation::seeded::{SeedChannel, seeded};
pub use crate::motion::highlight::{Entity, TextRun, highlight_runs};
pub use crate::motion::orbit::OrbitLayout;
pub use crate::motion::typing::{LineReveal, TypedText};
pub use crate::motion::waveform::Waveform;

pub use crate::compositions::registry::CompositionRegistry;
pub use crate::compositions::{Composition, VideoConfig, evaluate_frame};
pub use crate::config::StudioConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, RenderToMp4Opts, render_frame, render_frames,
    render_frames_with_stats, render_range, render_to_mp4, render_to_mp4_with_stats,
};
pub use crate::scene::model::Scene;
pub use crate::scene::svg::scene_to_svg;
