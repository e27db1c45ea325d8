//! Scene rasterization and frame pipelines.

/// Backend trait, settings and the rendered frame type.
pub mod backend;
/// `resvg`-based CPU backend.
pub mod cpu;
pub(crate) mod fingerprint;
/// Shared font database for text rendering.
pub mod fonts;
/// Evaluate, render and stream frame ranges.
pub mod pipeline;
