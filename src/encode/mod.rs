//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order; see [`crate::render::pipeline::render_range`].

/// MP4 output through the system `ffmpeg`.
pub mod ffmpeg;
/// PNG files, one per frame.
pub mod png;
/// Sink trait and the in-memory sink.
pub mod sink;
