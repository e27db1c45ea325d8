//! Per-frame scene model and its SVG serialization.

/// Scene node types.
pub mod model;
/// Scene to SVG writer.
pub mod svg;
/// Shaped text metrics and line wrapping.
pub mod text;
