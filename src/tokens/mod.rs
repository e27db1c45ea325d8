//! Design-token catalog and the view-model of its reference app.

/// Static token tables.
pub mod catalog;
/// Clipboard targets for copied references.
pub mod clipboard;
/// Alias resolution and CSS/JSON export.
pub mod export;
/// Keyframe previews.
pub mod keyframes;
/// Substring search over token groups.
pub mod search;
/// Page routing and transient UI state.
pub mod viewer;
