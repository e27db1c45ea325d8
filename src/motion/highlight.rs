use crate::animation::interpolate::interpolate_clamped;

/// An entity substring that becomes highlighted after `delay`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    /// Literal text to find.
    pub text: String,
    /// Frame at which the highlight may start.
    pub delay: f64,
}

impl Entity {
    /// Convenience constructor.
    pub fn new(text: impl Into<String>, delay: f64) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }
}

/// Piece of a rendered line: plain text, or an entity with its highlight opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextRun {
    /// Run text.
    pub text: String,
    /// `Some(opacity)` for highlighted entities.
    pub highlight: Option<f64>,
}

impl TextRun {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            highlight: None,
        }
    }
}

/// Frames for a highlight to fade in fully.
pub const HIGHLIGHT_FADE: f64 = 12.0;

/// Split `visible` into plain and highlighted runs.
///
/// An entity is active when `frame >= delay` and `visible` contains it. Active entities are
/// ordered by first occurrence in `visible`, then consumed left to right from the unconsumed
/// remainder; an entity no longer found in the remainder is skipped.
pub fn highlight_runs(visible: &str, entities: &[Entity], frame: f64) -> Vec<TextRun> {
    let mut active: Vec<(usize, &Entity)> = entities
        .iter()
        .filter(|e| !e.text.is_empty() && frame >= e.delay)
        .filter_map(|e| visible.find(&e.text).map(|pos| (pos, e)))
        .collect();

    if active.is_empty() {
        if visible.is_empty() {
            return Vec::new();
        }
        return vec![TextRun::plain(visible)];
    }

    // Stable: equal positions keep declaration order.
    active.sort_by_key(|(pos, _)| *pos);

    let mut out = Vec::new();
    let mut remaining = visible;
    for (_, entity) in active {
        let Some(idx) = remaining.find(&entity.text) else {
            continue;
        };
        if idx > 0 {
            out.push(TextRun::plain(&remaining[..idx]));
        }
        out.push(TextRun {
            text: entity.text.clone(),
            highlight: Some(interpolate_clamped(
                frame - entity.delay,
                [0.0, HIGHLIGHT_FADE],
                [0.0, 1.0],
            )),
        });
        remaining = &remaining[idx + entity.text.len()..];
    }
    if !remaining.is_empty() {
        out.push(TextRun::plain(remaining));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/motion/highlight.rs"]
mod tests;
