use crate::animation::interpolate::interpolate_clamped;
use crate::animation::reveal::blink;

/// A run of consecutive characters sharing one style class.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StyledRun<C> {
    /// Run text.
    pub text: String,
    /// Style class of every character in `text`.
    pub class: C,
}

/// Source text revealed character by character at a fixed rate.
///
/// Styles are attached per character up front, so re-segmenting a visible prefix never changes
/// the style of an already-typed character.
#[derive(Clone, Debug)]
pub struct TypedText<C> {
    chars: Vec<(char, C)>,
    frames_per_char: u64,
}

impl<C: Copy + PartialEq> TypedText<C> {
    /// Build from annotated segments. `frames_per_char` of zero is treated as one.
    pub fn from_segments<'a>(
        segments: impl IntoIterator<Item = (&'a str, C)>,
        frames_per_char: u64,
    ) -> Self {
        let chars = segments
            .into_iter()
            .flat_map(|(text, class)| text.chars().map(move |ch| (ch, class)))
            .collect();
        Self {
            chars,
            frames_per_char: frames_per_char.max(1),
        }
    }

    /// Total character count.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Return `true` when there is nothing to type.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Frames spent per character.
    pub fn frames_per_char(&self) -> u64 {
        self.frames_per_char
    }

    /// First frame at which every character is visible.
    pub fn typing_end(&self) -> u64 {
        (self.chars.len() as u64) * self.frames_per_char
    }

    /// `min(floor(frame / frames_per_char), len)`.
    pub fn visible_count(&self, frame: u64) -> usize {
        let typed = frame / self.frames_per_char;
        usize::try_from(typed).map_or(self.chars.len(), |n| n.min(self.chars.len()))
    }

    /// Return `true` once every character is visible.
    pub fn is_done(&self, frame: u64) -> bool {
        self.visible_count(frame) >= self.chars.len()
    }

    /// Visible prefix as plain text.
    pub fn visible_text(&self, frame: u64) -> String {
        self.chars[..self.visible_count(frame)]
            .iter()
            .map(|(ch, _)| *ch)
            .collect()
    }

    /// Visible prefix split into maximal same-class runs.
    pub fn visible_runs(&self, frame: u64) -> Vec<StyledRun<C>> {
        let mut runs: Vec<StyledRun<C>> = Vec::new();
        for &(ch, class) in &self.chars[..self.visible_count(frame)] {
            match runs.last_mut() {
                Some(run) if run.class == class => run.text.push(ch),
                _ => runs.push(StyledRun {
                    text: ch.to_string(),
                    class,
                }),
            }
        }
        runs
    }

    /// Caret opacity while typing, `None` once done.
    pub fn caret(&self, frame: u64) -> Option<f64> {
        if self.is_done(frame) {
            return None;
        }
        Some(blink(frame as f64, 0.25, 1.0, 0.2))
    }
}

/// Line-by-line reveal of a block that follows the typed text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineReveal {
    /// Frame at which the block starts (line 0 appears on the next frame).
    pub start: u64,
    /// Frames between consecutive lines.
    pub line_gap: u64,
    /// Per-line fade length.
    pub line_fade: f64,
    /// Whole-block fade length.
    pub block_fade: f64,
    /// Number of lines in the block.
    pub lines: usize,
}

impl LineReveal {
    /// Reveal `lines` lines starting `delay` frames after `after`.
    pub fn after(after: u64, delay: u64, lines: usize) -> Self {
        Self {
            start: after + delay,
            line_gap: 15,
            line_fade: 10.0,
            block_fade: 20.0,
            lines,
        }
    }

    /// Frames since `start`; negative before it.
    pub fn elapsed(&self, frame: u64) -> i64 {
        frame as i64 - self.start as i64
    }

    /// `start` plus one gap per line; every line is fully shown from here on.
    pub fn end_frame(&self) -> u64 {
        self.start + (self.lines as u64) * self.line_gap
    }

    /// Number of visible lines: 0 until `start` has passed, then one more every `line_gap`.
    pub fn visible_lines(&self, frame: u64) -> usize {
        let e = self.elapsed(frame);
        if e <= 0 || self.line_gap == 0 {
            return 0;
        }
        let n = (e as u64 / self.line_gap) as usize + 1;
        n.min(self.lines)
    }

    /// Opacity of the whole block.
    pub fn block_opacity(&self, frame: u64) -> f64 {
        let e = self.elapsed(frame) as f64;
        interpolate_clamped(e.min(self.block_fade), [0.0, self.block_fade], [0.0, 1.0])
    }

    /// Opacity of line `index`.
    pub fn line_opacity(&self, index: usize, frame: u64) -> f64 {
        let e = self.elapsed(frame) as f64 - (index as f64) * (self.line_gap as f64);
        interpolate_clamped(e, [0.0, self.line_fade], [0.0, 1.0])
    }
}

/// Word-by-word reveal at a fractional rate.
#[derive(Clone, Debug)]
pub struct WordReveal {
    words: Vec<String>,
    words_per_frame: f64,
}

impl WordReveal {
    /// Split `text` on single spaces.
    pub fn new(text: &str, words_per_frame: f64) -> Self {
        Self {
            words: text.split(' ').map(str::to_owned).collect(),
            words_per_frame,
        }
    }

    /// Word count.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// `min(floor(elapsed * rate), words)`; zero for negative elapsed.
    pub fn visible_words(&self, elapsed: f64) -> usize {
        if elapsed <= 0.0 {
            return 0;
        }
        let n = (elapsed * self.words_per_frame).floor() as usize;
        n.min(self.words.len())
    }

    /// Return `true` once every word is visible.
    pub fn is_complete(&self, elapsed: f64) -> bool {
        self.visible_words(elapsed) >= self.words.len()
    }

    /// Visible words re-joined with single spaces.
    pub fn visible_text(&self, elapsed: f64) -> String {
        self.words[..self.visible_words(elapsed)].join(" ")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/typing.rs"]
mod tests;
