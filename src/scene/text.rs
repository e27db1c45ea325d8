use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use parley::style::{FontStack, FontWeight, StyleProperty};
use usvg::fontdb::{Database, Family, Stretch, Style};

use crate::render::fonts::{layout_fontdb, resolve_face};
use crate::scene::model::FontFamily;

/// Font, size and spacing that text is shaped with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Family class.
    pub family: FontFamily,
    /// Font size in pixels.
    pub size: f64,
    /// CSS weight.
    pub weight: u16,
    /// Extra pixels after every character.
    pub tracking: f64,
}

impl TextStyle {
    /// Regular weight, no tracking.
    pub const fn new(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            size,
            weight: 400,
            tracking: 0.0,
        }
    }

    /// Same style at `weight`.
    pub const fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    /// Same style with `tracking`.
    pub const fn tracking(mut self, tracking: f64) -> Self {
        self.tracking = tracking;
        self
    }
}

/// How a piece of a wrapped run is drawn: its text style plus horizontal room on each side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStyle {
    /// Text style of the piece.
    pub text: TextStyle,
    /// Extra width added on each side of the piece, e.g. a highlight box.
    pub inset: f64,
}

/// Shaped advance width of `text`, in pixels.
///
/// Faces come from the layout font database, so widths match what the rasterizer draws. Without
/// any installed face the width is zero.
pub fn measure(text: &str, style: &TextStyle) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    with_shaper(|shaper| shaper.advance(text, style))
}

/// A wrapped line: styled pieces plus their measured width (trailing spaces excluded).
#[derive(Clone, Debug, PartialEq)]
pub struct WrappedLine<S> {
    /// Pieces in reading order, adjacent same-style pieces merged.
    pub pieces: Vec<(String, S)>,
    /// Line width in pixels, insets included.
    pub width: f64,
}

/// Wrap styled runs into lines no wider than `max_width`.
///
/// Break opportunities and advances come from parley. A line whose insets push it past
/// `max_width` is broken again with the insets taken off the budget; a single word wider than the
/// line still gets its own line.
pub fn wrap_runs<S, F>(runs: &[(String, S)], max_width: f64, style_of: F) -> Vec<WrappedLine<S>>
where
    S: Clone + PartialEq,
    F: Fn(&S) -> RunStyle,
{
    let text: String = runs.iter().map(|(t, _)| t.as_str()).collect();
    let mut spans: Vec<(Range<usize>, &S)> = Vec::with_capacity(runs.len());
    let mut at = 0;
    for (t, s) in runs {
        if !t.is_empty() {
            spans.push((at..at + t.len(), s));
        }
        at += t.len();
    }

    with_shaper(|shaper| {
        let mut lines = Vec::new();
        let mut start = 0;
        while start < text.len() {
            let rest = clip_spans(&spans, start, text.len());
            let shaped: Vec<(Range<usize>, TextStyle)> = rest
                .iter()
                .map(|(r, s)| (r.start - start..r.end - start, style_of(*s).text))
                .collect();

            let mut budget = max_width;
            let mut end = text.len();
            let mut line = WrappedLine {
                pieces: Vec::new(),
                width: 0.0,
            };
            for _ in 0..3 {
                end = start + shaper.first_line_len(&text[start..], &shaped, budget);
                line = shaper.finish_line(&text, &clip_spans(&spans, start, end), &style_of);
                if line.width <= max_width {
                    break;
                }
                let insets: f64 = line
                    .pieces
                    .iter()
                    .map(|(_, s)| 2.0 * style_of(s).inset)
                    .sum();
                budget = (budget - (line.width - max_width)).min(max_width - insets) - 0.5;
                if budget <= 0.0 {
                    break;
                }
            }
            if !line.pieces.is_empty() {
                lines.push(line);
            }
            start = end;
        }
        lines
    })
}

fn clip_spans<'a, S>(
    spans: &[(Range<usize>, &'a S)],
    start: usize,
    end: usize,
) -> Vec<(Range<usize>, &'a S)> {
    spans
        .iter()
        .filter(|(r, _)| r.end > start && r.start < end)
        .map(|(r, s)| (r.start.max(start)..r.end.min(end), *s))
        .collect()
}

thread_local! {
    static SHAPER: RefCell<Option<Shaper>> = const { RefCell::new(None) };
}

fn with_shaper<R>(f: impl FnOnce(&mut Shaper) -> R) -> R {
    let db = layout_fontdb();
    SHAPER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.as_ref().is_some_and(|s| !Arc::ptr_eq(&s.db, &db)) {
            *slot = None;
        }
        let shaper = slot.get_or_insert_with(|| Shaper::new(db));
        f(shaper)
    })
}

/// Per-thread parley contexts with the faces registered so far.
struct Shaper {
    db: Arc<Database>,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    registered: HashMap<(FontFamily, u16), Option<String>>,
}

impl Shaper {
    fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    /// Parley family name for the face the rasterizer would pick.
    fn family_name(&mut self, family: FontFamily, weight: u16) -> Option<String> {
        if let Some(name) = self.registered.get(&(family, weight)) {
            return name.clone();
        }
        let name = self.register(family, weight);
        if name.is_none() {
            tracing::warn!(?family, weight, "no face for text layout");
        }
        self.registered.insert((family, weight), name.clone());
        name
    }

    fn register(&mut self, family: FontFamily, weight: u16) -> Option<String> {
        let generic = match family {
            FontFamily::Sans => Family::SansSerif,
            FontFamily::Mono => Family::Monospace,
        };
        let id = resolve_face(&self.db, &[generic], weight, Stretch::Normal, Style::Normal)?;
        let face_family = self
            .db
            .face(id)
            .and_then(|f| f.families.first())
            .map(|(name, _)| name.clone());
        let bytes = self.db.with_face_data(id, |data, _| data.to_vec())?;

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes), None);
        let names: Vec<String> = families
            .iter()
            .filter_map(|(id, _)| {
                self.font_ctx
                    .collection
                    .family_name(*id)
                    .map(str::to_owned)
            })
            .collect();
        names
            .iter()
            .find(|n| face_family.as_deref() == Some(n.as_str()))
            .or_else(|| names.first())
            .cloned()
    }

    fn layout(&mut self, text: &str, spans: &[(Range<usize>, TextStyle)]) -> parley::Layout<()> {
        let names: Vec<Option<String>> = spans
            .iter()
            .map(|(_, s)| self.family_name(s.family, s.weight))
            .collect();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        for ((range, style), name) in spans.iter().zip(names) {
            if let Some(name) = name {
                builder.push(
                    StyleProperty::FontStack(FontStack::Source(Cow::Owned(name))),
                    range.clone(),
                );
            }
            builder.push(StyleProperty::FontSize(style.size as f32), range.clone());
            builder.push(
                StyleProperty::FontWeight(FontWeight::new(f32::from(style.weight))),
                range.clone(),
            );
            builder.push(
                StyleProperty::LetterSpacing(style.tracking as f32),
                range.clone(),
            );
        }
        builder.build(text)
    }

    fn advance(&mut self, text: &str, style: &TextStyle) -> f64 {
        let mut layout = self.layout(text, &[(0..text.len(), *style)]);
        layout.break_all_lines(None);
        layout
            .lines()
            .map(|line| f64::from(line.metrics().advance))
            .fold(0.0, f64::max)
    }

    /// Byte length of the first line of `text` broken at `budget`.
    fn first_line_len(
        &mut self,
        text: &str,
        spans: &[(Range<usize>, TextStyle)],
        budget: f64,
    ) -> usize {
        let mut layout = self.layout(text, spans);
        layout.break_all_lines(Some(budget.max(1.0) as f32));
        layout
            .lines()
            .next()
            .map(|line| line.text_range().end)
            .filter(|&end| end > 0)
            .unwrap_or(text.len())
    }

    fn finish_line<S, F>(
        &mut self,
        text: &str,
        spans: &[(Range<usize>, &S)],
        style_of: &F,
    ) -> WrappedLine<S>
    where
        S: Clone + PartialEq,
        F: Fn(&S) -> RunStyle,
    {
        let mut merged: Vec<(String, S)> = Vec::new();
        for (range, style) in spans {
            let piece = &text[range.clone()];
            match merged.last_mut() {
                Some((t, s)) if *s == **style => t.push_str(piece),
                _ => merged.push((piece.to_owned(), S::clone(style))),
            }
        }
        if let Some((t, _)) = merged.last_mut() {
            let trimmed = t.trim_end().len();
            t.truncate(trimmed);
        }
        merged.retain(|(t, _)| !t.is_empty());

        let width = merged
            .iter()
            .map(|(t, s)| {
                let run = style_of(s);
                self.advance(t, &run.text) + 2.0 * run.inset
            })
            .sum();
        WrappedLine {
            pieces: merged,
            width,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/text.rs"]
mod tests;
