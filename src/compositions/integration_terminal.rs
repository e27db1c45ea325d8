use crate::compositions::palette::{
    AMBER, BLACK, BORDER_SUBTLE, CARD, DOT_AMBER, DOT_GREEN, DOT_RED, GREEN_500, NEUTRAL_BG,
    PURPLE_400, TEXT_BRIGHT, TEXT_TERTIARY,
};
use crate::compositions::{Composition, VideoConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, Point, Rect};
use crate::motion::typing::{LineReveal, TypedText};
use crate::scene::model::{FontFamily, GroupNode, Scene, ShapeNode, TextNode, TextSpan};
use crate::scene::text::{TextStyle, measure};

/// Syntax class of a command character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TermClass {
    /// `$ ` prompt.
    Prompt,
    /// Program name and line continuations.
    Cmd,
    /// `-X`, `-H`, `-F`.
    Flag,
    /// Quoted strings and arguments.
    Str,
}

impl TermClass {
    fn color(self) -> Color {
        match self {
            Self::Prompt => GREEN_500,
            Self::Cmd => TEXT_BRIGHT,
            Self::Flag => PURPLE_400,
            Self::Str => AMBER,
        }
    }
}

/// Typed command, segment by segment.
pub const COMMAND: [(&str, TermClass); 10] = [
    ("$ ", TermClass::Prompt),
    ("curl ", TermClass::Cmd),
    ("-X POST ", TermClass::Flag),
    ("gladia.com/v2/transcription ", TermClass::Str),
    ("\\\n  ", TermClass::Cmd),
    ("-H ", TermClass::Flag),
    ("\"x-gladia-key: sk-••••••••\" ", TermClass::Str),
    ("\\\n  ", TermClass::Cmd),
    ("-F ", TermClass::Flag),
    ("audio=@meeting.mp3", TermClass::Str),
];

/// Value kind of a response line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// `{` / `}`.
    Brace,
    /// Quoted string.
    Str,
    /// Number literal.
    Number,
}

/// One line of the JSON response; `key` is `None` for braces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponseLine {
    /// Quoted key.
    pub key: Option<&'static str>,
    /// Literal value.
    pub val: &'static str,
    /// Value kind.
    pub kind: ValueKind,
}

/// Response revealed after the command finishes.
pub const RESPONSE: [ResponseLine; 6] = [
    ResponseLine {
        key: None,
        val: "{",
        kind: ValueKind::Brace,
    },
    ResponseLine {
        key: Some("\"status\""),
        val: "\"done\"",
        kind: ValueKind::Str,
    },
    ResponseLine {
        key: Some("\"duration\""),
        val: "184.2",
        kind: ValueKind::Number,
    },
    ResponseLine {
        key: Some("\"confidence\""),
        val: "0.97",
        kind: ValueKind::Number,
    },
    ResponseLine {
        key: Some("\"text\""),
        val: "\"Revenue grew 23% this quarter...\"",
        kind: ValueKind::Str,
    },
    ResponseLine {
        key: None,
        val: "}",
        kind: ValueKind::Brace,
    },
];

/// Frames per typed character.
pub const TYPING_SPEED: u64 = 3;
/// Frames between the end of typing and the response block.
pub const RESPONSE_DELAY: u64 = 40;
/// Frames the finished state is held before looping.
pub const HOLD: u64 = 180;

const FONT_SIZE: f64 = 13.0;
const LINE_HEIGHT: f64 = FONT_SIZE * 1.7;
const CARD_RECT: Rect = Rect::new(32.0, 32.0, 528.0, 648.0);
const BAR_HEIGHT: f64 = 41.0;
const BODY_PAD: f64 = 24.0;

/// Spans of response line `index`. Key lines before the last key line end with a comma.
pub fn response_spans(index: usize) -> Vec<TextSpan> {
    let Some(line) = RESPONSE.get(index) else {
        return Vec::new();
    };
    let Some(key) = line.key else {
        return vec![TextSpan::new(line.val, TEXT_TERTIARY)];
    };
    let val_color = match line.kind {
        ValueKind::Brace => TEXT_TERTIARY,
        ValueKind::Str => AMBER,
        ValueKind::Number => GREEN_500,
    };
    let mut spans = vec![
        TextSpan::new("  ", TEXT_BRIGHT),
        TextSpan::new(key, PURPLE_400),
        TextSpan::new(": ", TEXT_TERTIARY),
        TextSpan::new(line.val, val_color),
    ];
    if index + 2 < RESPONSE.len() {
        spans.push(TextSpan::new(",", TEXT_BRIGHT));
    }
    spans
}

/// Terminal card typing a `curl` call, then printing a JSON response line by line.
#[derive(Clone, Debug)]
pub struct IntegrationTerminal {
    config: VideoConfig,
    command: TypedText<TermClass>,
    response: LineReveal,
}

impl IntegrationTerminal {
    /// Registry id.
    pub const ID: &'static str = "IntegrationTerminal";

    /// 560x680 at 30 fps; the loop length covers typing, response and hold.
    pub fn new() -> Self {
        let command = TypedText::from_segments(COMMAND, TYPING_SPEED);
        let response = LineReveal::after(command.typing_end(), RESPONSE_DELAY, RESPONSE.len());
        let duration = response.end_frame() + HOLD;
        Self {
            config: VideoConfig {
                canvas: Canvas {
                    width: 560,
                    height: 680,
                },
                fps: Fps { num: 30, den: 1 },
                duration,
            },
            command,
            response,
        }
    }

    /// The typed command.
    pub fn command(&self) -> &TypedText<TermClass> {
        &self.command
    }

    /// The response reveal schedule.
    pub fn response(&self) -> LineReveal {
        self.response
    }

    /// Visible command split at newlines into lines of styled spans.
    pub fn command_lines(&self, frame: u64) -> Vec<Vec<TextSpan>> {
        let mut lines: Vec<Vec<TextSpan>> = vec![Vec::new()];
        for run in self.command.visible_runs(frame) {
            let color = run.class.color();
            for (n, part) in run.text.split('\n').enumerate() {
                if n > 0 {
                    lines.push(Vec::new());
                }
                if !part.is_empty()
                    && let Some(line) = lines.last_mut()
                {
                    line.push(TextSpan::new(part, color));
                }
            }
        }
        lines
    }

    fn bar(&self) -> GroupNode {
        let top = CARD_RECT.y0 + 1.0;
        let bar = Rect::new(CARD_RECT.x0 + 1.0, top, CARD_RECT.x1 - 1.0, top + BAR_HEIGHT);
        let mid = bar.y0 + BAR_HEIGHT / 2.0;
        let mut g = GroupNode::new().with(ShapeNode::rect(bar).fill(CARD));
        g.push(ShapeNode::line(
            Point::new(bar.x0, bar.y1 + 0.5),
            Point::new(bar.x1, bar.y1 + 0.5),
            BORDER_SUBTLE,
            1.0,
        ));
        let first_dot = bar.x0 + 20.0 + 5.0;
        for (i, c) in [DOT_RED, DOT_AMBER, DOT_GREEN].into_iter().enumerate() {
            let x = first_dot + (i as f64) * 17.0;
            g.push(ShapeNode::circle(Point::new(x, mid), 5.0).fill(c).opacity(0.85));
        }
        // Last dot edge, flex gap, then the label's own margin.
        let label_x = first_dot + 2.0 * 17.0 + 5.0 + 7.0 + 14.0;
        g.push(
            TextNode::new(
                Point::new(label_x, mid + 4.0),
                FontFamily::Mono,
                11.0,
                TextSpan::new("TERMINAL", TEXT_TERTIARY),
            )
            .tracking(11.0 * 0.06),
        );
        g
    }
}

impl Default for IntegrationTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn baseline(top: f64, line: usize) -> f64 {
    top + (line as f64) * LINE_HEIGHT + (LINE_HEIGHT - FONT_SIZE) / 2.0 + FONT_SIZE * 0.78
}

impl Composition for IntegrationTerminal {
    fn id(&self) -> &str {
        Self::ID
    }

    fn video_config(&self) -> VideoConfig {
        self.config
    }

    fn scene(&self, loop_frame: u64) -> Scene {
        let f = loop_frame;
        let mut scene = Scene::new(self.config.canvas, NEUTRAL_BG);

        let mut card = GroupNode::new()
            .clip(CARD_RECT, 24.0)
            .with(ShapeNode::rect(CARD_RECT).fill(BLACK));
        card.push(self.bar());

        let body_x = CARD_RECT.x0 + 1.0 + BODY_PAD;
        let body_top = CARD_RECT.y0 + 1.0 + BAR_HEIGHT + 1.0 + BODY_PAD;

        let lines = self.command_lines(f);
        for (i, spans) in lines.iter().enumerate() {
            if spans.is_empty() {
                continue;
            }
            card.push(TextNode::spans(
                Point::new(body_x, baseline(body_top, i)),
                FontFamily::Mono,
                FONT_SIZE,
                spans.iter().cloned(),
            ));
        }

        if let Some(caret) = self.command.caret(f) {
            let last = lines.len().saturating_sub(1);
            let width = lines.last().map_or(0.0, |spans| {
                let text: String = spans.iter().map(|s| s.text.as_str()).collect();
                measure(&text, &TextStyle::new(FontFamily::Mono, FONT_SIZE))
            });
            let bottom = baseline(body_top, last) + FONT_SIZE * 0.22;
            let x = body_x + width + 2.0;
            card.push(
                ShapeNode::rounded(Rect::new(x, bottom - 15.0, x + 7.0, bottom), 1.0)
                    .fill(PURPLE_400)
                    .opacity(caret),
            );
        }

        let visible = if self.command.is_done(f) {
            self.response.visible_lines(f)
        } else {
            0
        };
        if visible > 0 {
            let border_y = body_top + (lines.len() as f64) * LINE_HEIGHT + 16.0;
            let resp_top = border_y + 1.0 + 16.0;
            let mut block = GroupNode::new()
                .opacity(self.response.block_opacity(f))
                .with(ShapeNode::line(
                    Point::new(body_x, border_y + 0.5),
                    Point::new(CARD_RECT.x1 - 1.0 - BODY_PAD, border_y + 0.5),
                    BORDER_SUBTLE,
                    1.0,
                ));
            for i in 0..visible {
                block.push(
                    TextNode::spans(
                        Point::new(body_x, baseline(resp_top, i)),
                        FontFamily::Mono,
                        FONT_SIZE,
                        response_spans(i),
                    )
                    .opacity(self.response.line_opacity(i, f)),
                );
            }
            card.push(block);
        }

        scene.push(card);
        scene.push(
            ShapeNode::rounded(CARD_RECT.inflate(-0.5, -0.5), 23.5).stroke(BORDER_SUBTLE, 1.0),
        );
        scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/integration_terminal.rs"]
mod tests;
