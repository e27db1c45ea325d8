use crate::animation::interpolate::{Extrapolation, interpolate};
use crate::animation::reveal::{Reveal, blink};
use crate::compositions::palette::{
    BENTO_BG, BLUE_400, BORDER_SUBTLE, CARD, GREEN_400, PURPLE_400, TEXT_MUTED, TEXT_TERTIARY,
    WHITE, purple_wash,
};
use crate::compositions::{Composition, VideoConfig};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Canvas, Fps, Point, Rect};
use crate::motion::highlight::{Entity, highlight_runs};
use crate::motion::typing::WordReveal;
use crate::motion::waveform::{Waveform, waveform_active};
use crate::scene::model::{FontFamily, GroupNode, Scene, ShapeNode, TextAnchor, TextNode, TextSpan};
use crate::scene::text::{RunStyle, TextStyle, WrappedLine, measure, wrap_runs};

/// One utterance of the simulated transcript.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Utterance {
    /// Speaker label.
    pub speaker: &'static str,
    /// Speaker accent color.
    pub color: Color,
    /// Full text.
    pub text: &'static str,
    /// Loop frame at which the utterance starts streaming.
    pub start: u64,
}

/// Transcript in speaking order.
pub const TRANSCRIPT: [Utterance; 5] = [
    Utterance {
        speaker: "Speaker 1",
        color: BLUE_400,
        text: "The quarterly results show a 23% increase in revenue",
        start: 30,
    },
    Utterance {
        speaker: "Speaker 2",
        color: GREEN_400,
        text: "That's great news. Can you break down the regional performance?",
        start: 80,
    },
    Utterance {
        speaker: "Speaker 1",
        color: BLUE_400,
        text: "EMEA grew 31%, North America 18%, and APAC 27%",
        start: 135,
    },
    Utterance {
        speaker: "Speaker 2",
        color: GREEN_400,
        text: "Impressive. What about customer retention metrics?",
        start: 190,
    },
    Utterance {
        speaker: "Speaker 1",
        color: BLUE_400,
        text: "Net retention rate hit 142%, our highest quarter ever",
        start: 245,
    },
];

/// Extracted entities: `(text, utterance index, delay)`.
pub const ENTITIES: [(&str, usize, f64); 5] = [
    ("23% increase", 0, 70.0),
    ("EMEA", 2, 165.0),
    ("North America", 2, 170.0),
    ("APAC", 2, 175.0),
    ("142%", 4, 285.0),
];

/// Streaming rate of the transcript.
pub const WORDS_PER_FRAME: f64 = 0.25;

/// Latency readings cycled by the pill.
pub const LATENCIES: [(&str, u32); 7] = [
    ("287ms", 287),
    ("245ms", 245),
    ("312ms", 312),
    ("198ms", 198),
    ("265ms", 265),
    ("301ms", 301),
    ("223ms", 223),
];

const LATENCY_DELAY: u64 = 20;
const LATENCY_STEP: i64 = 25;

/// Latency pill state at a loop frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatencyReading {
    /// Pill opacity.
    pub opacity: f64,
    /// Displayed value, e.g. `"287ms"`.
    pub label: &'static str,
    /// Below 300 ms.
    pub low: bool,
}

impl LatencyReading {
    /// Accent color: green when low, purple otherwise.
    pub fn color(&self) -> Color {
        if self.low { GREEN_400 } else { PURPLE_400 }
    }
}

/// Pill state: fades in over 15 frames after frame 20, steps every 25 frames.
pub fn latency(loop_frame: u64) -> LatencyReading {
    let rel = loop_frame as i64 - LATENCY_DELAY as i64;
    let idx = rel.div_euclid(LATENCY_STEP).rem_euclid(LATENCIES.len() as i64) as usize;
    let (label, ms) = LATENCIES[idx];
    LatencyReading {
        opacity: Reveal::fade_in(LATENCY_DELAY as f64, 15.0).value(loop_frame as f64),
        label,
        low: ms < 300,
    }
}

/// Entity tag `(opacity, scale)`: 0 -> 1 and 0.9 -> 1 over 10 frames after `delay`.
pub fn entity_tag_pose(frame: f64, delay: f64) -> (f64, f64) {
    (
        Reveal::fade_in(delay, 10.0).value(frame),
        Reveal::between(delay, 10.0, 0.9, 1.0).value(frame),
    )
}

const PAD: f64 = 32.0;
const GAP: f64 = 20.0;
const HEADER_H: f64 = 25.0;
const WAVE_CARD_H: f64 = 58.0;
const ENTITY_BAR_H: f64 = 41.0;
const CARD_RADIUS: f64 = 12.0;

const BODY_SIZE: f64 = 14.0;
const BODY_LINE: f64 = BODY_SIZE * 1.6;
const SPEAKER_ROW: f64 = 13.0;
const BLOCK_GAP: f64 = 16.0;
/// Horizontal room a highlight takes beyond its text: margin, border and padding per side.
const HIGHLIGHT_SIDE: f64 = 6.0;

/// Style of a wrapped transcript piece: `Some(opacity)` for a highlighted entity.
pub type PieceStyle = Option<f64>;

const BODY: TextStyle = TextStyle::new(FontFamily::Sans, BODY_SIZE);
const HIGHLIGHT: TextStyle = BODY.weight(500);

fn piece_style(style: &PieceStyle) -> RunStyle {
    match style {
        None => RunStyle {
            text: BODY,
            inset: 0.0,
        },
        Some(_) => RunStyle {
            text: HIGHLIGHT,
            inset: HIGHLIGHT_SIDE,
        },
    }
}

fn piece_width(text: &str, style: &PieceStyle) -> f64 {
    let run = piece_style(style);
    measure(text, &run.text) + 2.0 * run.inset
}

fn baseline_in(line_top: f64, line_height: f64, size: f64) -> f64 {
    line_top + (line_height - size) / 2.0 + size * 0.78
}

#[derive(Clone, Debug)]
struct UtteranceState {
    words: WordReveal,
    entities: Vec<Entity>,
    /// Wrapped line count of the full text; fixes the block height.
    full_lines: usize,
}

/// Live transcription bento: status header with latency pill, waveform card, streaming
/// transcript with entity highlights and an entity tag bar.
#[derive(Clone, Debug)]
pub struct PerformanceBento {
    config: VideoConfig,
    utterances: Vec<UtteranceState>,
    waveform: Waveform,
}

impl PerformanceBento {
    /// Registry id.
    pub const ID: &'static str = "PerformanceBento";

    /// 560x680 at 30 fps, 300 frames.
    pub fn new() -> Self {
        let config = VideoConfig {
            canvas: Canvas {
                width: 560,
                height: 680,
            },
            fps: Fps { num: 30, den: 1 },
            duration: 300,
        };
        let text_width = Self::text_width(config.canvas);
        let utterances = TRANSCRIPT
            .iter()
            .enumerate()
            .map(|(i, u)| {
                let entities: Vec<Entity> = ENTITIES
                    .iter()
                    .filter(|(_, line, _)| *line == i)
                    .map(|&(text, _, delay)| Entity::new(text, delay))
                    .collect();
                // Sized for the final text with every highlight box in place.
                let runs: Vec<(String, PieceStyle)> =
                    highlight_runs(u.text, &entities, config.duration as f64)
                        .into_iter()
                        .map(|r| (r.text, r.highlight))
                        .collect();
                UtteranceState {
                    words: WordReveal::new(u.text, WORDS_PER_FRAME),
                    full_lines: wrap_runs(&runs, text_width, piece_style).len().max(1),
                    entities,
                }
            })
            .collect();
        Self {
            config,
            utterances,
            waveform: Waveform::for_width(400.0),
        }
    }

    fn text_width(canvas: Canvas) -> f64 {
        // Page padding, card border and padding, then the text indent.
        canvas.w() - 2.0 * PAD - 2.0 - 32.0 - 16.0
    }

    /// Whether the waveform and status dot are live at `loop_frame`.
    pub fn is_live(&self, loop_frame: u64) -> bool {
        waveform_active(loop_frame, self.config.duration)
    }

    /// Visible transcript of utterance `index` at `loop_frame`, split into highlight runs and
    /// wrapped to the card width.
    pub fn transcript_lines(&self, index: usize, loop_frame: u64) -> Vec<WrappedLine<PieceStyle>> {
        let (Some(u), Some(state)) = (TRANSCRIPT.get(index), self.utterances.get(index)) else {
            return Vec::new();
        };
        let elapsed = loop_frame as f64 - u.start as f64;
        let visible = state.words.visible_text(elapsed);
        let runs: Vec<(String, PieceStyle)> =
            highlight_runs(&visible, &state.entities, loop_frame as f64)
                .into_iter()
                .map(|r| (r.text, r.highlight))
                .collect();
        wrap_runs(&runs, Self::text_width(self.config.canvas), piece_style)
    }

    fn header(&self, f: u64, live: bool) -> GroupNode {
        let mid = PAD + HEADER_H / 2.0;
        let dot = Point::new(PAD + 4.0, mid);
        let mut g = GroupNode::new();
        if live {
            g.push(ShapeNode::circle(dot, 4.0).fill(GREEN_400).blur(4.0));
        }
        g.push(ShapeNode::circle(dot, 4.0).fill(if live { GREEN_400 } else { TEXT_TERTIARY }));
        g.push(
            TextNode::new(
                Point::new(PAD + 8.0 + 10.0, mid + 4.0),
                FontFamily::Sans,
                12.0,
                TextSpan::new(if live { "Transcribing..." } else { "Ready" }, TEXT_MUTED),
            )
            .weight(500),
        );

        let reading = latency(f);
        let label = format!("{} latency", reading.label);
        let text_w = measure(&label, &TextStyle::new(FontFamily::Mono, 12.0).weight(500));
        let pill_w = 1.0 + 12.0 + 6.0 + 6.0 + text_w + 12.0 + 1.0;
        let right = self.config.canvas.w() - PAD;
        let pill = Rect::new(right - pill_w, PAD, right, PAD + HEADER_H);
        let accent = reading.color();
        g.push(
            GroupNode::new()
                .opacity(reading.opacity)
                .with(
                    ShapeNode::rounded(pill.inflate(-0.5, -0.5), HEADER_H / 2.0)
                        .fill(purple_wash(0.1))
                        .stroke(purple_wash(0.25), 1.0),
                )
                .with(ShapeNode::circle(Point::new(pill.x0 + 13.0 + 3.0, mid), 3.0).fill(accent))
                .with(
                    TextNode::new(
                        Point::new(pill.x0 + 13.0 + 6.0 + 6.0, mid + 4.0),
                        FontFamily::Mono,
                        12.0,
                        TextSpan::new(label, accent),
                    )
                    .weight(500),
                ),
        );
        g
    }

    fn waveform_card(&self, f: u64, live: bool) -> GroupNode {
        let top = PAD + HEADER_H + GAP;
        let card = Rect::new(PAD, top, self.config.canvas.w() - PAD, top + WAVE_CARD_H);
        let mut g = GroupNode::new().with(card_shape(card));
        let mid = top + 1.0 + 12.0 + 16.0;
        let (color, opacity) = if live {
            (PURPLE_400, 0.9)
        } else {
            (TEXT_TERTIARY, 0.25)
        };
        let step = self.waveform.bar_width + self.waveform.gap;
        let x0 = PAD + 1.0 + 16.0;
        for (i, h) in self.waveform.heights(f as f64, live).into_iter().enumerate() {
            let x = x0 + (i as f64) * step;
            g.push(
                ShapeNode::rounded(
                    Rect::new(x, mid - h / 2.0, x + self.waveform.bar_width, mid + h / 2.0),
                    2.0_f64.min(self.waveform.bar_width / 2.0),
                )
                .fill(color)
                .opacity(opacity),
            );
        }
        g
    }

    fn transcript_card(&self, f: u64) -> GroupNode {
        let w = self.config.canvas.w();
        let top = PAD + HEADER_H + GAP + WAVE_CARD_H + GAP;
        let bottom = self.config.canvas.h() - PAD - ENTITY_BAR_H - GAP;
        let card = Rect::new(PAD, top, w - PAD, bottom);
        let mut body = GroupNode::new().clip(card, CARD_RADIUS);

        let left = PAD + 1.0 + 16.0;
        let text_x = left + 16.0;
        let mut y = top + 1.0 + 16.0;
        for (i, (u, state)) in TRANSCRIPT.iter().zip(&self.utterances).enumerate() {
            let elapsed = f as f64 - u.start as f64;
            if elapsed < 0.0 {
                continue;
            }
            let fade = interpolate(elapsed, [0.0, 8.0], [0.0, 1.0], Extrapolation::CLAMP_RIGHT);
            let mut block = GroupNode::new().opacity(fade);

            let row_mid = y + SPEAKER_ROW / 2.0;
            block.push(ShapeNode::circle(Point::new(left + 4.0, row_mid), 4.0).fill(u.color));
            block.push(
                TextNode::new(
                    Point::new(left + 16.0, row_mid + 4.0),
                    FontFamily::Sans,
                    11.0,
                    TextSpan::new(u.speaker.to_uppercase(), u.color),
                )
                .weight(600)
                .tracking(11.0 * 0.08),
            );

            let text_top = y + SPEAKER_ROW + 4.0;
            let lines = self.transcript_lines(i, f);
            let mut caret_at = Point::new(text_x, text_top);
            for (k, line) in lines.iter().enumerate() {
                let line_top = text_top + (k as f64) * BODY_LINE;
                let base = baseline_in(line_top, BODY_LINE, BODY_SIZE);
                let mut x = text_x;
                for (text, style) in &line.pieces {
                    let pw = piece_width(text, style);
                    match style {
                        None => block.push(TextNode::new(
                            Point::new(x, base),
                            FontFamily::Sans,
                            BODY_SIZE,
                            TextSpan::new(text.as_str(), WHITE),
                        )),
                        Some(op) => block.push(highlight_piece(text, x, base, pw, *op)),
                    }
                    x += pw;
                }
                caret_at = Point::new(x, line_top);
            }

            if !state.words.is_complete(elapsed) {
                let bottom = baseline_in(caret_at.y, BODY_LINE, BODY_SIZE) + BODY_SIZE * 0.22;
                let x = caret_at.x + 2.0;
                block.push(
                    ShapeNode::rect(Rect::new(x, bottom - 16.0, x + 2.0, bottom))
                        .fill(PURPLE_400)
                        .opacity(blink(f as f64, 0.2, 1.0, 0.3)),
                );
            }

            body.push(block);
            y = text_top + (state.full_lines as f64) * BODY_LINE + BLOCK_GAP;
        }

        GroupNode::new().with(card_shape(card)).with(body)
    }

    fn entity_bar(&self, f: u64) -> GroupNode {
        let h = self.config.canvas.h();
        let bar = Rect::new(PAD, h - PAD - ENTITY_BAR_H, self.config.canvas.w() - PAD, h - PAD);
        let mid = bar.center().y;
        let mut g = GroupNode::new().with(card_shape(bar));

        let x0 = bar.x0 + 1.0 + 16.0;
        let tracking = 10.0 * 0.1;
        g.push(
            TextNode::new(
                Point::new(x0, mid + 3.5),
                FontFamily::Sans,
                10.0,
                TextSpan::new("ENTITIES", TEXT_TERTIARY),
            )
            .weight(600)
            .tracking(tracking),
        );
        let label = TextStyle::new(FontFamily::Sans, 10.0)
            .weight(600)
            .tracking(tracking);
        let mut x = x0 + measure("ENTITIES", &label) + 4.0 + 8.0;

        let tag_text = TextStyle::new(FontFamily::Sans, 11.0).weight(500);
        for &(text, _, delay) in &ENTITIES {
            let tag_w = measure(text, &tag_text) + 2.0 * (8.0 + 1.0);
            let tag = Rect::new(x, mid - 9.5, x + tag_w, mid + 9.5);
            let (opacity, scale) = entity_tag_pose(f as f64, delay);
            let c = tag.center();
            let transform = Affine::translate(c.to_vec2())
                * Affine::scale(scale)
                * Affine::translate(-c.to_vec2());
            g.push(
                GroupNode::new()
                    .opacity(opacity)
                    .transform(transform)
                    .with(
                        ShapeNode::rounded(tag.inflate(-0.5, -0.5), 6.0)
                            .fill(purple_wash(0.12))
                            .stroke(purple_wash(0.2), 1.0),
                    )
                    .with(
                        TextNode::new(
                            Point::new(c.x, mid + 4.0),
                            FontFamily::Sans,
                            11.0,
                            TextSpan::new(text, PURPLE_400),
                        )
                        .anchor(TextAnchor::Middle)
                        .weight(500),
                    ),
            );
            x += tag_w + 8.0;
        }
        g
    }
}

impl Default for PerformanceBento {
    fn default() -> Self {
        Self::new()
    }
}

fn card_shape(rect: Rect) -> ShapeNode {
    ShapeNode::rounded(rect.inflate(-0.5, -0.5), CARD_RADIUS - 0.5)
        .fill(CARD)
        .stroke(BORDER_SUBTLE, 1.0)
}

fn highlight_piece(text: &str, x: f64, baseline: f64, width: f64, opacity: f64) -> GroupNode {
    let bx = Rect::new(
        x + 1.0,
        baseline - BODY_SIZE * 0.9 - 2.0,
        x + width - 1.0,
        baseline + BODY_SIZE * 0.26 + 2.0,
    );
    GroupNode::new()
        .opacity(opacity)
        .with(
            ShapeNode::rounded(bx.inflate(-0.5, -0.5), 4.0)
                .fill(purple_wash(0.15))
                .stroke(purple_wash(0.3), 1.0),
        )
        .with(
            TextNode::new(
                Point::new(x + HIGHLIGHT_SIDE, baseline),
                FontFamily::Sans,
                BODY_SIZE,
                TextSpan::new(text, PURPLE_400),
            )
            .weight(500),
        )
}

impl Composition for PerformanceBento {
    fn id(&self) -> &str {
        Self::ID
    }

    fn video_config(&self) -> VideoConfig {
        self.config
    }

    fn scene(&self, loop_frame: u64) -> Scene {
        let live = self.is_live(loop_frame);
        let mut scene = Scene::new(self.config.canvas, BENTO_BG);
        scene.push(self.header(loop_frame, live));
        scene.push(self.waveform_card(loop_frame, live));
        scene.push(self.transcript_card(loop_frame));
        scene.push(self.entity_bar(loop_frame));
        scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/performance.rs"]
mod tests;
