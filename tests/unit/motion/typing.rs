use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cls {
    A,
    B,
}

fn sample() -> TypedText<Cls> {
    TypedText::from_segments([("$ ", Cls::A), ("curl ", Cls::B), ("-X", Cls::A)], 3)
}

#[test]
fn twenty_chars_three_frames_each() {
    let t = TypedText::from_segments([("abcdefghijklmnopqrst", Cls::A)], 3);
    assert_eq!(t.len(), 20);
    assert_eq!(t.visible_count(45), 15);
    assert_eq!(t.visible_count(60), 20);
    assert_eq!(t.visible_count(10_000), 20);
}

#[test]
fn runs_follow_class_boundaries() {
    let t = sample();
    let runs = t.visible_runs(3 * 4);
    assert_eq!(
        runs,
        vec![
            StyledRun {
                text: "$ ".to_string(),
                class: Cls::A
            },
            StyledRun {
                text: "cu".to_string(),
                class: Cls::B
            },
        ]
    );
    assert_eq!(t.visible_text(3 * 4), "$ cu");
    assert!(t.visible_runs(0).is_empty());
}

#[test]
fn caret_disappears_when_done() {
    let t = sample();
    assert!(t.caret(0).is_some());
    assert!(t.caret(t.typing_end() - 1).is_some());
    assert!(t.caret(t.typing_end()).is_none());
    assert!(t.is_done(t.typing_end()));
}

#[test]
fn caret_blinks_between_levels() {
    let t = sample();
    assert_eq!(t.caret(1), Some(1.0));
    assert_eq!(t.caret(16), Some(0.2));
}

#[test]
fn zero_rate_is_treated_as_one() {
    let t = TypedText::from_segments([("ab", Cls::A)], 0);
    assert_eq!(t.frames_per_char(), 1);
    assert_eq!(t.visible_count(1), 1);
}

#[test]
fn line_reveal_counts_and_fades() {
    let r = LineReveal::after(100, 40, 6);
    assert_eq!(r.visible_lines(140), 0);
    assert_eq!(r.visible_lines(141), 1);
    assert_eq!(r.visible_lines(155), 2);
    assert_eq!(r.visible_lines(1000), 6);
    assert_eq!(r.block_opacity(130), 0.0);
    assert_eq!(r.block_opacity(160), 1.0);
    assert_eq!(r.line_opacity(1, 155), 0.0);
    assert_eq!(r.line_opacity(1, 165), 1.0);
    assert_eq!(r.end_frame(), 140 + 90);
}

#[test]
fn word_reveal_rate() {
    let w = WordReveal::new("The quarterly results show", 0.25);
    assert_eq!(w.word_count(), 4);
    assert_eq!(w.visible_words(-3.0), 0);
    assert_eq!(w.visible_text(7.0), "The");
    assert_eq!(w.visible_text(8.0), "The quarterly");
    assert!(w.is_complete(16.0));
    assert!(!w.is_complete(15.0));
}
