use super::*;

const MONO: TextStyle = TextStyle::new(FontFamily::Mono, 10.0);
const SANS: TextStyle = TextStyle::new(FontFamily::Sans, 14.0);

fn plain(_: &u8) -> RunStyle {
    RunStyle {
        text: MONO,
        inset: 0.0,
    }
}

fn boxed(style: &u8) -> RunStyle {
    RunStyle {
        text: MONO,
        inset: if *style == 1 { 10.0 } else { 0.0 },
    }
}

fn shaping_available() -> bool {
    measure("m", &MONO) > 0.0 && measure("m", &SANS) > 0.0
}

fn joined<S>(lines: &[WrappedLine<S>]) -> String {
    lines
        .iter()
        .map(|l| l.pieces.iter().map(|(t, _)| t.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn empty_text_measures_zero() {
    assert_eq!(measure("", &SANS), 0.0);
}

#[test]
fn empty_input_has_no_lines() {
    assert!(wrap_runs::<u8, _>(&[], 10.0, plain).is_empty());
}

#[test]
fn mono_advance_scales_with_length() {
    if !shaping_available() {
        return;
    }
    let two = measure("ab", &MONO);
    let four = measure("abcd", &MONO);
    assert!((four - 2.0 * two).abs() < 0.5, "{two} vs {four}");
}

#[test]
fn sans_narrow_glyphs_are_narrower() {
    if !shaping_available() {
        return;
    }
    assert!(measure("iiii", &SANS) < measure("mmmm", &SANS));
}

#[test]
fn tracking_adds_per_character() {
    if !shaping_available() {
        return;
    }
    let base = measure("abcd", &MONO);
    let tracked = measure("abcd", &MONO.tracking(1.0));
    assert!((tracked - base - 4.0).abs() < 0.5, "{base} vs {tracked}");
}

#[test]
fn heavier_weight_is_not_narrower() {
    if !shaping_available() {
        return;
    }
    let text = "The quarterly results";
    assert!(measure(text, &SANS.weight(600)) >= measure(text, &SANS) - 0.5);
}

#[test]
fn wraps_on_spaces() {
    if !shaping_available() {
        return;
    }
    let first = measure("aaa bbb", &MONO);
    let runs = vec![("aaa bbb ccc".to_string(), 0u8)];
    let lines = wrap_runs(&runs, measure("aaa bbb ", &MONO) + 1.0, plain);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].pieces, vec![("aaa bbb".to_string(), 0)]);
    assert!((lines[0].width - first).abs() < 0.5);
    assert_eq!(lines[1].pieces, vec![("ccc".to_string(), 0)]);
}

#[test]
fn styles_survive_wrapping() {
    if !shaping_available() {
        return;
    }
    let runs = vec![
        ("grew ".to_string(), 0u8),
        ("North America".to_string(), 1u8),
        (" 18%".to_string(), 0u8),
    ];
    let lines = wrap_runs(&runs, measure("North", &MONO) + 4.0, plain);
    let flat: Vec<(String, u8)> = lines.iter().flat_map(|l| l.pieces.clone()).collect();
    assert!(flat.contains(&("North".to_string(), 1)));
    assert!(flat.contains(&("America".to_string(), 1)));
    assert_eq!(joined(&lines), "grew North America 18%");
}

#[test]
fn long_word_gets_its_own_line() {
    if !shaping_available() {
        return;
    }
    let runs = vec![("a verylongword b".to_string(), 0u8)];
    let lines = wrap_runs(&runs, measure("a b", &MONO), plain);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].pieces[0].0, "verylongword");
}

#[test]
fn insets_count_against_the_line_width() {
    if !shaping_available() {
        return;
    }
    let runs = vec![("aaaa ".to_string(), 0u8), ("bbbb".to_string(), 1u8)];
    let max = measure("aaaa bbbb", &MONO) + 5.0;
    assert_eq!(wrap_runs(&runs, max, plain).len(), 1);

    let lines = wrap_runs(&runs, max, boxed);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.width <= max), "{lines:?}");
    assert!((lines[1].width - measure("bbbb", &MONO) - 20.0).abs() < 0.5);
}

#[test]
fn wrapped_lines_stay_within_width() {
    if !shaping_available() {
        return;
    }
    let text = "That's great news. Can you break down the regional performance?";
    let runs = vec![(text.to_string(), 0u8)];
    for max in [80.0, 140.0, 220.0, 446.0] {
        let lines = wrap_runs(&runs, max, |_: &u8| RunStyle {
            text: SANS,
            inset: 0.0,
        });
        assert_eq!(joined(&lines), text);
        for line in &lines {
            let widest_word = line.pieces[0].0.split(' ').count() == 1;
            assert!(line.width <= max || widest_word, "{max}: {line:?}");
            assert!((line.width - measure(&line.pieces[0].0, &SANS)).abs() < 0.01);
        }
    }
}
