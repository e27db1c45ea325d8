use super::*;
use crate::scene::model::{Node, Paint};

fn card(scene: &Scene) -> &GroupNode {
    match &scene.nodes[0] {
        Node::Group(g) => g,
        _ => panic!("card group expected"),
    }
}

fn plain(spans: &[TextSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn loop_length_is_derived_from_the_script() {
    let comp = IntegrationTerminal::new();
    assert_eq!(comp.command().len(), 103);
    assert_eq!(comp.command().typing_end(), 309);
    assert_eq!(comp.response().start, 349);
    assert_eq!(comp.response().end_frame(), 439);
    assert_eq!(comp.video_config().duration, 619);
}

#[test]
fn command_breaks_at_continuations() {
    let comp = IntegrationTerminal::new();
    let lines = comp.command_lines(comp.command().typing_end());
    assert_eq!(lines.len(), 3);
    assert_eq!(plain(&lines[0]), "$ curl -X POST gladia.com/v2/transcription \\");
    assert_eq!(plain(&lines[1]), "  -H \"x-gladia-key: sk-••••••••\" \\");
    assert_eq!(plain(&lines[2]), "  -F audio=@meeting.mp3");
    assert_eq!(lines[0][0].fill, GREEN_500);
    assert_eq!(lines[0][2].fill, PURPLE_400);
}

#[test]
fn partial_command_keeps_classes() {
    let comp = IntegrationTerminal::new();
    // 9 characters: "$ curl -X"
    let lines = comp.command_lines(27);
    assert_eq!(lines.len(), 1);
    assert_eq!(plain(&lines[0]), "$ curl -X");
    let fills: Vec<Color> = lines[0].iter().map(|s| s.fill).collect();
    assert_eq!(fills, vec![GREEN_500, TEXT_BRIGHT, PURPLE_400]);
}

#[test]
fn only_inner_key_lines_get_commas() {
    let commas: Vec<bool> = (0..RESPONSE.len())
        .map(|i| response_spans(i).last().is_some_and(|s| s.text == ","))
        .collect();
    assert_eq!(commas, vec![false, true, true, true, false, false]);
    assert_eq!(plain(&response_spans(2)), "  \"duration\": 184.2,");
    assert_eq!(plain(&response_spans(5)), "}");
    assert!(response_spans(6).is_empty());
}

#[test]
fn caret_shows_while_typing_only() {
    let comp = IntegrationTerminal::new();
    let has_caret = |f: u64| {
        card(&comp.scene(f))
            .children
            .iter()
            .any(|n| matches!(n, Node::Shape(s) if s.fill == Paint::Solid(PURPLE_400)))
    };
    assert!(has_caret(0));
    assert!(has_caret(308));
    assert!(!has_caret(309));
}

#[test]
fn response_block_starts_after_delay() {
    let comp = IntegrationTerminal::new();
    let block = |f: u64| -> Option<GroupNode> {
        card(&comp.scene(f)).children.iter().skip(2).find_map(|n| match n {
            Node::Group(g) if g.children.iter().any(|c| matches!(c, Node::Text(_))) => {
                Some(g.clone())
            }
            _ => None,
        })
    };
    assert!(block(349).is_none());
    let first = block(350).unwrap();
    // border line + one response line
    assert_eq!(first.children.len(), 2);
    let full = block(500).unwrap();
    assert_eq!(full.children.len(), 1 + RESPONSE.len());
    assert_eq!(full.opacity, 1.0);
}

#[test]
fn wraps_to_fresh_start() {
    let comp = IntegrationTerminal::new();
    let a = crate::compositions::evaluate_frame(&comp, crate::foundation::core::FrameIndex(0));
    let b = crate::compositions::evaluate_frame(&comp, crate::foundation::core::FrameIndex(619));
    assert_eq!(a, b);
}
