use super::*;

const CANVAS: Canvas = Canvas {
    width: 16,
    height: 9,
};

#[test]
fn identical_documents_share_a_fingerprint() {
    let svg = "<svg><rect/></svg>";
    assert_eq!(fingerprint_svg(CANVAS, svg), fingerprint_svg(CANVAS, svg));
}

#[test]
fn any_byte_change_changes_the_fingerprint() {
    let a = fingerprint_svg(CANVAS, r#"<rect opacity="0.5"/>"#);
    let b = fingerprint_svg(CANVAS, r#"<rect opacity="0.6"/>"#);
    assert_ne!(a, b);
}

#[test]
fn canvas_size_is_part_of_the_fingerprint() {
    let other = Canvas {
        width: 9,
        height: 16,
    };
    assert_ne!(fingerprint_svg(CANVAS, "<svg/>"), fingerprint_svg(other, "<svg/>"));
}
