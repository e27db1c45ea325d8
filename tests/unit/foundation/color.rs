use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::parse_hex("#947AFC").unwrap(), Color::rgb(0x94, 0x7a, 0xfc));
    assert_eq!(Color::parse_hex("fff").unwrap(), Color::rgb(255, 255, 255));
    let c = Color::parse_hex("#00000080").unwrap();
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
}

#[test]
fn fade_multiplies_and_clamps_alpha() {
    let c = Color::rgba(1, 2, 3, 0.5).fade(0.5);
    assert!((c.a - 0.25).abs() < 1e-12);
    assert_eq!(Color::rgb(1, 2, 3).with_alpha(4.0).a, 1.0);
}

#[test]
fn serde_uses_hex_strings() {
    let s = serde_json::to_string(&Color::rgb(8, 145, 178)).unwrap();
    assert_eq!(s, "\"#0891b2\"");
    let back: Color = serde_json::from_str(&s).unwrap();
    assert_eq!(back, Color::rgb(8, 145, 178));
    let arr: Color = serde_json::from_str("[3, 3, 8]").unwrap();
    assert_eq!(arr.to_hex(), "#030308");
}
