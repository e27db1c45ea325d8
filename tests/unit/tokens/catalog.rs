use super::*;

#[test]
fn token_names_are_unique_and_prefixed() {
    let mut seen = std::collections::HashSet::new();
    for t in all_tokens() {
        assert!(t.name.starts_with("--"), "{}", t.name);
        assert!(seen.insert(t.name), "duplicate token {}", t.name);
    }
}

#[test]
fn group_sizes_follow_the_tables() {
    let sizes: Vec<usize> = PRIMITIVE_COLORS.iter().map(|g| g.tokens.len()).collect();
    assert_eq!(sizes, vec![12, 7, 7, 3, 3, 3, 2]);
    assert_eq!(SEMANTIC_COLORS.map(|g| g.tokens.len()), [10, 9, 11]);
    assert_eq!(SPACING.tokens.len(), 17);
    assert_eq!(RADII.tokens.len(), 8);
    assert_eq!(all_groups().count(), 19);
}

#[test]
fn pixel_tokens_agree_with_their_values() {
    for t in SPACING.tokens.iter().chain(RADII.tokens) {
        let px = t.px.unwrap();
        assert_eq!(t.value, format!("{px}px"));
    }
}

#[test]
fn find_looks_up_by_full_name() {
    assert_eq!(find("--color-purple-400").map(|t| t.value), Some("#947AFC"));
    assert_eq!(
        find("--border-card").and_then(|t| t.reference),
        Some("--border-primary")
    );
    assert!(find("color-purple-400").is_none());
}

#[test]
fn overline_is_the_only_mono_uppercase_preset() {
    let special: Vec<&str> = TYPE_PRESETS
        .iter()
        .filter(|p| p.mono && p.upper)
        .map(|p| p.name)
        .collect();
    assert_eq!(special, vec!["overline"]);
    assert_eq!(TYPE_PRESETS[0].size_px, 80);
}
