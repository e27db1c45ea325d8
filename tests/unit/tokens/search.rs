use super::*;
use crate::tokens::catalog::{PRIMITIVE_COLORS, SEMANTIC_COLORS, SPACING, TYPE_PRESETS, find};

fn token(name: &str) -> &'static Token {
    find(name).unwrap()
}

#[test]
fn empty_query_matches_everything() {
    let q = Query::new("");
    assert!(q.is_empty());
    let groups = filter_groups(PRIMITIVE_COLORS.iter(), &q);
    assert_eq!(groups.len(), 7);
    assert_eq!(groups[0].tokens.len(), 12);
}

#[test]
fn whitespace_query_is_matched_literally() {
    let q = Query::new(" ");
    assert!(!q.is_empty());
    assert!(!q.matches(token("--color-purple-400")));
    assert!(q.matches(token("--text-brand")));
    assert!(q.matches(token("--bg-glass")));
}

#[test]
fn query_is_lowercased_before_matching() {
    let q = Query::new("#947AFC");
    assert!(q.matches(token("--color-purple-400")));
    assert!(q.matches(token("--text-brand")));
    assert!(!q.matches(token("--color-purple-300")));
}

#[test]
fn usage_notes_match_case_insensitively() {
    let q = Query::new("focus");
    assert!(q.matches(token("--border-focus")));
    let q = Query::new("glass overlay");
    assert!(q.matches(token("--bg-glass")));
}

#[test]
fn groups_without_matches_are_omitted() {
    let q = Query::new("purple");
    let titles: Vec<&str> = filter_groups(PRIMITIVE_COLORS.iter(), &q)
        .iter()
        .map(|g| g.title)
        .collect();
    assert_eq!(titles, vec!["Purple"]);

    let none = filter_groups(SEMANTIC_COLORS.iter().chain([&SPACING]), &Query::new("zzz"));
    assert!(none.is_empty());
}

#[test]
fn presets_match_on_name_only() {
    let q = Query::new("body");
    let names: Vec<&str> = filter_presets(TYPE_PRESETS.iter(), &q)
        .iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["body-lg", "body-md", "body-sm", "body-xs"]);
    assert!(filter_presets(TYPE_PRESETS.iter(), &Query::new("80px")).is_empty());
}
