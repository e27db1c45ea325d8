use super::*;
use crate::tokens::clipboard::{InMemoryClipboard, UnavailableClipboard};

#[test]
fn page_ids_round_trip_and_fall_back_to_colors() {
    for p in PageId::ALL {
        assert_eq!(PageId::from_id(p.id()), p);
    }
    assert_eq!(PageId::from_id("nope"), PageId::Colors);
    assert_eq!(PageId::ALL.iter().filter(|p| p.is_token_page()).count(), 5);
    assert_eq!(PageId::Badges.label(), "Badges & Tags");
}

#[test]
fn selecting_pages_swaps_the_groups() {
    let mut v = ViewerState::new();
    assert_eq!(v.page(), PageId::Colors);
    assert_eq!(v.visible_groups().len(), 10);

    v.select_page("spacing");
    let titles: Vec<&str> = v.visible_groups().iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["Spacing Scale", "Border Radius"]);

    v.select_page("buttons");
    assert!(v.visible_groups().is_empty());

    v.select_page("unknown");
    assert_eq!(v.page(), PageId::Colors);
}

#[test]
fn search_narrows_the_active_page() {
    let mut v = ViewerState::new();
    v.set_search("Error");
    let groups = v.visible_groups();
    let titles: Vec<&str> = groups.iter().map(|g| g.title).collect();
    assert_eq!(titles, vec!["Text", "Border"]);

    v.select_page("typography");
    v.set_search("heading");
    assert!(v.visible_groups().is_empty());
    assert_eq!(v.visible_presets().len(), 4);
}

#[test]
fn copy_shows_the_badge_for_a_while() {
    let t0 = Instant::now();
    let mut v = ViewerState::new();
    let mut cb = InMemoryClipboard::new();

    assert!(v.copy("--space-2", &mut cb, t0));
    assert_eq!(cb.contents(), Some("var(--space-2)"));
    assert_eq!(v.copied_token(t0 + Duration::from_millis(1199)), Some("--space-2"));
    assert_eq!(v.copied_token(t0 + COPY_ACK), None);
}

#[test]
fn later_copy_replaces_the_badge() {
    let t0 = Instant::now();
    let mut v = ViewerState::new();
    let mut cb = InMemoryClipboard::new();
    v.copy("--a", &mut cb, t0);
    let t1 = t0 + Duration::from_millis(1000);
    v.copy("--b", &mut cb, t1);

    let t2 = t0 + Duration::from_millis(1500);
    assert_eq!(v.copied_token(t2), Some("--b"));
    v.tick(t1 + COPY_ACK);
    assert_eq!(v.copied_token(t1), None);
}

#[test]
fn failed_copy_shows_no_badge() {
    let t0 = Instant::now();
    let mut v = ViewerState::new();
    assert!(!v.copy("--a", &mut UnavailableClipboard, t0));
    assert_eq!(v.copied_token(t0), None);
}

#[test]
fn preview_plays_one_keyframe_then_rests() {
    let t0 = Instant::now();
    let mut v = ViewerState::new();
    v.play_preview(Keyframe::FadeInUp, t0);

    assert_eq!(v.playing(t0), Some(Keyframe::FadeInUp));
    assert_eq!(v.preview_pose(Keyframe::FadeInUp, t0).opacity, 0.0);
    assert_eq!(v.preview_pose(Keyframe::ScaleIn, t0), Pose::REST);

    v.play_preview(Keyframe::ScaleIn, t0 + Duration::from_millis(100));
    assert_eq!(v.playing(t0 + Duration::from_millis(100)), Some(Keyframe::ScaleIn));
    assert_eq!(v.preview_pose(Keyframe::FadeInUp, t0), Pose::REST);

    let later = t0 + Duration::from_millis(100) + PREVIEW;
    assert_eq!(v.playing(later), None);
    v.tick(later);
    assert_eq!(v.preview_pose(Keyframe::ScaleIn, later), Pose::REST);
}
