//! Tests for SuggestionList

use super::*;
use crate::candidate::CandidateId;
use proptest::prelude::*;

fn people(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| Candidate::new(Some(CandidateId::Number(i as i64)), format!("person {}", i)))
        .collect()
}

fn open_list(n: usize) -> SuggestionList {
    let mut list = SuggestionList::new(4);
    list.replace(people(n));
    list
}

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn test_new_list_is_closed_and_empty() {
    let list = SuggestionList::new(4);
    assert!(!list.is_open());
    assert!(list.is_empty());
    assert!(list.active_index().is_none());
    assert!(list.active_item().is_none());
}

#[test]
fn test_replace_with_items_opens_without_highlight() {
    let list = open_list(2);
    assert!(list.is_open());
    assert_eq!(list.len(), 2);
    assert!(list.active_index().is_none());
}

#[test]
fn test_replace_with_nothing_closes() {
    let mut list = open_list(2);
    list.replace(Vec::new());
    assert!(!list.is_open());
    assert!(list.is_empty());
}

#[test]
fn test_replace_resets_highlight_and_scroll() {
    let mut list = open_list(8);
    for _ in 0..6 {
        list.move_next();
    }
    assert_eq!(list.viewport().offset, 2);

    list.replace(people(3));
    assert!(list.active_index().is_none());
    assert_eq!(list.viewport().offset, 0);
}

#[test]
fn test_move_next_from_none_starts_at_zero() {
    let mut list = open_list(3);
    assert!(list.move_next());
    assert_eq!(list.active_index(), Some(0));
}

#[test]
fn test_move_next_stops_at_last() {
    let mut list = open_list(2);
    list.move_next();
    list.move_next();
    assert_eq!(list.active_index(), Some(1));
    assert!(!list.move_next());
    assert_eq!(list.active_index(), Some(1));
}

#[test]
fn test_move_previous_stops_at_zero() {
    let mut list = open_list(3);
    list.move_next();
    assert!(!list.move_previous());
    assert_eq!(list.active_index(), Some(0));
}

#[test]
fn test_move_previous_without_highlight_is_noop() {
    let mut list = open_list(3);
    assert!(!list.move_previous());
    assert!(list.active_index().is_none());
}

#[test]
fn test_navigation_requires_open() {
    let mut list = open_list(3);
    list.close();
    assert!(!list.move_next());
    assert!(list.active_index().is_none());
}

#[test]
fn test_navigation_on_empty_list() {
    let mut list = SuggestionList::new(4);
    list.reopen();
    assert!(!list.move_next());
    assert!(!list.move_previous());
    assert!(list.active_index().is_none());
}

#[test]
fn test_keyboard_navigation_scrolls_viewport() {
    let mut list = open_list(6);
    for _ in 0..5 {
        list.move_next();
    }
    assert_eq!(list.active_index(), Some(4));
    assert_eq!(list.viewport().offset, 1);

    for _ in 0..4 {
        list.move_previous();
    }
    assert_eq!(list.active_index(), Some(0));
    assert_eq!(list.viewport().offset, 0);
}

#[test]
fn test_hover_sets_index_without_scrolling() {
    let mut list = open_list(6);
    assert!(list.hover(5));
    assert_eq!(list.active_index(), Some(5));
    assert_eq!(list.viewport().offset, 0);
}

#[test]
fn test_hover_out_of_range_is_ignored() {
    let mut list = open_list(2);
    assert!(!list.hover(2));
    assert!(list.active_index().is_none());
}

#[test]
fn test_close_keeps_items_and_highlight() {
    let mut list = open_list(3);
    list.move_next();
    list.close();
    assert!(!list.is_open());
    assert_eq!(list.len(), 3);
    assert_eq!(list.active_index(), Some(0));

    assert!(list.reopen());
    assert!(list.is_open());
    assert_eq!(list.active_index(), Some(0));
}

#[test]
fn test_clear_drops_everything() {
    let mut list = open_list(3);
    list.move_next();
    list.clear();
    assert!(!list.is_open());
    assert!(list.is_empty());
    assert!(list.active_index().is_none());
    assert!(!list.reopen());
}

#[test]
fn test_active_key_uses_identity_when_present() {
    let mut list = SuggestionList::new(4);
    list.replace(vec![
        Candidate::new(None, "anon"),
        Candidate::new(Some(CandidateId::from("u-2")), "Bea"),
    ]);

    list.move_next();
    assert_eq!(list.active_key(), Some(ItemKey::Position(0)));
    list.move_next();
    let key = list.active_key().unwrap();
    assert_eq!(key, ItemKey::Id(CandidateId::from("u-2")));
    assert_eq!(list.position_of(&key), Some(1));
}

#[test]
fn test_position_of_follows_reordered_set() {
    let mut list = open_list(3);
    let key = ItemKey::Id(CandidateId::Number(2));
    assert_eq!(list.position_of(&key), Some(2));

    let mut reordered = people(3);
    reordered.reverse();
    list.replace(reordered);
    assert_eq!(list.position_of(&key), Some(0));
}

// =========================================================================
// Property Tests
// =========================================================================

#[derive(Debug, Clone)]
enum Nav {
    Next,
    Previous,
    Hover(usize),
    Close,
    Reopen,
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![
        Just(Nav::Next),
        Just(Nav::Previous),
        (0usize..12).prop_map(Nav::Hover),
        Just(Nav::Close),
        Just(Nav::Reopen),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The highlight never leaves None or [0, len-1], and the highlighted row
    // is on screen after every keyboard move
    #[test]
    fn prop_active_index_stays_in_bounds(
        len in 0usize..10,
        ops in prop::collection::vec(nav_strategy(), 0..40),
    ) {
        let mut list = open_list(len);
        for op in ops {
            let keyboard = matches!(op, Nav::Next | Nav::Previous);
            let moved = match op {
                Nav::Next => list.move_next(),
                Nav::Previous => list.move_previous(),
                Nav::Hover(i) => list.hover(i),
                Nav::Close => { list.close(); false }
                Nav::Reopen => list.reopen(),
            };

            if let Some(i) = list.active_index() {
                prop_assert!(i < len);
                if keyboard && moved {
                    prop_assert!(list.viewport().visible_range(len).contains(&i));
                }
            }
        }
    }

    #[test]
    fn prop_repeated_next_at_end_is_noop(len in 1usize..10, extra in 1usize..5) {
        let mut list = open_list(len);
        for _ in 0..len {
            list.move_next();
        }
        for _ in 0..extra {
            prop_assert!(!list.move_next());
        }
        prop_assert_eq!(list.active_index(), Some(len - 1));
    }

    #[test]
    fn prop_repeated_previous_at_zero_is_noop(len in 1usize..10, extra in 1usize..5) {
        let mut list = open_list(len);
        list.move_next();
        for _ in 0..extra {
            prop_assert!(!list.move_previous());
        }
        prop_assert_eq!(list.active_index(), Some(0));
    }
}
