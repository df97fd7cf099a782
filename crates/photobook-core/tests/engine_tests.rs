use photobook_core::*;
use std::sync::Arc;

fn create_test_book(page_count: usize, bookmarks: Vec<BookmarkSpec>) -> Book {
    let options = BookOptions {
        page_count,
        bookmarks,
        ..Default::default()
    };
    options.build().unwrap()
}

fn spread_engine(page_count: usize) -> Engine<FixedMode> {
    create_test_book(page_count, Vec::new()).into_engine(FixedMode(LayoutMode::Spread))
}

fn single_engine(page_count: usize) -> Engine<FixedMode> {
    create_test_book(page_count, Vec::new()).into_engine(FixedMode(LayoutMode::Single))
}

fn page(engine: &Engine<FixedMode>, index: usize) -> PageRef {
    engine.pages().get(index).unwrap().clone()
}

#[test]
fn test_engine_starts_on_first_page() {
    let engine = spread_engine(132);
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.last_index(), 131);
    assert_eq!(engine.boundary(), Boundary::First);
}

#[test]
fn test_jump_to_odd_index_rounds_up() {
    let mut engine = spread_engine(132);
    engine.jump_to(5);
    assert_eq!(engine.current_index(), 6);

    let spread = engine.compute_spread();
    assert_eq!(spread.left(), Some(&page(&engine, 5)));
    assert_eq!(spread.right(), Some(&page(&engine, 6)));
}

#[test]
fn test_jump_to_first_page() {
    let mut engine = spread_engine(132);
    engine.jump_to(40);
    engine.jump_to(0);

    let spread = engine.compute_spread();
    assert_eq!(spread.left(), None);
    assert_eq!(spread.right(), Some(&page(&engine, 0)));
    assert_eq!(engine.display_page_number(), 1);
}

#[test]
fn test_jump_to_last_page() {
    let mut engine = spread_engine(132);
    engine.jump_to(131);
    assert_eq!(engine.current_index(), 131);

    let spread = engine.compute_spread();
    assert_eq!(spread.left(), Some(&page(&engine, 131)));
    assert_eq!(spread.right(), None);
    assert_eq!(engine.display_page_number(), 132);
    assert_eq!(engine.boundary(), Boundary::Last);
}

#[test]
fn test_jump_to_parse_failure_resets() {
    let mut engine = spread_engine(132);
    engine.jump_to(40);
    engine.jump_to("abc");
    assert_eq!(engine.current_index(), 0);

    engine.jump_to(40);
    engine.jump_to("");
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_jump_to_text_input() {
    let mut engine = spread_engine(132);
    engine.jump_to("17");
    assert_eq!(engine.current_index(), 18);

    engine.jump_to(" 20 ");
    assert_eq!(engine.current_index(), 20);
}

#[test]
fn test_jump_to_clamps_out_of_range() {
    let mut engine = spread_engine(132);
    engine.jump_to(1000);
    assert_eq!(engine.current_index(), 131);

    engine.jump_to(-12);
    assert_eq!(engine.current_index(), 0);

    engine.jump_to(i64::MAX);
    assert_eq!(engine.current_index(), 131);
}

#[test]
fn test_jump_to_is_idempotent() {
    for mode in [LayoutMode::Spread, LayoutMode::Single] {
        for request in [0i64, 1, 5, 64, 129, 130, 131, 200, -3] {
            let mut engine = create_test_book(132, Vec::new()).into_engine(FixedMode(mode));
            let once = engine.jump_to(request);
            let twice = engine.jump_to(request);
            assert_eq!(once, twice, "mode {:?}, request {}", mode, request);
        }
    }
}

#[test]
fn test_spread_pairs_adjacent_pages() {
    let mut engine = spread_engine(132);
    for index in 0..=131usize {
        engine.jump_to(index);
        let current = engine.current_index();
        let spread = engine.compute_spread();
        match (spread.left(), spread.right()) {
            (Some(left), Some(right)) => {
                assert_eq!(left, &page(&engine, current - 1));
                assert_eq!(right, &page(&engine, current));
            }
            (None, Some(_)) => assert_eq!(current, 0),
            (Some(_), None) => assert_eq!(current, 131),
            (None, None) => panic!("Both slots hidden at {}", current),
        }
    }
}

#[test]
fn test_parity_invariant_in_spread_mode() {
    for page_count in [1usize, 2, 3, 4, 7, 10, 132, 133] {
        let mut engine = spread_engine(page_count);
        let last = engine.last_index();
        let check = |engine: &Engine<FixedMode>| {
            let index = engine.current_index();
            assert!(
                index % 2 == 0 || (index == last && last % 2 == 1),
                "index {} breaks parity with {} pages",
                index,
                page_count
            );
        };

        for request in 0..=page_count as i64 + 2 {
            engine.jump_to(request);
            check(&engine);
        }

        engine.jump_to(0);
        for _ in 0..page_count {
            engine.navigate(Direction::Forward);
            check(&engine);
        }
        for _ in 0..page_count {
            engine.navigate(Direction::Backward);
            check(&engine);
        }
    }
}

#[test]
fn test_navigate_is_noop_at_boundaries() {
    let mut engine = spread_engine(132);
    let before = engine.state();
    assert_eq!(engine.navigate(Direction::Backward), before);

    engine.jump_to(131);
    let before = engine.state();
    assert_eq!(engine.navigate(Direction::Forward), before);

    let mut engine = single_engine(132);
    let before = engine.state();
    assert_eq!(engine.navigate(Direction::Backward), before);
    engine.jump_to(131);
    let before = engine.state();
    assert_eq!(engine.navigate(Direction::Forward), before);
}

#[test]
fn test_navigate_backward_from_two_snaps_to_first() {
    for page_count in [4usize, 9, 132] {
        let mut engine = spread_engine(page_count);
        engine.jump_to(2);
        engine.navigate(Direction::Backward);
        assert_eq!(engine.current_index(), 0);
    }
}

#[test]
fn test_navigate_forward_snaps_to_last() {
    let mut engine = spread_engine(132);
    engine.jump_to(130);
    engine.navigate(Direction::Forward);
    assert_eq!(engine.current_index(), 131);

    // Back from the lone final page lands on the previous spread
    engine.navigate(Direction::Backward);
    assert_eq!(engine.current_index(), 130);
}

#[test]
fn test_full_walk_visits_every_page_in_spread_mode() {
    let mut engine = spread_engine(132);
    let mut seen = vec![false; 132];
    loop {
        for page in engine.compute_spread().pages() {
            let index = engine.pages().iter().position(|p| p == page).unwrap();
            seen[index] = true;
        }
        let before = engine.current_index();
        engine.navigate(Direction::Forward);
        if engine.current_index() == before {
            break;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_single_mode_steps_by_one() {
    let mut engine = single_engine(132);
    engine.navigate(Direction::Forward);
    assert_eq!(engine.current_index(), 1);
    engine.navigate(Direction::Forward);
    assert_eq!(engine.current_index(), 2);
    engine.navigate(Direction::Backward);
    assert_eq!(engine.current_index(), 1);

    assert_eq!(engine.compute_spread(), Spread::Single(&page(&engine, 1)));
    assert_eq!(engine.display_page_number(), 2);
}

#[test]
fn test_single_mode_jump_keeps_odd_index() {
    let mut engine = single_engine(132);
    engine.jump_to(5);
    assert_eq!(engine.current_index(), 5);
    assert_eq!(engine.display_page_number(), 6);
}

#[test]
fn test_display_page_number_spread_middle() {
    let mut engine = spread_engine(132);
    engine.jump_to(10);
    assert_eq!(engine.display_page_number(), 10);
}

#[test]
fn test_click_zone_maps_to_navigation() {
    let mut engine = spread_engine(132);
    engine.click_zone(Side::Right);
    assert_eq!(engine.current_index(), 2);
    engine.click_zone(Side::Right);
    assert_eq!(engine.current_index(), 4);
    engine.click_zone(Side::Left);
    assert_eq!(engine.current_index(), 2);

    let mut engine = single_engine(132);
    engine.click_zone(Side::Right);
    assert_eq!(engine.current_index(), 1);
    engine.click_zone(Side::Left);
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_mode_switch_keeps_index() {
    let viewport = Arc::new(ViewportMode::with_default_breakpoint(400.0));
    let mut engine = create_test_book(132, Vec::new()).into_engine(Arc::clone(&viewport));

    engine.navigate(Direction::Forward);
    engine.navigate(Direction::Forward);
    engine.navigate(Direction::Forward);
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.state().mode, LayoutMode::Single);

    // Widen the window: index stays, interpretation changes
    viewport.set_width(1280.0);
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.state().mode, LayoutMode::Spread);
    let spread = engine.compute_spread();
    assert_eq!(spread.left(), Some(engine.pages().get(2).unwrap()));
    assert_eq!(spread.right(), Some(engine.pages().get(3).unwrap()));

    // The first spread-mode step normalises the odd index before moving
    engine.navigate(Direction::Forward);
    assert_eq!(engine.current_index(), 6);
}

#[test]
fn test_mode_switch_backward_from_odd_index() {
    let viewport = Arc::new(ViewportMode::with_default_breakpoint(400.0));
    let mut engine = create_test_book(132, Vec::new()).into_engine(Arc::clone(&viewport));
    engine.jump_to(5);

    viewport.set_width(1024.0);
    engine.navigate(Direction::Backward);
    assert_eq!(engine.current_index(), 4);
}

#[test]
fn test_breakpoint_is_inclusive() {
    let viewport = ViewportMode::with_default_breakpoint(768.0);
    assert_eq!(viewport.current_mode(), LayoutMode::Single);
    viewport.set_width(769.0);
    assert_eq!(viewport.current_mode(), LayoutMode::Spread);
}

#[test]
fn test_jump_to_bookmark() {
    let book = create_test_book(
        132,
        vec![
            BookmarkSpec::new(1, 2, "Cover"),
            BookmarkSpec::new(3, 10, "Spring"),
            BookmarkSpec::new(12, 30, "Summer"),
        ],
    );
    let mut engine = book.into_engine(FixedMode(LayoutMode::Spread));

    // Start page 3 -> index 2
    let spring = engine.bookmarks().get(1).unwrap().clone();
    engine.jump_to_bookmark(&spring);
    assert_eq!(engine.current_index(), 2);

    // Start page 12 -> index 11 -> rounded to 12 in spread mode
    engine.jump_to_bookmark_at(2);
    assert_eq!(engine.current_index(), 12);

    assert_eq!(engine.jump_to_bookmark_at(9), None);
    assert_eq!(engine.current_index(), 12);
}

#[test]
fn test_jump_to_bookmark_single_mode() {
    let book = create_test_book(132, vec![BookmarkSpec::new(12, 30, "Summer")]);
    let mut engine = book.into_engine(FixedMode(LayoutMode::Single));
    engine.jump_to_bookmark_at(0);
    assert_eq!(engine.current_index(), 11);
}

#[test]
fn test_view_reports_active_bookmarks() {
    let book = create_test_book(
        132,
        vec![
            BookmarkSpec::new(3, 10, "Spring"),
            BookmarkSpec::new(8, 20, "Overlap"),
            BookmarkSpec::new(50, 60, "Autumn"),
        ],
    );
    let mut engine = book.into_engine(FixedMode(LayoutMode::Spread));

    engine.jump_to(8);
    let view = engine.view();
    assert_eq!(view.active_bookmarks, vec![0, 1]);
    assert_eq!(view.boundary, Boundary::Middle);
    assert!(view.can_go_backward);
    assert!(view.can_go_forward);
    assert_eq!(view.total_pages, 132);

    let labels: Vec<&str> = engine.active_bookmarks().iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["Spring", "Overlap"]);

    engine.jump_to(0);
    let view = engine.view();
    assert!(view.active_bookmarks.is_empty());
    assert!(!view.can_go_backward);
}

#[test]
fn test_one_page_book() {
    let mut engine = spread_engine(1);
    assert_eq!(engine.boundary(), Boundary::First);
    engine.navigate(Direction::Forward);
    engine.jump_to(3);
    assert_eq!(engine.current_index(), 0);

    let spread = engine.compute_spread();
    assert_eq!(spread.left(), None);
    assert_eq!(spread.right(), Some(&page(&engine, 0)));

    let view = engine.view();
    assert!(!view.can_go_backward);
    assert!(!view.can_go_forward);
}

#[test]
fn test_odd_page_count_forward_walk() {
    // 7 pages: last index 6 is even, so every step is exactly two
    let mut engine = spread_engine(7);
    let mut visited = vec![engine.current_index()];
    for _ in 0..5 {
        engine.navigate(Direction::Forward);
        visited.push(engine.current_index());
    }
    assert_eq!(visited, vec![0, 2, 4, 6, 6, 6]);
}

#[test]
fn test_prefetch_candidates_follow_mode() {
    let mut engine = spread_engine(132);
    engine.jump_to(10);
    assert_eq!(engine.prefetch_candidates(1), vec![11, 12, 7, 8]);

    let mut engine = single_engine(132);
    engine.jump_to(10);
    assert_eq!(engine.prefetch_candidates(2), vec![11, 9, 12, 8]);
}

#[test]
fn test_shared_engine_serialises_calls() {
    let engine = SharedEngine::new(spread_engine(132));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                for _ in 0..10 {
                    engine.navigate(Direction::Forward);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // 40 steps of two from 0 reach 80
    assert_eq!(engine.state().current_index, 80);
    engine.jump_to("abc");
    assert_eq!(engine.state().current_index, 0);
}

#[test]
fn test_displayed_indices_follow_spread() {
    let mut engine = spread_engine(132);
    assert_eq!(engine.displayed_indices(), vec![0]);

    engine.jump_to(5);
    assert_eq!(engine.displayed_indices(), vec![5, 6]);

    engine.jump_to(131);
    assert_eq!(engine.displayed_indices(), vec![131]);
}
