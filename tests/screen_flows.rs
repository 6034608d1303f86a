//! End-to-end screen flows over the embedded catalog.
//!
//! These tests drive the public event API exactly as the line shell does:
//! one event at a time against an [`AppState`], checking the state and the
//! computed view models after each step.

use bookstall::ui::ScreenView;
use bookstall::{
    handle_event, initialize, Action, AppState, Config, Event, Screen, SearchField,
};

fn fresh_state() -> AppState {
    initialize(&Config::default()).unwrap()
}

/// Applies one event, asserting it produced no host actions.
fn apply(state: &mut AppState, event: Event) -> bool {
    let (redraw, actions) = handle_event(state, &event).unwrap();
    assert!(actions.is_empty(), "unexpected actions for {event:?}");
    redraw
}

#[test]
fn browsing_pages_through_the_whole_catalog() {
    let mut state = fresh_state();

    assert_eq!(state.screen, Screen::Browse);
    assert_eq!(state.visible.len(), 6);
    assert_eq!(state.visible[0].id, "moby-dick");
    assert_eq!(state.remaining(), 10);

    assert!(apply(&mut state, Event::ShowMore));
    assert_eq!(state.visible.len(), 12);

    assert!(apply(&mut state, Event::ShowMore));
    assert_eq!(state.visible.len(), 16);
    assert_eq!(state.remaining(), 0);

    // Nothing left to load, so the event no longer redraws.
    assert!(!apply(&mut state, Event::ShowMore));
    assert_eq!(state.visible.len(), 16);
}

#[test]
fn opening_and_closing_a_book_detail() {
    let mut state = fresh_state();

    apply(&mut state, Event::MoveDown);
    apply(&mut state, Event::MoveDown);
    assert!(apply(&mut state, Event::Select));

    assert_eq!(state.screen, Screen::Detail);
    assert_eq!(state.active_book.as_ref().unwrap().id, "frankenstein");

    let view = state.compute_view(24, 80);
    match view.body {
        ScreenView::Detail(detail) => {
            assert_eq!(detail.title, "Frankenstein");
            assert_eq!(detail.subtitle, "Mary Shelley (1818)");
            assert!(!detail.description.is_empty());
        }
        other => panic!("expected the detail screen, got {other:?}"),
    }

    assert!(apply(&mut state, Event::Cancel));
    assert_eq!(state.screen, Screen::Browse);
    assert_eq!(state.selected_index, 2);
}

#[test]
fn filtering_by_title_and_fuzzy_author() {
    let mut state = fresh_state();

    assert!(apply(&mut state, Event::OpenSearch));
    assert_eq!(state.screen, Screen::Search(SearchField::Title));

    apply(&mut state, Event::Input("the".to_string()));
    assert!(apply(&mut state, Event::NextField));
    assert_eq!(state.screen, Screen::Search(SearchField::Author));

    // "well" narrows the author picker to H. G. Wells alone.
    apply(&mut state, Event::Input("well".to_string()));
    assert!(apply(&mut state, Event::Submit));

    assert_eq!(state.screen, Screen::Browse);
    let ids: Vec<&str> = state.visible.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["time-machine", "war-of-the-worlds"]);

    let view = state.compute_view(24, 80);
    assert_eq!(view.header.title, " Bookstall (2) ");
}

#[test]
fn unmatched_filters_show_the_empty_state_until_cleared() {
    let mut state = fresh_state();

    apply(&mut state, Event::OpenSearch);
    apply(&mut state, Event::Input("zzzz".to_string()));
    apply(&mut state, Event::Submit);

    assert!(state.visible.is_empty());
    let view = state.compute_view(24, 80);
    match view.body {
        ScreenView::Browse(browse) => {
            let empty = browse.empty_state.expect("empty state should be shown");
            assert_eq!(empty.message, "No books match your filters");
        }
        other => panic!("expected the browse screen, got {other:?}"),
    }

    // Clearing the title restores the whole catalog.
    apply(&mut state, Event::OpenSearch);
    apply(&mut state, Event::ClearInput);
    apply(&mut state, Event::Submit);

    assert_eq!(state.visible.len(), 6);
    assert_eq!(state.visible[0].id, "moby-dick");
}

#[test]
fn switching_the_theme_in_settings() {
    let mut state = fresh_state();
    assert_eq!(state.theme.name, "night");

    assert!(apply(&mut state, Event::OpenSettings));
    assert_eq!(state.screen, Screen::Settings);

    assert!(apply(&mut state, Event::MoveUp));
    assert!(apply(&mut state, Event::Submit));
    assert_eq!(state.theme.name, "day");
    assert_eq!(state.screen, Screen::Settings);

    assert!(apply(&mut state, Event::Cancel));
    assert_eq!(state.screen, Screen::Browse);
}

#[test]
fn opening_by_id_ignores_the_active_filter() {
    let mut state = fresh_state();

    apply(&mut state, Event::OpenSearch);
    apply(&mut state, Event::Input("drac".to_string()));
    apply(&mut state, Event::Submit);
    assert_eq!(state.visible.len(), 1);

    assert!(apply(
        &mut state,
        Event::OpenBook {
            id: "emma".to_string()
        }
    ));
    assert_eq!(state.screen, Screen::Detail);
    assert_eq!(state.active_book.as_ref().unwrap().title, "Emma");

    // Closing lands back on the filtered list, not the full catalog.
    assert!(apply(&mut state, Event::Submit));
    assert_eq!(state.screen, Screen::Browse);
    assert_eq!(state.visible[0].id, "dracula");
}

#[test]
fn repeated_filters_page_identically() {
    fn gothic_ids(state: &mut AppState) -> Vec<String> {
        apply(state, Event::OpenSearch);
        apply(state, Event::FocusField(SearchField::Genre));
        apply(state, Event::Input("goth".to_string()));
        apply(state, Event::Submit);
        state.visible.iter().map(|b| b.id.clone()).collect()
    }

    let mut state = fresh_state();
    let first = gothic_ids(&mut state);
    let second = gothic_ids(&mut state);

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "frankenstein",
            "dracula",
            "jane-eyre",
            "wuthering-heights",
            "jekyll-and-hyde",
            "dorian-gray",
        ]
    );
}

#[test]
fn quit_is_the_only_event_emitting_an_action() {
    let mut state = fresh_state();

    let (redraw, actions) = handle_event(&mut state, &Event::Quit).unwrap();
    assert!(!redraw);
    assert_eq!(actions, vec![Action::Quit]);
}
