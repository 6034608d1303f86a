//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It serves as the
//! primary control flow coordinator for the widget.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host shell
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. A redraw flag and host actions are returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `MoveDown`, `MoveUp`, `ShowMore`
//! - **Opening**: `Select`, `OpenBook`, `OpenSearch`, `OpenSettings`
//! - **Form Editing**: `NextField`, `PrevField`, `FocusField`, `Input`,
//!   `ClearInput`
//! - **Closing**: `Submit`, `Cancel`, `Quit`
//!
//! Events that do not apply to the active screen are ignored without a
//! redraw.
//!
//! # Example
//!
//! ```rust
//! use bookstall::app::handler::{handle_event, Event};
//! use bookstall::app::AppState;
//! use bookstall::dataset::{CatalogSource, JsonCatalog};
//! use bookstall::ui::Theme;
//!
//! let catalog = JsonCatalog::embedded().load()?;
//! let mut state = AppState::new(catalog, Theme::default());
//! let (redraw, actions) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::modes::{Screen, SearchField};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the active cursor down by one position (wraps to the top).
    MoveDown,
    /// Moves the active cursor up by one position (wraps to the bottom).
    MoveUp,
    /// Loads the next page of matches into the preview list.
    ShowMore,
    /// Opens the currently selected preview's detail screen.
    Select,
    /// Opens a book's detail screen by catalog id, bypassing the preview
    /// list and the active filter.
    OpenBook {
        /// Catalog id of the book to open.
        id: String,
    },
    /// Opens the filter form with the title field focused.
    OpenSearch,
    /// Opens the theme settings.
    OpenSettings,
    /// Focuses the next filter form field (wraps around).
    NextField,
    /// Focuses the previous filter form field (wraps around).
    PrevField,
    /// Focuses a specific filter form field.
    FocusField(SearchField),
    /// Replaces the focused form field's text.
    Input(String),
    /// Clears the focused form field's text.
    ClearInput,
    /// Confirms the active overlay: applies the filter form, applies the
    /// selected theme, or closes the detail screen.
    Submit,
    /// Dismisses the active overlay without applying anything.
    Cancel,
    /// Requests application shutdown.
    Quit,
}

/// Processes an event, mutates application state, and returns the redraw
/// flag plus actions to execute.
///
/// This is the primary event handler that coordinates all state transitions.
/// It pattern-matches on event types, calls state mutation methods, and
/// collects actions to be executed by the host.
///
/// # Returns
///
/// A `(redraw, actions)` pair. The redraw flag is `false` when the event
/// did not apply to the active screen or left the state unchanged.
///
/// # Errors
///
/// Returns errors from state mutation methods. None of the current
/// transitions fail, but the signature leaves room for fallible ones.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => match state.screen {
            Screen::Browse => {
                state.move_selection_down();
                Ok((true, vec![]))
            }
            Screen::Search(field) if field.is_picker() => {
                state.move_picker_down(field);
                Ok((true, vec![]))
            }
            Screen::Settings => {
                state.move_settings_down();
                Ok((true, vec![]))
            }
            Screen::Search(_) | Screen::Detail => Ok((false, vec![])),
        },
        Event::MoveUp => match state.screen {
            Screen::Browse => {
                state.move_selection_up();
                Ok((true, vec![]))
            }
            Screen::Search(field) if field.is_picker() => {
                state.move_picker_up(field);
                Ok((true, vec![]))
            }
            Screen::Settings => {
                state.move_settings_up();
                Ok((true, vec![]))
            }
            Screen::Search(_) | Screen::Detail => Ok((false, vec![])),
        },
        Event::ShowMore => {
            if state.screen != Screen::Browse {
                return Ok((false, vec![]));
            }

            let appended = state.show_more();
            if appended == 0 {
                tracing::debug!("no more matches to load");
            }
            Ok((appended > 0, vec![]))
        }
        Event::Select => {
            if state.screen != Screen::Browse {
                return Ok((false, vec![]));
            }

            let Some(book) = state.selected_book().cloned() else {
                tracing::debug!("no preview selected");
                return Ok((false, vec![]));
            };

            tracing::debug!(book_id = %book.id, title = %book.title, "opening selected book");
            state.active_book = Some(book);
            state.screen = Screen::Detail;
            Ok((true, vec![]))
        }
        Event::OpenBook { id } => match state.query.find_by_id(id).cloned() {
            Some(book) => {
                tracing::debug!(book_id = %book.id, title = %book.title, "opening book by id");
                state.active_book = Some(book);
                state.screen = Screen::Detail;
                Ok((true, vec![]))
            }
            None => {
                tracing::debug!(book_id = %id, "unknown book id");
                Ok((false, vec![]))
            }
        },
        Event::OpenSearch => {
            if state.screen != Screen::Browse {
                return Ok((false, vec![]));
            }

            tracing::debug!("opening the filter form");
            state.screen = Screen::Search(SearchField::Title);
            Ok((true, vec![]))
        }
        Event::OpenSettings => {
            if state.screen != Screen::Browse {
                return Ok((false, vec![]));
            }

            state.screen = Screen::Settings;
            Ok((true, vec![]))
        }
        Event::NextField => {
            let Screen::Search(field) = state.screen else {
                return Ok((false, vec![]));
            };
            state.screen = Screen::Search(field.next());
            Ok((true, vec![]))
        }
        Event::PrevField => {
            let Screen::Search(field) = state.screen else {
                return Ok((false, vec![]));
            };
            state.screen = Screen::Search(field.prev());
            Ok((true, vec![]))
        }
        Event::FocusField(target) => {
            if !matches!(state.screen, Screen::Search(_)) {
                return Ok((false, vec![]));
            }

            state.screen = Screen::Search(*target);
            Ok((true, vec![]))
        }
        Event::Input(text) => {
            let Screen::Search(field) = state.screen else {
                return Ok((false, vec![]));
            };

            match field {
                SearchField::Title => state.form.title = text.clone(),
                SearchField::Author => {
                    state.form.author.input = text.clone();
                    state.reset_picker_cursor(field);
                }
                SearchField::Genre => {
                    state.form.genre.input = text.clone();
                    state.reset_picker_cursor(field);
                }
            }

            tracing::trace!(field = ?field, input = %text, "form input updated");
            Ok((true, vec![]))
        }
        Event::ClearInput => {
            let Screen::Search(field) = state.screen else {
                return Ok((false, vec![]));
            };

            match field {
                SearchField::Title => state.form.title.clear(),
                SearchField::Author => {
                    state.form.author.input.clear();
                    state.form.author.cursor = 0;
                }
                SearchField::Genre => {
                    state.form.genre.input.clear();
                    state.form.genre.cursor = 0;
                }
            }

            Ok((true, vec![]))
        }
        Event::Submit => match state.screen {
            Screen::Search(_) => {
                state.apply_search();
                state.screen = Screen::Browse;
                Ok((true, vec![]))
            }
            Screen::Settings => {
                let changed = state.apply_selected_theme();
                Ok((changed, vec![]))
            }
            Screen::Detail => {
                state.active_book = None;
                state.screen = Screen::Browse;
                Ok((true, vec![]))
            }
            Screen::Browse => Ok((false, vec![])),
        },
        Event::Cancel => {
            if state.screen == Screen::Browse {
                return Ok((false, vec![]));
            }

            tracing::debug!(screen = ?state.screen, "closing overlay");
            state.active_book = None;
            state.screen = Screen::Browse;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LoadedCatalog;
    use crate::domain::{Book, Directory};
    use crate::ui::Theme;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn book(id: &str, title: &str, author_id: &str, genre_ids: &[&str], year: i32) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author_id: author_id.to_string(),
            cover_url: format!("https://covers.example/{id}.jpg"),
            description: format!("A description of {title}."),
            genre_ids: genre_ids.iter().map(|g| (*g).to_string()).collect(),
            published: chrono::Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample_state() -> AppState {
        let books = vec![
            book("b1", "Emma", "a1", &["g2"], 1815),
            book("b2", "Persuasion", "a1", &["g2"], 1817),
            book("b3", "Dracula", "a2", &["g1"], 1897),
            book("b4", "Northanger Abbey", "a1", &["g1", "g2"], 1817),
            book("b5", "Jekyll and Hyde", "a2", &["g1"], 1886),
        ];

        let mut authors = HashMap::new();
        authors.insert("a1".to_string(), "Jane Austen".to_string());
        authors.insert("a2".to_string(), "Bram Stoker".to_string());

        let mut genres = HashMap::new();
        genres.insert("g1".to_string(), "Gothic".to_string());
        genres.insert("g2".to_string(), "Romance".to_string());

        let catalog = LoadedCatalog {
            books,
            authors: Directory::new(authors),
            genres: Directory::new(genres),
            page_size: 2,
        };

        AppState::new(catalog, Theme::default())
    }

    #[test]
    fn selection_moves_and_requests_a_redraw() {
        let mut state = sample_state();

        let (redraw, actions) = handle_event(&mut state, &Event::MoveDown).unwrap();

        assert!(redraw);
        assert!(actions.is_empty());
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn show_more_only_redraws_when_previews_arrive() {
        let mut state = sample_state();

        let (redraw, _) = handle_event(&mut state, &Event::ShowMore).unwrap();
        assert!(redraw);
        let (redraw, _) = handle_event(&mut state, &Event::ShowMore).unwrap();
        assert!(redraw);
        assert_eq!(state.visible.len(), 5);

        let (redraw, _) = handle_event(&mut state, &Event::ShowMore).unwrap();
        assert!(!redraw);
    }

    #[test]
    fn enter_opens_the_selected_book() {
        let mut state = sample_state();
        handle_event(&mut state, &Event::MoveDown).unwrap();

        let (redraw, _) = handle_event(&mut state, &Event::Select).unwrap();

        assert!(redraw);
        assert_eq!(state.screen, Screen::Detail);
        assert_eq!(state.active_book.as_ref().unwrap().id, "b2");
    }

    #[test]
    fn open_book_by_id_bypasses_the_active_filter() {
        let mut state = sample_state();
        handle_event(&mut state, &Event::OpenSearch).unwrap();
        handle_event(&mut state, &Event::Input("dracula".to_string())).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.query.match_count(), 1);

        let event = Event::OpenBook {
            id: "b1".to_string(),
        };
        let (redraw, _) = handle_event(&mut state, &event).unwrap();

        assert!(redraw);
        assert_eq!(state.active_book.as_ref().unwrap().title, "Emma");
    }

    #[test]
    fn unknown_book_ids_are_ignored() {
        let mut state = sample_state();

        let event = Event::OpenBook {
            id: "nope".to_string(),
        };
        let (redraw, _) = handle_event(&mut state, &event).unwrap();

        assert!(!redraw);
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.active_book.is_none());
    }

    #[test]
    fn submitting_the_form_applies_the_filters() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        assert_eq!(state.screen, Screen::Search(SearchField::Title));

        handle_event(&mut state, &Event::Input("emma".to_string())).unwrap();
        let (redraw, _) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(redraw);
        assert_eq!(state.screen, Screen::Browse);
        assert_eq!(state.query.match_count(), 1);
        assert_eq!(state.visible[0].title, "Emma");
    }

    #[test]
    fn cancelling_the_form_leaves_the_query_untouched() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        handle_event(&mut state, &Event::Input("zzz".to_string())).unwrap();
        handle_event(&mut state, &Event::Cancel).unwrap();

        assert_eq!(state.screen, Screen::Browse);
        assert_eq!(state.query.match_count(), 5);
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn tab_cycles_the_form_fields() {
        let mut state = sample_state();
        handle_event(&mut state, &Event::OpenSearch).unwrap();

        handle_event(&mut state, &Event::NextField).unwrap();
        assert_eq!(state.screen, Screen::Search(SearchField::Author));
        handle_event(&mut state, &Event::NextField).unwrap();
        assert_eq!(state.screen, Screen::Search(SearchField::Genre));
        handle_event(&mut state, &Event::NextField).unwrap();
        assert_eq!(state.screen, Screen::Search(SearchField::Title));

        handle_event(&mut state, &Event::PrevField).unwrap();
        assert_eq!(state.screen, Screen::Search(SearchField::Genre));
    }

    #[test]
    fn picking_an_author_filters_the_previews() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        handle_event(&mut state, &Event::FocusField(SearchField::Author)).unwrap();
        // Directory entries are name-sorted: Bram Stoker first.
        handle_event(&mut state, &Event::MoveDown).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        assert_eq!(state.query.match_count(), 2);
        assert_eq!(state.visible[0].id, "b3");
        assert_eq!(state.visible[1].id, "b5");
    }

    #[test]
    fn clearing_a_picker_returns_it_to_the_wildcard() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::OpenSearch).unwrap();
        handle_event(&mut state, &Event::FocusField(SearchField::Genre)).unwrap();
        handle_event(&mut state, &Event::Input("goth".to_string())).unwrap();
        assert_eq!(state.form.genre.cursor, 1);

        handle_event(&mut state, &Event::ClearInput).unwrap();

        assert!(state.form.genre.input.is_empty());
        assert_eq!(state.form.genre.cursor, 0);
    }

    #[test]
    fn settings_submit_applies_the_selected_theme() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::OpenSettings).unwrap();
        assert_eq!(state.screen, Screen::Settings);

        // The cursor starts on "night"; move up to "day".
        handle_event(&mut state, &Event::MoveUp).unwrap();
        let (redraw, _) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(redraw);
        assert_eq!(state.theme.name, "day");
        assert_eq!(state.screen, Screen::Settings);

        handle_event(&mut state, &Event::Cancel).unwrap();
        assert_eq!(state.screen, Screen::Browse);
    }

    #[test]
    fn detail_screen_closes_on_submit_or_cancel() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::Select).unwrap();
        assert_eq!(state.screen, Screen::Detail);
        handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.active_book.is_none());

        handle_event(&mut state, &Event::Select).unwrap();
        handle_event(&mut state, &Event::Cancel).unwrap();
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.active_book.is_none());
    }

    #[test]
    fn events_off_their_screen_are_ignored() {
        let mut state = sample_state();

        handle_event(&mut state, &Event::OpenSettings).unwrap();
        let (redraw, _) = handle_event(&mut state, &Event::ShowMore).unwrap();
        assert!(!redraw);
        let (redraw, _) = handle_event(&mut state, &Event::Input("x".to_string())).unwrap();
        assert!(!redraw);
        handle_event(&mut state, &Event::Cancel).unwrap();

        handle_event(&mut state, &Event::Select).unwrap();
        let (redraw, _) = handle_event(&mut state, &Event::MoveDown).unwrap();
        assert!(!redraw);
    }

    #[test]
    fn quit_emits_the_quit_action_from_any_screen() {
        let mut state = sample_state();

        let (redraw, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert!(!redraw);
        assert_eq!(actions, vec![Action::Quit]);

        handle_event(&mut state, &Event::OpenSettings).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
