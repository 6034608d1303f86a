//! Screen and focus state types for the application.
//!
//! This module defines the state machine enums that control which surface of
//! the widget is active and, inside the search overlay, which form field has
//! focus. These types determine how input lines are interpreted and what the
//! renderer draws.
//!
//! # State Machine
//!
//! The widget always sits on exactly one screen:
//! - **Browse**: the paginated result list (default)
//! - **Search**: the filter form overlay, with one focused field
//! - **Settings**: the theme picker overlay
//! - **Detail**: a single book's detail overlay
//!
//! Overlays return to Browse on submit or cancel; Browse is never left except
//! through an explicit open event.

/// Form field focus within the search overlay.
///
/// Determines which field free text edits and which picker the cursor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// The free-text title substring input.
    Title,

    /// The author picker with its typeahead input.
    Author,

    /// The genre picker with its typeahead input.
    Genre,
}

impl SearchField {
    /// Returns the next field in form order, wrapping from genre back to title.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    /// Returns the previous field in form order, wrapping from title to genre.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
        }
    }

    /// Returns true for the picker fields, which carry a cursor besides text.
    #[must_use]
    pub fn is_picker(self) -> bool {
        matches!(self, Self::Author | Self::Genre)
    }
}

/// The active surface of the widget.
///
/// Controls input interpretation, the header title, and the footer command
/// hints. Only Browse shows the result list; the other three draw an overlay
/// in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The paginated book list (default screen).
    Browse,

    /// The filter form overlay with one focused [`SearchField`].
    Search(SearchField),

    /// The theme picker overlay.
    Settings,

    /// The detail overlay for the currently opened book.
    Detail,
}

impl Screen {
    /// Returns true for any screen other than Browse.
    #[must_use]
    pub fn is_overlay(self) -> bool {
        !matches!(self, Self::Browse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order_cycles_forward_and_back() {
        assert_eq!(SearchField::Title.next(), SearchField::Author);
        assert_eq!(SearchField::Author.next(), SearchField::Genre);
        assert_eq!(SearchField::Genre.next(), SearchField::Title);

        assert_eq!(SearchField::Title.prev(), SearchField::Genre);
        assert_eq!(SearchField::Genre.prev(), SearchField::Author);
        assert_eq!(SearchField::Author.prev(), SearchField::Title);
    }

    #[test]
    fn pickers_are_author_and_genre() {
        assert!(!SearchField::Title.is_picker());
        assert!(SearchField::Author.is_picker());
        assert!(SearchField::Genre.is_picker());
    }

    #[test]
    fn overlay_classification() {
        assert!(!Screen::Browse.is_overlay());
        assert!(Screen::Search(SearchField::Title).is_overlay());
        assert!(Screen::Settings.is_overlay());
        assert!(Screen::Detail.is_overlay());
    }
}
