//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: truncated columns, wrapped
//! description lines, highlight ranges, and selection flags.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_view()` and consumed by the
//! renderer. They contain no business logic, only display-ready data; the
//! renderer never needs to consult the catalog or the form again.
//!
//! # Example
//!
//! ```rust
//! use bookstall::ui::viewmodel::{EmptyState, PreviewRow};
//!
//! let row = PreviewRow {
//!     title: "Dracula".to_string(),
//!     author: "Bram Stoker".to_string(),
//!     year: "1897".to_string(),
//!     is_selected: true,
//! };
//! let empty = EmptyState {
//!     message: "No results found. Your filters might be too narrow.".to_string(),
//!     subtitle: "search: adjust filters".to_string(),
//! };
//! assert!(row.is_selected);
//! assert!(!empty.message.is_empty());
//! ```

/// Complete UI view model for one frame.
///
/// Contains all display information needed to render the widget. The header
/// and footer are always present; the body varies with the active screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UiView {
    /// Header information (screen title and match count).
    pub header: HeaderInfo,

    /// Footer information (command hints).
    pub footer: FooterInfo,

    /// Screen-specific body content.
    pub body: ScreenView,
}

/// Body content for the active screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    /// The paginated preview list.
    Browse(BrowseView),
    /// The filter form overlay.
    Search(SearchView),
    /// The theme picker overlay.
    Settings(SettingsView),
    /// A single book's detail overlay.
    Detail(DetailView),
}

/// Browse screen body: the windowed slice of loaded preview rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView {
    /// Rows inside the visible window, in display order.
    pub rows: Vec<PreviewRow>,

    /// Message shown instead of rows when nothing is loaded.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single book preview row.
///
/// All columns are pre-truncated to the widths the renderer lays out.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    /// Book title column.
    pub title: String,

    /// Resolved author display name column.
    pub author: String,

    /// Publication year column.
    pub year: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,
}

/// Empty state message display information.
///
/// Shown when the visible list has no rows, either because the active filter
/// matched nothing or because the catalog itself is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search overlay body: the three form fields plus the focused picker's
/// dropdown rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    /// Title substring input.
    pub title: FieldView,

    /// Author picker field.
    pub author: FieldView,

    /// Genre picker field.
    pub genre: FieldView,

    /// Dropdown rows for the focused picker, windowed around its cursor.
    /// Empty when the title field has focus.
    pub dropdown: Vec<PickerRow>,
}

/// One boxed form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// Field label ("Title", "Author", "Genre").
    pub label: String,

    /// Text shown inside the box: free input, the typeahead query, or the
    /// currently picked option's name.
    pub value: String,

    /// Whether this field has focus.
    pub is_focused: bool,
}

/// One dropdown row of a picker.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerRow {
    /// Option display name (the wildcard row reads "All Authors"/"All Genres").
    pub name: String,

    /// Character ranges matched by the typeahead query `(start, end)`,
    /// exclusive end.
    pub highlights: Vec<(usize, usize)>,

    /// Whether the picker cursor sits on this row.
    pub is_selected: bool,
}

/// Settings overlay body.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    /// Selectable themes in display order.
    pub options: Vec<ThemeOption>,
}

/// One selectable theme row.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOption {
    /// Theme name.
    pub name: String,

    /// Whether the settings cursor sits on this row.
    pub is_selected: bool,

    /// Whether this theme is the one currently applied.
    pub is_active: bool,
}

/// Detail overlay body for one opened book.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Book title.
    pub title: String,

    /// "Author (Year)" line.
    pub subtitle: String,

    /// Description pre-wrapped to the available width, possibly truncated.
    pub description: Vec<String>,

    /// Cover image location, displayed verbatim.
    pub cover_url: String,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterInfo {
    /// Command help text (e.g., "j/k: move  enter: open  q: quit").
    pub commands: String,
}
