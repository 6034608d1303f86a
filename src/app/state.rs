//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! widget, along with methods for filtering, pagination, selection
//! management, and UI view model generation. It serves as the single source
//! of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the catalog query, author and genre
//! directories) from derived state (loaded previews, cursor positions) to
//! maintain consistency and simplify state transitions. View models are
//! computed on-demand from state snapshots.
//!
//! # State Components
//!
//! - **Query**: The filter-and-paginate engine over the immutable catalog
//! - **Visible**: Previews loaded so far, grown page by page via show-more
//! - **Selection**: Current cursor position within the visible previews
//! - **Screen**: Determines active commands and UI layout
//! - **Form**: Pending filter inputs (title text, author and genre pickers)
//!
//! # View Model Computation
//!
//! The `compute_view` method transforms state into a renderable UI
//! representation, handling windowing, picker match highlighting, and
//! responsive column truncation based on terminal dimensions.
//!
//! # Example
//!
//! ```rust
//! use bookstall::app::AppState;
//! use bookstall::dataset::{CatalogSource, JsonCatalog};
//! use bookstall::ui::Theme;
//!
//! let catalog = JsonCatalog::embedded().load()?;
//! let mut state = AppState::new(catalog, Theme::default());
//! assert!(state.selected_book().is_some());
//!
//! state.move_selection_down();
//! let view = state.compute_view(24, 80);
//! # Ok::<(), bookstall::domain::BookstallError>(())
//! ```

use super::modes::{Screen, SearchField};
use crate::catalog::{CatalogQuery, Filter, FilterChoice};
use crate::dataset::LoadedCatalog;
use crate::domain::{Book, Directory};
use crate::ui::theme::{Theme, BUILT_IN_THEMES};
use crate::ui::viewmodel::{
    BrowseView, DetailView, EmptyState, FieldView, FooterInfo, HeaderInfo, PickerRow, PreviewRow,
    ScreenView, SearchView, SettingsView, ThemeOption, UiView,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Label for the author picker's wildcard row.
const ALL_AUTHORS_LABEL: &str = "All Authors";

/// Label for the genre picker's wildcard row.
const ALL_GENRES_LABEL: &str = "All Genres";

/// Maximum number of dropdown rows shown under a focused picker.
const DROPDOWN_ROWS: usize = 5;

/// Central application state container.
///
/// Holds all transient UI state including the catalog query, loaded
/// previews, cursor positions, and screen information. Mutated by the event
/// handler in response to user input. View models are computed on-demand
/// from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Filter-and-paginate engine over the immutable catalog.
    ///
    /// Owns the full book list and the current result sequence. Never
    /// reloaded after startup.
    pub query: CatalogQuery,

    /// Author id to display name directory.
    pub authors: Directory,

    /// Genre id to display name directory.
    pub genres: Directory,

    /// Number of previews loaded per show-more step.
    pub page_size: usize,

    /// Previews loaded so far, in catalog order.
    ///
    /// Starts as the first page of the current result sequence and grows by
    /// one page per show-more. Rebuilt from page one whenever filters are
    /// applied.
    pub visible: Vec<Book>,

    /// Zero-based index of the selected preview within `visible`.
    ///
    /// Wraps around during navigation via `move_selection_up/down()`. Reset
    /// to zero when filters are applied.
    pub selected_index: usize,

    /// Currently displayed screen.
    ///
    /// Determines active commands and UI layout. Changed by open/cancel
    /// events.
    pub screen: Screen,

    /// Pending filter form inputs.
    ///
    /// Edited on the search screen; only copied into the query when the
    /// form is submitted.
    pub form: SearchForm,

    /// Zero-based cursor position within the settings theme rows.
    pub settings_index: usize,

    /// Book shown on the detail screen, if one is open.
    pub active_book: Option<Book>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

/// Pending filter inputs edited on the search screen.
///
/// The form holds what the user is typing, not what the query is currently
/// filtered by. Submitting copies the form into a [`Filter`]; cancelling
/// leaves the query untouched.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    /// Free-text title substring input.
    pub title: String,

    /// Author picker state.
    pub author: PickerState,

    /// Genre picker state.
    pub genre: PickerState,
}

/// Typeahead state for one picker field.
///
/// The picker presents a wildcard row ("All Authors" / "All Genres")
/// followed by the directory entries narrowed by the typed input. Cursor
/// position zero is the wildcard row; position `k` is the `k`-th narrowed
/// entry.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    /// Typed narrowing input.
    pub input: String,

    /// Cursor position within the dropdown rows (0 = wildcard row).
    pub cursor: usize,
}

/// One narrowed picker option with its typeahead match ranges.
#[derive(Debug, Clone)]
pub struct PickerEntry {
    /// Directory entry id.
    pub id: String,

    /// Directory entry display name.
    pub name: String,

    /// Character ranges of `name` matched by the typed input.
    pub highlights: Vec<(usize, usize)>,
}

impl PickerState {
    /// Returns the directory entries narrowed by the typed input.
    ///
    /// With empty input every entry is returned in directory order and no
    /// highlights are attached. Otherwise entries are kept when the input
    /// fuzzy-matches their display name, still in directory order, with the
    /// matched character ranges coalesced for highlighting.
    #[must_use]
    pub fn narrowed(&self, directory: &Directory) -> Vec<PickerEntry> {
        use fuzzy_matcher::FuzzyMatcher;

        if self.input.is_empty() {
            return directory
                .entries()
                .iter()
                .map(|(id, name)| PickerEntry {
                    id: id.clone(),
                    name: name.clone(),
                    highlights: vec![],
                })
                .collect();
        }

        let matcher = SkimMatcherV2::default();
        directory
            .entries()
            .iter()
            .filter_map(|(id, name)| {
                matcher
                    .fuzzy_indices(name, &self.input)
                    .map(|(_score, indices)| PickerEntry {
                        id: id.clone(),
                        name: name.clone(),
                        highlights: coalesce_indices(&indices),
                    })
            })
            .collect()
    }

    /// Resolves the cursor position into a filter choice.
    ///
    /// The wildcard row resolves to [`FilterChoice::Any`]; any other row
    /// resolves to the id of the narrowed entry under the cursor. An
    /// out-of-range cursor also resolves to `Any`.
    #[must_use]
    pub fn resolve(&self, directory: &Directory) -> FilterChoice {
        if self.cursor == 0 {
            return FilterChoice::Any;
        }

        self.narrowed(directory)
            .get(self.cursor - 1)
            .map_or(FilterChoice::Any, |entry| {
                FilterChoice::Id(entry.id.clone())
            })
    }
}

impl AppState {
    /// Creates a new application state from a loaded catalog and theme.
    ///
    /// Builds the query engine and directories, then loads the first page
    /// of previews. The settings cursor starts on the active theme.
    #[must_use]
    pub fn new(catalog: LoadedCatalog, theme: Theme) -> Self {
        let authors = catalog.authors;
        let genres = catalog.genres;
        let query = CatalogQuery::new(catalog.books);
        let visible = query.page_slice(catalog.page_size).to_vec();

        let settings_index = BUILT_IN_THEMES
            .iter()
            .position(|name| *name == theme.name)
            .unwrap_or(0);

        Self {
            query,
            authors,
            genres,
            page_size: catalog.page_size,
            visible,
            selected_index: 0,
            screen: Screen::Browse,
            form: SearchForm::default(),
            settings_index,
            active_book: None,
            theme,
        }
    }

    /// Moves the selection cursor down by one position, wrapping to the top
    /// at the end. No-op when no previews are loaded.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the selection cursor up by one position, wrapping to the bottom
    /// at the start. No-op when no previews are loaded.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected preview's book, if any.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible.get(self.selected_index)
    }

    /// Loads the next page of the current result sequence into the visible
    /// previews.
    ///
    /// Advancing past the last page appends nothing and is harmless; the
    /// selection is left where it was either way.
    ///
    /// # Returns
    ///
    /// The number of previews appended.
    pub fn show_more(&mut self) -> usize {
        let appended = self.query.advance_page(self.page_size).to_vec();
        let count = appended.len();
        self.visible.extend(appended);

        tracing::debug!(
            appended = count,
            total_visible = self.visible.len(),
            "expanded preview window"
        );

        count
    }

    /// Number of matching books not yet loaded into the visible previews.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.query.remaining_count(self.page_size)
    }

    /// Applies the pending form inputs to the catalog query.
    ///
    /// Builds a [`Filter`] from the form (free-text title plus the resolved
    /// picker choices), runs the search, and rebuilds the visible previews
    /// from page one with the selection reset to the top.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the form's input lengths and cursor
    /// positions.
    pub fn apply_search(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search",
            title_len = self.form.title.len(),
            author_cursor = self.form.author.cursor,
            genre_cursor = self.form.genre.cursor
        )
        .entered();

        let filter = Filter {
            title: self.form.title.clone(),
            author: self.form.author.resolve(&self.authors),
            genre: self.form.genre.resolve(&self.genres),
        };

        self.query.search(filter);
        self.visible = self.query.page_slice(self.page_size).to_vec();
        self.selected_index = 0;

        tracing::debug!(
            match_count = self.query.match_count(),
            visible = self.visible.len(),
            "filters applied"
        );
    }

    /// Resets a picker's cursor after its input changed.
    ///
    /// Empty input parks the cursor on the wildcard row. Non-empty input
    /// jumps to the first narrowed entry, or back to the wildcard row when
    /// nothing matches.
    pub fn reset_picker_cursor(&mut self, field: SearchField) {
        let (input_is_empty, has_matches) = match field {
            SearchField::Author => (
                self.form.author.input.is_empty(),
                !self.form.author.narrowed(&self.authors).is_empty(),
            ),
            SearchField::Genre => (
                self.form.genre.input.is_empty(),
                !self.form.genre.narrowed(&self.genres).is_empty(),
            ),
            SearchField::Title => return,
        };

        let cursor = if !input_is_empty && has_matches { 1 } else { 0 };

        match field {
            SearchField::Author => self.form.author.cursor = cursor,
            SearchField::Genre => self.form.genre.cursor = cursor,
            SearchField::Title => {}
        }
    }

    /// Moves a picker's cursor down by one row, wrapping past the last
    /// narrowed entry back to the wildcard row.
    pub fn move_picker_down(&mut self, field: SearchField) {
        let total = self.picker_row_count(field);
        let Some(picker) = self.picker_mut(field) else {
            return;
        };
        picker.cursor = (picker.cursor + 1) % total;
    }

    /// Moves a picker's cursor up by one row, wrapping from the wildcard
    /// row to the last narrowed entry.
    pub fn move_picker_up(&mut self, field: SearchField) {
        let total = self.picker_row_count(field);
        let Some(picker) = self.picker_mut(field) else {
            return;
        };
        if picker.cursor == 0 {
            picker.cursor = total - 1;
        } else {
            picker.cursor -= 1;
        }
    }

    /// Total dropdown rows for a picker field (wildcard row included).
    fn picker_row_count(&self, field: SearchField) -> usize {
        match field {
            SearchField::Author => self.form.author.narrowed(&self.authors).len() + 1,
            SearchField::Genre => self.form.genre.narrowed(&self.genres).len() + 1,
            SearchField::Title => 1,
        }
    }

    fn picker_mut(&mut self, field: SearchField) -> Option<&mut PickerState> {
        match field {
            SearchField::Author => Some(&mut self.form.author),
            SearchField::Genre => Some(&mut self.form.genre),
            SearchField::Title => None,
        }
    }

    /// Moves the settings cursor down by one theme, wrapping at the end.
    pub fn move_settings_down(&mut self) {
        self.settings_index = (self.settings_index + 1) % BUILT_IN_THEMES.len();
    }

    /// Moves the settings cursor up by one theme, wrapping at the start.
    pub fn move_settings_up(&mut self) {
        if self.settings_index == 0 {
            self.settings_index = BUILT_IN_THEMES.len() - 1;
        } else {
            self.settings_index -= 1;
        }
    }

    /// Applies the theme under the settings cursor.
    ///
    /// # Returns
    ///
    /// `true` when the theme changed, `false` when the cursor points at a
    /// theme that cannot be loaded.
    pub fn apply_selected_theme(&mut self) -> bool {
        let Some(name) = BUILT_IN_THEMES.get(self.settings_index) else {
            return false;
        };

        match Theme::from_name(name) {
            Some(theme) => {
                tracing::debug!(theme = %theme.name, "theme applied");
                self.theme = theme;
                true
            }
            None => false,
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Transforms application state into a structured representation
    /// optimized for rendering. Handles preview windowing, picker match
    /// highlighting, responsive column truncation, and empty state handling.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center the window around the selected index
    /// 3. Shift the window back if it runs past the end of the previews
    /// 4. Flag the selected row within the window
    #[must_use]
    pub fn compute_view(&self, rows: usize, cols: usize) -> UiView {
        let body = match self.screen {
            Screen::Browse => ScreenView::Browse(self.compute_browse(rows, cols)),
            Screen::Search(field) => ScreenView::Search(self.compute_search(field)),
            Screen::Settings => ScreenView::Settings(self.compute_settings()),
            Screen::Detail => match &self.active_book {
                Some(book) => ScreenView::Detail(self.compute_detail(book, rows, cols)),
                None => ScreenView::Browse(self.compute_browse(rows, cols)),
            },
        };

        UiView {
            header: self.compute_header(),
            footer: self.compute_footer(),
            body,
        }
    }

    /// Computes the browse screen body: the windowed preview rows, or the
    /// empty state when nothing is loaded.
    fn compute_browse(&self, rows: usize, cols: usize) -> BrowseView {
        if self.visible.is_empty() {
            return BrowseView {
                rows: vec![],
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let available_rows = Self::available_preview_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let preview_rows = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_preview_row(book, absolute_idx, cols)
            })
            .collect();

        BrowseView {
            rows: preview_rows,
            empty_state: None,
        }
    }

    /// Computes a preview row for a single book within the visible window.
    ///
    /// Handles title and author truncation for the column layout and
    /// selection state marking.
    fn compute_preview_row(&self, book: &Book, absolute_idx: usize, cols: usize) -> PreviewRow {
        const TITLE_COLUMN_WIDTH: usize = 40;
        const YEAR_COLUMN_WIDTH: usize = 6;
        const CELL_GUTTER: usize = 2;

        let is_selected = absolute_idx == self.selected_index;
        let author_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + YEAR_COLUMN_WIDTH);

        let title = Self::truncate_cell(&book.title, TITLE_COLUMN_WIDTH - CELL_GUTTER);
        let author = Self::truncate_cell(
            self.authors.display_name(&book.author_id),
            author_width.saturating_sub(CELL_GUTTER),
        );

        PreviewRow {
            title,
            author,
            year: book.published_year().to_string(),
            is_selected,
        }
    }

    /// Computes the empty state message for the browse screen.
    fn compute_empty_state(&self) -> EmptyState {
        if self.query.catalog().is_empty() {
            EmptyState {
                message: "The catalog holds no books".to_string(),
                subtitle: "Check the catalog file passed at startup".to_string(),
            }
        } else {
            EmptyState {
                message: "No books match your filters".to_string(),
                subtitle: "Press / to adjust or clear the filters".to_string(),
            }
        }
    }

    /// Computes the search screen body: the three form fields plus the
    /// focused picker's dropdown rows.
    fn compute_search(&self, focused: SearchField) -> SearchView {
        let title = FieldView {
            label: "Title".to_string(),
            value: self.form.title.clone(),
            is_focused: focused == SearchField::Title,
        };
        let author = FieldView {
            label: "Author".to_string(),
            value: Self::picker_value(&self.form.author, &self.authors, ALL_AUTHORS_LABEL),
            is_focused: focused == SearchField::Author,
        };
        let genre = FieldView {
            label: "Genre".to_string(),
            value: Self::picker_value(&self.form.genre, &self.genres, ALL_GENRES_LABEL),
            is_focused: focused == SearchField::Genre,
        };

        let dropdown = if focused.is_picker() {
            self.compute_dropdown(focused)
        } else {
            vec![]
        };

        SearchView {
            title,
            author,
            genre,
            dropdown,
        }
    }

    /// Text shown inside a picker's field box.
    ///
    /// While the user is typing, the typeahead input is shown. Otherwise the
    /// picked option's name is shown, falling back to the wildcard label.
    fn picker_value(picker: &PickerState, directory: &Directory, wildcard: &str) -> String {
        if !picker.input.is_empty() {
            return picker.input.clone();
        }
        if picker.cursor == 0 {
            return wildcard.to_string();
        }

        directory
            .entries()
            .get(picker.cursor - 1)
            .map_or_else(|| wildcard.to_string(), |(_, name)| name.clone())
    }

    /// Computes the dropdown rows for a focused picker, windowed around its
    /// cursor.
    fn compute_dropdown(&self, field: SearchField) -> Vec<PickerRow> {
        let (picker, directory, wildcard) = match field {
            SearchField::Author => (&self.form.author, &self.authors, ALL_AUTHORS_LABEL),
            SearchField::Genre => (&self.form.genre, &self.genres, ALL_GENRES_LABEL),
            SearchField::Title => return vec![],
        };

        let narrowed = picker.narrowed(directory);
        let mut all_rows = Vec::with_capacity(narrowed.len() + 1);

        all_rows.push(PickerRow {
            name: wildcard.to_string(),
            highlights: vec![],
            is_selected: picker.cursor == 0,
        });
        for (idx, entry) in narrowed.into_iter().enumerate() {
            all_rows.push(PickerRow {
                name: entry.name,
                highlights: entry.highlights,
                is_selected: picker.cursor == idx + 1,
            });
        }

        let mut start = picker.cursor.saturating_sub(DROPDOWN_ROWS / 2);
        let end = (start + DROPDOWN_ROWS).min(all_rows.len());
        if end - start < DROPDOWN_ROWS && all_rows.len() >= DROPDOWN_ROWS {
            start = end.saturating_sub(DROPDOWN_ROWS);
        }

        all_rows[start..end].to_vec()
    }

    /// Computes the settings screen body.
    fn compute_settings(&self) -> SettingsView {
        let options = BUILT_IN_THEMES
            .iter()
            .enumerate()
            .map(|(idx, name)| ThemeOption {
                name: (*name).to_string(),
                is_selected: idx == self.settings_index,
                is_active: *name == self.theme.name,
            })
            .collect();

        SettingsView { options }
    }

    /// Computes the detail screen body for an opened book.
    ///
    /// The description is wrapped to the available width and truncated to
    /// the rows left after the surrounding chrome.
    fn compute_detail(&self, book: &Book, rows: usize, cols: usize) -> DetailView {
        let author = self.authors.display_name(&book.author_id);
        let subtitle = format!("{author} ({})", book.published_year());

        let width = cols.saturating_sub(6);
        let mut description = Self::wrap_text(&book.description, width);
        description.truncate(rows.saturating_sub(11));

        DetailView {
            title: book.title.clone(),
            subtitle,
            description,
            cover_url: book.cover_url.clone(),
        }
    }

    /// Computes header information for the active screen.
    fn compute_header(&self) -> HeaderInfo {
        let title = match self.screen {
            Screen::Browse => format!(" Bookstall ({}) ", self.query.match_count()),
            Screen::Search(_) => " Filter Books ".to_string(),
            Screen::Settings => " Settings ".to_string(),
            Screen::Detail => " Book Details ".to_string(),
        };

        HeaderInfo { title }
    }

    /// Computes footer command hints for the active screen.
    ///
    /// The browse footer advertises the show-more command with the live
    /// count of matches not yet loaded.
    fn compute_footer(&self) -> FooterInfo {
        let commands = match self.screen {
            Screen::Browse => {
                let remaining = self.remaining();
                if remaining > 0 {
                    format!(
                        "j/k: move  enter: open  m: show {remaining} more  /: filter  s: settings  q: quit"
                    )
                } else {
                    "j/k: move  enter: open  /: filter  s: settings  q: quit".to_string()
                }
            }
            Screen::Search(SearchField::Title) => {
                "tab: next field  enter: apply  esc: cancel  type to filter".to_string()
            }
            Screen::Search(_) => {
                "tab: next field  j/k: choose  enter: apply  esc: cancel".to_string()
            }
            Screen::Settings => "j/k: move  enter: apply theme  esc: back".to_string(),
            Screen::Detail => "enter/esc: back to the list".to_string(),
        };

        FooterInfo { commands }
    }

    /// Rows available for preview display after subtracting UI chrome.
    ///
    /// The browse screen reserves 7 rows: the top blank line, header,
    /// two borders, the column header row, the footer, and the prompt row.
    const fn available_preview_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(7)
    }

    /// Truncates a table cell to the given character width, appending "..."
    /// when the text is cut.
    fn truncate_cell(text: &str, max_width: usize) -> String {
        if text.chars().count() <= max_width {
            text.to_string()
        } else {
            let keep = max_width.saturating_sub(3);
            let prefix: String = text.chars().take(keep).collect();
            format!("{prefix}...")
        }
    }

    /// Word-wraps text to the given character width.
    ///
    /// Words wider than a whole line are hard-broken. A zero width yields
    /// no lines.
    fn wrap_text(text: &str, width: usize) -> Vec<String> {
        if width == 0 {
            return vec![];
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let mut remaining: Vec<char> = word.chars().collect();

            while remaining.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let head: String = remaining.drain(..width).collect();
                lines.push(head);
            }

            let word_len = remaining.len();
            if word_len == 0 {
                continue;
            }

            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(remaining.iter());
            current_len += word_len;
        }

        if current_len > 0 {
            lines.push(current);
        }

        lines
    }
}

/// Coalesces sorted matched character indices into `(start, end)` ranges
/// with exclusive ends.
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    let mut prev = None;

    for &idx in indices {
        match (start, prev) {
            (None, _) => {
                start = Some(idx);
                prev = Some(idx);
            }
            (Some(_), Some(p)) if idx == p + 1 => {
                prev = Some(idx);
            }
            (Some(s), Some(p)) => {
                ranges.push((s, p + 1));
                start = Some(idx);
                prev = Some(idx);
            }
            _ => {}
        }
    }

    if let (Some(s), Some(p)) = (start, prev) {
        ranges.push((s, p + 1));
    }

    ranges
}
