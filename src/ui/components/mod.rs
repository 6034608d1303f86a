//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with the match count
//! - [`footer`]: Help text and command hints
//! - [`previews`]: Book preview list with columns (TITLE, AUTHOR, YEAR)
//! - [`search`]: Filter form fields and picker dropdowns
//! - [`settings`]: Theme picker rows
//! - [`detail`]: Single-book detail body
//! - [`empty`]: Empty state message for no matches
//!
//! # Layout Screens
//!
//! The module provides one high-level layout function per screen:
//!
//! - [`render_browse_screen`]: Header + Preview list + Footer
//! - [`render_search_screen`]: Header + Filter form + Dropdown + Footer
//! - [`render_settings_screen`]: Header + Theme rows + Footer
//! - [`render_detail_screen`]: Header + Book detail + Footer

mod header;
mod footer;
mod previews;
mod search;
mod settings;
mod detail;
mod empty;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BrowseView, DetailView, FooterInfo, HeaderInfo, SearchView, SettingsView,
};

use detail::render_detail_body;
use footer::render_footer;
use header::render_header;
use previews::{render_preview_headers, render_preview_rows};
use search::{render_form_field, render_picker_rows};
use settings::render_theme_options;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the browse screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Column Headers]
/// [Preview Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// When the view carries an empty state, the column headers and rows are
/// replaced by the centered message.
///
/// # Line Accounting
///
/// Reserves 7 lines for chrome (blank, header, 2 borders, column header row,
/// footer, prompt row). Fills remaining space with preview rows.
pub fn render_browse_screen(
    header: &HeaderInfo,
    footer: &FooterInfo,
    view: &BrowseView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &view.empty_state {
        render_empty_state(empty, theme, cols);
    } else {
        current_row = render_preview_headers(current_row, theme, cols);
        let _current_row = render_preview_rows(current_row, &view.rows, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}

/// Renders the search screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Title Field - 3 lines]
/// [Author Field - 3 lines]
/// [Genre Field - 3 lines]
/// [blank line]
/// [Picker Dropdown Rows]
/// [Border]
/// [Footer]
/// ```
///
/// The dropdown rows are only present when the focused field is a picker;
/// the view model delivers them pre-windowed.
pub fn render_search_screen(
    header: &HeaderInfo,
    footer: &FooterInfo,
    view: &SearchView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_form_field(current_row, &view.title, theme, cols);
    current_row = render_form_field(current_row, &view.author, theme, cols);
    current_row = render_form_field(current_row, &view.genre, theme, cols);
    current_row += 1; // Blank separator before the dropdown
    let _current_row = render_picker_rows(current_row, &view.dropdown, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}

/// Renders the settings screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [blank line]
/// [Theme Rows]
/// [Border]
/// [Footer]
/// ```
pub fn render_settings_screen(
    header: &HeaderInfo,
    footer: &FooterInfo,
    view: &SettingsView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row += 1; // Blank separator before the theme rows
    let _current_row = render_theme_options(current_row, &view.options, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}

/// Renders the detail screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [blank line]
/// [Title / Subtitle / Description / Cover]
/// [Border]
/// [Footer]
/// ```
pub fn render_detail_screen(
    header: &HeaderInfo,
    footer: &FooterInfo,
    view: &DetailView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row += 1; // Blank separator before the body
    let _current_row = render_detail_body(current_row, view, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}
