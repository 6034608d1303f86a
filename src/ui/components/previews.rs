//! Preview list component renderer.
//!
//! This module renders the loaded book previews as a three-column table with
//! TITLE, AUTHOR, and YEAR columns. It supports selection highlighting.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PreviewRow;

/// Fixed width of the TITLE column in characters.
const TITLE_COLUMN_WIDTH: usize = 40;

/// Width reserved for the YEAR column at the line's end.
const YEAR_COLUMN_WIDTH: usize = 6;

/// Renders the preview column headers at the specified row.
///
/// Displays "TITLE", "AUTHOR", and "YEAR" column headers with bold styling
/// and theme colors. The TITLE column is fixed width; AUTHOR flexes with the
/// terminal and YEAR sits at the line's end.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_preview_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let author_width = author_column_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<title_w$}{:<author_w$}{}",
        "TITLE",
        "AUTHOR",
        "YEAR",
        title_w = TITLE_COLUMN_WIDTH,
        author_w = author_width
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all preview rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_preview_rows(row: usize, items: &[PreviewRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_preview_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single preview row at the specified row position.
///
/// Displays one book with:
/// - TITLE column (fixed width, left-aligned)
/// - AUTHOR column (remaining width, left-aligned)
/// - YEAR column (accent colored unless selected)
/// - Selection highlighting (full row background)
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_preview_row(row: usize, item: &PreviewRow, theme: &Theme, cols: usize) -> usize {
    let author_width = author_column_width(cols);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let title_len = item.title.chars().count().min(TITLE_COLUMN_WIDTH);
    print!("{}", item.title);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    let author_len = item.author.chars().count().min(author_width);
    print!("{}", item.author);
    print!("{}", " ".repeat(author_width.saturating_sub(author_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    }
    print!("{}", item.year);

    let line_len = TITLE_COLUMN_WIDTH + author_width + item.year.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Width of the flexible AUTHOR column for the given terminal width.
fn author_column_width(cols: usize) -> usize {
    cols.saturating_sub(TITLE_COLUMN_WIDTH + YEAR_COLUMN_WIDTH)
}
