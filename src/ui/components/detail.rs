//! Detail component renderer.
//!
//! This module renders the body of the single-book detail overlay: title,
//! author line, wrapped description, and cover location.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Left indent for all detail body lines.
const DETAIL_INDENT: usize = 2;

/// Renders the detail body starting at the specified row.
///
/// Layout structure:
/// ```text
/// [indent] Title (bold, accent)
/// [indent] Author (Year) (dimmed)
/// [blank line]
/// [indent] Description lines (pre-wrapped by the view model)
/// [blank line]
/// [indent] Cover: <url> (dimmed)
/// ```
///
/// # Returns
///
/// The next available row position
pub fn render_detail_body(row: usize, view: &DetailView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(DETAIL_INDENT));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{}", clip_line(&view.title, cols));
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(DETAIL_INDENT));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", clip_line(&view.subtitle, cols));
    print!("{}", Theme::reset());
    current_row += 2; // Blank line after the subtitle

    for line in &view.description {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(DETAIL_INDENT));
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", clip_line(line, cols));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1; // Blank line before the cover

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(DETAIL_INDENT));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", clip_line(&format!("Cover: {}", view.cover_url), cols));
    print!("{}", Theme::reset());
    current_row + 1
}

/// Clips a line to the printable width after the indent.
fn clip_line(text: &str, cols: usize) -> String {
    let width = cols.saturating_sub(DETAIL_INDENT);
    text.chars().take(width).collect()
}
