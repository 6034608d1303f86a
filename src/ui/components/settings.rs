//! Settings component renderer.
//!
//! This module renders the theme picker rows shown on the settings overlay.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ThemeOption;

/// Renders all theme option rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of options)
pub fn render_theme_options(
    row: usize,
    options: &[ThemeOption],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for option in options {
        current_row = render_theme_option(current_row, option, theme, cols);
    }
    current_row
}

/// Renders a single theme option row.
///
/// Displays one selectable theme with:
/// - An accent-colored `* ` marker when the theme is currently applied
/// - Selection highlighting (full row background) on the cursor row
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_theme_option(row: usize, option: &ThemeOption, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("  ");

    if option.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if option.is_active {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("* ");
        if option.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!("  ");
    }

    print!("{}", option.name);

    let line_len = 4 + option.name.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
