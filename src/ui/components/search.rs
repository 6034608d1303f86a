//! Filter form component renderer.
//!
//! This module renders the search overlay's boxed input fields and the
//! dropdown rows of the focused picker.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FieldView, PickerRow};

/// Horizontal margin for form field boxes (spaces on left and right).
const FIELD_BOX_MARGIN: usize = 5;

/// Renders one boxed form field at the specified row.
///
/// Displays a 3-line bordered box containing the field label and its current
/// value. The box is horizontally centered with margins on both sides.
///
/// # Returns
///
/// The next available row position (row + 3, since a field box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Author: brontë   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The box width is calculated as `cols - (2 * FIELD_BOX_MARGIN)`. The inner
/// content width is `box_width - 2` (accounting for left and right borders).
///
/// # Rendering Details
///
/// - The focused field's borders use the theme `overlay_border` color;
///   unfocused fields use the plain `border` color
/// - The value text uses the theme `text_normal` color
/// - The value is displayed as " {label}: {value}"
/// - Right padding fills remaining space to the box edge
pub fn render_form_field(row: usize, field: &FieldView, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FIELD_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if field.is_focused {
        &theme.colors.overlay_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let field_text = format!(" {}: {}", field.label, field.value);
    let padding = inner_width.saturating_sub(field_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{field_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the focused picker's dropdown rows starting at the specified row.
///
/// Each row shows one narrowed option, indented to line up with the field
/// boxes above. The cursor row uses selection colors; typeahead matches are
/// highlighted on the other rows.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_picker_rows(row: usize, items: &[PickerRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_picker_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single dropdown row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_picker_row(row: usize, item: &PickerRow, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(FIELD_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(FIELD_BOX_MARGIN + 1));

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    helpers::render_highlighted_text(&item.name, &item.highlights, theme, item.is_selected);

    let name_len = item.name.chars().count() + 1;
    print!("{}", " ".repeat(inner_width.saturating_sub(name_len)));

    print!("{}", Theme::reset());
    row + 1
}
