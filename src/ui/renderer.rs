//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It dispatches on the
//! active screen (browse, search, settings, detail).
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiView`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenView, UiView};

/// Renders the widget UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// layout for the active screen.
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!` macros. Does not clear
/// the screen or flush; the host shell owns both.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let view = state.compute_view(rows, cols);

    render_view(&view, &state.theme, rows, cols);
}

/// Renders a view model with screen-specific layout.
fn render_view(view: &UiView, theme: &Theme, rows: usize, cols: usize) {
    match &view.body {
        ScreenView::Browse(browse) => {
            components::render_browse_screen(&view.header, &view.footer, browse, theme, cols, rows);
        }
        ScreenView::Search(search) => {
            components::render_search_screen(&view.header, &view.footer, search, theme, cols, rows);
        }
        ScreenView::Settings(settings) => {
            components::render_settings_screen(
                &view.header,
                &view.footer,
                settings,
                theme,
                cols,
                rows,
            );
        }
        ScreenView::Detail(detail) => {
            components::render_detail_screen(&view.header, &view.footer, detail, theme, cols, rows);
        }
    }
}
