//! Line-mode shell and entry point.
//!
//! This module provides the thin integration layer between the Bookstall
//! library and the terminal. It reads one command per line from stdin,
//! translates it into a library [`Event`] for the active screen, and repaints
//! the screen whenever the state changed.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Terminal              │
//! │  ┌──────────────────┐   │
//! │  │  stdin lines     │   │  ← command parsing (parse_line)
//! │  └──────────────────┘   │
//! │          │              │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  AppState        │   │  ← handle_event, view models
//! │  └──────────────────┘   │
//! │          │              │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  ANSI rendering  │   │  ← full repaint per change
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Shell Lifecycle
//!
//! 1. **Start**: Parse flags, initialize tracing, load the catalog
//! 2. **Paint**: Clear the screen and draw the browse screen
//! 3. **Loop**: Read a line, map it to events, apply them, repaint on change
//! 4. **Quit**: `q` (or stdin EOF) leaves the loop
//!
//! # Command Language
//!
//! Lines are translated per screen; unknown lines are ignored.
//!
//! On the browse screen:
//! - `j` / `k`: Move the selection down / up
//! - `m`: Show more previews
//! - empty line: Open the selected book
//! - `open <id>`: Open a book by catalog id
//! - `/`: Open the filter form
//! - `s`: Open the theme settings
//! - `q`: Quit
//!
//! On the filter form:
//! - `title <text>` / `author <text>` / `genre <text>`: Focus a field and
//!   replace its text (bare field name only focuses)
//! - `set <text>`: Replace the focused field's text
//! - `clear`: Clear the focused field
//! - `tab` / `back`: Focus the next / previous field
//! - `j` / `k`: Move the picker cursor on the author and genre fields
//! - empty line: Apply the filters
//! - `esc`: Cancel without applying
//!
//! On the settings screen:
//! - `j` / `k`: Move between themes
//! - empty line: Apply the selected theme
//! - `esc`: Back to the list
//!
//! On the detail screen:
//! - empty line or `esc`: Back to the list
//!
//! # Screen Size
//!
//! The repaint area comes from `--rows` and `--cols`, falling back to the
//! `LINES` and `COLUMNS` environment variables, then to 24x80.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::io::{self, BufRead, Write};

use bookstall::ui::helpers::position_cursor;
use bookstall::{handle_event, initialize, Action, AppState, Config, Event, Screen, SearchField};

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

/// Browse a book catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "bookstall", version, about)]
struct Cli {
    /// Path to a JSON catalog file (defaults to the embedded catalog)
    #[arg(long)]
    catalog: Option<String>,

    /// Book previews per page, overriding the catalog's setting
    #[arg(long)]
    page_size: Option<usize>,

    /// Built-in theme name (day or night)
    #[arg(long)]
    theme: Option<String>,

    /// Path to a custom TOML theme file
    #[arg(long)]
    theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,

    /// Rows to render (defaults to $LINES, then 24)
    #[arg(long)]
    rows: Option<usize>,

    /// Columns to render (defaults to $COLUMNS, then 80)
    #[arg(long)]
    cols: Option<usize>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            catalog_file: self.catalog.clone(),
            page_size: self.page_size,
            theme_name: self.theme.clone(),
            theme_file: self.theme_file.clone(),
            trace_level: self.trace_level.clone(),
        }
    }

    fn terminal_size(&self) -> (usize, usize) {
        (
            dimension(self.rows, "LINES", DEFAULT_ROWS),
            dimension(self.cols, "COLUMNS", DEFAULT_COLS),
        )
    }
}

/// Resolves one screen dimension: explicit flag, then environment, then the
/// fallback. Zero values fall back too since nothing can be drawn in them.
fn dimension(explicit: Option<usize>, env_var: &str, fallback: usize) -> usize {
    explicit
        .or_else(|| std::env::var(env_var).ok().and_then(|v| v.parse().ok()))
        .filter(|&v| v > 0)
        .unwrap_or(fallback)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> bookstall::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    bookstall::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let guard = span.entered();
    tracing::debug!(catalog = ?config.catalog_file, "shell starting");
    let mut state = initialize(&config)?;
    drop(guard);

    let (rows, cols) = cli.terminal_size();
    draw(&state, rows, cols)?;

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut redraw = false;
        let mut quit = false;
        for event in parse_line(&line, state.screen) {
            let (changed, actions) = handle_event(&mut state, &event)?;
            redraw = redraw || changed;
            quit = quit || actions.contains(&Action::Quit);
        }

        if quit {
            break;
        }
        if redraw {
            draw(&state, rows, cols)?;
        } else {
            prompt(rows)?;
        }
    }

    position_cursor(rows, 1);
    println!();
    Ok(())
}

/// Clears the screen, paints the active screen, and leaves the cursor on the
/// prompt row.
fn draw(state: &AppState, rows: usize, cols: usize) -> io::Result<()> {
    print!("\u{1b}[2J");
    bookstall::ui::render(state, rows, cols);
    prompt(rows)
}

/// Prints the command prompt on the last row and flushes the frame out.
fn prompt(rows: usize) -> io::Result<()> {
    position_cursor(rows, 1);
    print!("> ");
    io::stdout().flush()
}

/// Translates one input line into events for the active screen.
///
/// An empty line confirms: it opens the selection on the browse screen and
/// submits the active overlay everywhere else. Unknown lines translate to no
/// events at all.
fn parse_line(line: &str, screen: Screen) -> Vec<Event> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return match screen {
            Screen::Browse => vec![Event::Select],
            _ => vec![Event::Submit],
        };
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    match (screen, command) {
        (_, "q" | "quit") => vec![Event::Quit],

        (Screen::Browse, "j" | "down") => vec![Event::MoveDown],
        (Screen::Browse, "k" | "up") => vec![Event::MoveUp],
        (Screen::Browse, "m" | "more") => vec![Event::ShowMore],
        (Screen::Browse, "/" | "filter") => vec![Event::OpenSearch],
        (Screen::Browse, "s" | "settings") => vec![Event::OpenSettings],
        (Screen::Browse, "open") if !rest.is_empty() => vec![Event::OpenBook {
            id: rest.to_string(),
        }],

        (Screen::Search(_), "tab") => vec![Event::NextField],
        (Screen::Search(_), "back") => vec![Event::PrevField],
        (Screen::Search(_), "clear") => vec![Event::ClearInput],
        (Screen::Search(_), "j") => vec![Event::MoveDown],
        (Screen::Search(_), "k") => vec![Event::MoveUp],
        (Screen::Search(_), "title") => focus_and_type(SearchField::Title, rest),
        (Screen::Search(_), "author") => focus_and_type(SearchField::Author, rest),
        (Screen::Search(_), "genre") => focus_and_type(SearchField::Genre, rest),
        (Screen::Search(_), "set") => vec![Event::Input(rest.to_string())],

        (Screen::Settings, "j" | "down") => vec![Event::MoveDown],
        (Screen::Settings, "k" | "up") => vec![Event::MoveUp],

        (Screen::Search(_) | Screen::Settings | Screen::Detail, "esc") => vec![Event::Cancel],

        _ => Vec::new(),
    }
}

fn focus_and_type(field: SearchField, text: &str) -> Vec<Event> {
    if text.is_empty() {
        vec![Event::FocusField(field)]
    } else {
        vec![Event::FocusField(field), Event::Input(text.to_string())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_commands_map_to_their_events() {
        assert_eq!(parse_line("j", Screen::Browse), vec![Event::MoveDown]);
        assert_eq!(parse_line("m", Screen::Browse), vec![Event::ShowMore]);
        assert_eq!(parse_line("", Screen::Browse), vec![Event::Select]);
        assert_eq!(
            parse_line("open dracula", Screen::Browse),
            vec![Event::OpenBook {
                id: "dracula".to_string()
            }]
        );
        assert_eq!(parse_line("/", Screen::Browse), vec![Event::OpenSearch]);
        assert_eq!(parse_line("q", Screen::Browse), vec![Event::Quit]);
    }

    #[test]
    fn search_commands_drive_the_form() {
        let search = Screen::Search(SearchField::Title);

        assert_eq!(
            parse_line("title emma", search),
            vec![
                Event::FocusField(SearchField::Title),
                Event::Input("emma".to_string())
            ]
        );
        assert_eq!(
            parse_line("author", search),
            vec![Event::FocusField(SearchField::Author)]
        );
        assert_eq!(
            parse_line("set drac", search),
            vec![Event::Input("drac".to_string())]
        );
        assert_eq!(parse_line("tab", search), vec![Event::NextField]);
        assert_eq!(parse_line("", search), vec![Event::Submit]);
        assert_eq!(parse_line("esc", search), vec![Event::Cancel]);
    }

    #[test]
    fn settings_and_detail_lines_confirm_or_dismiss() {
        assert_eq!(parse_line("j", Screen::Settings), vec![Event::MoveDown]);
        assert_eq!(parse_line("", Screen::Settings), vec![Event::Submit]);
        assert_eq!(parse_line("esc", Screen::Detail), vec![Event::Cancel]);
        assert_eq!(parse_line("", Screen::Detail), vec![Event::Submit]);
    }

    #[test]
    fn unknown_lines_translate_to_nothing() {
        assert!(parse_line("zzz", Screen::Browse).is_empty());
        assert!(parse_line("open", Screen::Browse).is_empty());
        assert!(parse_line("tab", Screen::Browse).is_empty());
        assert!(parse_line("esc", Screen::Browse).is_empty());
    }

    #[test]
    fn explicit_dimensions_win_over_the_environment() {
        assert_eq!(dimension(Some(50), "BOOKSTALL_NO_SUCH_VAR", 24), 50);
        assert_eq!(dimension(Some(0), "BOOKSTALL_NO_SUCH_VAR", 24), 24);
        assert_eq!(dimension(None, "BOOKSTALL_NO_SUCH_VAR", 80), 80);
    }

    #[test]
    fn flags_land_in_the_config() {
        let cli = Cli {
            catalog: Some("~/books.json".to_string()),
            page_size: Some(10),
            theme: Some("day".to_string()),
            theme_file: None,
            trace_level: Some("debug".to_string()),
            rows: None,
            cols: None,
        };

        let config = cli.config();
        assert_eq!(config.catalog_file.as_deref(), Some("~/books.json"));
        assert_eq!(config.page_size, Some(10));
        assert_eq!(config.theme_name.as_deref(), Some("day"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }
}
