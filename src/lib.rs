//! Bookstall: a terminal widget for browsing an in-memory book catalog.
//!
//! Bookstall is a small line-mode terminal application that provides:
//! - Paged browsing over an immutable book catalog with stable ordering
//! - A filter form combining a title search with fuzzy author and genre pickers
//! - Incremental "show more" paging that appends previews page by page
//! - A detail screen for the selected book with wrapped description text
//! - Switchable built-in color themes plus custom TOML theme files
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Line-Mode Shell (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Dataset Layer │
//! │ (ui/)         │   │ (catalog/)    │   │ (dataset/)    │
//! │ - Rendering   │   │ - Filtering   │   │ - JSON load   │
//! │ - Theming     │   │ - Paging      │   │ - Validation  │
//! │ - Components  │   │ - Lookup      │   │ - Source API  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book model and directories (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Filtering and paging over the loaded catalog
//! - [`dataset`]: Catalog sources and the JSON wire format
//! - [`domain`]: Core domain types (Book, directories, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The application is configured via command-line flags:
//!
//! ```text
//! bookstall --catalog ~/books/catalog.json --page-size 10 --theme day
//! ```
//!
//! Every flag is optional. Without any, the embedded catalog is browsed with
//! its own page size and the default theme.
//!
//! # Initialization Flow
//!
//! 1. **Process Start** (`main.rs`):
//!    - Parse command-line flags into a [`Config`]
//!    - Initialize tracing (optional)
//!    - Load the catalog and create an [`AppState`] via [`initialize`]
//!
//! 2. **Event Loop**:
//!    - Read one command line from stdin
//!    - Translate it into an [`Event`] for the current screen
//!    - Apply it with [`handle_event`], redraw when the state changed
//!
//! 3. **UI Rendering**:
//!    - Compute the view model from state
//!    - Render components (header, previews, form, footer)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use bookstall::{handle_event, initialize, Config, Event};
//!
//! // Browse the embedded catalog with default settings.
//! let config = Config::default();
//! let mut state = initialize(&config)?;
//!
//! let (redraw, actions) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), bookstall::BookstallError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Stable-Order Filtering
//!
//! Filtering never reorders the catalog:
//! - Matching books keep their relative catalog order
//! - Re-running the same filter yields byte-identical pages
//! - Paging appends, so earlier previews never move under the cursor
//!
//! ## Read-Only Catalog
//!
//! The catalog is loaded once at startup and never written back:
//! - No persistence layer or cache invalidation to reason about
//! - Filter state lives entirely in [`AppState`]
//! - Swapping datasets means pointing `--catalog` at another file
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (fuzzy match highlighting)
//!
//! # Platform Support
//!
//! - **OS Support**: Linux, macOS, Windows (via data directory detection)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod dataset;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Screen, SearchField};
pub use domain::{Book, BookstallError, Result};
pub use ui::Theme;

use crate::dataset::{CatalogSource, JsonCatalog};

/// Application configuration assembled from command-line flags.
///
/// Every field is optional; [`initialize`] falls back to the embedded
/// catalog, the catalog's own page size, and the default theme for anything
/// left unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a JSON catalog file. A leading `~` is expanded to the home
    /// directory. Default: the catalog embedded in the binary.
    pub catalog_file: Option<String>,

    /// Number of book previews per page, overriding the catalog's own
    /// setting. Must be positive.
    pub page_size: Option<usize>,

    /// Built-in theme name to use. Options: `day`, `night`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

/// Initializes the application with configuration.
///
/// Loads the catalog (from `catalog_file` or the embedded dataset), resolves
/// the theme (from file, name, or default), and assembles an [`AppState`]
/// with the first page of previews already visible.
///
/// Theme resolution never fails: an unreadable theme file or unknown theme
/// name is logged and the default theme used instead.
///
/// # Errors
///
/// Returns an error when a configured page size is zero, or when the catalog
/// cannot be read or fails validation.
///
/// # Example
///
/// ```rust
/// use bookstall::{initialize, Config};
///
/// let config = Config {
///     page_size: Some(4),
///     ..Default::default()
/// };
///
/// let state = initialize(&config)?;
/// assert_eq!(state.visible.len(), 4);
/// # Ok::<(), bookstall::BookstallError>(())
/// ```
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing bookstall");

    if config.page_size == Some(0) {
        return Err(BookstallError::Config(
            "page size must be positive".to_string(),
        ));
    }

    let source = config.catalog_file.as_ref().map_or_else(
        JsonCatalog::embedded,
        |path| JsonCatalog::from_file(infrastructure::expand_tilde(path)),
    );

    let mut catalog = source.load()?;
    if let Some(size) = config.page_size {
        catalog.page_size = size;
    }

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    Ok(AppState::new(catalog, theme))
}
