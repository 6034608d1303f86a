//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host shell (main.rs) and the domain/catalog/dataset layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Redraw + Actions
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen and form focus state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use bookstall::app::{handle_event, AppState, Event};
//! use bookstall::dataset::{CatalogSource, JsonCatalog};
//! use bookstall::ui::Theme;
//!
//! let catalog = JsonCatalog::embedded().load()?;
//! let mut state = AppState::new(catalog, Theme::default());
//! let (redraw, _actions) = handle_event(&mut state, &Event::MoveDown)?;
//! assert!(redraw);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Screen, SearchField};
pub use state::{AppState, PickerState, SearchForm};
