//! Domain layer for the Bookstall widget.
//!
//! This module contains the core domain types for the widget, independent of
//! terminal rendering or dataset file formats. It keeps the book model and its
//! lookup tables isolated from infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book domain model and operations
//! - [`directory`]: Ordered id/name lookup tables for authors and genres
//!
//! # Examples
//!
//! ```
//! use bookstall::domain::{Book, Directory, Result};
//! use std::collections::HashMap;
//!
//! fn author_directory() -> Result<Directory> {
//!     let mut map = HashMap::new();
//!     map.insert("melville".to_string(), "Herman Melville".to_string());
//!     Ok(Directory::new(map))
//! }
//! ```

pub mod book;
pub mod directory;
pub mod error;

pub use book::Book;
pub use directory::{Directory, UNKNOWN_NAME};
pub use error::{BookstallError, Result};
