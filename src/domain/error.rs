//! Error types for the Bookstall widget.
//!
//! This module defines the centralized error type [`BookstallError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Bookstall operations.
///
/// This enum consolidates all error conditions that can occur while loading and
/// presenting a catalog, from dataset parsing to I/O failures and configuration
/// issues. The I/O variant wraps the underlying error using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use bookstall::domain::BookstallError;
///
/// fn validate_config() -> Result<(), BookstallError> {
///     Err(BookstallError::Config("page size must be positive".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BookstallError {
    /// Catalog dataset could not be loaded or is malformed.
    ///
    /// Occurs when the catalog file cannot be parsed, or when its contents
    /// violate a structural rule such as unique book identifiers. The string
    /// contains a description of what went wrong.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML contents cannot be
    /// deserialized. The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookstall operations.
///
/// This is a type alias for `std::result::Result<T, BookstallError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use bookstall::domain::Result;
///
/// fn check_catalog() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, BookstallError>;
