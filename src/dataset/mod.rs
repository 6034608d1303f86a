//! Catalog loading: wire formats and sources.
//!
//! The dataset layer is the only part of the crate that knows how catalogs are
//! stored. It hands the app layer a validated [`LoadedCatalog`] and is never
//! consulted again; the catalog is read-only for the life of the process.
//!
//! # Organization
//!
//! - [`records`]: Serde types matching the catalog file layout
//! - [`source`]: The [`CatalogSource`] trait and its loaded-catalog output
//! - [`json`]: JSON file and embedded-catalog source implementation

pub mod json;
pub mod records;
pub mod source;

pub use json::JsonCatalog;
pub use records::{BookEntry, CatalogFile};
pub use source::{CatalogSource, LoadedCatalog};
