//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating per-user directories and
//! normalizing user-supplied paths.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
