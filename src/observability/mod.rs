//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides tracing infrastructure for the application, using
//! the OpenTelemetry OTLP format with file-based exporting. Traces are
//! written to JSON files for offline analysis and debugging.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → JSON file
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces land in `bookstall-otlp.json` under the
//!   platform data directory (`~/.local/share/bookstall` on Linux)
//! - **Automatic Rotation**: Files rotate at 8 MiB with 2-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON documents
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the process lifecycle:
//!
//! ```rust
//! use bookstall::observability::init_tracing;
//! use bookstall::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("catalog browser starting");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`export`]: OTLP serialization plus the rotating file exporter

mod export;
mod init;

pub use init::init_tracing;
