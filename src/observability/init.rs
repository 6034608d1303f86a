//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used across the crate to the file-based OTLP
//! exporter, so every instrumented operation leaves a span on disk.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG`, when set in the environment
/// 2. `config.trace_level`, when configured
/// 3. Default: `"info"`
///
/// # File Location
///
/// Traces are written to `bookstall-otlp.json` in the platform data
/// directory (`~/.local/share/bookstall` on Linux). The file rotates once it
/// exceeds its size limit and two timestamped backups are retained.
///
/// # Initialization Behavior
///
/// - Creates the data directory when it does not exist
/// - Silently does nothing when no data directory is available or it cannot
///   be created (observability is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use bookstall::observability::init_tracing;
/// use bookstall::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let Some(data_dir) = crate::infrastructure::paths::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "bookstall",
    )]);

    let trace_file = data_dir.join("bookstall-otlp.json");
    let provider = export::file_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("bookstall");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer);

    let _ = subscriber.try_init();
}
