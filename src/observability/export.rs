//! File-based OTLP span export with size-bounded rotation.
//!
//! This module implements a custom `SpanExporter` that serializes spans to
//! OTLP (OpenTelemetry Protocol) JSON and appends them to a rotating file
//! instead of sending them over the network. Each written line is a complete
//! OTLP document, so the output can be fed to standard trace tooling.

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::Value as JsonValue;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Maximum trace file size before rotation (8 MiB).
const MAX_TRACE_FILE_BYTES: u64 = 8 * 1024 * 1024;

/// Number of rotated trace files to retain.
const MAX_TRACE_BACKUPS: usize = 2;

/// Instrumentation scope name recorded in every OTLP document.
const SCOPE_NAME: &str = "bookstall";

/// Thread-safe appending file writer with size-based rotation.
///
/// When the file exceeds its size limit it is renamed with a Unix timestamp
/// suffix and a fresh file is started. Rotated files beyond the retention
/// limit are pruned, oldest first, so trace output cannot grow without
/// bound.
///
/// The file handle is opened lazily on the first append, so construction
/// always succeeds.
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<fs::File>>,
}

impl RollingFile {
    /// Creates a rolling writer with the default trace file limits.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_TRACE_FILE_BYTES, MAX_TRACE_BACKUPS)
    }

    const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line to the file, rotating first when the size limit has
    /// been passed. The line is flushed to disk before returning.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be rotated,
    /// opened, or written.
    pub fn append_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| std::io::Error::other(format!("writer lock poisoned: {e}")))?;

        self.rotate_if_needed(&mut handle)?;

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::other("no trace file available"))?;

        writeln!(file, "{line}")?;
        file.flush()?;

        Ok(())
    }

    fn rotate_if_needed(&self, handle: &mut Option<fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.path) {
            if metadata.len() > self.max_bytes {
                *handle = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.json.<unix_timestamp>` and prunes
    /// rotated files beyond the retention limit.
    fn rotate(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let backup_path = self.path.with_extension(format!("json.{timestamp}"));

        if self.path.exists() {
            fs::rename(&self.path, &backup_path)?;
        }

        self.prune_backups()
    }

    /// Deletes rotated files beyond the retention limit, newest kept first.
    /// Individual deletion failures are ignored so pruning always makes
    /// progress.
    fn prune_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .path
            .parent()
            .ok_or_else(|| std::io::Error::other("trace file has no parent directory"))?;

        let file_stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::other("trace file has no valid name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RollingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Span exporter writing OTLP JSON lines to a [`RollingFile`].
struct OtlpFileExporter {
    writer: RollingFile,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl OtlpFileExporter {
    fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: RollingFile::new(file_path),
            resource,
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let document = otlp_batch(&self.resource, &batch).to_string();

        match self.writer.append_line(&document) {
            Ok(()) => Box::pin(std::future::ready(Ok(()))),
            Err(e) => Box::pin(std::future::ready(Err(TraceError::from(e.to_string())))),
        }
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        self.resource = res.clone();
    }
}

impl std::fmt::Debug for OtlpFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFileExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider that exports spans to the given file.
///
/// The provider uses a simple (immediate, non-batched) export strategy so
/// spans land on disk as they close.
#[must_use]
pub fn file_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

/// Formats a batch of spans as one complete OTLP JSON document.
///
/// The document carries the resource attributes, a single instrumentation
/// scope, and the span array:
///
/// ```json
/// {
///   "resourceSpans": [{
///     "resource": {
///       "attributes": [{"key": "service.name", "value": {"stringValue": "bookstall"}}]
///     },
///     "scopeSpans": [{
///       "scope": {"name": "bookstall"},
///       "spans": []
///     }]
///   }]
/// }
/// ```
fn otlp_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(k, v)| {
            serde_json::json!({
                "key": k.to_string(),
                "value": otlp_value(v)
            })
        })
        .collect();

    let spans_json: Vec<JsonValue> = batch.iter().map(otlp_span).collect();

    serde_json::json!({
        "resourceSpans": [{
            "resource": {
                "attributes": resource_attrs
            },
            "scopeSpans": [{
                "scope": {
                    "name": SCOPE_NAME,
                },
                "spans": spans_json
            }]
        }]
    })
}

/// Formats a single span as OTLP JSON.
///
/// IDs become hex strings (trace id 32 chars, span id 16), timestamps become
/// nanoseconds since the Unix epoch, and the status code maps to the OTLP
/// integers (0 = unset, 1 = ok, 2 = error).
fn otlp_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = otlp_status(&span.status);

    serde_json::json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": otlp_attributes(&span.attributes),
        "events": otlp_events(&span.events),
        "links": otlp_links(&span.links),
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

const fn span_kind_code(kind: &opentelemetry::trace::SpanKind) -> u8 {
    match kind {
        opentelemetry::trace::SpanKind::Internal => 1,
        opentelemetry::trace::SpanKind::Server => 2,
        opentelemetry::trace::SpanKind::Client => 3,
        opentelemetry::trace::SpanKind::Producer => 4,
        opentelemetry::trace::SpanKind::Consumer => 5,
    }
}

fn otlp_attributes(attributes: &[opentelemetry::KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| {
            serde_json::json!({
                "key": kv.key.to_string(),
                "value": otlp_value(&kv.value)
            })
        })
        .collect()
}

/// Maps an attribute value to its OTLP JSON representation. Integers are
/// strings per the OTLP encoding; arrays fall back to their debug rendering.
fn otlp_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => serde_json::json!({ "boolValue": b }),
        Value::I64(i) => serde_json::json!({ "intValue": i.to_string() }),
        Value::F64(f) => serde_json::json!({ "doubleValue": f }),
        Value::String(s) => serde_json::json!({ "stringValue": s.to_string() }),
        Value::Array(_) => serde_json::json!({ "stringValue": format!("{value:?}") }),
    }
}

fn otlp_events(events: &[opentelemetry::trace::Event]) -> Vec<JsonValue> {
    events
        .iter()
        .map(|event| {
            serde_json::json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": otlp_attributes(&event.attributes),
            })
        })
        .collect()
}

fn otlp_links(links: &[opentelemetry::trace::Link]) -> Vec<JsonValue> {
    links
        .iter()
        .map(|link| {
            serde_json::json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": otlp_attributes(&link.attributes),
            })
        })
        .collect()
}

fn otlp_status(status: &opentelemetry::trace::Status) -> (u8, String) {
    match status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: std::time::SystemTime) -> String {
    time.duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn append_creates_the_file_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");

        let writer = RollingFile::new(path.clone());
        assert!(!path.exists());

        writer.append_line("{\"spans\":[]}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"spans\":[]}\n");
    }

    #[test]
    fn oversized_files_rotate_and_old_backups_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = RollingFile::with_limits(path.clone(), 64, 1);

        let line = "x".repeat(40);
        for _ in 0..6 {
            writer.append_line(&line).unwrap();
        }

        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() <= 64 + 41);

        let backups: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".json."))
            .collect();
        assert!(!backups.is_empty());
        assert!(backups.len() <= 1);
    }

    #[test]
    fn otlp_values_map_to_their_wire_types() {
        use opentelemetry::Value;

        assert_eq!(
            otlp_value(&Value::Bool(true)),
            serde_json::json!({ "boolValue": true })
        );
        assert_eq!(
            otlp_value(&Value::I64(42)),
            serde_json::json!({ "intValue": "42" })
        );
        assert_eq!(
            otlp_value(&Value::F64(2.5)),
            serde_json::json!({ "doubleValue": 2.5 })
        );
        assert_eq!(
            otlp_value(&Value::String("browse".into())),
            serde_json::json!({ "stringValue": "browse" })
        );
    }

    #[test]
    fn empty_batches_still_carry_the_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "bookstall")]);

        let document = otlp_batch(&resource, &[]);

        let attrs = &document["resourceSpans"][0]["resource"]["attributes"];
        assert_eq!(attrs[0]["key"], "service.name");
        assert_eq!(attrs[0]["value"]["stringValue"], "bookstall");

        let spans = &document["resourceSpans"][0]["scopeSpans"][0]["spans"];
        assert!(spans.as_array().unwrap().is_empty());
        assert_eq!(
            document["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"],
            "bookstall"
        );
    }
}
