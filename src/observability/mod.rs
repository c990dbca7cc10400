//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans land in `/data/reelsearch-otlp.json`, the plugin's private data
//! directory, one OTLP/JSON document per line. The file rotates at 5 MiB
//! into `.1` to `.3`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and OTLP/JSON encoding
//! - [`file_writer`]: size-capped writer with numbered backups

pub mod exporter;
pub mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
