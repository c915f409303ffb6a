//! Document Adapters - export pipeline implementations.
//!
//! - `blocks` - pure block assembly and filename derivation
//! - `WordExportService` - `ArtifactExporter` over docx-rs
//! - `LocalFileSink` - `DocumentSink` writing to a local directory

pub mod blocks;
mod local_file_sink;
mod word_export;

pub use local_file_sink::LocalFileSink;
pub use word_export::WordExportService;
