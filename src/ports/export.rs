//! Export Ports - artifact serialization and the save-as-file collaborator.
//!
//! Export is a purely local pipeline: an [`ArtifactExporter`] turns an
//! artifact into document bytes plus a derived filename, and a
//! [`DocumentSink`] hands the bytes to whatever "save as file" primitive
//! the host environment offers. Export failures are fatal to the export
//! action only; they never touch generation or save state.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::research::ResearchArtifact;

/// MIME type of the exported Word document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A rendered document ready to be written out.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The document bytes.
    pub content: Vec<u8>,
    /// Suggested filename, derived deterministically from the artifact title.
    pub filename: String,
    /// MIME content type of `content`.
    pub content_type: String,
}

impl ExportedDocument {
    /// Creates a .docx export.
    pub fn docx(content: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            content,
            filename: filename.into(),
            content_type: DOCX_CONTENT_TYPE.to_string(),
        }
    }
}

/// Errors that can occur while exporting an artifact.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// The document could not be rendered into bytes.
    #[error("document rendering failed: {0}")]
    Render(String),

    /// The sink could not write the rendered document.
    #[error("failed to save document: {0}")]
    Io(String),
}

impl ExportError {
    /// Creates a rendering error.
    pub fn render(reason: impl Into<String>) -> Self {
        Self::Render(reason.into())
    }

    /// Creates an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

/// Port for serializing an artifact into a portable document.
///
/// # Contract
///
/// Implementations must:
/// - Emit the fixed block sequence (title, topic, summary, references)
/// - Keep reference order identical to `artifact.citations`
/// - Derive the filename deterministically from the title
/// - Never mutate the artifact
pub trait ArtifactExporter: Send + Sync {
    /// Renders the artifact into document bytes and a filename.
    fn export(&self, artifact: &ResearchArtifact) -> Result<ExportedDocument, ExportError>;
}

/// Port for the local "save as file" primitive.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Writes the document under its suggested filename.
    async fn save_as(&self, document: &ExportedDocument) -> Result<(), ExportError>;
}
