//! ExportArtifact - serialize a generated artifact and hand it to the
//! local save-as-file collaborator.
//!
//! Failures here are fatal to the export action only; the artifact and the
//! submission flow are untouched.

use std::sync::Arc;

use tracing::debug;

use crate::domain::research::ResearchArtifact;
use crate::ports::{ArtifactExporter, DocumentSink, ExportError, ExportedDocument};

/// Handler for the "Export to Word" action.
pub struct ExportArtifact {
    exporter: Arc<dyn ArtifactExporter>,
    sink: Arc<dyn DocumentSink>,
}

impl ExportArtifact {
    pub fn new(exporter: Arc<dyn ArtifactExporter>, sink: Arc<dyn DocumentSink>) -> Self {
        Self { exporter, sink }
    }

    /// Renders the artifact and writes it through the sink.
    ///
    /// Returns the exported document so the caller can show the filename.
    pub async fn handle(
        &self,
        artifact: &ResearchArtifact,
    ) -> Result<ExportedDocument, ExportError> {
        let document = self.exporter.export(artifact)?;
        debug!(filename = %document.filename, bytes = document.content.len(), "exporting artifact");
        self.sink.save_as(&document).await?;
        Ok(document)
    }
}
