//! Word Export Service - renders the block sequence into a .docx.
//!
//! Implements the `ArtifactExporter` port over `docx-rs`. The block
//! assembly lives in [`super::blocks`] and stays pure; this adapter only
//! translates blocks into paragraphs and packs the archive into bytes.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run};

use super::blocks::{document_blocks, export_filename, DocBlock};
use crate::domain::research::ResearchArtifact;
use crate::ports::{ArtifactExporter, ExportError, ExportedDocument};

/// Exporter producing the fixed-structure Word document.
#[derive(Debug, Clone, Default)]
pub struct WordExportService;

impl WordExportService {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactExporter for WordExportService {
    fn export(&self, artifact: &ResearchArtifact) -> Result<ExportedDocument, ExportError> {
        let blocks = document_blocks(artifact);
        let bytes = render_docx(&blocks)?;
        Ok(ExportedDocument::docx(bytes, export_filename(&artifact.title)))
    }
}

/// Packs the block sequence into .docx bytes.
fn render_docx(blocks: &[DocBlock]) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new();
    for block in blocks {
        docx = docx.add_paragraph(paragraph_for(block));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::render(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Translates one block into a paragraph, turning embedded `\n` into
/// explicit line breaks within the run.
fn paragraph_for(block: &DocBlock) -> Paragraph {
    if block.is_spacer() {
        return Paragraph::new();
    }

    let mut run = Run::new();
    for (index, line) in block.text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    if let Some(size) = block.size {
        run = run.size(size);
    }
    if block.bold {
        run = run.bold();
    }
    Paragraph::new().add_run(run)
}
