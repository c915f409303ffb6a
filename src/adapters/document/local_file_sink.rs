//! Local File Sink - writes exported documents to a directory.
//!
//! The desktop counterpart of the browser's save-as dialog. Uses a
//! write-to-temp-then-rename pattern so a crash mid-write never leaves a
//! truncated document under the final name.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::ports::{DocumentSink, ExportError, ExportedDocument};

/// Document sink writing into a fixed output directory.
#[derive(Debug, Clone)]
pub struct LocalFileSink {
    output_dir: PathBuf,
}

impl LocalFileSink {
    /// Creates a sink rooted at `output_dir`; the directory is created on
    /// first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn target_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    fn temp_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(format!("{}.tmp", filename))
    }
}

#[async_trait]
impl DocumentSink for LocalFileSink {
    async fn save_as(&self, document: &ExportedDocument) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            ExportError::io(format!(
                "failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let temp = self.temp_path(&document.filename);
        let target = self.target_path(&document.filename);

        let mut file = fs::File::create(&temp)
            .await
            .map_err(|e| ExportError::io(format!("failed to create {}: {}", temp.display(), e)))?;
        file.write_all(&document.content)
            .await
            .map_err(|e| ExportError::io(format!("failed to write {}: {}", temp.display(), e)))?;
        file.sync_all()
            .await
            .map_err(|e| ExportError::io(format!("failed to sync {}: {}", temp.display(), e)))?;
        drop(file);

        fs::rename(&temp, &target).await.map_err(|e| {
            ExportError::io(format!(
                "failed to move {} into place: {}",
                target.display(),
                e
            ))
        })?;

        debug!(path = %target.display(), bytes = document.content.len(), "document written");
        Ok(())
    }
}
