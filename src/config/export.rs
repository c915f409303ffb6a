//! Document export configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_output_dir() -> String {
    "exports".to_string()
}

/// Settings for the local document sink.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory exported documents are written into (default `exports`).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_dir_is_exports() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, "exports");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_output_dir_is_rejected() {
        let config = ExportConfig {
            output_dir: String::new(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("export.output_dir"))
        ));
    }
}
