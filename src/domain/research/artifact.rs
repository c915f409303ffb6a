//! Generated artifacts and their saved form.
//!
//! A [`ResearchArtifact`] exists only as the successful result of one
//! generation call. It is never mutated afterwards; re-generation produces a
//! new artifact that replaces the old one in view state. The serializer and
//! the persistence bridge take artifacts by shared reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One reference from the generated review, exactly as the server rendered
/// it. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub authors: String,
    pub title: String,
    /// Publication year as the server sends it (a string on the wire).
    pub year: String,
    pub url: String,
    /// Pre-rendered citation string, inclusive of the URL.
    pub formatted: String,
    #[serde(default)]
    pub journal_info: Option<String>,
}

/// The generated literature review: title, topic, summary, and the
/// citations in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchArtifact {
    pub title: String,
    pub research_topic: String,
    pub summary: String,
    /// Generation order; preserved through save and export.
    pub citations: Vec<Citation>,
}

impl ResearchArtifact {
    pub fn new(
        title: impl Into<String>,
        research_topic: impl Into<String>,
        summary: impl Into<String>,
        citations: Vec<Citation>,
    ) -> Self {
        Self {
            title: title.into(),
            research_topic: research_topic.into(),
            summary: summary.into(),
            citations,
        }
    }

    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }
}

/// Opaque identifier the store assigns to a saved research.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearchId(String);

impl ResearchId {
    /// Wraps a server-assigned id; empty ids are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("research_id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResearchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted artifact as the store returns it, with the originating
/// search parameters echoed back as an opaque JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResearch {
    pub id: ResearchId,
    pub title: String,
    pub research_topic: String,
    pub summary: String,
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub search_params: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl SavedResearch {
    /// The displayable artifact embedded in this record.
    pub fn artifact(&self) -> ResearchArtifact {
        ResearchArtifact::new(
            self.title.clone(),
            self.research_topic.clone(),
            self.summary.clone(),
            self.citations.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citation(n: u32) -> Citation {
        Citation {
            authors: format!("Author {}", n),
            title: format!("Title {}", n),
            year: "2021".to_string(),
            url: format!("https://example.org/{}", n),
            formatted: format!("Author {} ({}). Title {}. https://example.org/{}", n, 2021, n, n),
            journal_info: None,
        }
    }

    #[test]
    fn artifact_preserves_citation_order() {
        let artifact = ResearchArtifact::new(
            "T",
            "X",
            "S",
            vec![citation(1), citation(2), citation(3)],
        );
        assert_eq!(artifact.citation_count(), 3);
        assert_eq!(artifact.citations[0].title, "Title 1");
        assert_eq!(artifact.citations[2].title, "Title 3");
    }

    #[test]
    fn research_id_rejects_empty_string() {
        assert!(ResearchId::new("").is_err());
    }

    #[test]
    fn research_id_wraps_server_value() {
        let id = ResearchId::new("65f1c0ffee").unwrap();
        assert_eq!(id.as_str(), "65f1c0ffee");
        assert_eq!(id.to_string(), "65f1c0ffee");
    }

    #[test]
    fn citation_parses_with_null_journal_info() {
        let json = r#"{
            "authors": "Doe, J.",
            "title": "A Study",
            "year": "2020",
            "url": "https://example.org/a",
            "formatted": "Doe, J. (2020). A Study. https://example.org/a",
            "journal_info": null
        }"#;
        let parsed: Citation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.journal_info, None);
    }

    #[test]
    fn saved_research_exposes_embedded_artifact() {
        let saved = SavedResearch {
            id: ResearchId::new("id-1").unwrap(),
            title: "T".to_string(),
            research_topic: "X".to_string(),
            summary: "S".to_string(),
            citations: vec![citation(1)],
            search_params: serde_json::json!({"research_topic": "X"}),
            created_at: Utc::now(),
        };

        let artifact = saved.artifact();
        assert_eq!(artifact.title, "T");
        assert_eq!(artifact.citation_count(), 1);
    }
}
