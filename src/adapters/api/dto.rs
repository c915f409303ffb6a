//! Wire types for the Litscout API.
//!
//! Request bodies mirror the service's JSON contract exactly; unselected
//! drop-downs serialize as `""` (the service's historical sentinel), so
//! stored `search_params` round-trip unchanged. Domain [`Citation`]s
//! already carry the wire field names and are reused directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::research::{
    Citation, ResearchArtifact, ResearchId, ResearchRequest, SavedResearch,
};
use crate::ports::ApiError;

/// Body of `POST /generate_report`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateReportBody {
    pub research_topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_topic: Option<String>,
    pub field_of_study: String,
    pub type_of_publication: String,
    pub date_range: [u16; 2],
    pub keywords: String,
    pub citation_format: String,
    pub open_access_site: String,
}

impl From<&ResearchRequest> for GenerateReportBody {
    fn from(request: &ResearchRequest) -> Self {
        Self {
            research_topic: request.research_topic.clone(),
            related_topic: request.related_topic.clone(),
            field_of_study: request
                .field_of_study
                .map(|v| v.label().to_string())
                .unwrap_or_default(),
            type_of_publication: request
                .type_of_publication
                .map(|v| v.label().to_string())
                .unwrap_or_default(),
            date_range: request.date_range.as_pair(),
            keywords: request.keywords.clone(),
            citation_format: request
                .citation_format
                .map(|v| v.label().to_string())
                .unwrap_or_default(),
            open_access_site: request
                .open_access_site
                .map(|v| v.label().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Success body of `POST /generate_report`.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateReportResponse {
    pub research_summary: ReportDto,
}

/// The nested result object of a generation call.
#[derive(Debug, Deserialize)]
pub(crate) struct ReportDto {
    pub title: String,
    pub research_topic: String,
    pub research_summary: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl ReportDto {
    pub fn into_artifact(self) -> ResearchArtifact {
        ResearchArtifact::new(
            self.title,
            self.research_topic,
            self.research_summary,
            self.citations,
        )
    }
}

/// Body of `POST /save_research`.
#[derive(Debug, Serialize)]
pub(crate) struct SaveResearchBody {
    pub title: String,
    pub research_topic: String,
    pub summary: String,
    pub citations: Vec<Citation>,
    pub search_params: GenerateReportBody,
}

impl SaveResearchBody {
    pub fn new(artifact: &ResearchArtifact, params: &ResearchRequest) -> Self {
        Self {
            title: artifact.title.clone(),
            research_topic: artifact.research_topic.clone(),
            summary: artifact.summary.clone(),
            citations: artifact.citations.clone(),
            search_params: GenerateReportBody::from(params),
        }
    }
}

/// Success body of `GET /saved_researches`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    pub researches: Vec<SavedResearchDto>,
}

/// Success body of `GET /research/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct FetchResponse {
    pub research: SavedResearchDto,
}

/// One stored research record as the service returns it.
#[derive(Debug, Deserialize)]
pub(crate) struct SavedResearchDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub research_topic: String,
    pub summary: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub search_params: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl SavedResearchDto {
    pub fn into_domain(self) -> Result<SavedResearch, ApiError> {
        let id = ResearchId::new(self.id)
            .map_err(|e| ApiError::parse(format!("invalid research id: {}", e)))?;
        Ok(SavedResearch {
            id,
            title: self.title,
            research_topic: self.research_topic,
            summary: self.summary,
            citations: self.citations,
            search_params: self.search_params,
            created_at: self.created_at,
        })
    }
}

/// Structured error payload on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::research::{
        CitationFormat, FieldOfStudy, OpenAccessSite, PublicationType, YearRange,
    };

    fn request() -> ResearchRequest {
        ResearchRequest::new("Machine Learning", 2026)
            .with_related_topic("Vision")
            .with_field_of_study(FieldOfStudy::ComputerScience)
            .with_publication_type(PublicationType::JournalArticle)
            .with_citation_format(CitationFormat::Apa)
            .with_open_access_site(OpenAccessSite::ArXiv)
            .with_date_range(YearRange::new(2000, 2020))
    }

    #[test]
    fn generate_body_matches_wire_contract() {
        let body = serde_json::to_value(GenerateReportBody::from(&request())).unwrap();

        assert_eq!(body["research_topic"], "Machine Learning");
        assert_eq!(body["related_topic"], "Vision");
        assert_eq!(body["field_of_study"], "Computer Science");
        assert_eq!(body["type_of_publication"], "Journal Article");
        assert_eq!(body["date_range"], serde_json::json!([2000, 2020]));
        assert_eq!(body["citation_format"], "APA");
        assert_eq!(body["open_access_site"], "ArXiv");
    }

    #[test]
    fn absent_related_topic_is_omitted() {
        let mut request = request();
        request.related_topic = None;
        let body = serde_json::to_value(GenerateReportBody::from(&request)).unwrap();
        assert!(body.get("related_topic").is_none());
    }

    #[test]
    fn unselected_dropdown_serializes_as_empty_sentinel() {
        let mut request = request();
        request.open_access_site = None;
        let body = serde_json::to_value(GenerateReportBody::from(&request)).unwrap();
        assert_eq!(body["open_access_site"], "");
    }

    #[test]
    fn generation_response_parses_nested_result() {
        let json = r#"{
            "research_summary": {
                "title": "T",
                "research_topic": "X",
                "research_summary": "S",
                "citations": [
                    {"authors":"A1","title":"C1","year":"2019","url":"https://e/1","formatted":"F1","journal_info":null},
                    {"authors":"A2","title":"C2","year":"2020","url":"https://e/2","formatted":"F2","journal_info":"J"}
                ]
            }
        }"#;

        let parsed: GenerateReportResponse = serde_json::from_str(json).unwrap();
        let artifact = parsed.research_summary.into_artifact();

        assert_eq!(artifact.title, "T");
        assert_eq!(artifact.summary, "S");
        assert_eq!(artifact.citation_count(), 2);
        assert_eq!(artifact.citations[0].formatted, "F1");
        assert_eq!(artifact.citations[1].journal_info.as_deref(), Some("J"));
    }

    #[test]
    fn save_body_embeds_artifact_and_search_params() {
        let artifact = ResearchArtifact::new("T", "X", "S", vec![]);
        let body = serde_json::to_value(SaveResearchBody::new(&artifact, &request())).unwrap();

        assert_eq!(body["title"], "T");
        assert_eq!(body["summary"], "S");
        assert_eq!(body["search_params"]["research_topic"], "Machine Learning");
    }

    #[test]
    fn saved_research_dto_converts_to_domain() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "title": "T",
            "research_topic": "X",
            "summary": "S",
            "citations": [],
            "search_params": {"research_topic": "X"},
            "created_at": "2026-03-01T12:00:00Z"
        }"#;

        let dto: SavedResearchDto = serde_json::from_str(json).unwrap();
        let saved = dto.into_domain().unwrap();

        assert_eq!(saved.id.as_str(), "65f1c0ffee");
        assert_eq!(saved.search_params["research_topic"], "X");
    }

    #[test]
    fn saved_research_dto_with_empty_id_is_a_parse_error() {
        let dto = SavedResearchDto {
            id: String::new(),
            title: "T".to_string(),
            research_topic: "X".to_string(),
            summary: "S".to_string(),
            citations: vec![],
            search_params: serde_json::Value::Null,
            created_at: Utc::now(),
        };

        assert!(matches!(dto.into_domain(), Err(ApiError::Parse(_))));
    }

    #[test]
    fn error_body_tolerates_missing_error_field() {
        let parsed: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.error, None);
    }
}
