//! The structured research request assembled by the form session.

use serde::{Deserialize, Serialize};

use super::date_range::YearRange;
use super::keywords::KeywordSet;
use super::options::{CitationFormat, FieldOfStudy, OpenAccessSite, PublicationType};

/// One fully-assembled literature search request.
///
/// Owned by the active form session. Required drop-downs are `Option`s so
/// "not specified" is representable while the form is being filled in; the
/// field validator rejects a request that still carries a `None` at
/// submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Main topic, required and deliberately broad.
    pub research_topic: String,
    /// Optional narrowing subtopic.
    pub related_topic: Option<String>,
    pub field_of_study: Option<FieldOfStudy>,
    pub type_of_publication: Option<PublicationType>,
    /// Publication year window; committed values always hold `start <= end`.
    pub date_range: YearRange,
    /// Comma-joined projection of the form's [`KeywordSet`].
    pub keywords: String,
    pub citation_format: Option<CitationFormat>,
    pub open_access_site: Option<OpenAccessSite>,
}

impl ResearchRequest {
    /// Creates a request with the form's initial defaults: full year range,
    /// APA citations, everything else unselected.
    pub fn new(research_topic: impl Into<String>, max_year: u16) -> Self {
        Self {
            research_topic: research_topic.into(),
            related_topic: None,
            field_of_study: None,
            type_of_publication: None,
            date_range: YearRange::full(max_year),
            keywords: String::new(),
            citation_format: Some(CitationFormat::Apa),
            open_access_site: None,
        }
    }

    pub fn with_related_topic(mut self, topic: impl Into<String>) -> Self {
        self.related_topic = Some(topic.into());
        self
    }

    pub fn with_field_of_study(mut self, field: FieldOfStudy) -> Self {
        self.field_of_study = Some(field);
        self
    }

    pub fn with_publication_type(mut self, kind: PublicationType) -> Self {
        self.type_of_publication = Some(kind);
        self
    }

    pub fn with_date_range(mut self, range: YearRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn with_citation_format(mut self, format: CitationFormat) -> Self {
        self.citation_format = Some(format);
        self
    }

    pub fn with_open_access_site(mut self, site: OpenAccessSite) -> Self {
        self.open_access_site = Some(site);
        self
    }

    /// Materializes the keyword set into the `keywords` field.
    ///
    /// Called when the request is assembled for submission so the field
    /// validator and the wire body see the same committed value.
    pub fn with_keywords(mut self, keywords: &KeywordSet) -> Self {
        self.keywords = keywords.to_comma_list();
        self
    }
}

/// Addressable fields of a [`ResearchRequest`].
///
/// Keys the per-field validation map and the on-blur single-field checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    ResearchTopic,
    RelatedTopic,
    FieldOfStudy,
    TypeOfPublication,
    DateRange,
    Keywords,
    CitationFormat,
    OpenAccessSite,
}

impl RequestField {
    /// Every field, in form layout order.
    pub const ALL: [RequestField; 8] = [
        RequestField::ResearchTopic,
        RequestField::RelatedTopic,
        RequestField::FieldOfStudy,
        RequestField::TypeOfPublication,
        RequestField::DateRange,
        RequestField::Keywords,
        RequestField::CitationFormat,
        RequestField::OpenAccessSite,
    ];

    /// Snake-case wire name, as used in request bodies and error maps.
    pub fn name(&self) -> &'static str {
        match self {
            RequestField::ResearchTopic => "research_topic",
            RequestField::RelatedTopic => "related_topic",
            RequestField::FieldOfStudy => "field_of_study",
            RequestField::TypeOfPublication => "type_of_publication",
            RequestField::DateRange => "date_range",
            RequestField::Keywords => "keywords",
            RequestField::CitationFormat => "citation_format",
            RequestField::OpenAccessSite => "open_access_site",
        }
    }

    /// Human-readable label, as used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            RequestField::ResearchTopic => "Research Topic",
            RequestField::RelatedTopic => "Related Topic",
            RequestField::FieldOfStudy => "Field of Study",
            RequestField::TypeOfPublication => "Type of Publication",
            RequestField::DateRange => "Date Range",
            RequestField::Keywords => "Keywords",
            RequestField::CitationFormat => "Citation Format",
            RequestField::OpenAccessSite => "Open Access Site",
        }
    }
}

impl std::fmt::Display for RequestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_defaults_match_form_initial_state() {
        let request = ResearchRequest::new("Machine Learning", 2026);
        assert_eq!(request.research_topic, "Machine Learning");
        assert_eq!(request.related_topic, None);
        assert_eq!(request.field_of_study, None);
        assert_eq!(request.citation_format, Some(CitationFormat::Apa));
        assert_eq!(request.date_range, YearRange::full(2026));
        assert_eq!(request.keywords, "");
    }

    #[test]
    fn builder_sets_every_optional_field() {
        let request = ResearchRequest::new("Topic", 2026)
            .with_related_topic("Subtopic")
            .with_field_of_study(FieldOfStudy::Biology)
            .with_publication_type(PublicationType::Preprint)
            .with_date_range(YearRange::new(2010, 2020))
            .with_citation_format(CitationFormat::Mla)
            .with_open_access_site(OpenAccessSite::PubMed);

        assert_eq!(request.related_topic.as_deref(), Some("Subtopic"));
        assert_eq!(request.field_of_study, Some(FieldOfStudy::Biology));
        assert_eq!(request.type_of_publication, Some(PublicationType::Preprint));
        assert_eq!(request.date_range, YearRange::new(2010, 2020));
        assert_eq!(request.citation_format, Some(CitationFormat::Mla));
        assert_eq!(request.open_access_site, Some(OpenAccessSite::PubMed));
    }

    #[test]
    fn with_keywords_materializes_comma_list() {
        let mut set = KeywordSet::new();
        set.add("retina");
        set.add("OCT");

        let request = ResearchRequest::new("Topic", 2026).with_keywords(&set);
        assert_eq!(request.keywords, "retina, OCT");
    }

    #[test]
    fn field_names_are_snake_case_wire_names() {
        assert_eq!(RequestField::ResearchTopic.name(), "research_topic");
        assert_eq!(RequestField::OpenAccessSite.name(), "open_access_site");
    }

    #[test]
    fn field_labels_match_form_copy() {
        assert_eq!(RequestField::FieldOfStudy.label(), "Field of Study");
        assert_eq!(RequestField::TypeOfPublication.label(), "Type of Publication");
    }
}
