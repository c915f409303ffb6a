//! Field validation for the assembled research request.
//!
//! Every rule is evaluated independently per field, so one pass reports all
//! violated fields at once; there is no short-circuit across fields. The
//! single-field entry point produces exactly the message the full pass
//! would, which is what the form uses for on-blur feedback.
//!
//! Validation is pure: no network, no storage, and re-running it on
//! unchanged input returns the same report.

use std::collections::BTreeMap;

use super::request::{RequestField, ResearchRequest};

/// Message for an empty research topic.
pub const RESEARCH_TOPIC_REQUIRED: &str = "Research topic is required";

/// Message for an inverted year range.
pub const DATE_RANGE_ORDER: &str = "End year must be greater than or equal to Start Year";

/// The `field -> message` map produced by one validation pass.
///
/// Backed by a `BTreeMap` keyed on [`RequestField`] so iteration order is
/// stable (form layout order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<RequestField, String>,
}

impl ValidationReport {
    /// An empty report: the request is valid.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for one field, if it failed.
    pub fn message(&self, field: RequestField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Iterates failed fields in form layout order.
    pub fn iter(&self) -> impl Iterator<Item = (RequestField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn record(&mut self, field: RequestField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Validates the whole request, reporting every violated field.
pub fn validate(request: &ResearchRequest) -> ValidationReport {
    let mut report = ValidationReport::new();
    for field in RequestField::ALL {
        if let Some(message) = validate_field(request, field) {
            report.record(field, message);
        }
    }
    report
}

/// Validates a single field, returning the same message the full pass would.
///
/// The date-range rule is meant to run once both year inputs are committed,
/// not per keystroke; that cadence is the caller's responsibility.
pub fn validate_field(request: &ResearchRequest, field: RequestField) -> Option<String> {
    match field {
        RequestField::ResearchTopic => {
            if request.research_topic.is_empty() {
                Some(RESEARCH_TOPIC_REQUIRED.to_string())
            } else {
                None
            }
        }
        RequestField::FieldOfStudy => {
            required_selection(request.field_of_study.is_some(), field)
        }
        RequestField::TypeOfPublication => {
            required_selection(request.type_of_publication.is_some(), field)
        }
        RequestField::CitationFormat => {
            required_selection(request.citation_format.is_some(), field)
        }
        RequestField::OpenAccessSite => {
            required_selection(request.open_access_site.is_some(), field)
        }
        RequestField::DateRange => {
            if request.date_range.is_ordered() {
                None
            } else {
                Some(DATE_RANGE_ORDER.to_string())
            }
        }
        // Optional free text; duplicate keywords surface as a transient
        // notice, not a validation failure.
        RequestField::RelatedTopic | RequestField::Keywords => None,
    }
}

fn required_selection(selected: bool, field: RequestField) -> Option<String> {
    if selected {
        None
    } else {
        Some(format!("{} is required", field.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::research::{
        CitationFormat, FieldOfStudy, OpenAccessSite, PublicationType, YearRange,
    };

    fn valid_request() -> ResearchRequest {
        ResearchRequest::new("Machine Learning", 2026)
            .with_field_of_study(FieldOfStudy::ComputerScience)
            .with_publication_type(PublicationType::JournalArticle)
            .with_citation_format(CitationFormat::Apa)
            .with_open_access_site(OpenAccessSite::ArXiv)
            .with_date_range(YearRange::new(2000, 2020))
    }

    #[test]
    fn valid_request_yields_empty_report() {
        let report = validate(&valid_request());
        assert!(report.is_empty());
    }

    #[test]
    fn validate_is_idempotent_on_valid_input() {
        let request = valid_request();
        assert!(validate(&request).is_empty());
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn missing_topic_fails_only_that_field() {
        let mut request = valid_request();
        request.research_topic = String::new();

        let report = validate(&request);
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.message(RequestField::ResearchTopic),
            Some(RESEARCH_TOPIC_REQUIRED)
        );
        assert_eq!(report.message(RequestField::FieldOfStudy), None);
        assert_eq!(report.message(RequestField::DateRange), None);
    }

    #[test]
    fn unselected_dropdowns_each_report_their_label() {
        let request = ResearchRequest {
            citation_format: None,
            ..ResearchRequest::new("Topic", 2026)
        };

        let report = validate(&request);
        assert_eq!(
            report.message(RequestField::FieldOfStudy),
            Some("Field of Study is required")
        );
        assert_eq!(
            report.message(RequestField::TypeOfPublication),
            Some("Type of Publication is required")
        );
        assert_eq!(
            report.message(RequestField::CitationFormat),
            Some("Citation Format is required")
        );
        assert_eq!(
            report.message(RequestField::OpenAccessSite),
            Some("Open Access Site is required")
        );
    }

    #[test]
    fn inverted_date_range_reports_ordering_message() {
        let request = valid_request().with_date_range(YearRange::new(2020, 2010));

        let report = validate(&request);
        assert_eq!(report.len(), 1);
        assert_eq!(report.message(RequestField::DateRange), Some(DATE_RANGE_ORDER));
    }

    #[test]
    fn ordered_date_range_yields_no_message() {
        let request = valid_request().with_date_range(YearRange::new(2010, 2020));
        assert_eq!(validate_field(&request, RequestField::DateRange), None);
    }

    #[test]
    fn all_violations_are_reported_in_one_pass() {
        let request = ResearchRequest {
            citation_format: None,
            ..ResearchRequest::new("", 2026)
        }
        .with_date_range(YearRange::new(2021, 1999));

        let report = validate(&request);
        // topic + four drop-downs + date range
        assert_eq!(report.len(), 6);
    }

    #[test]
    fn single_field_check_matches_full_pass() {
        let mut request = valid_request();
        request.research_topic = String::new();
        request.open_access_site = None;

        let full = validate(&request);
        for field in RequestField::ALL {
            assert_eq!(
                validate_field(&request, field).as_deref(),
                full.message(field),
                "mismatch on {}",
                field
            );
        }
    }

    #[test]
    fn optional_fields_never_fail() {
        let request = ResearchRequest::new("Topic", 2026);
        assert_eq!(validate_field(&request, RequestField::RelatedTopic), None);
        assert_eq!(validate_field(&request, RequestField::Keywords), None);
    }

    #[test]
    fn report_iterates_in_form_layout_order() {
        let request = ResearchRequest {
            citation_format: None,
            ..ResearchRequest::new("", 2026)
        };

        let fields: Vec<RequestField> = validate(&request).iter().map(|(f, _)| f).collect();
        let mut sorted = fields.clone();
        sorted.sort();
        assert_eq!(fields, sorted);
    }
}
