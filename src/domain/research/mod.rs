//! Research request domain - the form session's data and lifecycle.
//!
//! # Module Organization
//!
//! - `options` - Closed option sets for the form's drop-downs
//! - `date_range` - Publication year window
//! - `keywords` - Ordered, deduplicated keyword collection
//! - `notice` - Transient user notices with explicit expiry
//! - `request` - The assembled `ResearchRequest` and its addressable fields
//! - `validation` - Per-field validation and the `field -> message` report
//! - `artifact` - Generated artifacts, citations, saved records
//! - `submission` - The submission state machine and failure taxonomy

mod artifact;
mod date_range;
mod keywords;
mod notice;
mod options;
mod request;
mod submission;
mod validation;

pub use artifact::{Citation, ResearchArtifact, ResearchId, SavedResearch};
pub use date_range::{current_year, YearRange, MIN_YEAR};
pub use keywords::{KeywordOutcome, KeywordSet};
pub use notice::{notice_ttl, TransientNotice, DUPLICATE_KEYWORD_MESSAGE};
pub use options::{CitationFormat, FieldOfStudy, OpenAccessSite, PublicationType};
pub use request::{RequestField, ResearchRequest};
pub use submission::{
    FailureKind, SubmissionPhase, SubmissionState, GENERIC_RETRY_NOTICE,
};
pub use validation::{
    validate, validate_field, ValidationReport, DATE_RANGE_ORDER, RESEARCH_TOPIC_REQUIRED,
};
