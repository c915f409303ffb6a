//! Closed option sets for the research request form.
//!
//! The request form offers four fixed drop-downs. Each is a closed enum with
//! the wire label attached per variant; "not specified" is modelled as
//! `None` at the request level rather than an empty-string sentinel, so an
//! unselected option cannot reach the API by construction.

use serde::{Deserialize, Serialize};

/// Academic field the request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldOfStudy {
    Physics,
    Mathematics,
    Biology,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Chemistry,
    Other,
}

impl FieldOfStudy {
    /// All selectable variants, in form display order.
    pub const ALL: [FieldOfStudy; 6] = [
        FieldOfStudy::Physics,
        FieldOfStudy::Mathematics,
        FieldOfStudy::Biology,
        FieldOfStudy::ComputerScience,
        FieldOfStudy::Chemistry,
        FieldOfStudy::Other,
    ];

    /// The wire label sent to the API and shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            FieldOfStudy::Physics => "Physics",
            FieldOfStudy::Mathematics => "Mathematics",
            FieldOfStudy::Biology => "Biology",
            FieldOfStudy::ComputerScience => "Computer Science",
            FieldOfStudy::Chemistry => "Chemistry",
            FieldOfStudy::Other => "Other",
        }
    }

    /// Parses a wire label; unknown labels (including `""`) are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}

impl std::fmt::Display for FieldOfStudy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of publication to survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicationType {
    #[serde(rename = "Journal Article")]
    JournalArticle,
    #[serde(rename = "Conference Paper")]
    ConferencePaper,
    Preprint,
    Other,
}

impl PublicationType {
    /// All selectable variants, in form display order.
    pub const ALL: [PublicationType; 4] = [
        PublicationType::JournalArticle,
        PublicationType::ConferencePaper,
        PublicationType::Preprint,
        PublicationType::Other,
    ];

    /// The wire label sent to the API and shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            PublicationType::JournalArticle => "Journal Article",
            PublicationType::ConferencePaper => "Conference Paper",
            PublicationType::Preprint => "Preprint",
            PublicationType::Other => "Other",
        }
    }

    /// Parses a wire label; unknown labels (including `""`) are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}

impl std::fmt::Display for PublicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Citation style the generated references are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationFormat {
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
}

impl CitationFormat {
    /// All selectable variants, in form display order.
    pub const ALL: [CitationFormat; 2] = [CitationFormat::Apa, CitationFormat::Mla];

    /// The wire label sent to the API and shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            CitationFormat::Apa => "APA",
            CitationFormat::Mla => "MLA",
        }
    }

    /// Parses a wire label; unknown labels (including `""`) are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}

impl std::fmt::Display for CitationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Open-access database the literature search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenAccessSite {
    ArXiv,
    PubMed,
    #[serde(rename = "OpenAIRE")]
    OpenAire,
    Other,
}

impl OpenAccessSite {
    /// All selectable variants, in form display order.
    pub const ALL: [OpenAccessSite; 4] = [
        OpenAccessSite::ArXiv,
        OpenAccessSite::PubMed,
        OpenAccessSite::OpenAire,
        OpenAccessSite::Other,
    ];

    /// The wire label sent to the API and shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            OpenAccessSite::ArXiv => "ArXiv",
            OpenAccessSite::PubMed => "PubMed",
            OpenAccessSite::OpenAire => "OpenAIRE",
            OpenAccessSite::Other => "Other",
        }
    }

    /// Parses a wire label; unknown labels (including `""`) are rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }
}

impl std::fmt::Display for OpenAccessSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
