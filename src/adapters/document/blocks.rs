//! Block assembly for the exported Word document.
//!
//! The document has a fixed structure: seven framing blocks (title, topic
//! line, spacers, section headings, summary body) followed by one block per
//! citation, in citation order. Downstream consumers assert on the block
//! count and ordering, so assembly is kept pure and separate from the
//! docx rendering.

use crate::domain::research::ResearchArtifact;

/// Title run size in half-points (16pt).
pub const TITLE_SIZE: usize = 32;

/// Heading and topic-line run size in half-points (12pt).
pub const HEADING_SIZE: usize = 24;

/// Section heading above the summary body.
pub const SUMMARY_HEADING: &str = "Research Summary";

/// Section heading above the citation list.
pub const REFERENCES_HEADING: &str = "References";

/// Suffix appended to the sanitized title.
pub const FILENAME_SUFFIX: &str = "_research";

/// Extension of the exported document.
pub const DOCX_EXTENSION: &str = "docx";

/// Number of framing blocks before the citations begin.
pub const FRAME_BLOCKS: usize = 7;

/// One paragraph-level block of the exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// Block text; embedded `\n` are preserved as line breaks. Empty for
    /// spacer blocks.
    pub text: String,
    /// Run size in half-points; `None` renders at the document default.
    pub size: Option<usize>,
    pub bold: bool,
}

impl DocBlock {
    fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Some(TITLE_SIZE),
            bold: true,
        }
    }

    fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Some(HEADING_SIZE),
            bold: true,
        }
    }

    fn topic_line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Some(HEADING_SIZE),
            bold: false,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            bold: false,
        }
    }

    fn spacer() -> Self {
        Self {
            text: String::new(),
            size: None,
            bold: false,
        }
    }

    /// True for the empty separator blocks.
    pub fn is_spacer(&self) -> bool {
        self.text.is_empty()
    }
}

/// Assembles the fixed block sequence for one artifact.
///
/// Total length is always `FRAME_BLOCKS + artifact.citations.len()`; the
/// reference blocks carry each citation's pre-rendered `formatted` string
/// in generation order.
pub fn document_blocks(artifact: &ResearchArtifact) -> Vec<DocBlock> {
    let mut blocks = Vec::with_capacity(FRAME_BLOCKS + artifact.citations.len());
    blocks.push(DocBlock::title(&artifact.title));
    blocks.push(DocBlock::topic_line(format!(
        "Research Topic: {}",
        artifact.research_topic
    )));
    blocks.push(DocBlock::spacer());
    blocks.push(DocBlock::heading(SUMMARY_HEADING));
    blocks.push(DocBlock::body(&artifact.summary));
    blocks.push(DocBlock::spacer());
    blocks.push(DocBlock::heading(REFERENCES_HEADING));
    blocks.extend(
        artifact
            .citations
            .iter()
            .map(|citation| DocBlock::body(&citation.formatted)),
    );
    blocks
}

/// Derives the download filename from the artifact title.
///
/// Every character outside `[A-Za-z0-9]` is replaced one-for-one with `_`,
/// then the fixed `_research` suffix and the extension are appended. Same
/// title, same filename, always.
pub fn export_filename(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}{}.{}", sanitized, FILENAME_SUFFIX, DOCX_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::research::Citation;
    use proptest::prelude::*;

    fn citation(n: u32) -> Citation {
        Citation {
            authors: format!("Author {}", n),
            title: format!("Title {}", n),
            year: "2020".to_string(),
            url: format!("https://example.org/{}", n),
            formatted: format!("Author {} (2020). Title {}. https://example.org/{}", n, n, n),
            journal_info: None,
        }
    }

    fn artifact_with_citations(count: u32) -> ResearchArtifact {
        ResearchArtifact::new(
            "Survey of ML",
            "Machine Learning",
            "First line.\nSecond line.",
            (1..=count).map(citation).collect(),
        )
    }

    #[test]
    fn three_citations_produce_exactly_ten_blocks() {
        let blocks = document_blocks(&artifact_with_citations(3));
        assert_eq!(blocks.len(), FRAME_BLOCKS + 3);
        assert_eq!(blocks.len(), 10);
    }

    #[test]
    fn frame_blocks_appear_in_fixed_order() {
        let blocks = document_blocks(&artifact_with_citations(1));

        assert_eq!(blocks[0].text, "Survey of ML");
        assert_eq!(blocks[0].size, Some(TITLE_SIZE));
        assert!(blocks[0].bold);

        assert_eq!(blocks[1].text, "Research Topic: Machine Learning");
        assert_eq!(blocks[1].size, Some(HEADING_SIZE));
        assert!(!blocks[1].bold);

        assert!(blocks[2].is_spacer());

        assert_eq!(blocks[3].text, SUMMARY_HEADING);
        assert!(blocks[3].bold);

        assert_eq!(blocks[4].text, "First line.\nSecond line.");
        assert_eq!(blocks[4].size, None);

        assert!(blocks[5].is_spacer());

        assert_eq!(blocks[6].text, REFERENCES_HEADING);
        assert!(blocks[6].bold);
    }

    #[test]
    fn reference_blocks_follow_citation_order() {
        let blocks = document_blocks(&artifact_with_citations(3));
        let references: Vec<&str> = blocks[FRAME_BLOCKS..]
            .iter()
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(
            references,
            vec![
                "Author 1 (2020). Title 1. https://example.org/1",
                "Author 2 (2020). Title 2. https://example.org/2",
                "Author 3 (2020). Title 3. https://example.org/3",
            ]
        );
    }

    #[test]
    fn no_citations_still_produces_the_frame() {
        let blocks = document_blocks(&artifact_with_citations(0));
        assert_eq!(blocks.len(), FRAME_BLOCKS);
    }

    #[test]
    fn summary_line_breaks_are_preserved_in_the_body_block() {
        let blocks = document_blocks(&artifact_with_citations(0));
        assert!(blocks[4].text.contains('\n'));
    }

    #[test]
    fn filename_replaces_each_disallowed_character_with_underscore() {
        assert_eq!(export_filename("A/B: Test?"), "A_B__Test__research.docx");
    }

    #[test]
    fn filename_keeps_plain_alphanumeric_titles() {
        assert_eq!(export_filename("Survey2024"), "Survey2024_research.docx");
    }

    #[test]
    fn filename_is_deterministic() {
        assert_eq!(
            export_filename("Deep Learning!"),
            export_filename("Deep Learning!")
        );
    }

    proptest! {
        #[test]
        fn filename_stem_only_contains_safe_characters(title in ".*") {
            let name = export_filename(&title);
            let stem = name.strip_suffix(".docx").unwrap();
            prop_assert!(stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }

        #[test]
        fn filename_replacement_is_one_for_one(title in ".*") {
            let name = export_filename(&title);
            let expected = title.chars().count() + FILENAME_SUFFIX.len() + 1 + DOCX_EXTENSION.len();
            prop_assert_eq!(name.chars().count(), expected);
        }
    }
}
