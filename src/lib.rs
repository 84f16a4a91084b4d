//! # pleading
//!
//! Composition and pagination engine for California pleading-paper
//! documents.
//!
//! The engine turns case metadata (parties, counsel, court) and free-text
//! legal content into an ordered block stream: attorney header and caption
//! in the unnumbered zone, then a double-spaced body numbered 1 to 28 on
//! every page, with forced page breaks at each page boundary. Encoding the
//! stream into a file container is left to a [`render::DocumentWriter`].
//!
//! ## Quick Start
//!
//! ```
//! use pleading::{compose_answer, ComposeOptions};
//! use pleading::model::{AnswerContent, CaseMetadata, Defense};
//! use chrono::NaiveDate;
//!
//! fn main() -> pleading::Result<()> {
//!     let mut metadata = CaseMetadata::default();
//!     metadata.plaintiff_names = vec!["Jane Roe".to_string()];
//!     metadata.defendant_names = vec!["Acme Corp.".to_string()];
//!     metadata.attorney.name = "Maria Lopez".to_string();
//!     metadata.court.county = "Alameda".to_string();
//!     metadata.court.case_number = "24CV000123".to_string();
//!
//!     let content = AnswerContent {
//!         defenses: vec![Defense::new("1", "The claims are time-barred.")],
//!         use_general_denial: true,
//!         ..Default::default()
//!     };
//!
//!     let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
//!     let options = ComposeOptions::new().with_generation_date(date);
//!     let doc = compose_answer(&metadata, &content, &options)?;
//!
//!     println!("{}", pleading::render::to_text_proof(&doc)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pleading pagination**: line numbers 1-28 per page, forced breaks
//! - **Zone layout**: single-spaced header/caption, double-spaced numbered body
//! - **Three composers**: answer to complaint, demand letter, settlement agreement
//! - **Party agreement**: singular/plural defendant forms from one table per document
//! - **Writer seam**: JSON interchange, plain-text proof, custom writers

pub mod compose;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use compose::{
    compose, compose_with, AnswerComposer, ComposeOptions, Composer, CompositionRequest,
    DemandLetterComposer, SettlementComposer,
};
pub use error::{CompositionError, ConstructionError, Error, Result};
pub use layout::{HeaderFooterSet, PageGeometry, PaginationCursor, ZoneFormatter, LINES_PER_PAGE};
pub use model::{
    AnswerContent, Block, CaseMetadata, ComposedDocument, Defense, DocumentKind, Paragraph, Run,
    Section, Table,
};
pub use render::{to_json, to_text_proof, DocumentWriter, JsonFormat};

/// Compose an answer to a complaint.
///
/// # Example
///
/// ```
/// use pleading::{compose_answer, CaseMetadata, AnswerContent, ComposeOptions};
///
/// // No defendant name: the whole composition fails.
/// let result = compose_answer(
///     &CaseMetadata::default(),
///     &AnswerContent::default(),
///     &ComposeOptions::default(),
/// );
/// assert!(result.is_err());
/// ```
pub fn compose_answer(
    metadata: &CaseMetadata,
    content: &AnswerContent,
    options: &ComposeOptions,
) -> Result<ComposedDocument> {
    compose_with(&AnswerComposer::new(), metadata, content, options)
}

/// Compose a demand letter from its sections.
pub fn compose_demand_letter(
    metadata: &CaseMetadata,
    sections: &[Section],
    options: &ComposeOptions,
) -> Result<ComposedDocument> {
    compose_with(&DemandLetterComposer::new(), metadata, sections, options)
}

/// Compose a settlement agreement from its sections.
pub fn compose_settlement_agreement(
    metadata: &CaseMetadata,
    sections: &[Section],
    options: &ComposeOptions,
) -> Result<ComposedDocument> {
    compose_with(&SettlementComposer::new(), metadata, sections, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> CaseMetadata {
        let mut meta = CaseMetadata {
            plaintiff_names: vec!["Jane Roe".to_string()],
            defendant_names: vec!["Acme Corp.".to_string()],
            ..Default::default()
        };
        meta.attorney.name = "Maria Lopez".to_string();
        meta.court.county = "Alameda".to_string();
        meta.court.case_number = "24CV000123".to_string();
        meta
    }

    #[test]
    fn test_compose_answer_bundle() {
        let doc = compose_answer(
            &metadata(),
            &AnswerContent::default(),
            &ComposeOptions::default(),
        )
        .unwrap();

        assert_eq!(doc.kind, DocumentKind::Answer);
        assert_eq!(doc.geometry, PageGeometry::letter());
        assert!(doc.header_footer.default_header.reserves_line_number_margin);
        assert!(doc.numbered_paragraphs().count() > 0);
    }

    #[test]
    fn test_compose_demand_letter_bundle() {
        let sections = vec![Section::new("demand", "Pay.").with_title("Demand")];
        let doc =
            compose_demand_letter(&metadata(), &sections, &ComposeOptions::default()).unwrap();
        assert_eq!(doc.title, compose::DEMAND_LETTER_TITLE);
        assert_eq!(doc.numbered_paragraphs().count(), 0);
    }

    #[test]
    fn test_compose_settlement_bundle() {
        let sections = vec![Section::new("s", "1. Payment. Pay.")];
        let doc = compose_settlement_agreement(&metadata(), &sections, &ComposeOptions::default())
            .unwrap();
        assert_eq!(doc.kind, DocumentKind::SettlementAgreement);
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_missing_defendant_yields_no_document() {
        let mut meta = metadata();
        meta.defendant_names = vec![String::new()];
        let result = compose_answer(&meta, &AnswerContent::default(), &ComposeOptions::default());
        assert!(matches!(
            result,
            Err(Error::Composition(CompositionError::MissingField(
                "defendant_names"
            )))
        ));
    }
}
