//! Template composers, one per document kind.
//!
//! A composer maps case metadata and free text into an ordered block
//! stream, pushing every block through a [`ZoneFormatter`] so the stream
//! comes out spaced, line-numbered and paginated. Composition is
//! all-or-nothing: an error means no blocks at all.
//!
//! # Example
//!
//! ```
//! use pleading::compose::{compose, ComposeOptions, CompositionRequest};
//! use pleading::model::{AnswerContent, CaseMetadata, Defense};
//!
//! let mut metadata = CaseMetadata::default();
//! metadata.plaintiff_names = vec!["Jane Roe".to_string()];
//! metadata.defendant_names = vec!["Acme Corp.".to_string()];
//! metadata.attorney.name = "Maria Lopez".to_string();
//! metadata.court.county = "Alameda".to_string();
//! metadata.court.case_number = "24CV000123".to_string();
//!
//! let content = AnswerContent {
//!     defenses: vec![Defense::new("FIRST", "The claims are time-barred.")],
//!     use_general_denial: true,
//!     ..Default::default()
//! };
//!
//! let request = CompositionRequest::Answer { metadata, content };
//! let doc = compose(&request, &ComposeOptions::default())?;
//! assert_eq!(doc.title, "DEFENDANT'S ANSWER TO COMPLAINT");
//! # Ok::<(), pleading::Error>(())
//! ```
//!
//! [`ZoneFormatter`]: crate::layout::ZoneFormatter

mod answer;
mod demand_letter;
pub mod grammar;
pub mod heading;
mod options;
mod parts;
mod settlement;

pub use answer::AnswerComposer;
pub use demand_letter::{is_case_description, DemandLetterComposer, DEMAND_LETTER_TITLE};
pub use options::{format_date, ComposeOptions, BLANK_DATE};
pub use settlement::{SettlementComposer, SETTLEMENT_TITLE};

use crate::error::Result;
use crate::layout::assemble;
use crate::model::{AnswerContent, Block, CaseMetadata, ComposedDocument, DocumentKind, Section};
use serde::{Deserialize, Serialize};

/// Trait for document composers.
///
/// Implementations are deterministic and perform no I/O.
pub trait Composer {
    /// Free-text content this composer consumes.
    type Content: ?Sized;

    /// The document kind produced.
    fn kind(&self) -> DocumentKind;

    /// Title printed in the running footer.
    fn running_title(&self, metadata: &CaseMetadata, content: &Self::Content) -> String;

    /// Whether the document crosses into the numbered pleading zone.
    fn uses_pleading_paper(&self) -> bool {
        false
    }

    /// Build the block stream.
    fn compose(
        &self,
        metadata: &CaseMetadata,
        content: &Self::Content,
        options: &ComposeOptions,
    ) -> Result<Vec<Block>>;
}

/// A request to compose one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompositionRequest {
    /// Answer to a complaint
    Answer {
        /// Case metadata
        metadata: CaseMetadata,
        /// Answer content and flags
        #[serde(default)]
        content: AnswerContent,
    },

    /// Demand letter
    DemandLetter {
        /// Case metadata
        metadata: CaseMetadata,
        /// Letter sections in order
        #[serde(default)]
        sections: Vec<Section>,
    },

    /// Settlement agreement
    SettlementAgreement {
        /// Case metadata
        metadata: CaseMetadata,
        /// Agreement sections in order
        #[serde(default)]
        sections: Vec<Section>,
    },
}

impl CompositionRequest {
    /// The document kind requested.
    pub fn kind(&self) -> DocumentKind {
        match self {
            CompositionRequest::Answer { .. } => DocumentKind::Answer,
            CompositionRequest::DemandLetter { .. } => DocumentKind::DemandLetter,
            CompositionRequest::SettlementAgreement { .. } => DocumentKind::SettlementAgreement,
        }
    }

    /// The case metadata of the request.
    pub fn metadata(&self) -> &CaseMetadata {
        match self {
            CompositionRequest::Answer { metadata, .. }
            | CompositionRequest::DemandLetter { metadata, .. }
            | CompositionRequest::SettlementAgreement { metadata, .. } => metadata,
        }
    }
}

/// Compose a document with a specific composer.
pub fn compose_with<C: Composer + ?Sized>(
    composer: &C,
    metadata: &CaseMetadata,
    content: &C::Content,
    options: &ComposeOptions,
) -> Result<ComposedDocument> {
    let blocks = composer.compose(metadata, content, options)?;
    let title = composer.running_title(metadata, content);
    let header_footer = assemble(metadata, &title, composer.uses_pleading_paper());

    log::debug!(
        "composed {} with {} blocks",
        composer.kind().name(),
        blocks.len()
    );

    Ok(ComposedDocument {
        kind: composer.kind(),
        title,
        blocks,
        header_footer,
        geometry: options.geometry,
    })
}

/// Compose the document a request describes.
pub fn compose(request: &CompositionRequest, options: &ComposeOptions) -> Result<ComposedDocument> {
    match request {
        CompositionRequest::Answer { metadata, content } => {
            compose_with(&AnswerComposer::new(), metadata, content, options)
        }
        CompositionRequest::DemandLetter { metadata, sections } => {
            compose_with(&DemandLetterComposer::new(), metadata, sections.as_slice(), options)
        }
        CompositionRequest::SettlementAgreement { metadata, sections } => {
            compose_with(&SettlementComposer::new(), metadata, sections.as_slice(), options)
        }
    }
}
