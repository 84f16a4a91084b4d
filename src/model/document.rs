//! Document-level types.

use super::{Block, Paragraph};
use crate::layout::{HeaderFooterSet, PageGeometry};
use serde::{Deserialize, Serialize};

/// The kind of document being composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Answer to a complaint, on pleading paper
    Answer,
    /// Demand letter
    DemandLetter,
    /// Settlement agreement and release
    SettlementAgreement,
}

impl DocumentKind {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Answer => "answer",
            DocumentKind::DemandLetter => "demand letter",
            DocumentKind::SettlementAgreement => "settlement agreement",
        }
    }
}

/// A fully composed document, ready for a document writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedDocument {
    /// Document kind
    pub kind: DocumentKind,

    /// Running title printed in the footer
    pub title: String,

    /// Ordered block stream
    pub blocks: Vec<Block>,

    /// First-page and continuation header/footer definitions
    pub header_footer: HeaderFooterSet,

    /// Page geometry for the writer
    pub geometry: PageGeometry,
}

impl ComposedDocument {
    /// Number of physical pages implied by forced breaks.
    pub fn page_count(&self) -> usize {
        self.forced_break_count() + 1
    }

    /// Number of forced page breaks in the stream.
    pub fn forced_break_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_page_break()).count()
    }

    /// Paragraphs that carry a pleading line number.
    pub fn numbered_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .filter(|p| p.line_number.is_some())
    }

    /// Get plain text content of the document, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|b| !b.is_page_break())
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
