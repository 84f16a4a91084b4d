//! Content model for composed legal documents.
//!
//! Inbound types (case metadata and free-text content) are deserializable
//! so callers can hand over JSON from the case-management side. Outbound
//! types (the block stream) are serializable for the document writer.

mod block;
mod case;
mod content;
mod document;
mod paragraph;
mod table;

pub use block::Block;
pub use case::{Attorney, CaseMetadata, Court};
pub use content::{paragraphs, AnswerContent, Defense, Section};
pub use document::{ComposedDocument, DocumentKind};
pub use paragraph::{
    Alignment, Indent, InlineContent, LineNumberGutter, Paragraph, Run, Spacing, FONT_FAMILY,
    FONT_SIZE_HALF_POINTS, LINE_UNIT_TWIPS,
};
pub use table::{CellBorders, Table, TableCell, TableRow};
