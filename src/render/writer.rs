//! The seam between the engine and a document writer.
//!
//! The engine stops at an ordered block stream. Encoding it into a file
//! container belongs to a [`DocumentWriter`], which receives each block in
//! order together with the document's geometry and header/footer set.
//!
//! # Example
//!
//! ```
//! use pleading::model::Paragraph;
//! use pleading::render::DocumentWriter;
//!
//! #[derive(Default)]
//! struct LineCounter(usize);
//!
//! impl DocumentWriter for LineCounter {
//!     type Output = usize;
//!
//!     fn paragraph(&mut self, paragraph: &Paragraph) -> pleading::Result<()> {
//!         if paragraph.line_number.is_some() {
//!             self.0 += 1;
//!         }
//!         Ok(())
//!     }
//!
//!     fn finish(self) -> pleading::Result<usize> {
//!         Ok(self.0)
//!     }
//! }
//! ```

use crate::error::Result;
use crate::model::{Block, ComposedDocument, Paragraph, Table};

/// Trait for consumers of a composed block stream.
///
/// Every block method defaults to doing nothing, so a writer only
/// implements what it needs.
pub trait DocumentWriter {
    /// What the writer produces.
    type Output;

    /// Called once before any block, with the whole document for geometry
    /// and header/footer definitions.
    fn begin(&mut self, doc: &ComposedDocument) -> Result<()> {
        let _ = doc;
        Ok(())
    }

    /// Called for each paragraph.
    fn paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let _ = paragraph;
        Ok(())
    }

    /// Called for each table.
    fn table(&mut self, table: &Table) -> Result<()> {
        let _ = table;
        Ok(())
    }

    /// Called for each forced page break.
    fn page_break(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called after the last block.
    fn finish(self) -> Result<Self::Output>;
}

/// Drive a writer over a composed document, block by block.
pub fn write_document<W: DocumentWriter>(doc: &ComposedDocument, mut writer: W) -> Result<W::Output> {
    writer.begin(doc)?;
    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => writer.paragraph(p)?,
            Block::Table(t) => writer.table(t)?,
            Block::ForcedPageBreak => writer.page_break()?,
        }
    }
    writer.finish()
}
