//! Zone-aware layout rules.

use super::{PageGeometry, PaginationCursor};
use crate::model::{Block, LineNumberGutter, Paragraph, Spacing};
use serde::Serialize;

/// Layout region of a pleading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Attorney header, court heading, caption and title
    Unnumbered,
    /// Double-spaced, line-numbered body
    Numbered,
}

/// Applies per-zone spacing and gutter rules, then hands each block to the
/// pagination cursor.
///
/// The formatter owns the cursor for exactly one composition pass.
#[derive(Debug)]
pub struct ZoneFormatter {
    cursor: PaginationCursor,
    geometry: PageGeometry,
    blocks: Vec<Block>,
}

impl ZoneFormatter {
    /// Create a formatter for one composition pass.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            cursor: PaginationCursor::new(),
            geometry,
            blocks: Vec::new(),
        }
    }

    /// Zone the next block lands in.
    pub fn zone(&self) -> Zone {
        if self.cursor.in_numbered_zone() {
            Zone::Numbered
        } else {
            Zone::Unnumbered
        }
    }

    /// Read-only view of the cursor.
    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    /// Format and place a block.
    pub fn push(&mut self, block: impl Into<Block>) {
        let block = self.format(block.into());
        self.cursor.push(block, &mut self.blocks);
    }

    /// Format and place several blocks in order.
    pub fn extend<I, B>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        for block in blocks {
            self.push(block);
        }
    }

    /// Place the document title; every later block is numbered.
    pub fn push_title(&mut self, title: Paragraph) {
        let block = self.format(Block::Paragraph(title));
        self.cursor.push_title(block, &mut self.blocks);
    }

    /// Finish the pass and return the block stream.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    fn format(&self, block: Block) -> Block {
        match block {
            Block::Paragraph(p) => Block::Paragraph(self.format_paragraph(p)),
            other => other,
        }
    }

    fn format_paragraph(&self, mut p: Paragraph) -> Paragraph {
        match self.zone() {
            Zone::Unnumbered => {
                p.spacing = Spacing::Single;
                p.gutter = None;
            }
            Zone::Numbered => {
                p.spacing = Spacing::Double;
                p.gutter = Some(LineNumberGutter {
                    width: self.geometry.line_number_gutter,
                    rule: true,
                });
            }
        }
        p
    }
}
