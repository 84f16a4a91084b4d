//! Pleading line numbering and forced page breaks.

use crate::model::Block;

/// Numbered lines on one page of pleading paper.
pub const LINES_PER_PAGE: u8 = 28;

/// Line-numbering state for one composition pass.
///
/// Before the title boundary every block passes through unnumbered. The
/// boundary is crossed once and never reverts. After it, each paragraph
/// takes the next line number, and a [`Block::ForcedPageBreak`] follows
/// every paragraph or table that fills the 28th line of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    current_line: u8,
    lines_on_page: u8,
    in_numbered_zone: bool,
    pages: u32,
}

impl PaginationCursor {
    /// Create a cursor positioned before the title boundary.
    pub fn new() -> Self {
        Self {
            current_line: 1,
            lines_on_page: 0,
            in_numbered_zone: false,
            pages: 1,
        }
    }

    /// Line number the next numbered paragraph will receive.
    pub fn current_line(&self) -> u8 {
        self.current_line
    }

    /// Numbered lines already used on the current page.
    pub fn lines_on_page(&self) -> u8 {
        self.lines_on_page
    }

    /// Whether the title boundary has been crossed.
    pub fn in_numbered_zone(&self) -> bool {
        self.in_numbered_zone
    }

    /// Physical page the cursor is on (1-indexed).
    pub fn page(&self) -> u32 {
        self.pages
    }

    /// Emit the title paragraph unnumbered, then enter the numbered zone.
    pub fn push_title(&mut self, block: Block, out: &mut Vec<Block>) {
        if self.in_numbered_zone {
            self.push(block, out);
            return;
        }
        out.push(block);
        self.in_numbered_zone = true;
        self.current_line = 1;
        self.lines_on_page = 0;
        log::debug!("title boundary crossed on page {}", self.pages);
    }

    /// Place one block, stamping line numbers and appending breaks.
    pub fn push(&mut self, block: Block, out: &mut Vec<Block>) {
        match block {
            Block::Paragraph(mut p) => {
                if !self.in_numbered_zone {
                    out.push(Block::Paragraph(p));
                    return;
                }
                p.line_number = Some(self.current_line);
                log::trace!("line {} on page {}", self.current_line, self.pages);
                out.push(Block::Paragraph(p));
                self.advance(1, out);
            }
            Block::Table(t) => {
                let lines = clamp_estimate(t.estimated_lines);
                out.push(Block::Table(t));
                if self.in_numbered_zone {
                    self.advance(lines, out);
                }
            }
            Block::ForcedPageBreak => {
                out.push(Block::ForcedPageBreak);
                self.new_page();
            }
        }
    }

    fn advance(&mut self, lines: u8, out: &mut Vec<Block>) {
        self.lines_on_page = self.lines_on_page.saturating_add(lines);
        if self.lines_on_page >= LINES_PER_PAGE {
            log::debug!("page {} full, inserting forced break", self.pages);
            out.push(Block::ForcedPageBreak);
            self.new_page();
        } else {
            self.current_line = self.lines_on_page + 1;
        }
    }

    fn new_page(&mut self) {
        self.pages += 1;
        self.current_line = 1;
        self.lines_on_page = 0;
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_estimate(lines: u8) -> u8 {
    let clamped = lines.clamp(1, LINES_PER_PAGE);
    if clamped != lines {
        log::warn!(
            "table line estimate {} out of range, clamped to {}",
            lines,
            clamped
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table, TableRow};

    fn numbered_stream(count: usize) -> Vec<Block> {
        let mut cursor = PaginationCursor::new();
        let mut out = Vec::new();
        cursor.push_title(Paragraph::bold("TITLE").into(), &mut out);
        for i in 0..count {
            cursor.push(Paragraph::with_text(format!("line {}", i)).into(), &mut out);
        }
        out
    }

    fn table(lines: u8) -> Block {
        Table::new(vec![TableRow::from_strings(["a", "b"])])
            .unwrap()
            .with_estimated_lines(lines)
            .into()
    }

    #[test]
    fn test_unnumbered_before_title() {
        let mut cursor = PaginationCursor::new();
        let mut out = Vec::new();
        for _ in 0..40 {
            cursor.push(Paragraph::with_text("header").into(), &mut out);
        }
        assert_eq!(out.len(), 40);
        assert!(out
            .iter()
            .all(|b| b.as_paragraph().is_some_and(|p| p.line_number.is_none())));
        assert!(!cursor.in_numbered_zone());
    }

    #[test]
    fn test_title_is_unnumbered() {
        let out = numbered_stream(1);
        assert_eq!(out[0].as_paragraph().unwrap().line_number, None);
        assert_eq!(out[1].as_paragraph().unwrap().line_number, Some(1));
    }

    #[test]
    fn test_forty_paragraphs_break_once() {
        let out = numbered_stream(40);
        let breaks: Vec<usize> = out
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_page_break())
            .map(|(i, _)| i)
            .collect();

        // title at 0, paragraphs 1..=28, break at 29
        assert_eq!(breaks, vec![29]);
        assert_eq!(out[28].as_paragraph().unwrap().line_number, Some(28));
        assert_eq!(out[30].as_paragraph().unwrap().line_number, Some(1));
    }

    #[test]
    fn test_line_numbers_stay_in_range() {
        let out = numbered_stream(200);
        for p in out.iter().filter_map(Block::as_paragraph).skip(1) {
            let line = p.line_number.unwrap();
            assert!((1..=28).contains(&line));
        }
        assert_eq!(out.iter().filter(|b| b.is_page_break()).count(), 7);
    }

    #[test]
    fn test_exact_page_has_trailing_break() {
        let out = numbered_stream(28);
        assert!(out.last().unwrap().is_page_break());
    }

    #[test]
    fn test_table_consumes_estimate() {
        let mut cursor = PaginationCursor::new();
        let mut out = Vec::new();
        cursor.push_title(Paragraph::bold("TITLE").into(), &mut out);
        cursor.push(table(8), &mut out);
        assert_eq!(cursor.current_line(), 9);

        cursor.push(Paragraph::with_text("after").into(), &mut out);
        assert_eq!(out.last().unwrap().as_paragraph().unwrap().line_number, Some(9));
    }

    #[test]
    fn test_table_filling_page_breaks() {
        let mut cursor = PaginationCursor::new();
        let mut out = Vec::new();
        cursor.push_title(Paragraph::bold("TITLE").into(), &mut out);
        for _ in 0..25 {
            cursor.push(Paragraph::with_text("x").into(), &mut out);
        }
        cursor.push(table(8), &mut out);
        assert!(out.last().unwrap().is_page_break());
        assert_eq!(cursor.current_line(), 1);
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn test_table_estimate_clamped() {
        assert_eq!(clamp_estimate(0), 1);
        assert_eq!(clamp_estimate(200), 28);
        assert_eq!(clamp_estimate(8), 8);
    }

    #[test]
    fn test_explicit_break_restarts_numbering() {
        let mut cursor = PaginationCursor::new();
        let mut out = Vec::new();
        cursor.push_title(Paragraph::bold("TITLE").into(), &mut out);
        for _ in 0..5 {
            cursor.push(Paragraph::with_text("x").into(), &mut out);
        }
        cursor.push(Block::ForcedPageBreak, &mut out);
        assert_eq!(cursor.current_line(), 1);
        assert_eq!(cursor.lines_on_page(), 0);
    }

    #[test]
    fn test_boundary_crossed_once() {
        let mut cursor = PaginationCursor::new();
        let mut out = Vec::new();
        cursor.push_title(Paragraph::bold("TITLE").into(), &mut out);
        cursor.push(Paragraph::with_text("x").into(), &mut out);
        cursor.push_title(Paragraph::bold("AGAIN").into(), &mut out);

        assert!(cursor.in_numbered_zone());
        assert_eq!(out[2].as_paragraph().unwrap().line_number, Some(2));
    }
}
