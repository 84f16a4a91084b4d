//! Plain-text proof of a composed document.
//!
//! Numbered lines print behind their line number and a rule, the caption
//! prints as two columns, and each forced break starts a new page marker.
//! Useful for reviewing pagination without a document writer.

use super::writer::{write_document, DocumentWriter};
use crate::error::Result;
use crate::model::{ComposedDocument, InlineContent, Paragraph, Table};

const CAPTION_COLUMN: usize = 40;

/// Render a composed document as a plain-text proof.
pub fn to_text_proof(doc: &ComposedDocument) -> Result<String> {
    write_document(doc, TextProofWriter::new())
}

/// Writer producing a plain-text proof.
#[derive(Debug)]
pub struct TextProofWriter {
    output: String,
    page: u32,
    footer: Vec<Paragraph>,
}

impl TextProofWriter {
    /// Create a new proof writer.
    pub fn new() -> Self {
        Self {
            output: String::new(),
            page: 1,
            footer: Vec::new(),
        }
    }

    fn push_footer(&mut self) {
        for paragraph in &self.footer {
            let line: String = paragraph
                .content
                .iter()
                .map(|c| match c {
                    InlineContent::Text(run) => run.text.clone(),
                    InlineContent::PageNumber => self.page.to_string(),
                    InlineContent::Tab => " ".to_string(),
                    InlineContent::LineBreak => " / ".to_string(),
                })
                .collect();
            self.output.push_str(&format!("{:^72}\n", line.trim()));
        }
    }
}

impl Default for TextProofWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter for TextProofWriter {
    type Output = String;

    fn begin(&mut self, doc: &ComposedDocument) -> Result<()> {
        self.footer = doc.header_footer.default_footer.paragraphs.clone();
        Ok(())
    }

    fn paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let text = paragraph.plain_text().replace('\n', " / ");
        let line = match paragraph.line_number {
            Some(n) => format!("{:>2} | {}\n", n, text),
            None => format!("{}\n", text),
        };
        self.output.push_str(&line);
        Ok(())
    }

    fn table(&mut self, table: &Table) -> Result<()> {
        for row in table.rows() {
            let columns: Vec<Vec<String>> = row
                .cells
                .iter()
                .map(|c| c.plain_text().lines().map(str::to_string).collect())
                .collect();
            let height = columns.iter().map(Vec::len).max().unwrap_or(0);
            for i in 0..height {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|col| {
                        let cell = col.get(i).map(String::as_str).unwrap_or("");
                        format!("{:<width$}", cell, width = CAPTION_COLUMN)
                    })
                    .collect();
                self.output.push_str(cells.join(") ").trim_end());
                self.output.push('\n');
            }
        }
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.push_footer();
        self.page += 1;
        self.output
            .push_str(&format!("----- page {} -----\n", self.page));
        Ok(())
    }

    fn finish(mut self) -> Result<String> {
        self.push_footer();
        Ok(self.output)
    }
}
