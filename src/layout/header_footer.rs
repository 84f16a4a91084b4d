//! First-page and continuation header/footer definitions.

use crate::model::{Alignment, CaseMetadata, Paragraph, Run};
use serde::Serialize;

/// Content of one header or footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderFooter {
    /// Paragraphs in order
    pub paragraphs: Vec<Paragraph>,

    /// Keep the numbered left margin free in this header
    pub reserves_line_number_margin: bool,
}

impl HeaderFooter {
    /// Create an empty header or footer.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Check if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_empty)
    }
}

/// The four header/footer definitions of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderFooterSet {
    /// Header of the first page
    pub first_page_header: HeaderFooter,

    /// Footer of the first page
    pub first_page_footer: HeaderFooter,

    /// Header of every later page
    pub default_header: HeaderFooter,

    /// Footer of every later page
    pub default_footer: HeaderFooter,
}

/// Build the header/footer set for a document.
///
/// Both footers carry a centered page-number field over the running title.
/// Line numbers travel with the body blocks, so the continuation header
/// only reserves the numbered margin and stays empty.
pub fn assemble(metadata: &CaseMetadata, running_title: &str, numbered: bool) -> HeaderFooterSet {
    let footer = HeaderFooter {
        paragraphs: footer_paragraphs(metadata, running_title),
        reserves_line_number_margin: false,
    };

    HeaderFooterSet {
        first_page_header: HeaderFooter::blank(),
        first_page_footer: footer.clone(),
        default_header: HeaderFooter {
            paragraphs: Vec::new(),
            reserves_line_number_margin: numbered,
        },
        default_footer: footer,
    }
}

fn footer_paragraphs(metadata: &CaseMetadata, running_title: &str) -> Vec<Paragraph> {
    let mut page = Paragraph::new().align(Alignment::Center);
    page.add_text("- ");
    page.add_page_number();
    page.add_text(" -");

    let mut paragraphs = vec![page];

    let title = running_title.trim();
    if !title.is_empty() {
        paragraphs.push(
            Paragraph::from_runs([Run::new(title.to_uppercase())]).align(Alignment::Center),
        );
    }

    let case_number = metadata.court.case_number.trim();
    if !case_number.is_empty() {
        paragraphs.push(
            Paragraph::with_text(format!("Case No. {}", case_number)).align(Alignment::Center),
        );
    }

    paragraphs
}
