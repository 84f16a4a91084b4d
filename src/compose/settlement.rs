//! Settlement agreement and release.

use super::heading::{
    first_line, is_recitals_marker, numbered_lead, section_heading, NumberedLead, SectionHeading,
    RECITALS_MARKER,
};
use super::parts::heading;
use super::{ComposeOptions, Composer};
use crate::error::{CompositionError, Result};
use crate::layout::ZoneFormatter;
use crate::model::{
    paragraphs, Alignment, Block, CaseMetadata, DocumentKind, Indent, Paragraph, Run, Section,
};

/// Running title printed in the footer of every settlement agreement.
pub const SETTLEMENT_TITLE: &str = "SETTLEMENT AGREEMENT AND RELEASE";

const PARAGRAPH_GAP: u32 = 240;

/// Composes a settlement agreement from its sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementComposer;

impl SettlementComposer {
    /// Create a new settlement agreement composer.
    pub fn new() -> Self {
        Self
    }
}

impl Composer for SettlementComposer {
    type Content = [Section];

    fn kind(&self) -> DocumentKind {
        DocumentKind::SettlementAgreement
    }

    fn running_title(&self, _metadata: &CaseMetadata, _content: &[Section]) -> String {
        SETTLEMENT_TITLE.to_string()
    }

    fn compose(
        &self,
        _metadata: &CaseMetadata,
        sections: &[Section],
        options: &ComposeOptions,
    ) -> Result<Vec<Block>> {
        if sections.iter().all(|s| first_line(&s.content).is_none()) {
            let kind = DocumentKind::SettlementAgreement.name();
            return Err(CompositionError::EmptyContent(kind).into());
        }

        let mut out = ZoneFormatter::new(options.geometry);
        for section in sections {
            let recovered = section_heading(section);
            log::debug!("settlement section {:?}: {:?}", section.id, recovered);
            emit_section(section, &recovered, &mut out);
        }
        Ok(out.into_blocks())
    }
}

fn emit_section(section: &Section, recovered: &SectionHeading<'_>, out: &mut ZoneFormatter) {
    let mut lines = paragraphs(&section.content).peekable();

    match recovered {
        SectionHeading::Explicit(title) => {
            out.push(heading(title.to_uppercase()).space_after(PARAGRAPH_GAP));
        }
        SectionHeading::Recitals => {
            lines.next();
            out.push(heading(RECITALS_MARKER).space_after(PARAGRAPH_GAP));
        }
        SectionHeading::Numbered(_) | SectionHeading::Untitled => {}
    }

    // A stray marker under an explicit title is dropped, not printed as text.
    if lines.peek().is_some_and(|l| is_recitals_marker(l)) {
        lines.next();
    }

    let numbered = lines.peek().and_then(|l| numbered_lead(l)).is_some();
    let mut first = true;
    for line in lines {
        let paragraph = match numbered_lead(line) {
            Some(lead) if numbered && first => numbered_paragraph(&lead),
            _ => Paragraph::with_text(line),
        };
        let paragraph = paragraph
            .align(Alignment::Justified)
            .space_after(PARAGRAPH_GAP);
        let paragraph = if numbered {
            paragraph.indented(Indent::first_line())
        } else {
            paragraph
        };
        out.push(paragraph);
        first = false;
    }
}

fn numbered_paragraph(lead: &NumberedLead<'_>) -> Paragraph {
    let mut runs = vec![
        Run::new(format!("{}.\u{a0}", lead.number)),
        Run::bold_underlined(lead.title),
        Run::new("."),
    ];
    if !lead.rest.is_empty() {
        runs.push(Run::new(format!(" {}", lead.rest)));
    }
    Paragraph::from_runs(runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(sections: &[Section]) -> Vec<Block> {
        SettlementComposer::new()
            .compose(&CaseMetadata::default(), sections, &ComposeOptions::default())
            .unwrap()
    }

    #[test]
    fn test_recitals_section() {
        let blocks = compose(&[Section::new(
            "recitals",
            "R E C I T A L S\nA. Plaintiff filed suit.\nB. The parties wish to settle.",
        )]);

        let title = blocks[0].as_paragraph().unwrap();
        assert_eq!(title.plain_text(), "R E C I T A L S");
        assert_eq!(title.alignment, Alignment::Center);
        assert!(title.runs().all(|r| r.bold));

        let body = blocks[1].as_paragraph().unwrap();
        assert_eq!(body.plain_text(), "A. Plaintiff filed suit.");
        assert!(body.indent.is_none());
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_numbered_section() {
        let blocks = compose(&[Section::new(
            "payment",
            "1. Payment. Defendant shall pay $10,000.\nPayment is due in 30 days.",
        )]);

        let lead = blocks[0].as_paragraph().unwrap();
        assert_eq!(
            lead.plain_text(),
            "1.\u{a0}Payment. Defendant shall pay $10,000."
        );
        let title_run = lead.runs().nth(1).unwrap();
        assert!(title_run.bold && title_run.underline);
        assert_eq!(lead.indent, Some(Indent::first_line()));

        let follow = blocks[1].as_paragraph().unwrap();
        assert_eq!(follow.plain_text(), "Payment is due in 30 days.");
        assert_eq!(follow.indent, Some(Indent::first_line()));
    }

    #[test]
    fn test_explicit_title_section() {
        let blocks = compose(&[Section::new("intro", "This Agreement is made by the parties.")
            .with_title("Settlement Agreement and Release")]);

        assert_eq!(blocks[0].plain_text(), "SETTLEMENT AGREEMENT AND RELEASE");
        let body = blocks[1].as_paragraph().unwrap();
        assert!(body.indent.is_none());
        assert_eq!(body.alignment, Alignment::Justified);
    }

    #[test]
    fn test_explicit_title_over_numbered_content() {
        let blocks = compose(&[
            Section::new("release", "2. Release. Plaintiff releases all claims.")
                .with_title("Release of All Claims"),
        ]);
        assert_eq!(blocks[0].plain_text(), "RELEASE OF ALL CLAIMS");
        assert_eq!(
            blocks[1].as_paragraph().unwrap().indent,
            Some(Indent::first_line())
        );
    }

    #[test]
    fn test_unnumbered_zone_only() {
        let sections: Vec<Section> = (1..=40)
            .map(|i| Section::new(i.to_string(), format!("{}. Term {}. Text.", i, i)))
            .collect();
        let blocks = compose(&sections);
        assert_eq!(blocks.len(), 40);
        assert!(blocks.iter().all(|b| !b.is_page_break()));
    }

    #[test]
    fn test_empty_agreement_rejected() {
        let err = SettlementComposer::new()
            .compose(
                &CaseMetadata::default(),
                &[Section::new("blank", "  \n")],
                &ComposeOptions::default(),
            )
            .unwrap_err();
        assert!(err.is_composition());
    }
}
