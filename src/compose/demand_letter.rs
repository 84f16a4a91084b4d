//! Demand letter.

use super::parts::{centered, heading};
use super::{ComposeOptions, Composer};
use crate::error::{CompositionError, Result};
use crate::layout::ZoneFormatter;
use crate::model::{paragraphs, Alignment, Block, CaseMetadata, DocumentKind, Paragraph, Section};

/// Running title printed in the footer of every demand letter.
pub const DEMAND_LETTER_TITLE: &str = "SETTLEMENT DEMAND";

/// Space after each letter paragraph, in twips.
const PARAGRAPH_GAP: u32 = 240;

/// Check whether a section id names the case-description input.
///
/// That section feeds drafting only and is never rendered. Matching ignores
/// case, hyphens and underscores.
pub fn is_case_description(id: &str) -> bool {
    let normalized: String = id
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    normalized == "casedescription"
}

/// Composes a demand letter on firm letterhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemandLetterComposer;

impl DemandLetterComposer {
    /// Create a new demand letter composer.
    pub fn new() -> Self {
        Self
    }
}

impl Composer for DemandLetterComposer {
    type Content = [Section];

    fn kind(&self) -> DocumentKind {
        DocumentKind::DemandLetter
    }

    fn running_title(&self, _metadata: &CaseMetadata, _content: &[Section]) -> String {
        DEMAND_LETTER_TITLE.to_string()
    }

    fn compose(
        &self,
        metadata: &CaseMetadata,
        sections: &[Section],
        options: &ComposeOptions,
    ) -> Result<Vec<Block>> {
        let attorney = &metadata.attorney;
        if attorney.name.trim().is_empty() {
            return Err(CompositionError::MissingField("attorney.name").into());
        }

        let mut out = ZoneFormatter::new(options.geometry);

        log::debug!("demand letter stage Header");
        let firm = attorney.firm_name.trim();
        if !firm.is_empty() {
            out.push(heading(firm.to_uppercase()));
        }
        for line in attorney.address_lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            out.push(centered(line));
        }
        let contact: Vec<String> = [
            (!attorney.phone.trim().is_empty())
                .then(|| format!("Telephone: {}", attorney.phone.trim())),
            (!attorney.email.trim().is_empty()).then(|| format!("Email: {}", attorney.email.trim())),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !contact.is_empty() {
            out.push(centered(contact.join(" | ")));
        }
        out.push(Paragraph::blank());

        log::debug!("demand letter stage Date");
        out.push(Paragraph::with_text(options.date_text()).space_after(PARAGRAPH_GAP));
        if let Some(re) = reference_line(metadata) {
            out.push(Paragraph::bold(re).space_after(PARAGRAPH_GAP));
        }

        log::debug!("demand letter stage Sections ({} supplied)", sections.len());
        for section in sections {
            if is_case_description(&section.id) {
                log::debug!("skipping case description section {:?}", section.id);
                continue;
            }
            if let Some(title) = section_title(section) {
                out.push(Paragraph::bold(title).space_after(PARAGRAPH_GAP));
            }
            out.extend(paragraphs(&section.content).map(|line| {
                Paragraph::with_text(line)
                    .align(Alignment::Justified)
                    .space_after(PARAGRAPH_GAP)
            }));
        }

        log::debug!("demand letter stage SignatureBlock");
        out.push(Paragraph::with_text("Sincerely,").space_before(PARAGRAPH_GAP));
        out.push(Paragraph::blank());
        out.push(Paragraph::blank());
        out.push(Paragraph::with_text(attorney.name.trim()));
        if !firm.is_empty() {
            out.push(Paragraph::with_text(firm));
        }

        Ok(out.into_blocks())
    }
}

/// Upper-case section title, falling back to the section id.
fn section_title(section: &Section) -> Option<String> {
    let explicit = section.title.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let title = match explicit {
        Some(t) => t.to_string(),
        None => section.id.trim().replace(['-', '_'], " "),
    };
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_uppercase())
}

fn reference_line(metadata: &CaseMetadata) -> Option<String> {
    let case_number = metadata.court.case_number.trim();
    if case_number.is_empty() {
        return None;
    }
    if metadata.has_plaintiff() && metadata.has_defendant() {
        Some(format!(
            "Re: {} v. {}, Case No. {}",
            metadata.plaintiffs(),
            metadata.defendants(),
            case_number
        ))
    } else {
        Some(format!("Re: Case No. {}", case_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn metadata() -> CaseMetadata {
        let mut meta = CaseMetadata {
            plaintiff_names: vec!["Jane Roe".to_string()],
            defendant_names: vec!["Acme Corp.".to_string()],
            ..Default::default()
        };
        meta.attorney.name = "Maria Lopez".to_string();
        meta.attorney.firm_name = "Lopez & Park LLP".to_string();
        meta.attorney.phone = "(510) 555-0100".to_string();
        meta.court.case_number = "24CV0001".to_string();
        meta
    }

    #[test]
    fn test_case_description_ids() {
        assert!(is_case_description("case_description"));
        assert!(is_case_description("case-description"));
        assert!(is_case_description("caseDescription"));
        assert!(!is_case_description("damages"));
    }

    #[test]
    fn test_section_title() {
        assert_eq!(
            section_title(&Section::new("liability", "x").with_title("Liability")),
            Some("LIABILITY".to_string())
        );
        assert_eq!(
            section_title(&Section::new("medical_expenses", "x")),
            Some("MEDICAL EXPENSES".to_string())
        );
        assert_eq!(section_title(&Section::new("", "x")), None);
    }

    #[test]
    fn test_compose_letter() {
        let sections = vec![
            Section::new("case_description", "Internal notes only."),
            Section::new("facts", "On May 1 our client was injured.\n\nShe was treated.")
                .with_title("Facts"),
            Section::new("demand", "We demand $50,000.").with_title("Demand"),
        ];
        let options = ComposeOptions::new()
            .with_generation_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        let blocks = DemandLetterComposer::new()
            .compose(&metadata(), &sections, &options)
            .unwrap();
        let text: Vec<String> = blocks.iter().map(Block::plain_text).collect();

        assert_eq!(text[0], "LOPEZ & PARK LLP");
        assert!(text.contains(&"January 15, 2025".to_string()));
        assert!(text.contains(&"Re: Jane Roe v. Acme Corp., Case No. 24CV0001".to_string()));
        assert!(!text.iter().any(|t| t.contains("Internal notes")));

        let facts = text.iter().position(|t| t == "FACTS").unwrap();
        assert_eq!(text[facts + 1], "On May 1 our client was injured.");
        assert_eq!(text[facts + 2], "She was treated.");
        assert!(blocks[facts].as_paragraph().unwrap().runs().all(|r| r.bold));

        assert!(blocks.iter().all(|b| !b.is_page_break()));
        assert!(blocks
            .iter()
            .filter_map(Block::as_paragraph)
            .all(|p| p.line_number.is_none()));
    }

    #[test]
    fn test_requires_attorney() {
        let mut meta = metadata();
        meta.attorney.name = " ".to_string();
        let err = DemandLetterComposer::new()
            .compose(&meta, &[], &ComposeOptions::default())
            .unwrap_err();
        assert!(err.is_composition());
    }
}
