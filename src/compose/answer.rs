//! Answer to a complaint.

use super::grammar::{resolve_ordinal, PartyGrammar};
use super::options::format_date;
use super::parts::{
    attorney_block, body, body_lines, caption_table, centered, court_heading, heading, party_role,
    signature_lines,
};
use super::{ComposeOptions, Composer};
use crate::error::{CompositionError, Result};
use crate::layout::ZoneFormatter;
use crate::model::{
    paragraphs, AnswerContent, Block, CaseMetadata, Defense, DocumentKind, Indent, Paragraph,
};

const DEFAULT_CAUSES: &str = "(To All Causes of Action)";

/// Fixed stage order of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Header,
    Caption,
    Title,
    FilingInfo,
    OpeningStatement,
    JuryDemand,
    GeneralDenial,
    Preamble,
    DefensesIntro,
    Defenses,
    PrayerForRelief,
    SignatureBlock,
    Done,
}

impl Stage {
    fn next(self) -> Self {
        match self {
            Stage::Header => Stage::Caption,
            Stage::Caption => Stage::Title,
            Stage::Title => Stage::FilingInfo,
            Stage::FilingInfo => Stage::OpeningStatement,
            Stage::OpeningStatement => Stage::JuryDemand,
            Stage::JuryDemand => Stage::GeneralDenial,
            Stage::GeneralDenial => Stage::Preamble,
            Stage::Preamble => Stage::DefensesIntro,
            Stage::DefensesIntro => Stage::Defenses,
            Stage::Defenses => Stage::PrayerForRelief,
            Stage::PrayerForRelief => Stage::SignatureBlock,
            Stage::SignatureBlock | Stage::Done => Stage::Done,
        }
    }
}

/// Composes an answer to a complaint on pleading paper.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerComposer;

impl AnswerComposer {
    /// Create a new answer composer.
    pub fn new() -> Self {
        Self
    }
}

impl Composer for AnswerComposer {
    type Content = AnswerContent;

    fn kind(&self) -> DocumentKind {
        DocumentKind::Answer
    }

    fn uses_pleading_paper(&self) -> bool {
        true
    }

    fn running_title(&self, metadata: &CaseMetadata, content: &AnswerContent) -> String {
        document_title(content, PartyGrammar::defendants(metadata.is_multiple_defendants))
    }

    fn compose(
        &self,
        metadata: &CaseMetadata,
        content: &AnswerContent,
        options: &ComposeOptions,
    ) -> Result<Vec<Block>> {
        validate(metadata)?;

        // One flag keys both sides so a document never mixes forms.
        let multiple = metadata.is_multiple_defendants;
        let pass = Pass {
            metadata,
            content,
            options,
            defense: PartyGrammar::defendants(multiple),
            plaintiff: PartyGrammar::plaintiffs(multiple),
        };

        let mut out = ZoneFormatter::new(options.geometry);
        let mut stage = Stage::Header;
        while stage != Stage::Done {
            log::debug!("answer stage {:?}", stage);
            pass.emit(stage, &mut out)?;
            stage = stage.next();
        }

        Ok(out.into_blocks())
    }
}

fn validate(metadata: &CaseMetadata) -> std::result::Result<(), CompositionError> {
    if !metadata.has_defendant() {
        return Err(CompositionError::MissingField("defendant_names"));
    }
    if !metadata.has_plaintiff() {
        return Err(CompositionError::MissingField("plaintiff_names"));
    }
    if metadata.attorney.name.trim().is_empty() {
        return Err(CompositionError::MissingField("attorney.name"));
    }
    if metadata.court.county.trim().is_empty() {
        return Err(CompositionError::MissingField("court.county"));
    }
    if metadata.court.case_number.trim().is_empty() {
        return Err(CompositionError::MissingField("court.case_number"));
    }
    Ok(())
}

fn document_title(content: &AnswerContent, defense: &PartyGrammar) -> String {
    match content.document_title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_uppercase(),
        _ => format!("{} ANSWER TO COMPLAINT", defense.possessive.to_uppercase()),
    }
}

/// State shared by every stage of one composition.
struct Pass<'a> {
    metadata: &'a CaseMetadata,
    content: &'a AnswerContent,
    options: &'a ComposeOptions,
    defense: &'static PartyGrammar,
    plaintiff: &'static PartyGrammar,
}

impl Pass<'_> {
    fn emit(&self, stage: Stage, out: &mut ZoneFormatter) -> Result<()> {
        let d = self.defense;
        let p = self.plaintiff;

        match stage {
            Stage::Header => {
                let role = party_role(self.metadata, d);
                out.extend(attorney_block(&self.metadata.attorney, d.counsel, &role));
                out.push(Paragraph::blank());
                out.extend(court_heading(&self.metadata.court));
                out.push(Paragraph::blank());
            }
            Stage::Caption => {
                let table =
                    caption_table(self.metadata, d, p, self.options.caption_line_estimate)?;
                out.push(table);
            }
            Stage::Title => {
                out.push_title(heading(document_title(self.content, d)));
            }
            Stage::FilingInfo => {
                let court = &self.metadata.court;
                let filed = court.filing_date.map(format_date);
                let trial = court.trial_date.map(format_date);
                out.push(Paragraph::with_text(format!(
                    "Complaint Filed: {}",
                    filed.as_deref().unwrap_or("Not Set")
                )));
                out.push(Paragraph::with_text(format!(
                    "Trial Date: {}",
                    trial.as_deref().unwrap_or("None Set")
                )));
            }
            Stage::OpeningStatement => {
                out.push(body(format!(
                    "{} {} (\"{}\") {} the Complaint of {} {} (\"{}\") as follows:",
                    d.party,
                    self.metadata.defendants().to_uppercase(),
                    d.party,
                    d.answers,
                    p.party,
                    self.metadata.plaintiffs().to_uppercase(),
                    p.party,
                )));
            }
            Stage::JuryDemand => {
                out.push(body(format!(
                    "{} hereby {} a trial by jury on all issues so triable.",
                    d.party, d.demands
                )));
            }
            Stage::GeneralDenial => {
                if !self.content.use_general_denial {
                    return Ok(());
                }
                out.push(heading("GENERAL DENIAL"));
                let custom = self
                    .content
                    .custom_general_denial
                    .as_deref()
                    .filter(|t| paragraphs(t).next().is_some());
                match custom {
                    Some(text) => out.extend(body_lines(text)),
                    None => out.push(body(default_general_denial(d, p))),
                }
            }
            Stage::Preamble => {
                if let Some(preamble) = self.content.preamble.as_deref() {
                    out.extend(body_lines(preamble));
                }
            }
            Stage::DefensesIntro => {
                if self.content.defenses.is_empty() {
                    return Ok(());
                }
                out.push(heading("AFFIRMATIVE DEFENSES"));
                out.push(body(format!(
                    "As separate and distinct affirmative defenses to the Complaint, and to each \
                     cause of action therein, {} {} as follows:",
                    d.party, d.alleges
                )));
            }
            Stage::Defenses => {
                for (position, defense) in self.content.defenses.iter().enumerate() {
                    emit_defense(defense, position, out)?;
                }
            }
            Stage::PrayerForRelief => {
                out.push(heading("PRAYER FOR RELIEF"));
                out.push(body(format!(
                    "WHEREFORE, {} {} for judgment as follows:",
                    d.party, d.prays
                )));
                let custom = self
                    .content
                    .prayer
                    .as_deref()
                    .filter(|t| paragraphs(t).next().is_some());
                let items: Vec<String> = match custom {
                    Some(text) => paragraphs(text).map(str::to_string).collect(),
                    None => default_prayer(p),
                };
                out.extend(
                    items
                        .into_iter()
                        .map(|item| Paragraph::with_text(item).indented(Indent::block(720))),
                );
            }
            Stage::SignatureBlock => {
                let attorney = &self.metadata.attorney;
                out.push(Paragraph::with_text(format!(
                    "Dated: {}",
                    self.options.date_text()
                )));
                let mut lines = Vec::new();
                if !attorney.firm_name.trim().is_empty() {
                    lines.push(attorney.firm_name.trim().to_uppercase());
                }
                lines.push("By: ______________________________".to_string());
                lines.push(attorney.name.trim().to_string());
                lines.push(format!(
                    "{} for {}",
                    d.counsel,
                    party_role(self.metadata, d)
                ));
                out.extend(signature_lines(lines));
            }
            Stage::Done => {}
        }
        Ok(())
    }
}

fn emit_defense(defense: &Defense, position: usize, out: &mut ZoneFormatter) -> Result<()> {
    let word = resolve_ordinal(&defense.ordinal_label, position)?;
    out.push(heading(format!("{} AFFIRMATIVE DEFENSE", word)));

    let causes = defense
        .causes_of_action
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CAUSES);
    out.push(centered(causes));

    if let Some(title) = defense.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        out.push(heading(parenthesize(title)));
    }

    out.extend(body_lines(&defense.content));
    Ok(())
}

fn parenthesize(title: &str) -> String {
    if title.starts_with('(') && title.ends_with(')') {
        title.to_string()
    } else {
        format!("({})", title)
    }
}

fn default_general_denial(d: &PartyGrammar, p: &PartyGrammar) -> String {
    format!(
        "Pursuant to California Code of Civil Procedure section 431.30(d), {} generally {} \
         each and every allegation of {} Complaint, and further {} that {} {} been damaged in \
         any sum, or at all, by reason of any act or omission of {}.",
        d.party, d.denies, p.possessive, d.denies, p.party, p.has, d.party
    )
}

fn default_prayer(p: &PartyGrammar) -> Vec<String> {
    vec![
        format!("1. That {} take nothing by way of the Complaint;", p.party),
        "2. That the Complaint be dismissed with prejudice;".to_string(),
        "3. For costs of suit incurred herein; and".to_string(),
        "4. For such other and further relief as the Court deems just and proper.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let mut stage = Stage::Header;
        let mut order = vec![stage];
        while stage != Stage::Done {
            stage = stage.next();
            order.push(stage);
        }
        assert_eq!(order.len(), 13);
        assert_eq!(order[2], Stage::Title);
        assert_eq!(order[11], Stage::SignatureBlock);
    }

    #[test]
    fn test_document_title() {
        let mut content = AnswerContent::default();
        assert_eq!(
            document_title(&content, PartyGrammar::defendants(false)),
            "DEFENDANT'S ANSWER TO COMPLAINT"
        );
        assert_eq!(
            document_title(&content, PartyGrammar::defendants(true)),
            "DEFENDANTS' ANSWER TO COMPLAINT"
        );
        content.document_title = Some("Verified Answer".to_string());
        assert_eq!(
            document_title(&content, PartyGrammar::defendants(true)),
            "VERIFIED ANSWER"
        );
    }

    #[test]
    fn test_default_general_denial_forms() {
        let singular = default_general_denial(
            PartyGrammar::defendants(false),
            PartyGrammar::plaintiffs(false),
        );
        assert!(singular.contains("Defendant generally denies"));
        assert!(singular.contains("Plaintiff has been damaged"));

        let plural = default_general_denial(
            PartyGrammar::defendants(true),
            PartyGrammar::plaintiffs(false),
        );
        assert!(plural.contains("Defendants generally deny"));
        assert!(plural.ends_with("omission of Defendants."));
    }

    #[test]
    fn test_parenthesize() {
        assert_eq!(parenthesize("Laches"), "(Laches)");
        assert_eq!(parenthesize("(Laches)"), "(Laches)");
    }

    #[test]
    fn test_missing_fields() {
        let meta = CaseMetadata::default();
        assert_eq!(
            validate(&meta),
            Err(CompositionError::MissingField("defendant_names"))
        );
    }
}
