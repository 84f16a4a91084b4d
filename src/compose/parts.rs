//! Paragraph builders shared by the composers.

use super::grammar::PartyGrammar;
use crate::error::ConstructionError;
use crate::model::{
    paragraphs, Alignment, Attorney, CaseMetadata, CellBorders, Court, Indent, Paragraph, Run,
    Table, TableCell, TableRow,
};

/// Left indent of the signature block, in twips.
pub(crate) const SIGNATURE_INDENT: u32 = 4320;

/// Centered bold heading.
pub(crate) fn heading(text: impl Into<String>) -> Paragraph {
    Paragraph::bold(text).align(Alignment::Center)
}

/// Centered plain line.
pub(crate) fn centered(text: impl Into<String>) -> Paragraph {
    Paragraph::with_text(text).align(Alignment::Center)
}

/// Justified body paragraph with a first-line indent.
pub(crate) fn body(text: impl Into<String>) -> Paragraph {
    Paragraph::with_text(text)
        .align(Alignment::Justified)
        .indented(Indent::first_line())
}

/// Body paragraphs, one per non-empty line of `text`.
pub(crate) fn body_lines(text: &str) -> Vec<Paragraph> {
    paragraphs(text).map(body).collect()
}

/// Party role used in "Attorney for ..." lines.
pub(crate) fn party_role(metadata: &CaseMetadata, defense: &PartyGrammar) -> String {
    match metadata.attorney.party_role.as_deref().map(str::trim) {
        Some(role) if !role.is_empty() => role.to_string(),
        _ => format!("{} {}", defense.party, metadata.defendants().to_uppercase()),
    }
}

/// Attorney identity block at the top of a pleading.
pub(crate) fn attorney_block(attorney: &Attorney, counsel: &str, role: &str) -> Vec<Paragraph> {
    let mut lines = Vec::new();

    let bar = attorney.bar_number.trim();
    if bar.is_empty() {
        lines.push(attorney.name.trim().to_string());
    } else {
        lines.push(format!("{}, SBN {}", attorney.name.trim(), bar));
    }
    push_nonblank(&mut lines, &attorney.firm_name);
    for line in &attorney.address_lines {
        push_nonblank(&mut lines, line);
    }
    if !attorney.phone.trim().is_empty() {
        lines.push(format!("Telephone: {}", attorney.phone.trim()));
    }
    if let Some(fax) = attorney.fax.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        lines.push(format!("Facsimile: {}", fax));
    }
    if !attorney.email.trim().is_empty() {
        lines.push(format!("Email: {}", attorney.email.trim()));
    }

    let mut block: Vec<Paragraph> = lines.into_iter().map(Paragraph::with_text).collect();
    block.push(Paragraph::blank());
    block.push(Paragraph::with_text(format!("{} for {}", counsel, role)));
    block
}

/// Court heading printed above the caption.
pub(crate) fn court_heading(court: &Court) -> Vec<Paragraph> {
    let mut block = vec![
        heading("SUPERIOR COURT OF THE STATE OF CALIFORNIA"),
        heading(format!("FOR THE COUNTY OF {}", court.county.trim().to_uppercase())),
    ];
    if let Some(district) = court.district.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        block.push(heading(district.to_uppercase()));
    }
    block
}

/// Two-column case caption: parties on the left, case info on the right.
pub(crate) fn caption_table(
    metadata: &CaseMetadata,
    defense: &PartyGrammar,
    plaintiff: &PartyGrammar,
    estimated_lines: u8,
) -> Result<Table, ConstructionError> {
    let mut parties = Vec::new();
    parties.extend(name_lines(&metadata.plaintiff_names));
    parties.push(Paragraph::with_text(format!("{},", plaintiff.party)).indented(Indent::block(1440)));
    parties.push(Paragraph::blank());
    parties.push(Paragraph::with_text("v.").indented(Indent::block(720)));
    parties.push(Paragraph::blank());
    parties.extend(name_lines(&metadata.defendant_names));
    parties.push(Paragraph::with_text(format!("{}.", defense.party)).indented(Indent::block(1440)));

    let court = &metadata.court;
    let mut info = vec![Paragraph::from_runs([
        Run::new("Case No.: "),
        Run::bold(court.case_number.trim()),
    ])];
    if let Some(judge) = court.judge.as_deref().map(str::trim).filter(|j| !j.is_empty()) {
        info.push(Paragraph::blank());
        info.push(Paragraph::with_text("Assigned for all purposes to:"));
        info.push(Paragraph::with_text(format!("Hon. {}", judge)));
    }
    if let Some(dept) = court.department.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        info.push(Paragraph::with_text(format!("Dept. {}", dept)));
    }

    let left = TableCell::with_content(parties).bordered(CellBorders {
        right: true,
        bottom: true,
        ..Default::default()
    });
    let right = TableCell::with_content(info);

    Ok(Table::new(vec![TableRow::new(vec![left, right])])?
        .with_column_widths(vec![4680, 4680])
        .with_estimated_lines(estimated_lines))
}

/// Signature block lines, indented to the right half of the page.
pub(crate) fn signature_lines(lines: impl IntoIterator<Item = String>) -> Vec<Paragraph> {
    lines
        .into_iter()
        .map(|l| Paragraph::with_text(l).indented(Indent::block(SIGNATURE_INDENT)))
        .collect()
}

fn name_lines(names: &[String]) -> Vec<Paragraph> {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();
    let last = names.len().saturating_sub(1);
    names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let sep = if i == last { "," } else { ";" };
            Paragraph::with_text(format!("{}{}", n.to_uppercase(), sep))
        })
        .collect()
}

fn push_nonblank(lines: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        lines.push(value.to_string());
    }
}
