//! Section-title recovery for settlement agreement text.
//!
//! Agreement sections often arrive without a stored title, with structure
//! only visible in the text itself. The fallback order is fixed: an
//! explicit title, then the `R E C I T A L S` marker on the first line,
//! then a leading `"<number>. <Title>."` paragraph, then no title. The
//! numbered pattern is inherently lossy: any first sentence under
//! [`MAX_TITLE_LEN`] characters after a number reads as a title.

use crate::model::Section;
use regex::Regex;
use std::sync::OnceLock;

/// Marker line that opens the recitals.
pub const RECITALS_MARKER: &str = "R E C I T A L S";

/// Longest text accepted as a numbered-paragraph title.
pub const MAX_TITLE_LEN: usize = 80;

/// The title recovered for a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionHeading<'a> {
    /// The section's own title
    Explicit(&'a str),
    /// The recitals marker
    Recitals,
    /// A numbered paragraph such as "3. Release of Claims."
    Numbered(NumberedLead<'a>),
    /// No recoverable title
    Untitled,
}

/// The parts of a leading numbered paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedLead<'a> {
    /// Paragraph number without the period
    pub number: &'a str,
    /// Title text without the closing period
    pub title: &'a str,
    /// Remaining text of the line
    pub rest: &'a str,
}

fn numbered_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)\.\s+([^.]+?)\.(?:\s+(.*))?$").expect("numbered paragraph pattern")
    })
}

/// First non-blank line of a text.
pub fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}

/// Check whether a line is the recitals marker.
pub fn is_recitals_marker(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(RECITALS_MARKER)
}

/// Split a line into number, title and remainder when it opens a numbered paragraph.
pub fn numbered_lead(line: &str) -> Option<NumberedLead<'_>> {
    let caps = numbered_pattern().captures(line.trim())?;
    let number = caps.get(1)?.as_str();
    let title = caps.get(2)?.as_str().trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return None;
    }
    let rest = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
    Some(NumberedLead {
        number,
        title,
        rest,
    })
}

/// Recover the heading of a section.
pub fn section_heading(section: &Section) -> SectionHeading<'_> {
    if let Some(title) = section.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return SectionHeading::Explicit(title);
    }

    let Some(line) = first_line(&section.content) else {
        return SectionHeading::Untitled;
    };

    if is_recitals_marker(line) {
        SectionHeading::Recitals
    } else if let Some(lead) = numbered_lead(line) {
        SectionHeading::Numbered(lead)
    } else {
        SectionHeading::Untitled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_title_wins() {
        let section = Section::new("s1", "R E C I T A L S\nA. The parties...").with_title("Intro");
        assert_eq!(section_heading(&section), SectionHeading::Explicit("Intro"));

        let section = Section::new("s1", "1. Payment. Defendant shall pay.").with_title(" ");
        assert!(matches!(section_heading(&section), SectionHeading::Numbered(_)));
    }

    #[test]
    fn test_recitals_marker() {
        let section = Section::new("s1", "\n  R E C I T A L S  \nA. Whereas...");
        assert_eq!(section_heading(&section), SectionHeading::Recitals);
        assert!(is_recitals_marker("r e c i t a l s"));
        assert!(!is_recitals_marker("RECITALS"));
    }

    #[test]
    fn test_numbered_paragraph() {
        let section = Section::new(
            "s2",
            "2. Release of Claims. Plaintiff releases all claims.\nSecond paragraph.",
        );
        assert_eq!(
            section_heading(&section),
            SectionHeading::Numbered(NumberedLead {
                number: "2",
                title: "Release of Claims",
                rest: "Plaintiff releases all claims.",
            })
        );
    }

    #[test]
    fn test_numbered_title_only() {
        let lead = numbered_lead("10. Governing Law.").unwrap();
        assert_eq!(lead.number, "10");
        assert_eq!(lead.title, "Governing Law");
        assert_eq!(lead.rest, "");
    }

    #[test]
    fn test_not_numbered() {
        assert!(numbered_lead("The parties agree.").is_none());
        assert!(numbered_lead("1 Payment. Money.").is_none());
        assert!(numbered_lead("3. no closing period").is_none());
        let long = format!("4. {}. Rest.", "x".repeat(MAX_TITLE_LEN + 1));
        assert!(numbered_lead(&long).is_none());
    }

    #[test]
    fn test_title_limit_counts_characters() {
        // 80 two-byte characters: 160 bytes but within the limit.
        let title = "é".repeat(MAX_TITLE_LEN);
        let text = format!("5. {}. Rest.", title);
        let lead = numbered_lead(&text).unwrap();
        assert_eq!(lead.title, title);

        let over = "é".repeat(MAX_TITLE_LEN + 1);
        assert!(numbered_lead(&format!("5. {}. Rest.", over)).is_none());
    }

    #[test]
    fn test_untitled() {
        assert_eq!(
            section_heading(&Section::new("s", "Plain text.")),
            SectionHeading::Untitled
        );
        assert_eq!(section_heading(&Section::new("s", "  \n ")), SectionHeading::Untitled);
    }
}
