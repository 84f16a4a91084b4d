//! Fixed lookup tables for party agreement and defense ordinals.

use crate::error::CompositionError;

/// Noun and verb forms for one side of the case.
///
/// One table is selected per composition and used for every stage, so a
/// document never mixes singular and plural forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyGrammar {
    /// "Defendant" / "Defendants"
    pub party: &'static str,
    /// "Defendant's" / "Defendants'"
    pub possessive: &'static str,
    /// "answers" / "answer"
    pub answers: &'static str,
    /// "demands" / "demand"
    pub demands: &'static str,
    /// "denies" / "deny"
    pub denies: &'static str,
    /// "alleges" / "allege"
    pub alleges: &'static str,
    /// "prays" / "pray"
    pub prays: &'static str,
    /// "has" / "have"
    pub has: &'static str,
    /// "Attorney" / "Attorneys"
    pub counsel: &'static str,
}

const DEFENDANT: PartyGrammar = PartyGrammar {
    party: "Defendant",
    possessive: "Defendant's",
    answers: "answers",
    demands: "demands",
    denies: "denies",
    alleges: "alleges",
    prays: "prays",
    has: "has",
    counsel: "Attorney",
};

const DEFENDANTS: PartyGrammar = PartyGrammar {
    party: "Defendants",
    possessive: "Defendants'",
    answers: "answer",
    demands: "demand",
    denies: "deny",
    alleges: "allege",
    prays: "pray",
    has: "have",
    counsel: "Attorneys",
};

const PLAINTIFF: PartyGrammar = PartyGrammar {
    party: "Plaintiff",
    possessive: "Plaintiff's",
    answers: "answers",
    demands: "demands",
    denies: "denies",
    alleges: "alleges",
    prays: "prays",
    has: "has",
    counsel: "Attorney",
};

const PLAINTIFFS: PartyGrammar = PartyGrammar {
    party: "Plaintiffs",
    possessive: "Plaintiffs'",
    answers: "answer",
    demands: "demand",
    denies: "deny",
    alleges: "allege",
    prays: "pray",
    has: "have",
    counsel: "Attorneys",
};

impl PartyGrammar {
    /// Forms for the defense side.
    pub fn defendants(multiple: bool) -> &'static PartyGrammar {
        if multiple {
            &DEFENDANTS
        } else {
            &DEFENDANT
        }
    }

    /// Forms for the plaintiff side.
    pub fn plaintiffs(multiple: bool) -> &'static PartyGrammar {
        if multiple {
            &PLAINTIFFS
        } else {
            &PLAINTIFF
        }
    }
}

const ORDINALS: [&str; 30] = [
    "FIRST",
    "SECOND",
    "THIRD",
    "FOURTH",
    "FIFTH",
    "SIXTH",
    "SEVENTH",
    "EIGHTH",
    "NINTH",
    "TENTH",
    "ELEVENTH",
    "TWELFTH",
    "THIRTEENTH",
    "FOURTEENTH",
    "FIFTEENTH",
    "SIXTEENTH",
    "SEVENTEENTH",
    "EIGHTEENTH",
    "NINETEENTH",
    "TWENTIETH",
    "TWENTY-FIRST",
    "TWENTY-SECOND",
    "TWENTY-THIRD",
    "TWENTY-FOURTH",
    "TWENTY-FIFTH",
    "TWENTY-SIXTH",
    "TWENTY-SEVENTH",
    "TWENTY-EIGHTH",
    "TWENTY-NINTH",
    "THIRTIETH",
];

/// Ordinal word for a 1-based number.
pub fn ordinal(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|i| ORDINALS.get(i)).copied()
}

/// Resolve a defense ordinal label to its upper-case word.
///
/// Accepts a number ("3"), a word in any case ("third"), or an empty label,
/// which falls back to the defense's 0-based `position`.
pub fn resolve_ordinal(label: &str, position: usize) -> Result<&'static str, CompositionError> {
    let label = label.trim();

    if label.is_empty() {
        return ordinal(position + 1)
            .ok_or_else(|| CompositionError::InvalidOrdinal((position + 1).to_string()));
    }

    if let Ok(n) = label.parse::<usize>() {
        return ordinal(n).ok_or_else(|| CompositionError::InvalidOrdinal(label.to_string()));
    }

    let upper = label.to_uppercase();
    ORDINALS
        .iter()
        .find(|w| **w == upper)
        .copied()
        .ok_or_else(|| CompositionError::InvalidOrdinal(label.to_string()))
}
