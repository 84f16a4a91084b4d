//! Case metadata supplied by the case-management side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parties, counsel and court for one case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseMetadata {
    /// Plaintiff names as they appear in the caption
    pub plaintiff_names: Vec<String>,

    /// Defendant names as they appear in the caption
    pub defendant_names: Vec<String>,

    /// Selects plural party references throughout a document
    pub is_multiple_defendants: bool,

    /// Attorney of record
    pub attorney: Attorney,

    /// Court identity
    pub court: Court,
}

impl CaseMetadata {
    /// Plaintiff names joined for prose ("A, B, and C").
    pub fn plaintiffs(&self) -> String {
        join_names(&self.plaintiff_names)
    }

    /// Defendant names joined for prose.
    pub fn defendants(&self) -> String {
        join_names(&self.defendant_names)
    }

    /// Whether any non-blank defendant name is present.
    pub fn has_defendant(&self) -> bool {
        self.defendant_names.iter().any(|n| !n.trim().is_empty())
    }

    /// Whether any non-blank plaintiff name is present.
    pub fn has_plaintiff(&self) -> bool {
        self.plaintiff_names.iter().any(|n| !n.trim().is_empty())
    }
}

/// Attorney and firm identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attorney {
    /// Attorney name
    pub name: String,

    /// State Bar number
    pub bar_number: String,

    /// Email address
    pub email: String,

    /// Firm name
    pub firm_name: String,

    /// Street and city lines
    pub address_lines: Vec<String>,

    /// Telephone number
    pub phone: String,

    /// Facsimile number
    pub fax: Option<String>,

    /// Party-role label, e.g. "Defendant ACME CORP."
    pub party_role: Option<String>,
}

/// Court identity and calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Court {
    /// County name
    pub county: String,

    /// Optional district or division
    pub district: Option<String>,

    /// Case number
    pub case_number: String,

    /// Assigned judge
    pub judge: Option<String>,

    /// Department
    pub department: Option<String>,

    /// Date the complaint was filed
    pub filing_date: Option<NaiveDate>,

    /// Trial date
    pub trial_date: Option<NaiveDate>,
}

/// Join names with commas and a final "and".
fn join_names(names: &[String]) -> String {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    match names.as_slice() {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{} and {}", a, b),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}
