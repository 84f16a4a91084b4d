//! Free-text content supplied per document kind.

use serde::{Deserialize, Serialize};

/// One affirmative defense of an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defense {
    /// Ordinal label, either a word ("FIRST") or a number ("1")
    pub ordinal_label: String,

    /// Causes of action the defense answers; "(To All Causes of Action)" when unset
    pub causes_of_action: Option<String>,

    /// Short defense title
    pub title: Option<String>,

    /// Body text
    pub content: String,
}

impl Defense {
    /// Create a defense with an ordinal label and body.
    pub fn new(ordinal_label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            ordinal_label: ordinal_label.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the title and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the causes-of-action clause and return self.
    pub fn with_causes_of_action(mut self, clause: impl Into<String>) -> Self {
        self.causes_of_action = Some(clause.into());
        self
    }
}

/// Content and flags of an answer to a complaint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerContent {
    /// Text rendered before the affirmative defenses
    pub preamble: Option<String>,

    /// Affirmative defenses, rendered in the order supplied
    pub defenses: Vec<Defense>,

    /// Prayer text; a default prayer is used when unset
    pub prayer: Option<String>,

    /// Include a general denial
    pub use_general_denial: bool,

    /// General denial text replacing the default clause
    pub custom_general_denial: Option<String>,

    /// Document title replacing the default answer title
    pub document_title: Option<String>,
}

/// A free-text section of a letter or agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Section identifier
    pub id: String,

    /// Explicit title
    pub title: Option<String>,

    /// Body text, one paragraph per line
    pub content: String,
}

impl Section {
    /// Create an untitled section.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: content.into(),
        }
    }

    /// Set the title and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Split free text into paragraph lines, dropping blank lines.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
