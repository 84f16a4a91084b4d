//! Paragraph and run-level types.

use serde::Serialize;

/// Font size of every run, in half-points (12pt).
pub const FONT_SIZE_HALF_POINTS: u8 = 24;

/// Serif face required by the California Rules of Court.
pub const FONT_FAMILY: &str = "Times New Roman";

/// Height of one single-spaced line, in twips.
pub const LINE_UNIT_TWIPS: u32 = 240;

/// An immutable fragment of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Underlined text
    pub underline: bool,

    /// Font size in half-points
    pub size_half_points: u8,

    /// Font family
    pub font_family: &'static str,
}

impl Run {
    /// Create a plain run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            underline: false,
            size_half_points: FONT_SIZE_HALF_POINTS,
            font_family: FONT_FAMILY,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::new(text)
        }
    }

    /// Create an underlined run.
    pub fn underlined(text: impl Into<String>) -> Self {
        Self {
            underline: true,
            ..Self::new(text)
        }
    }

    /// Create a bold, underlined run.
    pub fn bold_underlined(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            underline: true,
            ..Self::new(text)
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run
    Text(Run),

    /// A page-number field resolved by the document writer
    PageNumber,

    /// A tab stop
    Tab,

    /// A line break inside the paragraph
    LineBreak,
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justified,
}

/// Line spacing policy.
///
/// Single spacing belongs to the attorney header and caption; the numbered
/// body of a pleading is always double spaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// One line unit
    #[default]
    Single,
    /// Two line units
    Double,
}

impl Spacing {
    /// Line height in twips.
    pub fn line_twips(self) -> u32 {
        match self {
            Spacing::Single => LINE_UNIT_TWIPS,
            Spacing::Double => LINE_UNIT_TWIPS * 2,
        }
    }
}

/// Paragraph indentation in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Indent {
    /// Left indent of every line
    pub left: u32,

    /// Additional indent of the first line
    pub first_line: u32,
}

impl Indent {
    /// Half-inch first-line indent used for body paragraphs.
    pub fn first_line() -> Self {
        Self {
            left: 0,
            first_line: 720,
        }
    }

    /// Block indent applied to every line.
    pub fn block(left: u32) -> Self {
        Self {
            left,
            first_line: 0,
        }
    }
}

/// Reserved line-number column on numbered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineNumberGutter {
    /// Width reserved for the printed line number, in twips
    pub width: u32,

    /// Draw a vertical rule between the gutter and the body text
    pub rule: bool,
}

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Inline content in order
    pub content: Vec<InlineContent>,

    /// Horizontal alignment
    pub alignment: Alignment,

    /// Line spacing policy
    pub spacing: Spacing,

    /// Optional indentation
    pub indent: Option<Indent>,

    /// Space before the paragraph in twips
    pub space_before: Option<u32>,

    /// Space after the paragraph in twips
    pub space_after: Option<u32>,

    /// Pleading line number, stamped during pagination
    pub line_number: Option<u8>,

    /// Line-number gutter, present only on numbered-zone paragraphs
    pub gutter: Option<LineNumberGutter>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            alignment: Alignment::Left,
            spacing: Spacing::Single,
            indent: None,
            space_before: None,
            space_after: None,
            line_number: None,
            gutter: None,
        }
    }

    /// Create a paragraph from runs.
    pub fn from_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        let mut p = Self::new();
        for run in runs {
            p.add_run(run);
        }
        p
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::from_runs([Run::new(text)])
    }

    /// Create a paragraph holding a single bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::from_runs([Run::bold(text)])
    }

    /// Create an empty spacer paragraph.
    pub fn blank() -> Self {
        Self::new()
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set indentation and return self.
    pub fn indented(mut self, indent: Indent) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Set space before and return self.
    pub fn space_before(mut self, twips: u32) -> Self {
        self.space_before = Some(twips);
        self
    }

    /// Set space after and return self.
    pub fn space_after(mut self, twips: u32) -> Self {
        self.space_after = Some(twips);
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineContent::Text(Run::new(text)));
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: Run) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Add a tab.
    pub fn add_tab(&mut self) {
        self.content.push(InlineContent::Tab);
    }

    /// Add a page-number field.
    pub fn add_page_number(&mut self) {
        self.content.push(InlineContent::PageNumber);
    }

    /// Iterate the text runs of the paragraph.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::PageNumber => "#",
                InlineContent::Tab => "\t",
                InlineContent::LineBreak => "\n",
            })
            .collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}
