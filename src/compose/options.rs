//! Composition options.

use crate::layout::{PageGeometry, LINES_PER_PAGE};
use chrono::NaiveDate;

/// Placeholder printed where a date is expected but none was injected.
pub const BLANK_DATE: &str = "____________________";

/// Options for composing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Date printed in "Dated:" lines and letter dates
    pub generation_date: Option<NaiveDate>,

    /// Lines the caption table is charged against the page budget.
    ///
    /// The caption sits before the title, where no lines are counted, so
    /// this value only travels on `Table::estimated_lines` and does not
    /// move page breaks in the built-in composers.
    pub caption_line_estimate: u8,

    /// Page geometry handed to the document writer
    pub geometry: PageGeometry,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation date.
    pub fn with_generation_date(mut self, date: NaiveDate) -> Self {
        self.generation_date = Some(date);
        self
    }

    /// Set the caption line estimate.
    pub fn with_caption_lines(mut self, lines: u8) -> Self {
        self.caption_line_estimate = lines.clamp(1, LINES_PER_PAGE);
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Generation date as printed, or a blank line when none was set.
    pub fn date_text(&self) -> String {
        self.generation_date
            .map(format_date)
            .unwrap_or_else(|| BLANK_DATE.to_string())
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            generation_date: None,
            caption_line_estimate: 8,
            geometry: PageGeometry::letter(),
        }
    }
}

/// Format a date the way pleadings print it ("March 4, 2025").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
