//! Page geometry passed through to the document writer.

use serde::Serialize;

/// Page size and margins in twips (1/20 point).
///
/// These are literal pleading-paper constants, not computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageGeometry {
    /// Page width
    pub page_width: u32,

    /// Page height
    pub page_height: u32,

    /// Top margin
    pub margin_top: u32,

    /// Bottom margin
    pub margin_bottom: u32,

    /// Left margin on unnumbered pages
    pub margin_left: u32,

    /// Right margin
    pub margin_right: u32,

    /// Left margin on numbered pages, wide enough for the line numbers
    pub numbered_margin_left: u32,

    /// Width of the line-number column inside the numbered margin
    pub line_number_gutter: u32,

    /// Distance from the page edge to the header
    pub header_distance: u32,

    /// Distance from the page edge to the footer
    pub footer_distance: u32,
}

impl PageGeometry {
    /// US Letter (8.5 x 11 inches) with pleading margins.
    pub fn letter() -> Self {
        Self {
            page_width: 12240,
            page_height: 15840,
            margin_top: 1440,
            margin_bottom: 1440,
            margin_left: 1440,
            margin_right: 1440,
            numbered_margin_left: 2160,
            line_number_gutter: 720,
            header_distance: 720,
            footer_distance: 720,
        }
    }

    /// Left margin for a page in the given zone.
    pub fn left_margin(&self, numbered: bool) -> u32 {
        if numbered {
            self.numbered_margin_left
        } else {
            self.margin_left
        }
    }

    /// Width available for body text.
    pub fn text_width(&self, numbered: bool) -> u32 {
        self.page_width
            .saturating_sub(self.left_margin(numbered))
            .saturating_sub(self.margin_right)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}
