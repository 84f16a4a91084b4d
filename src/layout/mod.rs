//! Pagination and layout for pleading paper.
//!
//! The [`ZoneFormatter`] decides whether a block sits in the unnumbered
//! header/caption zone or the numbered body zone, applies that zone's
//! spacing and gutter rules, and feeds the block to the
//! [`PaginationCursor`], which stamps line numbers and inserts forced page
//! breaks.

mod cursor;
mod formatter;
mod geometry;
mod header_footer;

pub use cursor::{PaginationCursor, LINES_PER_PAGE};
pub use formatter::{Zone, ZoneFormatter};
pub use geometry::PageGeometry;
pub use header_footer::{assemble, HeaderFooter, HeaderFooterSet};
