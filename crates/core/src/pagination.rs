//! Pagination math for the listing pages.
//!
//! The listing pager shows at most seven slots; longer page ranges collapse
//! the middle into ellipsis markers. Everything here is pure and derives
//! from two request-scoped values: the current page (query parameter) and
//! the total page count (filtered row count). Safe to call repeatedly.

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of invoice rows per listing page.
pub const ITEMS_PER_PAGE: i64 = 6;

/// Page counts up to this size render every page number without ellipsis.
const FULL_WINDOW_MAX: u32 = 7;

// ---------------------------------------------------------------------------
// Window generation
// ---------------------------------------------------------------------------

/// One slot in the rendered pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A numbered page link.
    Page(u32),
    /// A gap in the page sequence.
    Ellipsis,
}

impl Serialize for PageToken {
    /// Pages serialize as numbers, gaps as the literal string `"..."`,
    /// matching what the pager renders.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u32(*n),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Generate the ordered pager window for `current_page` of `total_pages`.
///
/// - Seven or fewer pages: every page number, no ellipsis.
/// - Within the first three pages: first three, gap, last two.
/// - Within the last three pages: first two, gap, last three.
/// - Otherwise: first page, gap, the current page and its neighbours,
///   gap, last page.
///
/// Inputs are clamped upstream (see [`parse_page`] and [`clamp_page`]), so
/// there are no error conditions here.
pub fn generate_pagination(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total_pages <= FULL_WINDOW_MAX {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        return vec![
            Page(1),
            Page(2),
            Page(3),
            Ellipsis,
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}

// ---------------------------------------------------------------------------
// Page arithmetic
// ---------------------------------------------------------------------------

/// Parse the raw `page` query parameter. Missing, empty, unparseable, or
/// zero input defaults to page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Clamp a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.min(total_pages).max(1)
}

/// Number of listing pages needed for `row_count` rows, never less than 1.
pub fn total_pages(row_count: i64, per_page: i64) -> u32 {
    if row_count <= 0 {
        return 1;
    }
    ((row_count + per_page - 1) / per_page) as u32
}

/// Convert a 1-based page number to a SQL OFFSET.
pub fn page_offset(page: u32, per_page: i64) -> i64 {
    (i64::from(page) - 1) * per_page
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
