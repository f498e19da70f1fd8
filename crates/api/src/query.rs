//! Shared query parameter types for listing handlers.

use serde::Deserialize;

/// Listing parameters (`?query=&page=`).
///
/// `page` arrives as raw text rather than a number so that garbage input
/// falls back to page 1 (see `finboard_core::pagination::parse_page`)
/// instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ListingParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

/// Query parameters for list endpoints that filter but do not paginate.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}
