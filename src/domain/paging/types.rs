// SPDX-License-Identifier: MPL-2.0
//! Query and response shapes for remote pagination.

use super::newtypes::{PageNumber, PageSize, RequestId};

/// The canonical tuple that fully determines the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageQuery {
    pub page: PageNumber,
    pub page_size: PageSize,
    /// Free text, sent verbatim (URL encoding is the transport's job).
    pub search_term: String,
}

impl PageQuery {
    #[must_use]
    pub fn new(page: PageNumber, page_size: PageSize, search_term: impl Into<String>) -> Self {
        Self {
            page,
            page_size,
            search_term: search_term.into(),
        }
    }
}

/// A query tagged with the sequence number it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub id: RequestId,
    pub query: PageQuery,
}

/// One row of the grid. `id` is the render key; the rest is display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// One page of results plus the service's view of the pagination.
///
/// Replaces the grid's state wholesale when accepted; never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageEnvelope {
    pub items: Vec<Record>,
    pub current_page: PageNumber,
    pub page_size: PageSize,
    pub total_items: u64,
    /// May be 0 when the service reports an empty result set.
    pub total_pages: u32,
}
