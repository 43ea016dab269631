// SPDX-License-Identifier: MPL-2.0
//! Remote-paginated, searchable data grid.
//!
//! This module follows the "state down, messages up" pattern: the grid owns
//! the canonical `{page, page_size, search_term}` tuple, and every change to
//! it surfaces as exactly one [`Event::Fetch`] for the app to run against a
//! [`PageSource`](crate::application::port::PageSource). Responses come back
//! as [`Message::PageLoaded`] tagged with the [`RequestId`] they were issued
//! under; only the most recently issued request may change the grid.

mod view;

#[cfg(test)]
mod tests;

pub use view::{format_timestamp, view, ViewContext};

use crate::application::port::{FetchError, FetchResult};
use crate::domain::paging::{
    range_end, range_start, PageEnvelope, PageNumber, PageQuery, PageRequest, PageSize, Record,
    RequestId,
};

/// Messages emitted by the grid's widgets (and by the app for responses).
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    PageSizeInputChanged(String),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    Refresh,
    PageLoaded {
        request: RequestId,
        result: FetchResult,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Run this query and answer with [`Message::PageLoaded`].
    Fetch(PageRequest),
    /// The latest request failed; the grid kept its previous page.
    FetchFailed {
        request: RequestId,
        error: FetchError,
    },
    /// A response arrived for a request that has since been superseded.
    StaleResponse {
        request: RequestId,
        latest: RequestId,
    },
}

/// Local UI state for the data grid screen.
#[derive(Debug, Clone)]
pub struct State {
    query: PageQuery,
    total_pages: u32,
    total_items: u64,
    items: Vec<Record>,
    /// Id of the most recently issued request.
    latest_request: RequestId,
    loading: bool,
    /// Raw text of the page size field; may be empty or invalid while typing.
    page_size_input: String,
    reset_page_on_search: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(PageSize::default(), false)
    }
}

impl State {
    #[must_use]
    pub fn new(page_size: PageSize, reset_page_on_search: bool) -> Self {
        Self {
            query: PageQuery::new(PageNumber::first(), page_size, String::new()),
            total_pages: 1,
            total_items: 0,
            items: Vec::new(),
            latest_request: RequestId::default(),
            loading: false,
            page_size_input: page_size.value().to_string(),
            reset_page_on_search,
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SearchChanged(term) => self.set_search_term(term),
            Message::PageSizeInputChanged(raw) => {
                let parsed = raw.trim().parse::<i64>();
                self.page_size_input = raw;
                match parsed {
                    Ok(value) => self.set_page_size(value),
                    Err(_) => Event::None,
                }
            }
            Message::FirstPage => self.request_page(PageNumber::first().value()),
            Message::PreviousPage => self.request_page(self.page().value().saturating_sub(1)),
            Message::NextPage => self.request_page(self.page().value().saturating_add(1)),
            Message::LastPage => self.request_page(self.total_pages),
            Message::Refresh => self.refresh(),
            Message::PageLoaded { request, result } => self.apply_response(request, result),
        }
    }

    /// Replaces the search term verbatim.
    ///
    /// The page is kept unless `reset_page_on_search` is enabled.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Event {
        let mut next = self.query.clone();
        next.search_term = term.into();
        if self.reset_page_on_search {
            next.page = PageNumber::first();
        }
        self.transition(next)
    }

    /// Sets the page size (clamped to at least 1) and goes back to page 1.
    pub fn set_page_size(&mut self, value: i64) -> Event {
        let page_size = PageSize::from_input(value);
        let next = PageQuery::new(PageNumber::first(), page_size, self.query.search_term.clone());
        self.transition(next)
    }

    /// Moves to `page` if it lies within `1..=total_pages`; otherwise a no-op.
    pub fn request_page(&mut self, page: u32) -> Event {
        if page < PageNumber::first().value() || page > self.total_pages {
            return Event::None;
        }
        let mut next = self.query.clone();
        next.page = PageNumber::new(page);
        self.transition(next)
    }

    /// Re-issues the current query unconditionally.
    pub fn refresh(&mut self) -> Event {
        self.issue()
    }

    fn transition(&mut self, next: PageQuery) -> Event {
        if next == self.query {
            return Event::None;
        }
        self.query = next;
        self.issue()
    }

    fn issue(&mut self) -> Event {
        self.latest_request = self.latest_request.next();
        self.loading = true;
        Event::Fetch(PageRequest {
            id: self.latest_request,
            query: self.query.clone(),
        })
    }

    fn apply_response(&mut self, request: RequestId, result: FetchResult) -> Event {
        if request != self.latest_request {
            return Event::StaleResponse {
                request,
                latest: self.latest_request,
            };
        }
        self.loading = false;

        match result {
            Ok(envelope) => {
                self.apply_envelope(envelope);
                Event::None
            }
            Err(error) => Event::FetchFailed { request, error },
        }
    }

    /// Replaces pagination and rows with what the service echoed back.
    fn apply_envelope(&mut self, envelope: PageEnvelope) {
        self.query.page = envelope.current_page;
        self.query.page_size = envelope.page_size;
        self.total_pages = envelope.total_pages;
        self.total_items = envelope.total_items;
        self.items = envelope.items;
        self.page_size_input = envelope.page_size.value().to_string();
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.query.page
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.query.page_size
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    #[must_use]
    pub fn page_size_input(&self) -> &str {
        &self.page_size_input
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    #[must_use]
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    #[must_use]
    pub fn range_start(&self) -> u64 {
        range_start(self.query.page, self.query.page_size)
    }

    #[must_use]
    pub fn range_end(&self) -> u64 {
        range_end(self.query.page, self.query.page_size, self.total_items)
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.query.page.is_first()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.query.page.value() < self.total_pages
    }
}
