//! Search session — tab selection and paging state for one search screen.
//!
//! The session never talks to the network. [`SearchSession::handle`] turns a
//! user event into the [`SearchRequest`] the caller should run; the caller
//! reports back with [`SearchSession::complete`] or [`SearchSession::fail`].
//!
//! # Paging
//!
//! - `NewSearch` resets everything and asks for page 0.
//! - `LoadMore` asks for the next page, unless a request is already in flight
//!   or the previous page came back short.
//! - A page exactly `page_size` long means more results may follow.
//! - Only the request currently in flight may complete or fail; answers to
//!   superseded requests are dropped.

use crate::category::SearchCategory;
use crate::config::SearchConfig;
use crate::request::SearchRequest;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Submit `query` on the tab at `tab`.
    NewSearch { query: String, tab: usize },
    /// Fetch the next page of the current search.
    LoadMore,
    /// The pending user-facing message has been displayed.
    MessageShown,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct SearchSession<T> {
    pub category: SearchCategory,
    pub selected_tab: usize,
    pub query: String,
    /// Accumulated results across every accepted page.
    pub results: Vec<T>,
    /// Next page to request; equals the number of accepted pages.
    pub current_page: u32,
    pub has_more: bool,
    /// Error text to show the user once, cleared by `MessageShown`.
    pub message: Option<String>,
    pub page_size: u32,
    in_flight: Option<SearchRequest>,
}

impl<T> SearchSession<T> {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            category: config.default_category,
            selected_tab: config.default_category.tab_index(),
            query: String::new(),
            results: Vec::new(),
            current_page: 0,
            has_more: false,
            message: None,
            page_size: config.page_size,
            in_flight: None,
        }
    }

    /// True while a request issued by this session has not been answered.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The request currently awaiting an answer, if any.
    pub fn in_flight(&self) -> Option<&SearchRequest> {
        self.in_flight.as_ref()
    }

    /// Apply a user event. Returns the request to run, if the event needs one.
    pub fn handle(&mut self, event: &SearchEvent) -> Option<SearchRequest> {
        match event {
            SearchEvent::NewSearch { query, tab } => {
                self.category = SearchCategory::from_tab(*tab);
                self.selected_tab = *tab;
                self.query = query.clone();
                self.results.clear();
                self.current_page = 0;
                self.has_more = false;
                tracing::debug!(
                    category = %self.category,
                    tab = self.selected_tab,
                    query = %self.query,
                    "search: new search"
                );
                Some(self.issue())
            }
            SearchEvent::LoadMore => {
                if self.is_loading() {
                    tracing::debug!("search: load more ignored, request in flight");
                    return None;
                }
                if !self.has_more {
                    tracing::debug!(page = self.current_page, "search: no more pages");
                    return None;
                }
                Some(self.issue())
            }
            SearchEvent::MessageShown => {
                self.message = None;
                None
            }
        }
    }

    /// Accept a page of results for `request`.
    ///
    /// Returns `false` and leaves the session untouched if `request` is not
    /// the one in flight.
    pub fn complete(&mut self, request: &SearchRequest, batch: Vec<T>) -> bool {
        if !self.is_current(request) {
            tracing::debug!(page = request.page, query = %request.query, "search: stale page dropped");
            return false;
        }
        self.in_flight = None;

        self.has_more = batch.len() == self.page_size as usize;
        if request.page == 0 {
            self.results = batch;
        } else {
            self.results.extend(batch);
        }
        self.current_page += 1;
        tracing::debug!(
            page = request.page,
            total = self.results.len(),
            has_more = self.has_more,
            "search: page accepted"
        );
        true
    }

    /// Record a failure for `request`. Same staleness rule as [`complete`](Self::complete).
    pub fn fail(&mut self, request: &SearchRequest, message: impl Into<String>) -> bool {
        if !self.is_current(request) {
            tracing::debug!(page = request.page, "search: stale failure dropped");
            return false;
        }
        self.in_flight = None;
        self.has_more = false;
        let message = message.into();
        tracing::debug!(page = request.page, %message, "search: request failed");
        self.message = Some(message);
        true
    }

    fn issue(&mut self) -> SearchRequest {
        let request = SearchRequest::new(self.category, self.query.clone())
            .page(self.current_page)
            .size(self.page_size);
        self.in_flight = Some(request.clone());
        request
    }

    fn is_current(&self, request: &SearchRequest) -> bool {
        self.in_flight.as_ref() == Some(request)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
