//! Test builders — ergonomic constructors for sessions and result pages.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use postopia_core::config::SearchConfig;
use postopia_core::{SearchCategory, SearchEvent, SearchRequest, SearchSession};

// ---------------------------------------------------------------------------
// SessionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchSession`] fixtures.
///
/// # Example
///
/// ```rust
/// let session: SearchSession<String> = SessionBuilder::new()
///     .page_size(2)
///     .default_category(SearchCategory::Space)
///     .build();
/// ```
pub struct SessionBuilder {
    config: SearchConfig,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size;
        self
    }

    pub fn default_category(mut self, category: SearchCategory) -> Self {
        self.config.default_category = category;
        self
    }

    pub fn build<T>(self) -> SearchSession<T> {
        SearchSession::new(&self.config)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn new_search(query: &str, tab: usize) -> SearchEvent {
    SearchEvent::NewSearch {
        query: query.to_string(),
        tab,
    }
}

/// A page of `len` labelled results, e.g. `["p1-0", "p1-1"]` for page 1.
pub fn page_of(page: u32, len: usize) -> Vec<String> {
    (0..len).map(|i| format!("p{page}-{i}")).collect()
}

/// Start a search and answer every request with the next entry of
/// `page_lens` until the session stops asking. Returns the requests issued.
pub fn drive_pages(
    session: &mut SearchSession<String>,
    query: &str,
    tab: usize,
    page_lens: &[usize],
) -> Vec<SearchRequest> {
    let mut issued = Vec::new();
    let mut next = session.handle(&new_search(query, tab));
    let mut lens = page_lens.iter();

    while let Some(request) = next {
        let len = *lens.next().expect("session asked for more pages than provided");
        assert!(session.complete(&request, page_of(request.page, len)));
        issued.push(request);
        next = session.handle(&SearchEvent::LoadMore);
    }
    issued
}
