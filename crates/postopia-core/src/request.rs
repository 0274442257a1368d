//! A single page of a search, described but not executed.

use crate::category::SearchCategory;
use serde::Serialize;

/// One page of results for `query` within `category`.
///
/// `size` is optional on the wire: when absent the server picks its own page
/// size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub category: SearchCategory,
    pub query: String,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl SearchRequest {
    pub fn new(category: SearchCategory, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
            page: 0,
            size: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Path of the search endpoint for this request's category.
    pub fn endpoint(&self) -> &'static str {
        self.category.endpoint()
    }

    /// Query parameters in wire order: `query`, `page`, then `size` if set.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
        ];
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        params
    }
}
