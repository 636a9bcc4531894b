//! Pagination strategy implementations

use super::types::{extract_path, NextPage, PaginationState, Paginator};
use serde_json::Value;
use std::collections::HashMap;

/// Offset pagination that continues while the response carries a
/// continuation link
///
/// Confluence's `/rest/api/content` takes `start` and `limit`, and includes
/// `_links.next` in the body only while another window exists. The offset
/// always advances by the full page size, even after a short window, and
/// the record count never ends pagination on its own.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Query parameter name for offset
    pub offset_param: String,
    /// Query parameter name for limit
    pub limit_param: String,
    /// Number of records per page
    pub limit_value: u32,
    /// Path to the continuation link; its absence ends pagination
    pub next_path: String,
}

impl OffsetPaginator {
    /// Create a new offset paginator
    pub fn new(
        offset_param: impl Into<String>,
        limit_param: impl Into<String>,
        limit_value: u32,
        next_path: impl Into<String>,
    ) -> Self {
        Self {
            offset_param: offset_param.into(),
            limit_param: limit_param.into(),
            limit_value,
            next_path: next_path.into(),
        }
    }

    /// `start`/`limit` paging over `_links.next`, as the Confluence REST API does
    pub fn confluence(page_size: u32) -> Self {
        Self::new("start", "limit", page_size, "_links.next")
    }

    fn params_for(&self, offset: u64) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert(self.offset_param.clone(), offset.to_string());
        params.insert(self.limit_param.clone(), self.limit_value.to_string());
        params
    }
}

impl Paginator for OffsetPaginator {
    fn initial_params(&self, state: &PaginationState) -> HashMap<String, String> {
        self.params_for(state.offset)
    }

    fn process_response(&self, body: &Value, state: &mut PaginationState) -> NextPage {
        // Key presence decides, whatever the link's value is
        if extract_path(body, &self.next_path).is_none() {
            return NextPage::Done;
        }

        state.add_offset(self.limit_value);
        NextPage::with_params(self.params_for(state.offset))
    }
}
