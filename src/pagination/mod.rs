//! Pagination module
//!
//! Offset pagination driven by a continuation link in the response body.
//!
//! # Overview
//!
//! A [`Paginator`] produces the query parameters for the first window,
//! then inspects each response and either hands back the parameters for
//! the next window or reports that the listing is complete.

mod strategies;
mod types;

pub use strategies::OffsetPaginator;
pub use types::{extract_path, NextPage, PaginationState, Paginator};
