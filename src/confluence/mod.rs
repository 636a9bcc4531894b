//! Confluence REST client
//!
//! Three endpoints are used:
//!
//! - `GET /rest/api/content?spaceKey=&type=page&start=&limit=` lists a space
//! - `GET /rest/api/content/{id}` returns one page's detail, including `title`
//! - `GET /spaces/flyingpdf/pdfpageexport.action?pageid=` renders a page as PDF
//!
//! Listing and title failures are soft: they produce a [`Warning`] and a
//! best-effort result instead of an error.
//!
//! [`Warning`]: crate::types::Warning

mod client;
mod types;

pub(crate) use client::{failure_reason, log_failure};
pub use client::{ConfluenceClient, CONTENT_PATH, PDF_EXPORT_PATH};
pub use types::{PageListing, TitleLookup};

#[cfg(test)]
mod tests;
