//! Confluence client implementation

use super::types::{PageListing, TitleLookup};
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{NextPage, OffsetPaginator, PaginationState, Paginator};
use crate::types::{
    placeholder_title, ContentDetail, ContentListing, PageDescriptor, Warning, WarningKind,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Content listing and detail endpoint
pub const CONTENT_PATH: &str = "rest/api/content";

/// PDF rendering endpoint
pub const PDF_EXPORT_PATH: &str = "spaces/flyingpdf/pdfpageexport.action";

/// Client for one Confluence space
#[derive(Debug)]
pub struct ConfluenceClient {
    http: HttpClient,
    space_key: String,
    page_size: u32,
}

impl ConfluenceClient {
    /// Create a client over an HTTP client already rooted at the base URL
    pub fn new(http: HttpClient, space_key: impl Into<String>, page_size: u32) -> Self {
        Self {
            http,
            space_key: space_key.into(),
            page_size,
        }
    }

    /// Create a client from an export config
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Ok(Self::new(
            config.http_client()?,
            config.space_key(),
            config.page_size(),
        ))
    }

    /// Key of the space this client lists
    pub fn space_key(&self) -> &str {
        &self.space_key
    }

    /// List every page in the space, `page_size` at a time
    ///
    /// Stops at the first failed request and returns what was gathered so
    /// far, with `truncated` set and a [`WarningKind::ListingFailed`] warning.
    /// Nothing is retried.
    pub async fn list_pages(&self) -> PageListing {
        let paginator = OffsetPaginator::confluence(self.page_size);
        let mut listing = PageListing::default();
        let mut state = PaginationState::new();
        let mut params = paginator.initial_params(&state);

        loop {
            let mut req = RequestConfig::new()
                .query("spaceKey", &self.space_key)
                .query("type", "page");
            for (key, value) in &params {
                req = req.query(key, value);
            }

            listing.requests += 1;
            let (body, pages) = match self.fetch_window(req).await {
                Ok(window) => window,
                Err(e) => {
                    log_failure("Failed to get pages", &e);
                    listing.truncate(
                        Warning::new(
                            WarningKind::ListingFailed,
                            format!(
                                "Listing stopped after {} pages at offset {}: {}",
                                listing.pages.len(),
                                state.offset,
                                failure_reason(&e)
                            ),
                        )
                        .with_status(e.status()),
                    );
                    break;
                }
            };

            let count = pages.len();
            listing.pages.extend(pages);
            debug!(
                "Listed {count} pages at offset {} ({} total)",
                state.offset,
                listing.pages.len()
            );

            match paginator.process_response(&body, &mut state) {
                NextPage::Continue { query_params } => params = query_params,
                NextPage::Done => break,
            }
        }

        info!(
            "Found {} pages in space '{}' ({} requests)",
            listing.pages.len(),
            self.space_key,
            listing.requests
        );
        listing
    }

    async fn fetch_window(&self, req: RequestConfig) -> Result<(Value, Vec<PageDescriptor>)> {
        let body: Value = self.http.get_json_with_config(CONTENT_PATH, req).await?;
        let window = ContentListing::deserialize(&body)?;
        Ok((body, window.results))
    }

    /// Resolve a page's title from its detail record
    ///
    /// Falls back to `Confluence_Page_<id>` when the lookup fails or the
    /// record has no title.
    pub async fn page_title(&self, page_id: &str) -> TitleLookup {
        let path = format!("{CONTENT_PATH}/{page_id}");
        match self.http.get_json::<ContentDetail>(&path).await {
            Ok(ContentDetail { title: Some(title) }) => TitleLookup::Found(title),
            Ok(ContentDetail { title: None }) => TitleLookup::Missing(placeholder_title(page_id)),
            Err(e) => {
                log_failure(
                    &format!("Failed to get page title for page ID {page_id}"),
                    &e,
                );
                TitleLookup::Fallback {
                    title: placeholder_title(page_id),
                    warning: Warning::new(
                        WarningKind::TitleFallback,
                        format!("Title lookup failed: {}", failure_reason(&e)),
                    )
                    .for_page(page_id)
                    .with_status(e.status()),
                }
            }
        }
    }

    /// Ask the server to render a page as PDF and return the bytes
    pub async fn export_pdf(&self, page_id: &str) -> Result<Bytes> {
        let req = RequestConfig::new().query("pageid", page_id);
        self.http.get_bytes_with_config(PDF_EXPORT_PATH, req).await
    }
}

/// Short description of a failed request (status only, no body)
pub(crate) fn failure_reason(error: &Error) -> String {
    match error {
        Error::HttpStatus { status, .. } => format!("HTTP {status}"),
        other => other.to_string(),
    }
}

/// Log a failed request the way every soft failure is reported
pub(crate) fn log_failure(what: &str, error: &Error) {
    match error.status() {
        Some(status) => warn!("{what}. Status code: {status}"),
        None => warn!("{what}: {error}"),
    }
    if let Some(body) = error.body().filter(|b| !b.is_empty()) {
        warn!("{body}");
    }
}
