//! Common types used throughout the exporter
//!
//! Page descriptors and the Confluence response bodies they are read from,
//! plus the warning type used for soft, log-and-continue failures.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Page Descriptor
// ============================================================================

/// One page of a space, as reported by the content listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Server-assigned content id
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Title as reported by the listing (the export resolves it again)
    #[serde(default)]
    pub title: Option<String>,
}

impl PageDescriptor {
    /// Create a descriptor with no title
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
        }
    }

    /// Set the listed title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Title used when a page's real title cannot be resolved
pub fn placeholder_title(page_id: &str) -> String {
    format!("Confluence_Page_{page_id}")
}

/// Content ids are strings in Confluence responses, but some proxies and
/// fixtures hand them back as numbers.
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for content id, got {other}"
        ))),
    }
}

// ============================================================================
// Confluence Response Bodies
// ============================================================================

/// Body of `GET /rest/api/content` (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ContentListing {
    /// Pages in this window
    pub results: Vec<PageDescriptor>,
}

/// Body of `GET /rest/api/content/{id}` (only the fields we read)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentDetail {
    /// Human-readable page title
    #[serde(default)]
    pub title: Option<String>,
}

// ============================================================================
// Warnings
// ============================================================================

/// Kind of soft failure recorded during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A listing request failed; pagination stopped early
    ListingFailed,
    /// A title lookup failed; the placeholder title was used
    TitleFallback,
    /// A PDF export request failed; the page was skipped
    ExportFailed,
}

/// A soft failure: logged, recorded, and then skipped over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// What went wrong
    pub kind: WarningKind,
    /// Page the warning is about (absent for listing failures)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    /// HTTP status, when the server answered at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Human-readable description
    pub message: String,
}

impl Warning {
    /// Create a warning with no page or status attached
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            page_id: None,
            status: None,
            message: message.into(),
        }
    }

    /// Attach a page id
    #[must_use]
    pub fn for_page(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }

    /// Attach an HTTP status
    #[must_use]
    pub fn with_status(mut self, status: Option<u16>) -> Self {
        self.status = status;
        self
    }
}
