//! Result types for Confluence lookups

use crate::types::{PageDescriptor, Warning};
use serde::Serialize;

/// Everything the Page Lister gathered for one space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageListing {
    /// Descriptors in listing order
    pub pages: Vec<PageDescriptor>,
    /// Listing requests issued, including a failed last one
    pub requests: usize,
    /// Set when a request failed and pagination stopped early
    pub truncated: bool,
    /// Soft failures recorded while listing
    pub warnings: Vec<Warning>,
}

impl PageListing {
    /// Whether the listing reached the server's last window
    pub fn is_complete(&self) -> bool {
        !self.truncated
    }

    /// Number of pages listed
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages were listed
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Record a failed request and stop
    pub(crate) fn truncate(&mut self, warning: Warning) {
        self.truncated = true;
        self.warnings.push(warning);
    }
}

/// Outcome of resolving one page's title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLookup {
    /// The detail record carried a title
    Found(String),
    /// The detail record had no title; the placeholder is used
    Missing(String),
    /// The lookup failed; the placeholder is used
    Fallback {
        /// Placeholder title
        title: String,
        /// Why the lookup failed
        warning: Warning,
    },
}

impl TitleLookup {
    /// The title to name the export after
    pub fn title(&self) -> &str {
        match self {
            Self::Found(title) | Self::Missing(title) | Self::Fallback { title, .. } => title,
        }
    }

    /// Warning produced by a failed lookup
    pub fn warning(&self) -> Option<&Warning> {
        match self {
            Self::Fallback { warning, .. } => Some(warning),
            _ => None,
        }
    }

    /// Consume the lookup, keeping the title and any warning
    pub fn into_parts(self) -> (String, Option<Warning>) {
        match self {
            Self::Found(title) | Self::Missing(title) => (title, None),
            Self::Fallback { title, warning } => (title, Some(warning)),
        }
    }
}
