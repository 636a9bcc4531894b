//! Engine types
//!
//! Statistics and the report returned from an export run.

use crate::output::ClearOutcome;
use crate::types::{Warning, WarningKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Statistics from an export run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Pages returned by the listing
    pub pages_listed: usize,
    /// Listing requests issued
    pub listing_requests: usize,
    /// Titles taken from the page detail record (or its placeholder)
    pub titles_resolved: usize,
    /// Title lookups that failed and fell back to the placeholder
    pub title_fallbacks: usize,
    /// PDF export requests issued
    pub pdf_requests: usize,
    /// PDF files written
    pub files_written: usize,
    /// PDF export requests that failed
    pub export_failures: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ExportStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the listing outcome
    pub fn set_listing(&mut self, pages: usize, requests: usize) {
        self.pages_listed = pages;
        self.listing_requests = requests;
    }

    /// Add a resolved title
    pub fn add_title(&mut self) {
        self.titles_resolved += 1;
    }

    /// Add a title fallback
    pub fn add_title_fallback(&mut self) {
        self.title_fallbacks += 1;
    }

    /// Add a PDF request
    pub fn add_pdf_request(&mut self) {
        self.pdf_requests += 1;
    }

    /// Add a written file
    pub fn add_file(&mut self) {
        self.files_written += 1;
    }

    /// Add an export failure
    pub fn add_export_failure(&mut self) {
        self.export_failures += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Everything an export run did
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Space that was exported
    pub space_key: String,
    /// Directory the files went to
    pub output_dir: PathBuf,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// How the output directory was prepared
    pub output_dir_prepared: ClearOutcome,
    /// Set when the listing stopped early on a failed request
    pub listing_truncated: bool,
    /// Counters
    pub stats: ExportStats,
    /// Files written, in listing order
    pub files: Vec<PathBuf>,
    /// Soft failures, in the order they happened
    pub warnings: Vec<Warning>,
}

impl ExportReport {
    /// Whether the run finished without any soft failure
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings of one kind
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}
