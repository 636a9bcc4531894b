//! Execution engine module
//!
//! Runs a whole export, strictly one request at a time:
//!
//! 1. prepare the output directory (clear its files, or create it)
//! 2. list every page in the space
//! 3. for each page, in listing order: resolve its title, request the PDF,
//!    write the file
//!
//! Listing, title and export failures are recorded as warnings and the run
//! carries on. Local file-system failures end the run with an error.

mod types;

pub use types::{ExportReport, ExportStats};

use crate::config::ExportConfig;
use crate::confluence::{failure_reason, log_failure, ConfluenceClient};
use crate::error::Result;
use crate::output::{prepare_output_dir, PdfWriter};
use crate::types::{PageDescriptor, Warning, WarningKind};
use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Export engine for one space
pub struct ExportEngine {
    /// Confluence client
    client: ConfluenceClient,
    /// PDF writer
    writer: PdfWriter,
}

impl ExportEngine {
    /// Create a new export engine writing into `output_dir`
    pub fn new(client: ConfluenceClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            writer: PdfWriter::new(output_dir),
        }
    }

    /// Create an engine from an export config
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Ok(Self::new(
            ConfluenceClient::from_config(config)?,
            config.output_dir(),
        ))
    }

    /// Get the Confluence client
    pub fn client(&self) -> &ConfluenceClient {
        &self.client
    }

    /// Run the export
    pub async fn run(&self) -> Result<ExportReport> {
        let start = Instant::now();
        let started_at = Utc::now();
        let mut stats = ExportStats::new();

        let prepared = prepare_output_dir(self.writer.dir())?;

        let listing = self.client.list_pages().await;
        stats.set_listing(listing.len(), listing.requests);
        let listing_truncated = listing.truncated;
        let mut warnings = listing.warnings;
        let mut files = Vec::with_capacity(listing.pages.len());

        for page in &listing.pages {
            if let Some(path) = self.export_page(page, &mut stats, &mut warnings).await? {
                files.push(path);
            }
        }

        if listing_truncated {
            warn!(
                "Listing of space '{}' was cut short; {} pages exported may not be the whole space",
                self.client.space_key(),
                stats.files_written
            );
        }

        #[allow(clippy::cast_possible_truncation)]
        stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Completed export of '{}': {} of {} pages written in {}ms ({} warnings)",
            self.client.space_key(),
            stats.files_written,
            stats.pages_listed,
            stats.duration_ms,
            warnings.len()
        );

        Ok(ExportReport {
            space_key: self.client.space_key().to_string(),
            output_dir: self.writer.dir().to_path_buf(),
            started_at,
            output_dir_prepared: prepared,
            listing_truncated,
            stats,
            files,
            warnings,
        })
    }

    /// Resolve, export and write one page
    ///
    /// Returns the written path, or `None` when the export request failed.
    async fn export_page(
        &self,
        page: &PageDescriptor,
        stats: &mut ExportStats,
        warnings: &mut Vec<Warning>,
    ) -> Result<Option<PathBuf>> {
        let (title, title_warning) = self.client.page_title(&page.id).await.into_parts();
        match title_warning {
            Some(warning) => {
                stats.add_title_fallback();
                warnings.push(warning);
            }
            None => stats.add_title(),
        }

        stats.add_pdf_request();
        match self.client.export_pdf(&page.id).await {
            Ok(bytes) => {
                let path = self.writer.write(&title, &bytes)?;
                stats.add_file();
                info!(
                    "PDF exported successfully for page '{title}': {}",
                    path.display()
                );
                Ok(Some(path))
            }
            Err(e) => {
                log_failure(&format!("Failed to export PDF for page '{title}'"), &e);
                stats.add_export_failure();
                warnings.push(
                    Warning::new(
                        WarningKind::ExportFailed,
                        format!("PDF export failed for '{title}': {}", failure_reason(&e)),
                    )
                    .for_page(&page.id)
                    .with_status(e.status()),
                );
                Ok(None)
            }
        }
    }
}
