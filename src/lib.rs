// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Confluence PDF Export
//!
//! Exports every page of a Confluence space as an individual PDF file.
//!
//! ## Features
//!
//! - **Space Listing**: Offset pagination over the content API, stopping
//!   when the response carries no `next` link
//! - **Title Resolution**: Per-page title lookup with a placeholder fallback
//! - **PDF Export**: Server-side rendering through the flyingpdf action
//! - **Best Effort**: Per-page failures become warnings, the run continues
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confluence_pdf_export::{ExportConfig, ExportEngine, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ExportConfig::builder()
//!         .base_url("https://example.atlassian.net/wiki")
//!         .space_key("DOCS")
//!         .credentials("jane@example.com", "api-token")
//!         .output_dir("Docs")
//!         .build()?;
//!
//!     let report = ExportEngine::from_config(&config)?.run().await?;
//!     println!("{} files written", report.stats.files_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Export Engine                        │
//! │   prepare dir → list pages → per page: title, PDF, write    │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬────────────┬─────┴──────┬────────────┬───────────┐
//! │   Auth   │    HTTP    │  Paginate  │ Confluence │  Output   │
//! ├──────────┼────────────┼────────────┼────────────┼───────────┤
//! │ Basic    │ GET        │ Offset     │ Listing    │ Clear dir │
//! │          │ Timeout    │ next link  │ Title      │ Sanitize  │
//! │          │ Base URL   │            │ PDF export │ Write PDF │
//! └──────────┴────────────┴────────────┴────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the exporter
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with base URL joining and auth
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Export configuration
pub mod config;

/// Confluence REST endpoints
pub mod confluence;

/// Output directory handling and PDF writing
pub mod output;

/// Main execution engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ExportConfig;
pub use confluence::{ConfluenceClient, PageListing, TitleLookup};
pub use engine::{ExportEngine, ExportReport, ExportStats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
