//! Output module
//!
//! Handles the local side of an export.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Preparing the output directory (clearing or creating it)
//! - Turning page titles into safe, timestamped file names
//! - Writing PDF bytes to disk

mod directory;
mod naming;
mod writer;

pub use directory::{prepare_output_dir, ClearOutcome};
pub use naming::{pdf_file_name, sanitize_title, TIMESTAMP_FORMAT};
pub use writer::PdfWriter;
