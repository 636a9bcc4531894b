//! CLI module
//!
//! Command-line interface for exporting a space.
//!
//! # Commands
//!
//! - `export` - Export every page of a space to PDF files
//! - `list` - List the pages of a space without exporting

mod commands;
mod logging;
mod runner;

pub use commands::{Cli, Commands, ConnectionArgs, OutputFormat};
pub use logging::log_filter;
pub use runner::Runner;
