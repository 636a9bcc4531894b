//! CLI commands and argument parsing

use crate::config::{DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Export every page of a Confluence space to individual PDF files
#[derive(Parser, Debug)]
#[command(name = "confluence-pdf-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every page of a space to PDF files
    Export {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Directory to save PDF files (cleared before the export)
        #[arg(short, long, alias = "output_dir", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// List the pages of a space
    List {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

/// Where Confluence is and how to log in
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Confluence base URL (e.g. https://example.atlassian.net/wiki)
    #[arg(long, alias = "confluence_url")]
    pub base_url: String,

    /// Space key of the Confluence space
    #[arg(short, long, alias = "space_key")]
    pub space_key: String,

    /// Username for Confluence
    #[arg(short, long)]
    pub username: String,

    /// API token for Confluence
    #[arg(long, alias = "api_token")]
    pub api_token: String,

    /// Pages requested per listing call (1 to 1000)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}
