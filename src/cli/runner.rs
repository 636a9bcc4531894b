//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ConnectionArgs, OutputFormat};
use crate::config::ExportConfig;
use crate::confluence::ConfluenceClient;
use crate::engine::ExportEngine;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Export {
                connection,
                output_dir,
            } => self.export(connection, output_dir).await,
            Commands::List { connection } => self.list(connection).await,
        }
    }

    /// Export every page of the space
    async fn export(&self, connection: &ConnectionArgs, output_dir: &Path) -> Result<()> {
        let config = build_config(connection, Some(output_dir))?;
        let engine = ExportEngine::from_config(&config)?;
        let report = engine.run().await?;
        self.output(&report)
    }

    /// List the pages of the space
    async fn list(&self, connection: &ConnectionArgs) -> Result<()> {
        let config = build_config(connection, None)?;
        let client = ConfluenceClient::from_config(&config)?;
        let listing = client.list_pages().await;
        self.output(&listing)
    }

    /// Print a result to stdout in the selected format
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Turn connection flags into a validated export config
pub(crate) fn build_config(
    connection: &ConnectionArgs,
    output_dir: Option<&Path>,
) -> Result<ExportConfig> {
    let mut builder = ExportConfig::builder()
        .base_url(&connection.base_url)
        .space_key(&connection.space_key)
        .credentials(&connection.username, &connection.api_token)
        .page_size(connection.page_size)
        .timeout(Duration::from_secs(connection.timeout_secs));
    if let Some(dir) = output_dir {
        builder = builder.output_dir(dir);
    }
    builder.build()
}
