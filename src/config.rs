//! Export configuration
//!
//! One explicit value holding everything a run needs: where Confluence
//! lives, which space to export, the credentials, and where the PDFs go.
//! It is built once from command-line flags and passed into each operation.

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Number of pages requested per listing window
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest listing window accepted
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Directory PDFs are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "Docs";

/// Per-request timeout when none is given
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    base_url: Url,
    space_key: String,
    auth: AuthConfig,
    output_dir: PathBuf,
    page_size: u32,
    timeout: Duration,
}

impl ExportConfig {
    /// Create a new config builder
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Confluence base URL (may include a context path such as `/wiki`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Key of the space being exported
    pub fn space_key(&self) -> &str {
        &self.space_key
    }

    /// Credentials applied to every request
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Directory the PDFs are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Listing window size
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build an authenticated HTTP client rooted at the base URL
    pub fn http_client(&self) -> Result<HttpClient> {
        let config = HttpClientConfig::builder()
            .base_url(self.base_url.as_str())
            .timeout(self.timeout)
            .build();
        HttpClient::new(config, self.auth.clone())
    }
}

/// Builder for [`ExportConfig`]
#[derive(Debug, Default)]
pub struct ExportConfigBuilder {
    base_url: Option<String>,
    space_key: Option<String>,
    auth: Option<AuthConfig>,
    output_dir: Option<PathBuf>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
}

impl ExportConfigBuilder {
    /// Set the Confluence base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the space key
    #[must_use]
    pub fn space_key(mut self, key: impl Into<String>) -> Self {
        self.space_key = Some(key.into());
        self
    }

    /// Use Basic auth with a username and API token
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, api_token: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::basic(username, api_token));
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the listing window size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<ExportConfig> {
        let raw_url = self
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::missing_field("base_url"))?;
        let base_url = Url::parse(raw_url.trim())?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", base_url.scheme()),
            ));
        }

        let space_key = self
            .space_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_field("space_key"))?;

        let auth = self.auth.ok_or_else(|| Error::missing_field("credentials"))?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be greater than zero"));
        }

        Ok(ExportConfig {
            base_url,
            space_key,
            auth,
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            page_size,
            timeout,
        })
    }
}
