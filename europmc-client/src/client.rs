//! Blocking Europe PMC client: URL builders and full-text retrieval

use europmc_parser::{parse_from_reader, PaperDocument};
use reqwest::blocking::{Client, Response};
use tracing::{debug, warn};

use crate::config::{ClientConfig, EUROPE_PMC_API_URL};
use crate::error::{EuropePmcError, Result};

/// URL of the full-text XML for a PMC article on the public Europe PMC API.
///
/// The ID is the numeric part of the PMCID and is inserted verbatim.
///
/// ```
/// use europmc_client::full_text_url;
///
/// assert_eq!(
///     full_text_url("3213213"),
///     "https://www.ebi.ac.uk/europepmc/webservices/rest/PMC3213213/fullTextXML"
/// );
/// ```
pub fn full_text_url(pmcid: &str) -> String {
    build_full_text_url(EUROPE_PMC_API_URL, pmcid)
}

/// URL of the supplementary-files archive for a PMC article on the public Europe PMC API.
pub fn supplementary_files_url(pmcid: &str) -> String {
    build_supplementary_files_url(EUROPE_PMC_API_URL, pmcid)
}

fn build_full_text_url(base_url: &str, pmcid: &str) -> String {
    format!("{base_url}/PMC{pmcid}/fullTextXML")
}

fn build_supplementary_files_url(base_url: &str, pmcid: &str) -> String {
    format!("{base_url}/PMC{pmcid}/supplementaryFiles")
}

/// Blocking client for the Europe PMC REST API
///
/// Each call performs a single GET with no retries. Response bodies are read
/// to the end before they are parsed, so connections are released on every
/// path, including errors.
#[derive(Clone, Debug)]
pub struct MetadataClient {
    client: Client,
    base_url: String,
}

impl MetadataClient {
    /// Create a client for the public Europe PMC API with default settings
    ///
    /// Equivalent to `with_config(ClientConfig::new())`, so the default
    /// `europmc-client/<version>` user agent is sent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use europmc_client::MetadataClient;
    ///
    /// let client = MetadataClient::new();
    /// ```
    pub fn new() -> Self {
        let config = ClientConfig::new();
        Self::with_config(config).unwrap_or_else(|_| Self::with_client(Client::new()))
    }

    /// Create a client from a configuration
    ///
    /// # Errors
    ///
    /// * `EuropePmcError::ConfigError` - If the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```no_run
    /// use europmc_client::{ClientConfig, MetadataClient};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new().with_timeout(Duration::from_secs(30));
    /// let client = MetadataClient::with_config(config)?;
    /// # Ok::<(), europmc_client::EuropePmcError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| EuropePmcError::ConfigError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.effective_base_url().to_string(),
        })
    }

    /// Create a client around an existing HTTP client, using the public API
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: EUROPE_PMC_API_URL.to_string(),
        }
    }

    /// Point the client at a different base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full-text URL for `pmcid` against this client's base URL
    pub fn full_text_url(&self, pmcid: &str) -> String {
        build_full_text_url(&self.base_url, pmcid)
    }

    /// Supplementary-files URL for `pmcid` against this client's base URL
    pub fn supplementary_files_url(&self, pmcid: &str) -> String {
        build_supplementary_files_url(&self.base_url, pmcid)
    }

    /// Fetch and parse the full text of a PMC article
    ///
    /// # Arguments
    ///
    /// * `pmcid` - Numeric part of the PMCID (e.g. "3213213")
    ///
    /// # Errors
    ///
    /// * `EuropePmcError::InvalidPmcid` - If `pmcid` is empty; no request is made
    /// * `EuropePmcError::RequestError` - If the HTTP request fails
    /// * `EuropePmcError::ApiError` - If the server answers with a non-success status
    /// * `EuropePmcError::Parse` - If the body is not well-formed XML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use europmc_client::MetadataClient;
    ///
    /// let client = MetadataClient::new();
    /// let paper = client.fetch_full_text("3213213")?;
    /// println!("Title: {}", paper.title());
    /// # Ok::<(), europmc_client::EuropePmcError>(())
    /// ```
    pub fn fetch_full_text(&self, pmcid: &str) -> Result<PaperDocument> {
        validate_pmcid(pmcid)?;
        let body = self.get(&self.full_text_url(pmcid))?.bytes()?;
        debug!(pmcid = %pmcid, bytes = body.len(), "Parsing full text XML");

        Ok(parse_from_reader(&body[..])?)
    }

    /// Fetch the raw full-text XML of a PMC article without parsing it
    pub fn fetch_full_text_xml(&self, pmcid: &str) -> Result<String> {
        validate_pmcid(pmcid)?;
        Ok(self.get(&self.full_text_url(pmcid))?.text()?)
    }

    /// Fetch the supplementary-files archive of a PMC article as raw bytes
    ///
    /// Europe PMC serves the archive as a zip file.
    pub fn fetch_supplementary_files(&self, pmcid: &str) -> Result<Vec<u8>> {
        validate_pmcid(pmcid)?;
        let body = self.get(&self.supplementary_files_url(pmcid))?.bytes()?;
        debug!(pmcid = %pmcid, bytes = body.len(), "Fetched supplementary files");

        Ok(body.to_vec())
    }

    /// Issue a GET and turn any non-success status into `ApiError`
    fn get(&self, url: &str) -> Result<Response> {
        debug!(url = %url, "Making GET request to Europe PMC");
        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(url = %url, status = status.as_u16(), "Europe PMC returned error status");
            return Err(EuropePmcError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_pmcid(pmcid: &str) -> Result<()> {
    if pmcid.is_empty() {
        return Err(EuropePmcError::InvalidPmcid {
            pmcid: pmcid.to_string(),
        });
    }
    Ok(())
}
