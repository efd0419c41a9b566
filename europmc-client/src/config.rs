//! Configuration for the Europe PMC client

use std::time::Duration;

/// Base URL of the Europe PMC REST API
pub const EUROPE_PMC_API_URL: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest";

/// Settings used to build a [`crate::MetadataClient`]
///
/// Every field is optional; unset fields fall back to the public Europe PMC
/// endpoint and the HTTP client's own defaults.
///
/// # Example
///
/// ```
/// use europmc_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_user_agent("my-harvester/1.0")
///     .with_timeout(Duration::from_secs(60));
///
/// assert_eq!(
///     config.effective_base_url(),
///     "https://www.ebi.ac.uk/europepmc/webservices/rest"
/// );
/// assert_eq!(config.effective_user_agent(), "my-harvester/1.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Override of the API base URL (mock servers, mirrors)
    pub base_url: Option<String>,
    /// User agent sent with every request
    pub user_agent: Option<String>,
    /// Total request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL with any trailing slash removed
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(EUROPE_PMC_API_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("europmc-client/{}", env!("CARGO_PKG_VERSION")))
    }
}
