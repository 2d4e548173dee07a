//! Blocking HTTP implementation of the application catalog

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::traits::ApplicationCatalog;
use crate::types::MarketplaceApplication;

/// Request timeout for catalog calls
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog backed by the cloud API's marketplace endpoint
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpCatalog {
    /// Create a client for the given API base URL and bearer token
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref()).context("parsing catalog base URL")?;
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(user_agent())
            .build()
            .context("building catalog HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }
}

impl ApplicationCatalog for HttpCatalog {
    fn list_applications(&self) -> Result<Vec<MarketplaceApplication>> {
        let url = self
            .base_url
            .join("v2/kubernetes/applications")
            .context("building marketplace listing URL")?;
        debug!(url = %url, "listing marketplace applications");

        let applications = self
            .client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .send()
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .context("marketplace listing request failed")?
            .json()
            .context("decoding marketplace application list")?;

        Ok(applications)
    }
}

fn user_agent() -> String {
    format!(
        "brokkr/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
