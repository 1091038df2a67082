//! HTTP client for the listing page using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use tracing::{debug, info};
use wreq::Client;
use wreq_util::Emulation;

/// Desktop Chrome on macOS, sent on every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const CACHE_CONTROL: &str = "no-cache";

/// A fetched page, owned until it is parsed.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

impl FetchedPage {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for page fetching - enables mocking for tests.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Fetches a page and returns its status and body.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// HTTP client with browser impersonation headers.
pub struct CarsClient {
    client: Client,
}

impl CarsClient {
    /// Creates a new client with the given configuration.
    ///
    /// No timeout is set; the request waits as long as the transport allows.
    pub fn new(config: &Config) -> Result<Self> {
        let network = |source: wreq::Error| ScrapeError::Network { url: config.url.clone(), source };

        let mut builder = Client::builder().cookie_store(true).gzip(true).brotli(true);

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).map_err(network)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(network)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetch for CarsClient {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        info!("Scraping URL: {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("Cache-Control", CACHE_CONTROL)
            .send()
            .await
            .map_err(|source| ScrapeError::Network { url: url.to_string(), source })?;

        let status = response.status();
        info!("Response status: {}", status);

        let final_url = response.uri().to_string();
        if final_url != url {
            debug!("Redirected to {}", final_url);
        }

        let body = response
            .text()
            .await
            .map_err(|source| ScrapeError::Parse { url: final_url.clone(), source })?;

        Ok(FetchedPage { url: final_url, status: status.as_u16(), body })
    }
}
