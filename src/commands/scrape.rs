//! Scrape command implementation.

use crate::cars::{extract_cars, CarsClient, Document, PageFetch};
use crate::config::Config;
use crate::error::Result;
use crate::writer::{write_delimited, write_json};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// HTTP status of the listing page
    pub status: u16,
    /// Whether the status was 2xx; records are written either way
    pub success: bool,
    /// Number of records written to each file
    pub records: usize,
    /// JSON output path
    pub json_path: PathBuf,
    /// Delimited output path
    pub csv_path: PathBuf,
}

/// Fetches the listing page, extracts cars, and writes both output files.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the scrape with the real HTTP client.
    pub async fn execute(&self) -> Result<ScrapeSummary> {
        let client = CarsClient::new(&self.config).inspect_err(|e| {
            error!("Error creating HTTP client: {}", e);
        })?;

        self.execute_with_client(&client).await
    }

    /// Executes the scrape with a provided client (for testing).
    ///
    /// Steps run strictly in order and the first failure ends the run, so a
    /// JSON write error means the delimited file is never written.
    pub async fn execute_with_client(&self, client: &impl PageFetch) -> Result<ScrapeSummary> {
        let page = client.fetch(&self.config.url).await.inspect_err(|e| {
            error!("Error during scraping ({}): {}", e.kind(), e);
        })?;
        let status = page.status;
        let success = page.is_success();
        if !success {
            warn!("Request returned status {}; parsing the body anyway", status);
        }

        let document = Document::from_page(page);
        debug!("Parsed document ({} recovered markup errors)", document.error_count());

        let cars = extract_cars(&document);
        drop(document);

        write_json(&self.config.json_path, &cars).inspect_err(|e| {
            error!("Error saving data: {}", e);
        })?;
        write_delimited(&self.config.csv_path, &cars).inspect_err(|e| {
            error!("Error saving data: {}", e);
        })?;

        info!("Scraping completed successfully: {} cars", cars.len());

        Ok(ScrapeSummary {
            status,
            success,
            records: cars.len(),
            json_path: self.config.json_path.clone(),
            csv_path: self.config.csv_path.clone(),
        })
    }
}
