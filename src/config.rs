//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Listing page scraped when nothing else is configured.
pub const DEFAULT_URL: &str = "https://www.cars.com/shopping/results/?stock_type=new&makes%5B%5D=lexus&models%5B%5D=lexus-is_350&maximum_distance=30&zip=33178";

/// Application configuration with layered loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listing page to fetch
    #[serde(default = "default_url")]
    pub url: String,

    /// Where the pretty-printed JSON array is written
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,

    /// Where the header + tab-separated rows are written
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_json_path() -> PathBuf {
    PathBuf::from("cars.json")
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("cars.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: default_url(),
            json_path: default_json_path(),
            csv_path: default_csv_path(),
            proxy: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("cars-scraper.toml");
        if local_config.exists() {
            debug!("Found cars-scraper.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("cars-scraper").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides (`CARS_URL`, `CARS_PROXY`).
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a variable lookup. Blank values are ignored.
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_blank("CARS_URL") {
            self.url = url;
        }

        if let Some(proxy) = non_blank("CARS_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }
}
