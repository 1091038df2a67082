//! cars-scraper - Scrape a cars.com listing page into JSON and tab-separated files
//!
//! Fetches one results page, pulls description, price, and link out of each
//! `vehicle-details` card, and writes the records to `cars.json` and `cars.csv`.

pub mod cars;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod writer;

pub use cars::models::Car;
pub use config::Config;
pub use error::ScrapeError;
