//! cars.com listing modules for HTTP client, parsing, extraction, and data models.

pub mod client;
pub mod document;
pub mod extract;
pub mod markup;
pub mod models;

pub use client::{CarsClient, FetchedPage, PageFetch};
pub use document::Document;
pub use extract::{clean_text, extract_cars, parse_card, vehicle_cards};
pub use models::Car;
