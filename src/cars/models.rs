//! Data models for extracted vehicle listings.

use serde::{Deserialize, Serialize};

/// One vehicle card from the listing page.
///
/// Fields default to empty strings when the markup does not provide them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Listing title, e.g. "2024 Lexus IS 350 F SPORT"
    #[serde(rename = "Description")]
    pub description: String,
    /// Displayed price text, e.g. "$45,000"
    #[serde(rename = "Price")]
    pub price: String,
    /// Detail page href, often relative
    #[serde(rename = "Link")]
    pub link: String,
}

impl Car {
    /// Creates a car from its three fields.
    pub fn new(
        description: impl Into<String>,
        price: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self { description: description.into(), price: price.into(), link: link.into() }
    }
}
