//! Tag and class names used to locate listing data on cars.com result pages.
//!
//! Class checks compare the whole `class` attribute string, so a card with
//! `class="vehicle-details used"` is not recognised. Update this file when
//! the site changes its markup, and add a fixture for the new structure.

/// Listing card container.
pub mod card {
    /// Tag of the card element.
    pub const TAG: &str = "div";
    /// Exact `class` value of the card element.
    pub const CLASS: &str = "vehicle-details";
}

/// Title link inside a card.
pub mod title {
    /// Link element holding the detail page href.
    pub const LINK_TAG: &str = "a";
    /// Attribute carrying the detail page URL.
    pub const HREF_ATTR: &str = "href";
    /// Heading inside the link holding the listing title.
    pub const HEADING_TAG: &str = "h2";
}

/// Price block inside a card.
pub mod price {
    /// Exact `class` value of the price/mileage wrapper.
    pub const CONTAINER_CLASS: &str = "price-mileage-container";
    /// Intermediate wrapper between the container and the price span.
    pub const ROW_TAG: &str = "div";
    /// Element holding the price text.
    pub const VALUE_TAG: &str = "span";
    /// Exact `class` value of the price element.
    pub const VALUE_CLASS: &str = "primary-price";
}

/// Name of the attribute compared for class matches.
pub const CLASS_ATTR: &str = "class";
