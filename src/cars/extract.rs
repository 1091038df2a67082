//! Extraction of vehicle cards from a parsed listing page.
//!
//! The walk is a pre-order traversal over the whole tree. Cards nested in
//! other cards are visited too, so every match yields its own record.

use crate::cars::document::Document;
use crate::cars::markup::{self, card, price, title};
use crate::cars::models::Car;
use scraper::{ElementRef, Node};
use tracing::{debug, info, trace};

/// Collapses all whitespace (newlines and tabs included) to single spaces and trims.
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lazily yields every vehicle card in document pre-order.
pub fn vehicle_cards(document: &Document) -> impl Iterator<Item = ElementRef<'_>> {
    document.root().descendants().filter_map(ElementRef::wrap).filter(|el| is_vehicle_card(*el))
}

/// Extracts one record per vehicle card, in document order.
pub fn extract_cars(document: &Document) -> Vec<Car> {
    let cars: Vec<Car> = vehicle_cards(document).map(parse_card).collect();
    info!("Extracted {} vehicle cards", cars.len());
    cars
}

/// Builds a record from a single card element.
///
/// Only immediate children of the card are inspected. When several title
/// links or price spans are present the last one wins, and anything not
/// found stays empty.
pub fn parse_card(card: ElementRef<'_>) -> Car {
    debug!("Found vehicle card");
    let mut car = Car::default();

    for child in child_elements(card) {
        if child.value().name() == title::LINK_TAG {
            let href = child.value().attr(title::HREF_ATTR).unwrap_or_default();
            car.link = clean_text(href);
            trace!("Card link: {}", car.link);

            for heading in child_elements(child).filter(|e| e.value().name() == title::HEADING_TAG) {
                if let Some(text) = first_child_text(heading) {
                    car.description = text;
                    trace!("Card title: {}", car.description);
                }
            }
        }

        if has_exact_class(child, price::CONTAINER_CLASS) {
            for row in child_elements(child).filter(|e| e.value().name() == price::ROW_TAG) {
                for span in child_elements(row) {
                    if span.value().name() != price::VALUE_TAG
                        || !has_exact_class(span, price::VALUE_CLASS)
                    {
                        continue;
                    }
                    if let Some(Node::Text(text)) = span.first_child().map(|n| n.value()) {
                        car.price = clean_text(text);
                        trace!("Card price: {}", car.price);
                    }
                }
            }
        }
    }

    debug!("Card parsed: {:?}", car);
    car
}

fn is_vehicle_card(el: ElementRef<'_>) -> bool {
    el.value().name() == card::TAG && has_exact_class(el, card::CLASS)
}

/// Compares the whole class attribute, not its individual tokens.
fn has_exact_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().attr(markup::CLASS_ATTR) == Some(class)
}

fn child_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Cleaned text content of an element's first child, if it has one.
fn first_child_text(el: ElementRef<'_>) -> Option<String> {
    let first = el.first_child()?;
    let text = match first.value() {
        Node::Text(text) => clean_text(text),
        Node::Element(_) => ElementRef::wrap(first)
            .map(|e| clean_text(&e.text().collect::<String>()))
            .unwrap_or_default(),
        _ => String::new(),
    };
    Some(text)
}
