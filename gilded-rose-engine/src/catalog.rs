//! Built-in and JSON-encoded item sets.
use serde_json::Value;
use std::convert::Infallible;
use thiserror::Error;

use crate::ItemSource;
use crate::constants::{AGED_BRIE, LEGENDARY_QUALITY, SULFURAS};
use crate::item::Item;

const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Errors raised while reading an item set.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("item set is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("item set is not a JSON item array or {{\"items\": [...]}} object: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Parse a JSON item set: a bare array, or an object with an `items` array.
///
/// Values are taken as given; out-of-range quality is not rejected.
///
/// # Errors
///
/// Returns [`CatalogError::Syntax`] if the text is not JSON, and
/// [`CatalogError::Shape`] if it is JSON in neither accepted layout.
pub fn parse_items_json(text: &str) -> Result<Vec<Item>, CatalogError> {
    let value: Value = serde_json::from_str(text).map_err(CatalogError::Syntax)?;
    let set = match value {
        Value::Object(mut fields) if fields.contains_key("items") => {
            fields.remove("items").unwrap_or_default()
        }
        other => other,
    };
    let items: Vec<Item> = serde_json::from_value(set).map_err(CatalogError::Shape)?;
    log::debug!("parsed {} items from JSON", items.len());
    Ok(items)
}

/// The nine-item set printed by the approval fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexttestCatalog;

impl TexttestCatalog {
    #[must_use]
    pub fn items() -> Vec<Item> {
        vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new(AGED_BRIE, 2, 0),
            Item::new("Elixir of the Mongoose", 5, 7),
            Item::new(SULFURAS, 0, LEGENDARY_QUALITY),
            Item::new(SULFURAS, -1, LEGENDARY_QUALITY),
            Item::new(BACKSTAGE_PASS, 15, 20),
            Item::new(BACKSTAGE_PASS, 10, 49),
            Item::new(BACKSTAGE_PASS, 5, 49),
            Item::new("Conjured Mana Cake", 3, 6),
        ]
    }
}

impl ItemSource for TexttestCatalog {
    type Error = Infallible;

    fn load_items(&self) -> Result<Vec<Item>, Self::Error> {
        Ok(Self::items())
    }
}

/// Item set held as JSON text.
#[derive(Debug, Clone)]
pub struct JsonItems {
    text: String,
}

impl JsonItems {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ItemSource for JsonItems {
    type Error = CatalogError;

    fn load_items(&self) -> Result<Vec<Item>, Self::Error> {
        parse_items_json(&self.text)
    }
}
