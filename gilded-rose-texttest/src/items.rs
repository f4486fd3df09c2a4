use anyhow::{Context, Result};
use gilded_rose_engine::{GildedRose, JsonItems, TexttestCatalog};
use std::fs;
use std::path::Path;

/// Build the starting registry from a JSON file, or the stock fixture set.
pub fn load_registry(path: Option<&Path>) -> Result<GildedRose> {
    let shop = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read item set {}", path.display()))?;
            GildedRose::from_source(&JsonItems::new(text))
                .with_context(|| format!("failed to parse item set {}", path.display()))?
        }
        None => GildedRose::from_source(&TexttestCatalog)?,
    };
    log::info!("loaded {} items", shop.len());
    Ok(shop)
}
