//! Gilded Rose Inventory Engine
//!
//! Item quality rules for the Gilded Rose inventory simulation. Each simulated
//! day, every item in the registry is dispatched by name to one of four
//! category rules and mutated in place. This crate has no presentation or
//! platform dependencies; the text fixture lives in `gilded-rose-texttest`.

pub mod catalog;
pub mod category;
pub mod constants;
pub mod inventory;
pub mod item;
pub mod rules;

// Re-export commonly used types
pub use catalog::{CatalogError, JsonItems, TexttestCatalog, parse_items_json};
pub use category::Category;
pub use constants::{MAX_QUALITY, MIN_QUALITY};
pub use inventory::GildedRose;
pub use item::Item;

/// Trait for abstracting where an initial item set comes from
pub trait ItemSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the items a simulation starts with
    ///
    /// # Errors
    ///
    /// Returns an error if the item set cannot be read or decoded.
    fn load_items(&self) -> Result<Vec<Item>, Self::Error>;
}
