//! Item registry and the daily update pass.
use serde::{Deserialize, Serialize};

use crate::ItemSource;
use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::item::Item;

/// The shop's registry of tracked items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build a registry from `(name, sell_in, quality)` triples.
    #[must_use]
    pub fn from_triples<I, S>(triples: I) -> Self
    where
        I: IntoIterator<Item = (S, i32, i32)>,
        S: Into<String>,
    {
        triples.into_iter().map(Item::from).collect()
    }

    /// Build a registry from whatever an item source provides.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the item set cannot be loaded.
    pub fn from_source<S: ItemSource>(source: &S) -> Result<Self, S::Error> {
        source.load_items().map(Self::new)
    }

    /// Advance every item by one day, in registry order.
    ///
    /// Bounded categories keep in-range quality in range; values seeded
    /// outside the range are left to the rules as given.
    pub fn update_quality(&mut self) {
        let in_range = |quality: i32| (MIN_QUALITY..=MAX_QUALITY).contains(&quality);
        for item in &mut self.items {
            let category = item.category();
            let started_in_range = in_range(item.quality);
            category.apply(item);
            debug_assert!(
                !category.is_bounded() || !started_in_range || in_range(item.quality),
                "{category} rule moved quality out of range: {item}"
            );
            log::trace!("{category}: {item}");
        }
    }

    /// Advance every item by `days` days.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
        log::debug!("advanced {} items by {days} days", self.items.len());
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl FromIterator<Item> for GildedRose {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GildedRose {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
