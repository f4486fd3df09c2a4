//! Inventory item record.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Category;

/// A tracked item: immutable name, days left to sell, and quality score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category the update engine dispatches this item to.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl<S: Into<String>> From<(S, i32, i32)> for Item {
    fn from((name, sell_in, quality): (S, i32, i32)) -> Self {
        Self::new(name, sell_in, quality)
    }
}
