//! Item categories and name-based rule dispatch.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{AGED_BRIE, BACKSTAGE_PASS_PREFIX, SULFURAS};
use crate::item::Item;
use crate::rules;

/// Closed set of update rules an item can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Ordinary goods that degrade over time
    #[default]
    Standard,
    /// Goods that improve with age (Aged Brie)
    Appreciating,
    /// Goods that never change (Sulfuras)
    Legendary,
    /// Event tickets whose value peaks right before the event (backstage passes)
    EventTicket,
}

impl Category {
    pub const ALL: &'static [Self] = &[
        Self::Standard,
        Self::Appreciating,
        Self::Legendary,
        Self::EventTicket,
    ];

    /// Resolve the category for an item name.
    ///
    /// Match order is Aged Brie, backstage pass prefix, Sulfuras, then the
    /// standard fallback; the first match wins.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if name == AGED_BRIE {
            Self::Appreciating
        } else if name.starts_with(BACKSTAGE_PASS_PREFIX) {
            Self::EventTicket
        } else if name == SULFURAS {
            Self::Legendary
        } else {
            Self::Standard
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Appreciating => "appreciating",
            Self::Legendary => "legendary",
            Self::EventTicket => "event_ticket",
        }
    }

    /// Whether quality is kept within `MIN_QUALITY..=MAX_QUALITY`.
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        !matches!(self, Self::Legendary)
    }

    /// Apply one day of this category's rule to `item`, ignoring its name.
    pub fn apply(self, item: &mut Item) {
        match self {
            Self::Standard => rules::degrade(item),
            Self::Appreciating => rules::appreciate(item),
            Self::Legendary => rules::hold(item),
            Self::EventTicket => rules::event_ticket(item),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
