//! Per-category daily update rules.
//!
//! Each rule applies exactly one day to an item in place. Standard and
//! appreciating items decrement `sell_in` first and then check for expiry;
//! backstage passes look at `sell_in` before it is decremented.

use crate::constants::{BACKSTAGE_IMMINENT_DAYS, BACKSTAGE_NEAR_DAYS, MAX_QUALITY, MIN_QUALITY};
use crate::item::Item;

/// Ordinary goods: lose 1 quality per day, 2 once expired, never below zero.
pub fn degrade(item: &mut Item) {
    if item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
    item.sell_in = item.sell_in.saturating_sub(1);
    if item.sell_in < 0 && item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
}

/// Aged Brie: gains 1 quality per day, 2 once expired, capped per increment.
pub fn appreciate(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
    item.sell_in = item.sell_in.saturating_sub(1);
    if item.sell_in < 0 && item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

/// Legendary items never change.
pub const fn hold(_item: &mut Item) {}

/// Backstage passes: quality recomputed from the days left before the event.
pub fn event_ticket(item: &mut Item) {
    item.quality = if item.sell_in <= 0 {
        0
    } else {
        let gain = if item.sell_in <= BACKSTAGE_IMMINENT_DAYS {
            3
        } else if item.sell_in <= BACKSTAGE_NEAR_DAYS {
            2
        } else {
            1
        };
        item.quality.saturating_add(gain).min(MAX_QUALITY)
    };
    item.sell_in = item.sell_in.saturating_sub(1);
}
