//! Item names and quality bounds shared by the update rules.

/// Lowest quality a bounded item can decay to.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a bounded item can appreciate to.
pub const MAX_QUALITY: i32 = 50;
/// Quality carried by legendary items in the stock fixture set.
pub const LEGENDARY_QUALITY: i32 = 80;

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASS_PREFIX: &str = "Backstage passes";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Backstage passes gain +2 per day from this many days out.
pub const BACKSTAGE_NEAR_DAYS: i32 = 10;
/// Backstage passes gain +3 per day from this many days out.
pub const BACKSTAGE_IMMINENT_DAYS: i32 = 5;
