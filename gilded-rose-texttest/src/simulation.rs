use anyhow::Result;
use gilded_rose_engine::{GildedRose, Item};
use serde::Serialize;

/// Days printed when no day count is given: day 0 and day 1.
pub const DEFAULT_TOTAL_DAYS: u32 = 2;

/// Item states at the start of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySnapshot<'a> {
    pub day: u32,
    pub items: &'a [Item],
}

/// Convert the optional "extra days" argument into the number of days shown.
///
/// Day 0 is always counted, so `Some(n)` shows `n + 1` days. Negative
/// values show nothing.
#[must_use]
pub fn total_days(extra_days: Option<i64>) -> u32 {
    match extra_days {
        None => DEFAULT_TOTAL_DAYS,
        Some(extra) => {
            let total = extra.saturating_add(1).max(0);
            u32::try_from(total).unwrap_or(u32::MAX)
        }
    }
}

/// Hand each of `total_days` days to `visit`, advancing the registry after
/// every visit. Only the current day is held in memory.
pub fn for_each_day<F>(shop: &mut GildedRose, total_days: u32, mut visit: F) -> Result<()>
where
    F: FnMut(DaySnapshot<'_>) -> Result<()>,
{
    for day in 0..total_days {
        visit(DaySnapshot {
            day,
            items: shop.items(),
        })?;
        shop.update_quality();
        log::trace!("simulated day {day}");
    }
    log::debug!("simulated {total_days} days");
    Ok(())
}
