use anyhow::Result;
use clap::ValueEnum;
use gilded_rose_engine::{GildedRose, Item};
use serde::ser::{SerializeSeq, Serializer as _};
use std::io::Write;

use crate::simulation::{DaySnapshot, for_each_day};

pub const BANNER: &str = "OMGHAI!";
pub const HEADER: &str = "name, sell_in, quality";

const NAME_WIDTH: usize = 35;
const NUMBER_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ReportFormat {
    /// Approval-test table, one block per day
    #[default]
    Table,
    /// JSON array of per-day snapshots
    Json,
}

/// Format one item as a table row.
#[must_use]
pub fn table_row(item: &Item) -> String {
    format!(
        "{:<name_width$},{:>number_width$},{:>number_width$}",
        item.name(),
        item.sell_in,
        item.quality,
        name_width = NAME_WIDTH,
        number_width = NUMBER_WIDTH,
    )
}

fn write_day(out: &mut dyn Write, snapshot: DaySnapshot<'_>) -> Result<()> {
    writeln!(out, "-------- day {} --------", snapshot.day)?;
    writeln!(out, "{HEADER}")?;
    for item in snapshot.items {
        writeln!(out, "{}", table_row(item))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write the table one day at a time while the registry advances.
pub fn generate_table_report(
    out: &mut dyn Write,
    shop: &mut GildedRose,
    total_days: u32,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    for_each_day(shop, total_days, |snapshot| write_day(&mut *out, snapshot))
}

/// Stream a JSON array with one element per day.
pub fn generate_json_report(
    out: &mut dyn Write,
    shop: &mut GildedRose,
    total_days: u32,
) -> Result<()> {
    let mut serializer = serde_json::Serializer::pretty(&mut *out);
    let mut days = serializer.serialize_seq(None)?;
    for_each_day(shop, total_days, |snapshot| {
        days.serialize_element(&snapshot)?;
        Ok(())
    })?;
    days.end()?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_report(
    out: &mut dyn Write,
    format: ReportFormat,
    shop: &mut GildedRose,
    total_days: u32,
) -> Result<()> {
    match format {
        ReportFormat::Table => generate_table_report(out, shop, total_days),
        ReportFormat::Json => generate_json_report(out, shop, total_days),
    }
}
