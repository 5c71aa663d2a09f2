//! Item-status snapshot file.

use std::path::Path;

use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopbook_core::{ItemId, Timestamp};
use shopbook_inventory::Item;

use crate::error::StoreResult;

/// Snapshot column names, in file order.
pub const SNAPSHOT_COLUMNS: [&str; 6] =
    ["item_id", "name", "brand", "price", "quantity", "update_date"];

/// One snapshot row. Field order matches [`SNAPSHOT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub item_id: ItemId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub quantity: i64,
    pub update_date: Timestamp,
}

impl From<&Item> for SnapshotRow {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id().clone(),
            name: item.name().to_string(),
            brand: item.brand().to_string(),
            price: item.price(),
            quantity: item.quantity(),
            update_date: item.updated_at(),
        }
    }
}

/// Rewrite the snapshot file with the complete current item set.
///
/// The header row is always written, even for an empty set, so the file is
/// never blank.
pub fn write_snapshot<'a, I>(path: &Path, items: I) -> StoreResult<()>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(SNAPSHOT_COLUMNS)?;
    for item in items {
        writer.serialize(SnapshotRow::from(item))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read every row of a snapshot file.
pub fn read_snapshot(path: &Path) -> StoreResult<Vec<SnapshotRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
