//! Append-only purchase history file.

use std::fs::OpenOptions;
use std::path::Path;

use csv::WriterBuilder;

use shopbook_sales::PurchaseRecord;

use crate::error::StoreResult;

/// History column names, in file order.
pub const HISTORY_COLUMNS: [&str; 7] = [
    "item_id",
    "item_price",
    "quantity",
    "customer_id",
    "customer_name",
    "customer_email",
    "date",
];

/// Append one purchase record to the history file.
///
/// The header row is written only when the file is empty at open time, so
/// repeated appends (and process restarts) produce exactly one header.
pub fn append_purchase(path: &Path, record: &PurchaseRecord) -> StoreResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if needs_header {
        writer.write_record(HISTORY_COLUMNS)?;
    }
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}

/// Read every purchase record from a history file.
pub fn read_history(path: &Path) -> StoreResult<Vec<PurchaseRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shopbook_core::{CustomerId, ItemId};

    fn record(quantity: i64) -> PurchaseRecord {
        PurchaseRecord {
            item_id: ItemId::new("I1"),
            item_price: dec!(10.0),
            quantity,
            customer_id: CustomerId::from_index(1),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@x.com".to_string(),
            date: "2024-01-01 00:00:00".parse().unwrap(),
        }
    }

    #[test]
    fn header_is_written_exactly_once_across_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchase_history.csv");
        append_purchase(&path, &record(3)).unwrap();
        append_purchase(&path, &record(1)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header_lines = contents
            .lines()
            .filter(|line| line.starts_with("item_id,"))
            .count();
        assert_eq!(header_lines, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn appended_records_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchase_history.csv");
        append_purchase(&path, &record(3)).unwrap();
        append_purchase(&path, &record(2)).unwrap();

        let records = read_history(&path).unwrap();
        assert_eq!(records, vec![record(3), record(2)]);
    }

    #[test]
    fn row_layout_matches_the_documented_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchase_history.csv");
        append_purchase(&path, &record(3)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("item_id,item_price,quantity,customer_id,customer_name,customer_email,date")
        );
        assert_eq!(
            lines.next(),
            Some("I1,10.0,3,CUST1,Jane Doe,jane@x.com,2024-01-01 00:00:00")
        );
    }
}
