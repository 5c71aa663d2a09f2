use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopbook_core::{CustomerId, ItemId, Timestamp, ValueObject};

/// One completed transaction.
///
/// Immutable once created. Field order matches the history file columns
/// exactly; serde drives the CSV row shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub item_id: ItemId,
    /// Unit price at the time of purchase.
    pub item_price: Decimal,
    pub quantity: i64,
    pub customer_id: CustomerId,
    /// Title-cased from the purchase call's name argument, not the stored
    /// customer record.
    pub customer_name: String,
    pub customer_email: String,
    pub date: Timestamp,
}

impl PurchaseRecord {
    /// Amount spent on this purchase: `quantity x unit price`.
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.item_price
    }
}

impl ValueObject for PurchaseRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_multiplies_quantity_by_unit_price() {
        let record = PurchaseRecord {
            item_id: ItemId::new("I1"),
            item_price: dec!(10.0),
            quantity: 3,
            customer_id: CustomerId::from_index(1),
            customer_name: "Jane Doe".to_string(),
            customer_email: "jane@x.com".to_string(),
            date: "2024-01-01 00:00:00".parse().unwrap(),
        };
        assert_eq!(record.total(), dec!(30.0));
    }
}
