//! Per-customer spend rollup.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shopbook_core::CustomerId;

use crate::purchase::PurchaseRecord;

/// Threshold used by callers that do not pick their own.
pub const DEFAULT_MIN_SPENT: Decimal = dec!(5000);

/// One row of the top-customer report.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSpend {
    pub customer_id: CustomerId,
    pub total_spent: Decimal,
}

/// Aggregate spend per customer and keep those STRICTLY above `min_spent`.
///
/// A customer whose total equals `min_spent` exactly is excluded. The
/// returned list is unordered.
pub fn top_customers<'a, I>(records: I, min_spent: Decimal) -> Vec<CustomerSpend>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut spending: HashMap<CustomerId, Decimal> = HashMap::new();
    for record in records {
        *spending.entry(record.customer_id.clone()).or_default() += record.total();
    }

    spending
        .into_iter()
        .filter(|(_, total)| *total > min_spent)
        .map(|(customer_id, total_spent)| CustomerSpend {
            customer_id,
            total_spent,
        })
        .collect()
}
