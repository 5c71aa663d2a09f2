use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use shopbook_core::{CustomerId, DomainError, ItemId, Timestamp};
use shopbook_customers::{Customer, CustomerDirectory, title_case};
use shopbook_inventory::Item;
use shopbook_sales::{CustomerSpend, PurchaseRecord, top_customers};
use shopbook_store::{self as store, StorePaths};

use crate::error::LedgerResult;

/// The inventory ledger: items, customers, purchase history, and the two
/// persistence sinks.
///
/// All operations are synchronous and single-threaded; the ledger assumes a
/// single process owns its files. Mutations apply in memory first, then hit
/// disk: if a file write fails the error propagates and the in-memory change
/// is NOT rolled back, so memory and disk may diverge until the next
/// successful write.
#[derive(Debug)]
pub struct Ledger {
    items: BTreeMap<ItemId, Item>,
    customers: CustomerDirectory,
    history: Vec<PurchaseRecord>,
    paths: StorePaths,
}

impl Ledger {
    /// An empty ledger writing to `paths`.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            items: BTreeMap::new(),
            customers: CustomerDirectory::new(),
            history: Vec::new(),
            paths,
        }
    }

    /// Restore a ledger from existing files.
    ///
    /// Items come from the snapshot; customers and the in-memory history are
    /// replayed from the history file, so subsequently assigned customer ids
    /// continue the persisted sequence. Missing files are treated as empty.
    pub fn open(paths: StorePaths) -> LedgerResult<Self> {
        let mut ledger = Self::new(paths);

        if ledger.paths.snapshot.exists() {
            for row in store::read_snapshot(&ledger.paths.snapshot)? {
                let item = Item::new(
                    row.item_id.clone(),
                    &row.name,
                    &row.brand,
                    row.price,
                    row.quantity,
                    row.update_date,
                )?;
                ledger.items.insert(row.item_id, item);
            }
        }

        if ledger.paths.history.exists() {
            let records = store::read_history(&ledger.paths.history)?;
            for record in &records {
                ledger.customers.restore(Customer::new(
                    record.customer_id.clone(),
                    record.customer_email.clone(),
                    record.customer_name.clone(),
                ));
            }
            ledger.history = records;
        }

        debug!(
            items = ledger.items.len(),
            customers = ledger.customers.len(),
            purchases = ledger.history.len(),
            "ledger restored from disk"
        );
        Ok(ledger)
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Insert or overwrite an item record, then rewrite the snapshot file.
    ///
    /// Name and brand are stored upper-cased. Re-adding an existing id
    /// replaces the stored record. Empty name, negative price, and negative
    /// quantity are rejected with [`DomainError::Validation`].
    pub fn add_item(
        &mut self,
        item_id: ItemId,
        name: &str,
        brand: &str,
        price: Decimal,
        quantity: i64,
        update_date: Timestamp,
    ) -> LedgerResult<()> {
        let item = Item::new(item_id.clone(), name, brand, price, quantity, update_date)?;
        self.items.insert(item_id.clone(), item);
        self.write_snapshot()?;
        debug!(item_id = %item_id, quantity, "item recorded");
        Ok(())
    }

    /// Look up or create the customer for `email` and return their id.
    ///
    /// Purely in-memory; no file write. Idempotent per email.
    pub fn assign_customer_id(&mut self, email: &str, name: &str) -> CustomerId {
        self.customers.assign_id(email, name)
    }

    /// Set a new price for an item, refresh its update timestamp from the
    /// wall clock, and rewrite the snapshot file.
    pub fn update_price(&mut self, item_id: &ItemId, new_price: Decimal) -> LedgerResult<()> {
        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| DomainError::not_found(item_id.clone()))?;
        item.set_price(new_price, Timestamp::now())?;
        self.write_snapshot()?;
        debug!(item_id = %item_id, price = %new_price, "price updated");
        Ok(())
    }

    /// Execute a purchase.
    ///
    /// Checks short-circuit in order: item exists (`NotFound`), quantity is
    /// positive (`InvalidQuantity`), stock covers the request
    /// (`InsufficientStock`). On success the customer id is resolved or
    /// created, stock is decremented, and the purchase record — current unit
    /// price, fresh timestamp — is appended to the in-memory history, the
    /// history file, and reflected in a snapshot rewrite.
    pub fn purchase_item(
        &mut self,
        item_id: &ItemId,
        quantity: i64,
        customer_name: &str,
        customer_email: &str,
    ) -> LedgerResult<PurchaseRecord> {
        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| DomainError::not_found(item_id.clone()))?;
        item.deduct(quantity)?;
        let item_price = item.price();

        let customer_id = self.customers.assign_id(customer_email, customer_name);
        let record = PurchaseRecord {
            item_id: item_id.clone(),
            item_price,
            quantity,
            customer_id,
            customer_name: title_case(customer_name),
            customer_email: customer_email.to_string(),
            date: Timestamp::now(),
        };

        self.history.push(record.clone());
        store::append_purchase(&self.paths.history, &record)?;
        self.write_snapshot()?;

        info!(
            item_id = %record.item_id,
            customer_id = %record.customer_id,
            quantity,
            total = %record.total(),
            "purchase recorded"
        );
        Ok(record)
    }

    /// The stored record for `item_id`, or `NotFound`.
    pub fn get_item(&self, item_id: &ItemId) -> LedgerResult<&Item> {
        self.items
            .get(item_id)
            .ok_or_else(|| DomainError::not_found(item_id.clone()).into())
    }

    /// Aggregate per-customer spend from the history file at `source` and
    /// return the customers strictly above `min_spent`.
    ///
    /// The file is re-parsed from disk; it need not be this ledger's live
    /// history.
    pub fn get_top_customers(
        &self,
        source: &Path,
        min_spent: Decimal,
    ) -> LedgerResult<Vec<CustomerSpend>> {
        let records = store::read_history(source)?;
        Ok(top_customers(records.iter(), min_spent))
    }

    /// In-memory purchase history, oldest first.
    pub fn history(&self) -> &[PurchaseRecord] {
        &self.history
    }

    pub fn customer(&self, email: &str) -> Option<&Customer> {
        self.customers.get(email)
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    fn write_snapshot(&self) -> Result<(), store::StoreError> {
        store::write_snapshot(&self.paths.snapshot, self.items.values())
    }
}
