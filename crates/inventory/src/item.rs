use rust_decimal::Decimal;

use shopbook_core::{DomainError, DomainResult, Entity, ItemId, Timestamp};

/// A stocked product.
///
/// Name and brand are stored upper-cased. Stock is an `i64` with the
/// invariant `quantity >= 0`; every mutation path re-checks it. Items are
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    brand: String,
    price: Decimal,
    quantity: i64,
    updated_at: Timestamp,
}

impl Item {
    /// Build a validated item record.
    ///
    /// Rejects an empty name, a negative price, and a negative quantity
    /// with [`DomainError::Validation`].
    pub fn new(
        id: ItemId,
        name: &str,
        brand: &str,
        price: Decimal,
        quantity: i64,
        updated_at: Timestamp,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if price.is_sign_negative() {
            return Err(DomainError::validation(format!(
                "price cannot be negative, got {price}"
            )));
        }
        if quantity < 0 {
            return Err(DomainError::validation(format!(
                "quantity cannot be negative, got {quantity}"
            )));
        }

        Ok(Self {
            id,
            name: name.to_uppercase(),
            brand: brand.to_uppercase(),
            price,
            quantity,
            updated_at,
        })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Set a new unit price and refresh the update timestamp.
    pub fn set_price(&mut self, price: Decimal, at: Timestamp) -> DomainResult<()> {
        if price.is_sign_negative() {
            return Err(DomainError::validation(format!(
                "price cannot be negative, got {price}"
            )));
        }
        self.price = price;
        self.updated_at = at;
        Ok(())
    }

    /// Remove purchased stock.
    ///
    /// Checks fire in order: quantity must be positive
    /// ([`DomainError::InvalidQuantity`]), then stock must cover the request
    /// ([`DomainError::InsufficientStock`]). The update timestamp is left
    /// untouched; only price changes refresh it.
    pub fn deduct(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        if self.quantity < quantity {
            return Err(DomainError::InsufficientStock {
                item_id: self.id.clone(),
                requested: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn test_time() -> Timestamp {
        "2024-01-01 00:00:00".parse().unwrap()
    }

    fn widget(quantity: i64) -> Item {
        Item::new(
            ItemId::new("I1"),
            "widget",
            "acme",
            dec!(10.0),
            quantity,
            test_time(),
        )
        .unwrap()
    }

    #[test]
    fn new_normalizes_name_and_brand_to_uppercase() {
        let item = widget(5);
        assert_eq!(item.name(), "WIDGET");
        assert_eq!(item.brand(), "ACME");
        assert_eq!(item.price(), dec!(10.0));
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = Item::new(ItemId::new("I1"), "   ", "acme", dec!(1), 1, test_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_rejects_negative_price() {
        let err = Item::new(ItemId::new("I1"), "widget", "acme", dec!(-0.01), 1, test_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_rejects_negative_quantity() {
        let err = Item::new(ItemId::new("I1"), "widget", "acme", dec!(1), -1, test_time())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn set_price_updates_price_and_timestamp() {
        let mut item = widget(5);
        let later: Timestamp = "2024-06-01 12:30:00".parse().unwrap();
        item.set_price(dec!(12.5), later).unwrap();
        assert_eq!(item.price(), dec!(12.5));
        assert_eq!(item.updated_at(), later);
    }

    #[test]
    fn set_price_rejects_negative_price() {
        let mut item = widget(5);
        let err = item.set_price(dec!(-1), test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(item.price(), dec!(10.0));
    }

    #[test]
    fn deduct_decrements_stock_by_exact_amount() {
        let mut item = widget(5);
        item.deduct(3).unwrap();
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn deduct_rejects_zero_and_negative_quantities() {
        let mut item = widget(5);
        assert_eq!(item.deduct(0).unwrap_err(), DomainError::InvalidQuantity(0));
        assert_eq!(item.deduct(-1).unwrap_err(), DomainError::InvalidQuantity(-1));
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn deduct_rejects_overdraw() {
        let mut item = widget(2);
        let err = item.deduct(3).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                item_id: ItemId::new("I1"),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn invalid_quantity_takes_priority_over_insufficient_stock() {
        let mut item = widget(0);
        assert_eq!(item.deduct(0).unwrap_err(), DomainError::InvalidQuantity(0));
    }

    #[test]
    fn deduct_leaves_update_timestamp_alone() {
        let mut item = widget(5);
        item.deduct(1).unwrap();
        assert_eq!(item.updated_at(), test_time());
    }

    proptest! {
        #[test]
        fn stock_never_goes_negative(initial in 0i64..10_000, requests in proptest::collection::vec(-10i64..100, 0..64)) {
            let mut item = widget(initial);
            for request in requests {
                let _ = item.deduct(request);
                prop_assert!(item.quantity() >= 0);
            }
        }
    }
}
