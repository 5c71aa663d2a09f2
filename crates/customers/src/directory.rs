use std::collections::HashMap;

use shopbook_core::{CustomerId, Entity};

use crate::name::title_case;

/// A purchaser, keyed by email.
///
/// Created lazily on first purchase and immutable thereafter: a later
/// purchase under the same email with a different display name does not
/// rewrite the stored name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    email: String,
    name: String,
}

impl Customer {
    /// Rebuild a customer from already-normalized parts (e.g. a history
    /// file). `assign_id` is the path for fresh registrations.
    pub fn new(id: CustomerId, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Email-keyed customer registry issuing sequential `CUST<N>` ids.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    by_email: HashMap<String, Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or create the customer for `email` and return their id.
    ///
    /// Idempotent: a known email returns its existing id, whatever `name`
    /// says this time. A new email is issued `CUST<count + 1>` and stored
    /// with a title-cased name.
    pub fn assign_id(&mut self, email: &str, name: &str) -> CustomerId {
        if let Some(existing) = self.by_email.get(email) {
            return existing.id().clone();
        }
        let id = CustomerId::from_index(self.by_email.len() + 1);
        let customer = Customer::new(id.clone(), email, title_case(name));
        self.by_email.insert(email.to_string(), customer);
        id
    }

    /// Insert a customer rebuilt from persisted state, keeping the first
    /// record seen for an email.
    pub fn restore(&mut self, customer: Customer) {
        self.by_email
            .entry(customer.email().to_string())
            .or_insert(customer);
    }

    pub fn get(&self, email: &str) -> Option<&Customer> {
        self.by_email.get(email)
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }
}
