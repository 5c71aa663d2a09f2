//! Strongly-typed identifiers used across the domain.
//!
//! Item ids are supplied by the caller (external SKUs); customer ids are
//! issued sequentially by the customer directory as `CUST<N>`.

use serde::{Deserialize, Serialize};

/// Identifier of a stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a customer (`CUST1`, `CUST2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(ItemId);
impl_string_newtype!(CustomerId);

impl CustomerId {
    /// Render the sequential id for the `index`-th customer (1-based).
    pub fn from_index(index: usize) -> Self {
        Self(format!("CUST{index}"))
    }
}
