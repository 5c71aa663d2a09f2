//! Customers domain module.
//!
//! Customers are identified by email and issued sequential `CUST<N>` ids on
//! first purchase. The directory is a lookup-or-create map; stored records
//! are immutable once created.

pub mod directory;
pub mod name;

pub use directory::{Customer, CustomerDirectory};
pub use name::title_case;
