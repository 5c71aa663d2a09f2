//! `shopbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, the domain error taxonomy, and the fixed-format
//! timestamp used by item updates and purchase records.

pub mod entity;
pub mod error;
pub mod id;
pub mod timestamp;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, ItemId};
pub use timestamp::Timestamp;
pub use value_object::ValueObject;
