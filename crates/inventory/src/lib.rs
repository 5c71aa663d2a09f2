//! Inventory domain module.
//!
//! Business rules for stocked items: validated construction, price updates,
//! and stock deduction. Pure domain logic — no IO, no storage.

pub mod item;

pub use item::Item;
