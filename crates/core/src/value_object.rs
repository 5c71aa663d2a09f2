//! Value object trait: equality by value, not identity.

/// Marker trait for immutable, value-compared domain objects.
///
/// Purchase records are the canonical example here: once appended to the
/// history they never change, and two records with identical fields are
/// interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
