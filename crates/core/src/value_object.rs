//! Value object trait: equality by value, not identity.
//!
//! Prices and quantities are value objects: two prices of `100.0` are the same
//! price. Products and categories are entities (see [`crate::Entity`]).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one; validated constructors guarantee every instance in
/// circulation satisfies its invariant.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
