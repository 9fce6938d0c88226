//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two values with
/// the same attributes are the same value. `Money { amount: 100, currency: Usd }`
/// is a value object; an `Invoice` with an id is an entity. To "modify" a value
/// object, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
