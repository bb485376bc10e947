//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: they are defined entirely by their
/// attribute values and are never mutated in place. A validated update
/// request is one: it is built per submission, compared by value, and either
/// consumed by the storage layer or dropped.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(9.5), Price(9.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
