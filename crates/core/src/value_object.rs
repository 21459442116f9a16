//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// A `StockMovement { previous: 3, next: 5, delta: 2 }` is a value object;
/// an `ItemRecord` with an id is an entity. Value objects never change once
/// built; to "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
