//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use crate::error::InventoryResult;

/// Validated, immutable domain value.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// An item's category or quantity is a value object; the item itself is an entity
/// identified by its name.
///
/// ## Construction
///
/// Every value object is built through [`ValueObject::parse`], which enforces the
/// type's constraints once. Code holding a value can rely on them afterwards
/// (a `Quantity` is always positive, an `ItemName` is never empty).
///
/// Callers that read raw text from a user can stay generic over the type they want:
///
/// ```ignore
/// fn ask<V: ValueObject>(raw: &str) -> InventoryResult<V> {
///     V::parse(raw)
/// }
///
/// let qty: Quantity = ask("5")?;
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + Sized {
    /// Short human-readable name of the value, used in validation messages.
    const LABEL: &'static str;

    /// Parse and validate raw text.
    ///
    /// Fails with [`crate::InventoryError::InvalidInput`] when the text does not
    /// satisfy the type's constraints.
    fn parse(raw: &str) -> InventoryResult<Self>;
}
