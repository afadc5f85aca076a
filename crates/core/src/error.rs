//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is a normal, user-facing outcome: callers report it and carry
/// on. Console and IO failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Insert attempted while the store holds `capacity` items.
    #[error("backpack is full ({capacity} items)")]
    Full { capacity: usize },

    /// Insert attempted with a name already present (case-insensitive).
    #[error("item '{0}' already exists")]
    Duplicate(String),

    /// Remove or search attempted on a store with zero items.
    #[error("backpack is empty")]
    Empty,

    /// No item matches the given name.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// A value failed validation (name, category, quantity, menu selection).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl InventoryError {
    pub fn full(capacity: usize) -> Self {
        Self::Full { capacity }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the caller can continue after this error.
    ///
    /// There is no fatal inventory error: the store is never left in a
    /// partially mutated state.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Full { .. }
            | Self::Duplicate(_)
            | Self::Empty
            | Self::NotFound(_)
            | Self::InvalidInput(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(InventoryError::full(10).to_string(), "backpack is full (10 items)");
        assert_eq!(
            InventoryError::duplicate("Sword").to_string(),
            "item 'Sword' already exists"
        );
        assert_eq!(
            InventoryError::not_found("Rope").to_string(),
            "item 'Rope' not found"
        );
        assert_eq!(
            InventoryError::invalid_input("quantity must be positive").to_string(),
            "invalid input: quantity must be positive"
        );
    }

    #[test]
    fn every_variant_is_recoverable() {
        let all = [
            InventoryError::full(10),
            InventoryError::duplicate("a"),
            InventoryError::Empty,
            InventoryError::not_found("a"),
            InventoryError::invalid_input("a"),
        ];
        assert!(all.iter().all(InventoryError::is_recoverable));
    }
}
