//! The backpack: a fixed-capacity, insertion-ordered item store.

use backpack_core::{Entity, InventoryError, InventoryResult};

use crate::item::Item;

/// Maximum number of items a backpack can hold.
pub const CAPACITY: usize = 10;

/// Ordered, capacity-bounded collection of items.
///
/// Invariants:
/// - `len() <= CAPACITY`
/// - no two items share a name (case-insensitive)
/// - items stay in insertion order; removal closes the gap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backpack {
    items: Vec<Item>,
}

impl Backpack {
    /// Create an empty backpack.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Index of the item whose name matches `name` case-insensitively.
    ///
    /// Linear scan from the front; the first match wins.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id().matches(name))
    }

    /// Append `item` at the end.
    ///
    /// Fails with `Full` at capacity (checked first), or `Duplicate` when the
    /// name is already present. Neither failure mutates the backpack.
    pub fn insert(&mut self, item: Item) -> InventoryResult<&Item> {
        if self.is_full() {
            tracing::debug!(name = %item.name(), "insert rejected: backpack full");
            return Err(InventoryError::full(CAPACITY));
        }
        if self.find(item.name().as_str()).is_some() {
            tracing::debug!(name = %item.name(), "insert rejected: duplicate name");
            return Err(InventoryError::duplicate(item.name().as_str()));
        }

        tracing::debug!(
            name = %item.name(),
            category = %item.category(),
            quantity = item.quantity().get(),
            slot = self.items.len(),
            "item inserted"
        );
        let name = item.name().as_str().to_string();
        self.items.push(item);
        self.items
            .last()
            .ok_or_else(|| InventoryError::not_found(name))
    }

    /// Remove the item named `name`, shifting later items left by one.
    ///
    /// Fails with `Empty` on an empty backpack and `NotFound` when no item
    /// matches.
    pub fn remove(&mut self, name: &str) -> InventoryResult<Item> {
        if self.is_empty() {
            return Err(InventoryError::Empty);
        }
        let Some(idx) = self.find(name) else {
            tracing::debug!(name, "remove rejected: not found");
            return Err(InventoryError::not_found(name));
        };

        let removed = self.items.remove(idx);
        tracing::debug!(name = %removed.name(), slot = idx, remaining = self.items.len(), "item removed");
        Ok(removed)
    }

    /// Full record of the item named `name`.
    ///
    /// Fails with `Empty` on an empty backpack and `NotFound` when no item
    /// matches.
    pub fn lookup(&self, name: &str) -> InventoryResult<&Item> {
        if self.is_empty() {
            return Err(InventoryError::Empty);
        }
        self.find(name)
            .map(|idx| &self.items[idx])
            .ok_or_else(|| InventoryError::not_found(name))
    }

    /// Read-only snapshot of the current contents.
    pub fn list(&self) -> InventoryView<'_> {
        InventoryView {
            items: &self.items,
            capacity: CAPACITY,
        }
    }
}

/// Ordered view of a backpack's contents, annotated with count and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryView<'a> {
    items: &'a [Item],
    capacity: usize,
}

impl<'a> InventoryView<'a> {
    pub fn items(&self) -> &'a [Item] {
        self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Explicit "nothing to show" indicator.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
