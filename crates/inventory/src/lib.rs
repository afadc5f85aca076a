//! Inventory domain module.
//!
//! This crate contains the backpack business rules, implemented purely as
//! deterministic domain logic (no IO, no console, no storage).

pub mod item;
pub mod store;

pub use item::{Category, Item, ItemName, Quantity};
pub use store::{Backpack, InventoryView, CAPACITY};
