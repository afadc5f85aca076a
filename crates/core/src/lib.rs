//! `backpack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console concerns).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use value_object::ValueObject;
