//! Console front-end for the backpack.
//!
//! The [`session::Session`] owns a [`backpack_inventory::Backpack`] and drives
//! it from a line-oriented text menu. Input and output are generic so the
//! whole loop runs against in-memory buffers in tests.

pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;

pub use error::CliError;
pub use input::LineReader;
pub use menu::{MenuChoice, MenuError};
pub use session::{Session, SessionEnd};
