//! Text rendering for the console.

use std::io::{self, Write};

use backpack_core::InventoryError;
use backpack_inventory::{InventoryView, Item};

use crate::menu::MenuChoice;

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 18;
const QUANTITY_WIDTH: usize = 10;

pub const BANNER: &str = "=== INVENTORY SYSTEM (LOOT BACKPACK) ===";
pub const FAREWELL: &str = "Closing system. Inventory saved! Good luck in the game!";

fn border() -> String {
    format!(
        "+{}+{}+{}+",
        "-".repeat(NAME_WIDTH + 2),
        "-".repeat(CATEGORY_WIDTH + 2),
        "-".repeat(QUANTITY_WIDTH + 2),
    )
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n--- ACTION MENU ---")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.code(), choice.label())?;
    }
    write!(out, "Choose an option: ")?;
    out.flush()
}

/// Render the backpack contents as a fixed-width table.
pub fn write_listing(out: &mut impl Write, view: InventoryView<'_>) -> io::Result<()> {
    writeln!(out, "\n--- INVENTORY (BACKPACK) ---")?;

    if view.is_empty() {
        return writeln!(out, "Backpack is empty. Collect some items!");
    }

    let border = border();
    writeln!(out, "{border}")?;
    writeln!(
        out,
        "| {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:<QUANTITY_WIDTH$} |",
        "Name", "Category", "Quantity"
    )?;
    writeln!(out, "{border}")?;
    for item in view.items() {
        writeln!(
            out,
            "| {:<NAME_WIDTH$} | {:<CATEGORY_WIDTH$} | {:>QUANTITY_WIDTH$} |",
            item.name().as_str(),
            item.category().as_str(),
            item.quantity().get(),
        )?;
    }
    writeln!(out, "{border}")?;
    writeln!(out, "Total items: {}/{}", view.count(), view.capacity())
}

pub fn write_item_details(out: &mut impl Write, item: &Item) -> io::Result<()> {
    writeln!(out, "\nItem found in inventory:")?;
    writeln!(out, "  Name: {}", item.name())?;
    writeln!(out, "  Category: {}", item.category())?;
    writeln!(out, "  Quantity: {}", item.quantity())
}

/// User-facing line for a rejected operation.
pub fn rejection(action: MenuChoice, err: &InventoryError) -> String {
    match err {
        InventoryError::Full { capacity } => {
            format!("Backpack full! Maximum capacity ({capacity} items) reached.")
        }
        InventoryError::Duplicate(name) => {
            format!("Item '{name}' already exists in the backpack. Action cancelled.")
        }
        InventoryError::Empty => match action {
            MenuChoice::RemoveItem => "Backpack is empty. Nothing to remove.".to_string(),
            MenuChoice::SearchItem => "Backpack is empty. Nothing to search for.".to_string(),
            _ => "Backpack is empty.".to_string(),
        },
        InventoryError::NotFound(name) => format!("Item '{name}' not found in the backpack."),
        InventoryError::InvalidInput(msg) => format!("Invalid input: {msg}."),
    }
}
