use backpack_core::InventoryError;
use thiserror::Error;

/// Main menu entries, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    RemoveItem,
    ListItems,
    SearchItem,
    Exit,
}

/// Rejected menu selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu selection is not a number")]
    NotANumber,

    #[error("no menu option {0}")]
    UnknownOption(i64),
}

impl From<MenuError> for InventoryError {
    fn from(err: MenuError) -> Self {
        InventoryError::invalid_input(err.to_string())
    }
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddItem,
        MenuChoice::RemoveItem,
        MenuChoice::ListItems,
        MenuChoice::SearchItem,
        MenuChoice::Exit,
    ];

    pub fn code(self) -> i64 {
        match self {
            MenuChoice::AddItem => 1,
            MenuChoice::RemoveItem => 2,
            MenuChoice::ListItems => 3,
            MenuChoice::SearchItem => 4,
            MenuChoice::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddItem => "Register New Item",
            MenuChoice::RemoveItem => "Remove Item",
            MenuChoice::ListItems => "List Items (View Backpack)",
            MenuChoice::SearchItem => "Search Item by Name",
            MenuChoice::Exit => "Exit Game and Save Inventory",
        }
    }

    /// Parse a selection token such as `"3"`.
    pub fn parse(token: &str) -> Result<Self, MenuError> {
        let code: i64 = token.trim().parse().map_err(|_| MenuError::NotANumber)?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.code() == code)
            .ok_or(MenuError::UnknownOption(code))
    }
}
