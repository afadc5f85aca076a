use core::hash::{Hash, Hasher};

use backpack_core::{Entity, InventoryError, InventoryResult, ValueObject};

/// Longest accepted item name, in characters.
pub const MAX_NAME_CHARS: usize = 29;

/// Longest accepted category label, in characters.
pub const MAX_CATEGORY_CHARS: usize = 19;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Item name: the case-insensitive key of an item inside a backpack.
///
/// `"Sword"` and `"sWORD"` compare (and hash) equal; the original spelling is
/// kept for display.
#[derive(Debug, Clone, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw text.
    pub fn matches(&self, other: &str) -> bool {
        folded(&self.0).eq(folded(other))
    }
}

impl PartialEq for ItemName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Hash for ItemName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.0) {
            c.hash(state);
        }
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for ItemName {
    const LABEL: &'static str = "name";

    fn parse(raw: &str) -> InventoryResult<Self> {
        if raw.trim().is_empty() {
            return Err(InventoryError::invalid_input("name cannot be empty"));
        }
        if raw.chars().count() > MAX_NAME_CHARS {
            return Err(InventoryError::invalid_input(format!(
                "name cannot exceed {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(Self(raw.to_string()))
    }
}

/// Free-form category label (e.g. "weapon", "ammo", "healing").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Category {
    const LABEL: &'static str = "category";

    fn parse(raw: &str) -> InventoryResult<Self> {
        if raw.trim().is_empty() {
            return Err(InventoryError::invalid_input("category cannot be empty"));
        }
        if raw.chars().count() > MAX_CATEGORY_CHARS {
            return Err(InventoryError::invalid_input(format!(
                "category cannot exceed {MAX_CATEGORY_CHARS} characters"
            )));
        }
        Ok(Self(raw.to_string()))
    }
}

/// Number of units held. Always strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> InventoryResult<Self> {
        if value == 0 {
            return Err(InventoryError::invalid_input("quantity must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {
    const LABEL: &'static str = "quantity";

    fn parse(raw: &str) -> InventoryResult<Self> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| InventoryError::invalid_input("quantity must be a number"))?;
        if value <= 0 {
            return Err(InventoryError::invalid_input("quantity must be positive"));
        }
        let value = u32::try_from(value)
            .map_err(|_| InventoryError::invalid_input("quantity is too large"))?;
        Self::new(value)
    }
}

/// An item held in the backpack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: ItemName,
    category: Category,
    quantity: Quantity,
}

impl Item {
    pub fn new(name: ItemName, category: Category, quantity: Quantity) -> Self {
        Self {
            name,
            category,
            quantity,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

impl Entity for Item {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
