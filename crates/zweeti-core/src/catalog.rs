//! # Menu Catalog
//!
//! The static menu the cashier picks from.
//!
//! The catalog is an external collaborator from the ledger's point of view:
//! the ledger only ever sees the `name` and `unit_price` of whichever entry
//! the cashier resolved. Emoji are display garnish for the terminal menu.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One selectable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub unit_price: Money,
    pub emoji: String,
}

impl MenuItem {
    pub fn new(name: &str, unit_price: Money, emoji: &str) -> Self {
        MenuItem {
            name: name.to_string(),
            unit_price,
            emoji: emoji.to_string(),
        }
    }
}

/// An ordered list of menu entries with name lookup.
///
/// Order matters: the terminal presents entries in catalog order, and the
/// cashier can pick by position as well as by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Builds a catalog from explicit entries.
    pub fn new(items: Vec<MenuItem>) -> Self {
        MenuCatalog { items }
    }

    /// The standard Zweeti Fast Food menu.
    pub fn standard() -> Self {
        let rupees = Money::from_rupees;
        MenuCatalog::new(vec![
            MenuItem::new("Chaumin", rupees(40), "🍜"),
            MenuItem::new("Paneer Chaumin", rupees(60), "🍜"),
            MenuItem::new("Mushroom Chaumin", rupees(60), "🍄"),
            MenuItem::new("Chilli Chaumin", rupees(50), "🌶️"),
            MenuItem::new("Veg Momo", rupees(60), "🥟"),
            MenuItem::new("Paneer Momos", rupees(80), "🥟"),
            MenuItem::new("Veg Pasta", rupees(40), "🍝"),
            MenuItem::new("Paneer Pasta", rupees(60), "🍝"),
            MenuItem::new("Cream Pasta", rupees(60), "🍝"),
            MenuItem::new("Veg Roll", rupees(40), "🌯"),
            MenuItem::new("Paneer Roll", rupees(60), "🌯"),
            MenuItem::new("Veg Burger", rupees(30), "🍔"),
            MenuItem::new("Paneer Burger", rupees(50), "🍔"),
        ])
    }

    /// Entries in catalog order.
    #[inline]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an entry by exact name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        let wanted = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(wanted))
    }

    /// Looks up an entry by 1-based menu position.
    pub fn by_position(&self, position: usize) -> Option<&MenuItem> {
        if position == 0 {
            return None;
        }
        self.items.get(position - 1)
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        MenuCatalog::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_shape() {
        let catalog = MenuCatalog::standard();
        assert_eq!(catalog.items().len(), 13);
        assert_eq!(catalog.items()[0].name, "Chaumin");
        assert_eq!(catalog.items()[0].unit_price.paise(), 4000);
    }

    #[test]
    fn test_find_is_case_insensitive_and_trims() {
        let catalog = MenuCatalog::standard();
        assert_eq!(catalog.find("veg momo").unwrap().unit_price.paise(), 6000);
        assert_eq!(catalog.find("  Chaumin ").unwrap().name, "Chaumin");
        assert!(catalog.find("Pizza").is_none());
    }

    #[test]
    fn test_by_position_is_one_based() {
        let catalog = MenuCatalog::standard();
        assert_eq!(catalog.by_position(1).unwrap().name, "Chaumin");
        assert_eq!(catalog.by_position(13).unwrap().name, "Paneer Burger");
        assert!(catalog.by_position(0).is_none());
        assert!(catalog.by_position(14).is_none());
    }
}
