//! # Order Ledger
//!
//! The current, in-progress bill: line items plus derived totals.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Order Ledger Operations                         │
//! │                                                                     │
//! │  Cashier Action            Operation              State Change      │
//! │  ──────────────            ─────────              ────────────      │
//! │                                                                     │
//! │  Pick item + qty ────────► add_item() ──────────► items.push(item)  │
//! │                                                    next_id += 1     │
//! │                                                                     │
//! │  Remove a line ──────────► remove_item(id) ─────► items.retain(..)  │
//! │                                                                     │
//! │  Toggle GST ─────────────► set_tax_enabled() ───► flag only         │
//! │                                                                     │
//! │  Show bill ──────────────► totals() ────────────► (pure recompute)  │
//! │                                                                     │
//! │  Finalize / discard ─────► clear() ─────────────► items empty,      │
//! │                                                    next_id = 1      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger lives only in memory for the duration of one billing session.
//! Durable state (the day's running total) is owned by zweeti-store.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::{Money, TaxRate};

// =============================================================================
// Line Item
// =============================================================================

/// One line of the in-progress bill.
///
/// ## Id Assignment
/// Ids are monotonically increasing integers assigned at insertion and never
/// reused, even after a removal. Display order and receipt order are both
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique within the current bill; assigned by the ledger.
    pub id: u64,

    /// Display label, copied from the menu entry the cashier resolved.
    pub name: String,

    /// Unit price frozen at the moment the line was added.
    pub unit_price: Money,

    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    /// The line total, recomputed on every read.
    ///
    /// Derived, never stored: `unit_price × quantity` cannot go stale.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Bill Totals
// =============================================================================

/// Derived totals for the current bill.
///
/// A plain snapshot - recomputed from ledger state on every call, so it can
/// be handed to renderers without any staleness concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub grand_total: Money,
}

// =============================================================================
// Order Ledger
// =============================================================================

/// The in-progress, uncommitted bill being built for the current customer.
///
/// ## Invariants
/// - `line_total == unit_price × quantity` for every item (enforced by
///   deriving the total on read)
/// - `next_id` starts at 1, increments on every successful add, and resets
///   only on [`OrderLedger::clear`]
/// - toggling tax never mutates stored items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLedger {
    /// Line items in insertion order.
    items: Vec<LineItem>,

    /// Next id to assign; never decremented except by `clear()`.
    next_id: u64,

    /// Whether GST applies to this bill. Default true.
    tax_enabled: bool,

    /// The configured GST rate. Fixed for the life of the ledger.
    tax_rate: TaxRate,
}

impl OrderLedger {
    /// Creates an empty ledger with the default 5% GST rate.
    pub fn new() -> Self {
        OrderLedger::with_tax_rate(TaxRate::default())
    }

    /// Creates an empty ledger with an explicit tax rate.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        OrderLedger {
            items: Vec::new(),
            next_id: 1,
            tax_enabled: true,
            tax_rate,
        }
    }

    /// Appends a new line item and returns it.
    ///
    /// ## Behavior
    /// Every add appends a fresh line - the same menu item twice makes two
    /// lines, matching how the cashier entered them. The new item gets
    /// `id = next_id` and the counter advances.
    ///
    /// ## Errors
    /// Refuses only inputs that would break the LineItem invariants (empty
    /// name, negative unit price, non-positive quantity). Richer business
    /// validation - quantity caps, menu membership - is the caller's job
    /// before this point.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<LineItem, CoreError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(CoreError::EmptyItemName);
        }
        if unit_price.paise() < 0 {
            return Err(CoreError::NegativeUnitPrice {
                paise: unit_price.paise(),
            });
        }
        if quantity < 1 {
            return Err(CoreError::InvalidQuantity { quantity });
        }

        let item = LineItem {
            id: self.next_id,
            name,
            unit_price,
            quantity,
        };
        self.next_id += 1;
        self.items.push(item.clone());

        Ok(item)
    }

    /// Removes the line with the given id.
    ///
    /// Remaining items keep their relative order. Removing an unknown id is
    /// a no-op, not an error.
    ///
    /// ## Returns
    /// Whether an item was found and removed.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Empties the ledger and resets it for the next customer.
    ///
    /// Resets `next_id` to 1 and `tax_enabled` to true. Never touches the
    /// durable daily totals.
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 1;
        self.tax_enabled = true;
    }

    /// Sets whether GST applies; takes effect on the next `totals()` call.
    pub fn set_tax_enabled(&mut self, enabled: bool) {
        self.tax_enabled = enabled;
    }

    /// Whether GST currently applies.
    #[inline]
    pub fn tax_enabled(&self) -> bool {
        self.tax_enabled
    }

    /// The configured GST rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// The line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines on the bill.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Recomputes subtotal, GST and grand total from current state.
    ///
    /// Pure function of the ledger - no caching, so a stale receipt is
    /// impossible. Empty ledger totals to zero across the board.
    pub fn totals(&self) -> BillTotals {
        let subtotal = self
            .items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.line_total());

        let tax = if self.tax_enabled {
            subtotal.calculate_tax(self.tax_rate)
        } else {
            Money::zero()
        };

        BillTotals {
            subtotal,
            tax,
            grand_total: subtotal + tax,
        }
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        OrderLedger::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(entries: &[(&str, i64, i64)]) -> OrderLedger {
        let mut ledger = OrderLedger::new();
        for (name, rupees, qty) in entries {
            ledger
                .add_item(*name, Money::from_rupees(*rupees), *qty)
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_add_assigns_monotonic_ids() {
        let mut ledger = OrderLedger::new();

        let a = ledger.add_item("Chaumin", Money::from_rupees(40), 1).unwrap();
        let b = ledger.add_item("Veg Momo", Money::from_rupees(60), 1).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // Ids are never reused, even after a removal
        assert!(ledger.remove_item(2));
        let c = ledger.add_item("Veg Roll", Money::from_rupees(40), 1).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_subtotal_is_ordered_sum() {
        let ledger = ledger_with(&[("Chaumin", 40, 2), ("Veg Momo", 60, 1), ("Veg Burger", 30, 3)]);

        // 40×2 + 60×1 + 30×3 = 230 rupees
        assert_eq!(ledger.totals().subtotal.paise(), 23000);
    }

    #[test]
    fn test_line_total_consistent_at_read_time() {
        let ledger = ledger_with(&[("Paneer Momos", 80, 4)]);

        for item in ledger.items() {
            assert_eq!(
                item.line_total().paise(),
                item.unit_price.paise() * item.quantity
            );
        }
    }

    #[test]
    fn test_add_refuses_invariant_violations() {
        let mut ledger = OrderLedger::new();

        assert!(matches!(
            ledger.add_item("", Money::from_rupees(40), 1),
            Err(CoreError::EmptyItemName)
        ));
        assert!(matches!(
            ledger.add_item("   ", Money::from_rupees(40), 1),
            Err(CoreError::EmptyItemName)
        ));
        assert!(matches!(
            ledger.add_item("Chaumin", Money::from_paise(-1), 1),
            Err(CoreError::NegativeUnitPrice { .. })
        ));
        assert!(matches!(
            ledger.add_item("Chaumin", Money::from_rupees(40), 0),
            Err(CoreError::InvalidQuantity { .. })
        ));

        // Failed adds never consume an id
        let item = ledger.add_item("Chaumin", Money::from_rupees(40), 1).unwrap();
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_free_item_is_allowed() {
        // Zero price is valid (promo items); only negative is refused
        let mut ledger = OrderLedger::new();
        let item = ledger.add_item("Water", Money::zero(), 2).unwrap();
        assert_eq!(item.line_total(), Money::zero());
    }

    #[test]
    fn test_remove_is_exact_and_order_preserving() {
        let mut ledger = ledger_with(&[("Chaumin", 40, 1), ("Veg Momo", 60, 1), ("Veg Roll", 40, 1)]);

        assert!(ledger.remove_item(2));

        let names: Vec<&str> = ledger.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Chaumin", "Veg Roll"]);
        let ids: Vec<u64> = ledger.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut ledger = ledger_with(&[("Chaumin", 40, 1)]);

        assert!(ledger.remove_item(1));
        assert!(!ledger.remove_item(1));
        assert!(!ledger.remove_item(99));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_clear_resets_counter_and_tax_flag() {
        let mut ledger = ledger_with(&[("Chaumin", 40, 1), ("Veg Momo", 60, 1)]);
        ledger.set_tax_enabled(false);

        ledger.clear();

        assert!(ledger.is_empty());
        assert!(ledger.tax_enabled());
        let item = ledger.add_item("Veg Burger", Money::from_rupees(30), 1).unwrap();
        assert_eq!(item.id, 1);
    }

    #[test]
    fn test_tax_toggle() {
        let mut ledger = ledger_with(&[("Chaumin", 40, 2)]);

        // Enabled (default): 5% of ₹80.00 = ₹4.00
        let totals = ledger.totals();
        assert_eq!(totals.tax.paise(), 400);
        assert_eq!(totals.grand_total.paise(), 8400);

        // Disabled: tax is zero regardless of subtotal
        ledger.set_tax_enabled(false);
        let totals = ledger.totals();
        assert_eq!(totals.tax.paise(), 0);
        assert_eq!(totals.grand_total, totals.subtotal);

        // Toggling never touched the stored items
        assert_eq!(ledger.items()[0].quantity, 2);
        assert_eq!(ledger.items()[0].unit_price.paise(), 4000);
    }

    #[test]
    fn test_empty_ledger_totals_to_zero() {
        let ledger = OrderLedger::new();
        let totals = ledger.totals();
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.tax, Money::zero());
        assert_eq!(totals.grand_total, Money::zero());
    }

    #[test]
    fn test_reference_bill() {
        // The canonical scenario: Chaumin ₹40 × 2 + Veg Momo ₹60 × 1
        let ledger = ledger_with(&[("Chaumin", 40, 2), ("Veg Momo", 60, 1)]);

        let totals = ledger.totals();
        assert_eq!(totals.subtotal.paise(), 14000); // ₹140.00
        assert_eq!(totals.tax.paise(), 700); // ₹7.00 at 5%
        assert_eq!(totals.grand_total.paise(), 14700); // ₹147.00
    }
}
