//! # Bill Commands
//!
//! Building the current bill: add/remove lines, GST toggle, customer name.

use tracing::{debug, info};
use zweeti_core::validation::{validate_customer_name, validate_item_name, validate_quantity};
use zweeti_core::{BillTotals, LineItem, MenuCatalog};

use crate::error::{AppError, AppResult};
use crate::state::SessionState;

/// Read-only snapshot of the current bill for display.
#[derive(Debug, Clone)]
pub struct BillView {
    pub lines: Vec<LineItem>,
    pub totals: BillTotals,
    pub customer_name: Option<String>,
    pub tax_enabled: bool,
}

/// Adds a menu item to the bill.
///
/// The cashier's selection is resolved against the catalog; the ledger only
/// ever receives the resolved name and unit price.
pub fn add_item(
    session: &SessionState,
    catalog: &MenuCatalog,
    name: &str,
    quantity: i64,
) -> AppResult<LineItem> {
    debug!(name = %name, quantity, "add_item command");

    validate_item_name(name)?;
    validate_quantity(quantity)?;

    let menu_item = catalog
        .find(name)
        .ok_or_else(|| AppError::validation(format!("'{}' is not on the menu", name.trim())))?;
    let (item_name, unit_price) = (menu_item.name.clone(), menu_item.unit_price);

    let line = session.with_session_mut(|s| s.ledger.add_item(item_name, unit_price, quantity))?;

    info!(id = line.id, name = %line.name, quantity = line.quantity, "Line added");
    Ok(line)
}

/// Removes a line by id. Unknown ids are a quiet no-op.
///
/// ## Returns
/// Whether a line was found and removed.
pub fn remove_item(session: &SessionState, id: u64) -> bool {
    let removed = session.with_session_mut(|s| s.ledger.remove_item(id));
    debug!(id, removed, "remove_item command");
    removed
}

/// Toggles GST for the current bill.
pub fn set_tax_enabled(session: &SessionState, enabled: bool) {
    session.with_session_mut(|s| s.ledger.set_tax_enabled(enabled));
    info!(enabled, "GST toggled");
}

/// Sets (or clears, when blank) the customer name.
pub fn set_customer_name(session: &SessionState, raw: &str) -> AppResult<Option<String>> {
    let name = validate_customer_name(raw)?;
    session.with_session_mut(|s| s.customer_name = name.clone());
    Ok(name)
}

/// Snapshots the current bill for display.
pub fn current_bill(session: &SessionState) -> BillView {
    session.with_session(|s| BillView {
        lines: s.ledger.items().to_vec(),
        totals: s.ledger.totals(),
        customer_name: s.customer_name.clone(),
        tax_enabled: s.ledger.tax_enabled(),
    })
}

/// Discards the current bill without finalizing.
pub fn clear_bill(session: &SessionState) {
    session.with_session_mut(|s| s.reset_for_next_customer());
    info!("Bill cleared");
}

// =============================================================================
// Unit Tests
// =============================================================================
