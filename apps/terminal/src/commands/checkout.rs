//! # Checkout Commands
//!
//! Finalizing the bill and exporting the receipt.
//!
//! ## Finalize Flow
//! ```text
//! finalize_bill
//!      │
//!      ├── empty bill? → error, session untouched
//!      │
//!      ├── snapshot ledger → Receipt (invoice number, today's date)
//!      │
//!      ├── reset session for the next customer (ids restart at 1)
//!      │
//!      └── fold grand total into today's daily total (durable write)
//! ```
//!
//! The daily-total write happens after the in-memory reset; a crash in
//! between loses that one increment, which is the accepted trade-off for a
//! local single-terminal tool.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;
use zweeti_core::{generate_invoice_number, Receipt};
use zweeti_store::Store;

use crate::error::{AppError, AppResult};
use crate::state::SessionState;

/// Finalizes the current bill.
///
/// Produces the receipt snapshot, folds the grand total into today's daily
/// total, and resets the session for the next customer.
pub async fn finalize_bill(session: &SessionState, store: &Store) -> AppResult<Receipt> {
    let receipt = session.with_session_mut(|s| {
        if s.ledger.is_empty() {
            return Err(AppError::business("cannot finalize an empty bill"));
        }

        let receipt = Receipt::from_ledger(
            &s.ledger,
            generate_invoice_number(),
            s.customer_name.clone(),
            Local::now().date_naive(),
        );
        s.last_receipt = Some(receipt.clone());
        s.reset_for_next_customer();
        Ok(receipt)
    })?;

    // The repository skips non-positive totals on its own.
    store
        .daily_totals()
        .record_finalized_bill(receipt.grand_total, receipt.date)
        .await?;

    info!(
        invoice = %receipt.invoice_number,
        grand_total = receipt.grand_total.paise(),
        lines = receipt.lines.len(),
        "Bill finalized"
    );

    Ok(receipt)
}

/// Writes the last finalized receipt to a text file in `dir`.
///
/// ## Returns
/// The path of the written file, named after the invoice number.
pub fn export_receipt(session: &SessionState, dir: &Path) -> AppResult<PathBuf> {
    let receipt = session
        .with_session(|s| s.last_receipt.clone())
        .ok_or_else(|| AppError::business("no finalized bill to export"))?;

    let path = dir.join(format!("zweeti-bill-{}.txt", receipt.invoice_number));
    std::fs::write(&path, receipt.render_text())?;

    info!(path = %path.display(), "Receipt exported");
    Ok(path)
}

// =============================================================================
// Unit Tests
// =============================================================================
