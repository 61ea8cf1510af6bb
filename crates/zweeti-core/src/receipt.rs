//! # Receipt Module
//!
//! Receipt snapshots, invoice numbers, and the plain-text receipt format.
//!
//! ## Snapshot Pattern
//! A [`Receipt`] is plain owned data copied out of the ledger at finalize
//! time. Renderers (print, text export, PDF) consume it read-only; the core
//! never hands out mutable references into ledger state.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ledger::OrderLedger;
use crate::money::{Money, TaxRate};
use crate::STORE_NAME;

// =============================================================================
// Invoice Numbers
// =============================================================================

/// Generates an invoice number for a bill finalized today.
///
/// ## Format
/// `ZWT-YYYYMMDD-NNNN` where NNNN is a random number in [1000, 9999].
///
/// Not guaranteed unique across calls - there is no collision check. For a
/// manually-reconciled single-terminal outlet that is acceptable; tests
/// assert the format, never uniqueness.
pub fn generate_invoice_number() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);
    invoice_number_for(Local::now().date_naive(), suffix)
}

/// Deterministic invoice number builder; `generate_invoice_number` supplies
/// today's date and a random suffix.
pub fn invoice_number_for(date: NaiveDate, suffix: u16) -> String {
    format!(
        "ZWT-{:04}{:02}{:02}-{:04}",
        date.year(),
        date.month(),
        date.day(),
        suffix
    )
}

// =============================================================================
// Receipt Snapshot
// =============================================================================

/// One line on a receipt, frozen at finalize time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// A finalized bill, ready for any renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub invoice_number: String,
    pub customer_name: Option<String>,
    pub date: NaiveDate,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub tax_rate: TaxRate,
    pub grand_total: Money,
}

impl Receipt {
    /// Snapshots the current ledger state into a receipt.
    ///
    /// Totals are recomputed here, through the same `totals()` path the
    /// bill display uses, so the receipt can never disagree with the screen.
    pub fn from_ledger(
        ledger: &OrderLedger,
        invoice_number: String,
        customer_name: Option<String>,
        date: NaiveDate,
    ) -> Self {
        let totals = ledger.totals();
        let lines = ledger
            .items()
            .iter()
            .map(|item| ReceiptLine {
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        Receipt {
            invoice_number,
            customer_name,
            date,
            lines,
            subtotal: totals.subtotal,
            tax: totals.tax,
            tax_rate: ledger.tax_rate(),
            grand_total: totals.grand_total,
        }
    }

    /// Renders the receipt as fixed-width plain text.
    ///
    /// This is the "Download Bill" format: 32-column header, item table,
    /// totals block, thank-you footer. The human-facing date is zero-padded
    /// (`07/03/2024`) - only the daily-totals storage key is unpadded.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push("================================".to_string());
        lines.push("       ZWEETI FAST FOOD         ".to_string());
        lines.push("     Fast Food Billing Receipt  ".to_string());
        lines.push("================================".to_string());
        lines.push(format!("Invoice: {}", self.invoice_number));
        lines.push(format!("Date: {}", self.date.format("%d/%m/%Y")));
        if let Some(customer) = &self.customer_name {
            lines.push(format!("Customer: {}", customer));
            lines.push("--------------------------------".to_string());
        }
        lines.push(String::new());
        lines.push(format!(
            "{:<20} {:>6} {:>4} {:>8}",
            "Item", "Price", "Qty", "Total"
        ));
        lines.push("--------------------------------".to_string());
        for line in &self.lines {
            lines.push(format!(
                "{:<20} {:>6} {:>4} {:>8}",
                line.name,
                line.unit_price.to_string(),
                line.quantity,
                line.line_total.to_string()
            ));
        }
        lines.push("--------------------------------".to_string());
        lines.push(format!("{:<30} {}", "Subtotal:", self.subtotal));
        lines.push(format!(
            "{:<30} {}",
            format!("GST ({}):", format_rate(self.tax_rate)),
            self.tax
        ));
        lines.push("================================".to_string());
        lines.push(format!("{:<30} {}", "GRAND TOTAL:", self.grand_total));
        lines.push("================================".to_string());
        lines.push(String::new());
        lines.push(format!("Thank you for visiting {}!", STORE_NAME));
        lines.push(format!(
            "GST @ {} included in Grand Total",
            format_rate(self.tax_rate)
        ));

        lines.join("\n")
    }
}

/// Formats a tax rate for display: `5%` rather than `5.00%` when whole.
fn format_rate(rate: TaxRate) -> String {
    let pct = rate.percentage();
    if pct.fract() == 0.0 {
        format!("{}%", pct as i64)
    } else {
        format!("{}%", pct)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
