//! # zweeti-core: Pure Billing Logic for Zweeti POS
//!
//! This crate is the **heart** of Zweeti POS. It contains the billing math
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Zweeti POS Architecture                        │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Cashier Terminal (apps/terminal)           │   │
//! │  │    menu select ──► bill ──► finalize ──► receipt            │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ zweeti-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌────────┐ ┌────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐ │   │
//! │  │   │ money  │ │ ledger │ │ catalog │ │ receipt │ │validate│ │   │
//! │  │   │ Money  │ │ Order  │ │  Menu   │ │ Invoice │ │ rules  │ │   │
//! │  │   │ GST    │ │ Ledger │ │  Items  │ │ Text    │ │ checks │ │   │
//! │  │   └────────┘ └────────┘ └─────────┘ └─────────┘ └────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              zweeti-store (durable key-value store)         │   │
//! │  │          daily totals, session flag, SQLite plumbing        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money and tax-rate types with integer arithmetic (no floats!)
//! - [`ledger`] - The in-progress bill: line items, totals, GST toggle
//! - [`catalog`] - The static menu the cashier picks from
//! - [`receipt`] - Receipt snapshots, invoice numbers, plain-text rendering
//! - [`validation`] - Caller-side input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: totals are recomputed from state, never cached
//! 2. **No I/O**: persistence lives in zweeti-store, display in the app
//! 3. **Integer Money**: all amounts are paise (i64) to avoid float errors
//! 4. **Explicit Errors**: typed errors via thiserror, never strings or panics

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod receipt;
pub mod validation;

pub use catalog::{MenuCatalog, MenuItem};
pub use error::{CoreError, ValidationError};
pub use ledger::{BillTotals, LineItem, OrderLedger};
pub use money::{Money, TaxRate};
pub use receipt::{generate_invoice_number, Receipt, ReceiptLine};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// GST rate applied to every bill, in basis points (500 = 5%).
///
/// The outlet runs a single flat rate; per-item rates are not a thing here.
/// The cashier can only toggle tax on or off for the whole bill.
pub const DEFAULT_TAX_RATE_BPS: u32 = 500;

/// Maximum quantity a cashier can enter for a single line.
///
/// Caller-side guard against fat-finger entries (1000 instead of 10).
/// The ledger itself only requires quantity to be positive.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Store name printed on receipt headers.
pub const STORE_NAME: &str = "Zweeti Fast Food";
