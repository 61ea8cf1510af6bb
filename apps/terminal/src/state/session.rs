//! # Billing Session State
//!
//! The mutable state of one customer's bill: the order ledger plus the
//! session-scoped extras that live beside it (customer name, the last
//! finalized receipt kept around for export).
//!
//! ## Thread Safety
//! Wrapped in `Arc<Mutex<T>>`: commands are invoked one at a time from the
//! terminal loop, but background tasks (tracing, future timers) share the
//! runtime, and the lock keeps every mutation exclusive either way.

use std::sync::{Arc, Mutex};

use zweeti_core::{OrderLedger, Receipt, TaxRate};

/// One customer's in-progress bill and its session extras.
#[derive(Debug)]
pub struct BillingSession {
    /// The in-progress bill.
    pub ledger: OrderLedger,

    /// Optional customer name for the receipt header.
    pub customer_name: Option<String>,

    /// The most recently finalized receipt, for `export`.
    pub last_receipt: Option<Receipt>,
}

impl BillingSession {
    /// Creates a fresh session with an empty ledger.
    pub fn new(tax_rate: TaxRate) -> Self {
        BillingSession {
            ledger: OrderLedger::with_tax_rate(tax_rate),
            customer_name: None,
            last_receipt: None,
        }
    }

    /// Resets for the next customer: ledger cleared (ids restart at 1),
    /// customer name dropped. The last receipt is kept until the next
    /// finalize so it can still be exported.
    pub fn reset_for_next_customer(&mut self) {
        self.ledger.clear();
        self.customer_name = None;
    }
}

/// Shared handle to the billing session.
#[derive(Debug, Clone)]
pub struct SessionState {
    inner: Arc<Mutex<BillingSession>>,
}

impl SessionState {
    /// Creates a new session state with an empty bill.
    pub fn new(tax_rate: TaxRate) -> Self {
        SessionState {
            inner: Arc::new(Mutex::new(BillingSession::new(tax_rate))),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillingSession) -> R,
    {
        let session = self.inner.lock().expect("session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillingSession) -> R,
    {
        let mut session = self.inner.lock().expect("session mutex poisoned");
        f(&mut session)
    }
}
