//! # Commands Module
//!
//! The operations the terminal loop can invoke. Each command validates its
//! input (caller-side, before any ledger call), performs exactly one piece
//! of work, and returns a typed result the loop renders.

pub mod bill;
pub mod checkout;
pub mod login;
pub mod totals;
