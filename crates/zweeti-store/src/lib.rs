//! # zweeti-store: Durable Key-Value Store for Zweeti POS
//!
//! SQLite-backed persistence for the two things Zweeti POS keeps across
//! sessions: day-keyed sales totals and the login session flag.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Zweeti POS Data Flow                          │
//! │                                                                     │
//! │  finalize_bill (terminal command)                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  zweeti-store (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌─────────────────┐  │   │
//! │  │   │   Store    │   │ Repositories │   │   Migrations    │  │   │
//! │  │   │ (pool.rs)  │◄──│ kv            │   │   (embedded)    │  │   │
//! │  │   │ SqlitePool │   │ daily_totals │   │ 0001_kv_entries │  │   │
//! │  │   │            │   │ session      │   │                 │  │   │
//! │  │   └────────────┘   └──────────────┘   └─────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite file (kv_entries: key TEXT PRIMARY KEY, value TEXT)         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`kv`] - The raw string-keyed repository
//! - [`daily_totals`] - Day-keyed running sales totals
//! - [`session`] - Login session-presence flag
//! - [`error`] - Store error types

pub mod daily_totals;
pub mod error;
pub mod kv;
pub mod pool;
pub mod session;

pub use daily_totals::{date_key, DailyTotals};
pub use error::{StoreError, StoreResult};
pub use kv::KvRepository;
pub use pool::{Store, StoreConfig};
pub use session::SessionRepository;
