//! # State Module
//!
//! Application state for the cashier terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     State Architecture                          │
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐   │
//! │  │ SessionState │  │  AppConfig   │  │  Store (zweeti-store)│   │
//! │  │              │  │              │  │                      │   │
//! │  │ Arc<Mutex<   │  │ store name,  │  │  SQLite pool         │   │
//! │  │  Billing     │  │ tax rate,    │  │  (daily totals,      │   │
//! │  │  Session>>   │  │ db path      │  │   session flag)      │   │
//! │  └──────────────┘  └──────────────┘  └──────────────────────┘   │
//! │                                                                 │
//! │  THREAD SAFETY:                                                 │
//! │  • SessionState: Arc<Mutex<T>> for exclusive mutation           │
//! │  • AppConfig: read-only after startup                           │
//! │  • Store: internally pooled, thread-safe                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::AppConfig;
pub use session::{BillingSession, SessionState};

use zweeti_core::MenuCatalog;
use zweeti_store::Store;

use crate::auth::AuthProvider;

/// Everything a command can touch, bundled for the terminal loop.
pub struct AppContext {
    pub config: AppConfig,
    pub session: SessionState,
    pub store: Store,
    pub catalog: MenuCatalog,
    pub auth: Box<dyn AuthProvider>,
}
