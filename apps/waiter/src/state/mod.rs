//! # State Module
//!
//! What the waiter app keeps in memory between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐            ┌──────────────────────────────────┐  │
//! │  │   WaiterConfig   │            │            Session               │  │
//! │  │                  │            │                                  │  │
//! │  │  • api (URL,     │            │  • categories / products         │  │
//! │  │    uploads,      │            │  • category filter               │  │
//! │  │    timeout)      │            │  • cart (bfood-core)             │  │
//! │  │  • display       │            │  • table + table prompt          │  │
//! │  │    (currency)    │            │  • product detail / confirmation │  │
//! │  │                  │            │  • loading / submitting flags    │  │
//! │  └──────────────────┘            └──────────────────────────────────┘  │
//! │                                                                         │
//! │  WaiterConfig: read-only after startup                                 │
//! │  Session: owned by the terminal loop, mutated through &mut             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, DisplaySettings, WaiterConfig};
pub use session::{
    AddToCart, OrderConfirmation, Session, SessionError, SessionResult, TablePrompt,
};
