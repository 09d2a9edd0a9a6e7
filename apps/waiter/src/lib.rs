//! # BFOOD Waiter Library
//!
//! The waiter's ordering client: browse the menu, build a cart, send it to
//! the kitchen for a table.
//!
//! ## Module Organization
//! ```text
//! waiter/
//! ├── lib.rs          ◄─── You are here (module exports, logging setup)
//! ├── main.rs         ◄─── Binary: config → client → terminal
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── waiter.toml + BFOOD_* environment
//! │   └── session.rs  ◄─── Menu, cart, table, loading flags
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Menu load, category toggle, product detail
//! │   ├── cart.rs     ◄─── Add / decrement, cart view
//! │   ├── table.rs    ◄─── New order, table prompt, cancel
//! │   └── order.rs    ◄─── Confirm and acknowledge
//! ├── view.rs         ◄─── Text rendering of command responses
//! ├── terminal.rs     ◄─── stdin/stdout read-eval loop
//! └── error.rs        ◄─── Command error type
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod terminal;
pub mod view;

#[cfg(test)]
mod testing;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they do not interleave with the terminal views.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bfood_api=trace` - Trace the HTTP client only
/// - Default: `info`, with `debug` for the BFOOD crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,bfood_core=debug,bfood_api=debug,waiter=debug,reqwest=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
