//! # Commands Module
//!
//! Everything the front end can ask the session to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports, position lookup)
//! ├── catalog.rs  ◄─── Menu load, category toggle, product detail
//! ├── cart.rs     ◄─── Add / decrement, cart view
//! ├── table.rs    ◄─── New order, table prompt, cancel
//! └── order.rs    ◄─── Confirm and acknowledge
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Terminal                                                               │
//! │  ────────                                                               │
//! │  > add 2                                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(                                           │
//! │      session: &mut Session,   ◄── Owned by the terminal loop           │
//! │      position: usize,         ◄── 1-based, as rendered                 │
//! │  ) -> CommandResult<AddToCartResponse>                                  │
//! │         │                                                               │
//! │         │ (serializable response)                                       │
//! │         ▼                                                               │
//! │  view::render_cart(...)                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that talk to the backend are generic over [`bfood_api::MenuApi`].

pub mod cart;
pub mod catalog;
pub mod order;
pub mod table;

use crate::error::{CommandError, CommandResult};

/// Resolves a 1-based list position to an element of `items`.
pub(crate) fn at_position<'a, T>(items: &'a [T], position: usize, what: &str) -> CommandResult<&'a T> {
    position
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .ok_or_else(|| CommandError::not_found(what, &format!("#{}", position)))
}
