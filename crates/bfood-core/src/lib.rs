//! # bfood-core: Pure Ordering Logic for the BFOOD Waiter
//!
//! This crate holds everything the waiter client decides on its own, as pure
//! functions and plain data with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BFOOD Waiter Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/waiter (Session + Views)                   │   │
//! │  │    Header ──► Categories ──► Menu ──► Cart ──► Table prompt     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bfood-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Category │  │   │
//! │  │   │  Category │  │           │  │ CartItem  │  │  Filter   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   order   │  │validation │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bfood-api (REST client)                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire-level domain types (Product, Category, Table)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart reducer
//! - [`catalog`] - Category filter toggling
//! - [`order`] - Order assembly from a cart
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bfood_core::{Cart, Money, Product};
//!
//! let pizza = Product::new("p1", "Pizza", Money::from_cents(1000), "cat-1");
//! let soda = Product::new("p2", "Soda", Money::from_cents(500), "cat-2");
//!
//! let mut cart = Cart::new();
//! cart.add(&pizza);
//! cart.add(&pizza);
//! cart.add(&soda);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().cents(), 2500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{AddOutcome, Cart, CartItem, DecrementOutcome};
pub use catalog::{CategoryFilter, ProductQuery};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest table identifier accepted by the table prompt.
///
/// Table labels are short ("12", "T4", "Terrace 3"); anything longer is a
/// typo or a pasted string.
pub const MAX_TABLE_LENGTH: usize = 32;
