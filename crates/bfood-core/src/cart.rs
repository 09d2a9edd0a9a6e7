//! # Cart
//!
//! The in-memory cart reducer: (product, quantity) pairs assembled by the
//! waiter before an order is submitted.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Waiter Action            Cart Method             Cart Change           │
//! │  ─────────────            ───────────             ───────────           │
//! │                                                                         │
//! │  Tap "+" / Add ──────────► add(product) ────────► new entry (qty 1)    │
//! │                                                   or qty + 1            │
//! │                                                                         │
//! │  Tap "-" ────────────────► decrement(id) ───────► qty - 1              │
//! │                                                   or entry removed      │
//! │                                                                         │
//! │  Cancel / Confirmed ─────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Footer total ───────────► total() ─────────────► Σ price × qty        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by product id
//! - Every quantity is at least 1
//! - The total is recomputed from the items on every call, never cached

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// An entry in the cart.
///
/// Holds a copy of the product as it was when first added, so the cart keeps
/// rendering the same name and price even if the menu is refetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,

    /// Always >= 1.
    pub quantity: u32,

    /// When this product first entered the cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    fn new(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// What [`Cart::add`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended with quantity 1.
    Added,
    /// An existing entry's quantity was bumped to this value.
    Incremented { quantity: u32 },
}

/// What [`Cart::decrement`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// The entry had quantity 1 and is gone.
    Removed,
    /// The entry's quantity dropped to this value.
    Decremented { quantity: u32 },
}

// =============================================================================
// Cart
// =============================================================================

/// The waiter's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product not in cart: appended at the end with quantity 1
    /// - Product already in cart: quantity + 1, position unchanged
    ///
    /// ```rust
    /// use bfood_core::{AddOutcome, Cart, Money, Product};
    ///
    /// let burger = Product::new("b1", "Burger", Money::from_cents(2500), "c1");
    /// let mut cart = Cart::new();
    ///
    /// assert_eq!(cart.add(&burger), AddOutcome::Added);
    /// assert_eq!(cart.add(&burger), AddOutcome::Incremented { quantity: 2 });
    /// assert_eq!(cart.item_count(), 1);
    /// ```
    pub fn add(&mut self, product: &Product) -> AddOutcome {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return AddOutcome::Incremented {
                quantity: item.quantity,
            };
        }

        self.items.push(CartItem::new(product));
        AddOutcome::Added
    }

    /// Removes one unit of the product with `product_id`.
    ///
    /// ## Behavior
    /// - Quantity 1: the entry is removed
    /// - Quantity > 1: quantity - 1
    /// - Not in cart: `CoreError::ItemNotInCart`
    pub fn decrement(&mut self, product_id: &str) -> CoreResult<DecrementOutcome> {
        let index = self
            .items
            .iter()
            .position(|i| i.product.id == product_id)
            .ok_or_else(|| CoreError::ItemNotInCart(product_id.to_string()))?;

        let item = &mut self.items[index];
        if item.quantity <= 1 {
            self.items.remove(index);
            return Ok(DecrementOutcome::Removed);
        }

        item.quantity -= 1;
        Ok(DecrementOutcome::Decremented {
            quantity: item.quantity,
        })
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Quantity of `product_id` in the cart, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Σ price × quantity over all entries.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
