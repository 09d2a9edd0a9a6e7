//! # Order Assembly
//!
//! Builds the `POST /orders` body from the cart at submission time.
//!
//! ## Wire Shape
//! ```json
//! {
//!   "table": "12",
//!   "products": [
//!     { "product": "6372e48cbcd195b0d3d0f7f3", "quantity": 2 },
//!     { "product": "6372e5a8bcd195b0d3d0f7fa", "quantity": 1 }
//!   ]
//! }
//! ```
//!
//! An `Order` is built once and handed to the API client. The client keeps
//! no copy after submission.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::Table;

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Product id.
    pub product: String,
    pub quantity: u32,
}

/// An order ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub table: String,
    pub products: Vec<OrderLine>,
}

impl Order {
    /// Builds an order from the cart, preserving cart order.
    ///
    /// ## Errors
    /// - `CoreError::EmptyCart` if there is nothing to order
    pub fn from_cart(table: &Table, cart: &Cart) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let products = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product: item.product.id.clone(),
                quantity: item.quantity,
            })
            .collect();

        Ok(Order {
            table: table.as_str().to_string(),
            products,
        })
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> u32 {
        self.products.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;

    #[test]
    fn test_from_cart_builds_wire_body() {
        let mut cart = Cart::new();
        let pizza = Product::new("pizza-1", "Pizza", Money::from_cents(4000), "c1");
        let soda = Product::new("soda-1", "Soda", Money::from_cents(700), "c2");
        cart.add(&pizza);
        cart.add(&soda);
        cart.add(&pizza);

        let table = Table::parse("12").unwrap();
        let order = Order::from_cart(&table, &cart).unwrap();

        assert_eq!(order.total_quantity(), 3);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "table": "12",
                "products": [
                    { "product": "pizza-1", "quantity": 2 },
                    { "product": "soda-1", "quantity": 1 }
                ]
            })
        );
    }

    #[test]
    fn test_from_empty_cart_fails() {
        let table = Table::parse("3").unwrap();
        assert_eq!(
            Order::from_cart(&table, &Cart::new()),
            Err(CoreError::EmptyCart)
        );
    }
}
