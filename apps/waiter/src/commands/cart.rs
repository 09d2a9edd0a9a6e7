//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Sending  │────►│ Confirmed│       │
//! │  │  Cart    │     │          │     │          │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │           confirm_order         │             │
//! │                   add_to_cart        (order.rs)     acknowledge        │
//! │                   decrement                              │             │
//! │                        │                                 │             │
//! │                        ▼                                 ▼             │
//! │                   cancel_order ──────────────────► (back to empty)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use bfood_core::{AddOutcome, CartItem, DecrementOutcome, Money, Product};

use super::at_position;
use crate::error::{CommandError, CommandResult};
use crate::state::Session;

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub position: usize,
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl CartLine {
    fn new(position: usize, item: &CartItem) -> Self {
        CartLine {
            position,
            product_id: item.product_id().to_string(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            unit_price: item.product.price(),
            line_total: item.line_total(),
        }
    }
}

/// Cart lines, totals and the state of the confirm control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub table: Option<String>,
    pub items: Vec<CartLine>,
    pub total_quantity: u32,
    pub total: Money,
    pub can_confirm: bool,
    pub is_submitting: bool,
}

impl From<&Session> for CartResponse {
    fn from(session: &Session) -> Self {
        let cart = session.cart();
        CartResponse {
            table: session.table().map(|t| t.to_string()),
            items: cart
                .items()
                .iter()
                .enumerate()
                .map(|(i, item)| CartLine::new(i + 1, item))
                .collect(),
            total_quantity: cart.total_quantity(),
            total: session.total(),
            can_confirm: session.can_confirm(),
            is_submitting: session.is_submitting(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub product_name: String,
    pub quantity: u32,
    /// The add opened the table prompt because no table is selected yet.
    pub table_prompt_opened: bool,
    pub cart: CartResponse,
}

// =============================================================================
// Commands
// =============================================================================

pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session)
}

/// Adds one unit of the product at `position` in the menu listing.
pub fn add_to_cart(session: &mut Session, position: usize) -> CommandResult<AddToCartResponse> {
    let product = at_position(session.products(), position, "Product")?.clone();
    debug!(position, product_id = %product.id, "add_to_cart command");

    added(session, &product)
}

/// "Add to order" from the product detail view; closes the view.
pub fn add_shown_product(session: &mut Session) -> CommandResult<AddToCartResponse> {
    let product = session
        .product_detail()
        .cloned()
        .ok_or_else(|| CommandError::validation("No product is open"))?;
    debug!(product_id = %product.id, "add_shown_product command");

    let response = added(session, &product)?;
    session.close_product();
    Ok(response)
}

fn added(session: &mut Session, product: &Product) -> CommandResult<AddToCartResponse> {
    let result = session.add_to_cart(product)?;
    let quantity = match result.outcome {
        AddOutcome::Added => 1,
        AddOutcome::Incremented { quantity } => quantity,
    };

    Ok(AddToCartResponse {
        product_name: product.name.clone(),
        quantity,
        table_prompt_opened: result.table_prompt_opened,
        cart: CartResponse::from(&*session),
    })
}

/// Removes one unit of the cart line at `position`.
///
/// A line at quantity 1 disappears, shifting later positions up.
pub fn decrement_cart_item(session: &mut Session, position: usize) -> CommandResult<CartResponse> {
    let product_id = at_position(session.cart().items(), position, "Cart item")?
        .product_id()
        .to_string();
    debug!(position, product_id = %product_id, "decrement_cart_item command");

    match session.decrement(&product_id)? {
        DecrementOutcome::Removed => debug!(product_id = %product_id, "Removed from cart"),
        DecrementOutcome::Decremented { quantity } => {
            debug!(product_id = %product_id, quantity, "Quantity lowered")
        }
    }
    Ok(CartResponse::from(&*session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::{load_menu, show_product};
    use crate::error::ErrorCode;
    use crate::testing::{menu, FakeApi};

    async fn ready_session(api: &FakeApi) -> Session {
        let mut session = Session::new();
        load_menu(&mut session, api).await.unwrap();
        session.save_table("7").unwrap();
        session
    }

    #[tokio::test]
    async fn test_add_merges_and_totals() {
        let api = FakeApi::new(menu());
        let mut session = ready_session(&api).await;

        add_to_cart(&mut session, 1).unwrap();
        let response = add_to_cart(&mut session, 1).unwrap();
        assert_eq!(response.quantity, 2);
        assert!(!response.table_prompt_opened);

        let response = add_to_cart(&mut session, 3).unwrap();
        let cart = response.cart;
        assert_eq!(cart.table.as_deref(), Some("7"));
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].line_total, Money::from_cents(8000));
        assert_eq!(cart.total, Money::from_cents(8750));
        assert_eq!(cart.total_quantity, 3);
        assert!(cart.can_confirm);
    }

    #[tokio::test]
    async fn test_add_without_table_reports_prompt() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();

        let response = add_to_cart(&mut session, 2).unwrap();
        assert!(response.table_prompt_opened);
        assert!(!response.cart.can_confirm);
        assert!(session.table_prompt().visible);
    }

    #[tokio::test]
    async fn test_decrement_by_cart_position() {
        let api = FakeApi::new(menu());
        let mut session = ready_session(&api).await;
        add_to_cart(&mut session, 1).unwrap();
        add_to_cart(&mut session, 3).unwrap();
        add_to_cart(&mut session, 3).unwrap();

        let cart = decrement_cart_item(&mut session, 2).unwrap();
        assert_eq!(cart.items[1].quantity, 1);

        let cart = decrement_cart_item(&mut session, 1).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, "soda");
        assert_eq!(cart.items[0].position, 1);

        let err = decrement_cart_item(&mut session, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_add_shown_product_closes_detail() {
        let api = FakeApi::new(menu());
        let mut session = ready_session(&api).await;

        assert!(add_shown_product(&mut session).is_err());

        show_product(&mut session, &api, 2).unwrap();
        let response = add_shown_product(&mut session).unwrap();
        assert_eq!(response.product_name, "Calzone");
        assert!(session.product_detail().is_none());
        assert_eq!(get_cart(&session).items.len(), 1);
    }
}
