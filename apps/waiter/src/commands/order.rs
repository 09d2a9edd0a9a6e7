//! # Order Commands
//!
//! ## Order Submission
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  confirm                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Table selected?             no ──► TABLE_NOT_SELECTED      │    │
//! │  │  2. Cart has items?             no ──► EMPTY_CART              │    │
//! │  │  3. POST /orders { table, products: [{ product, quantity }] }  │    │
//! │  │  4. Backend said true?          no ──► ORDER_REJECTED          │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  "Order confirmed"  ── ok ──►  table and cart reset                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use bfood_api::MenuApi;
use bfood_core::Money;

use crate::error::CommandResult;
use crate::state::{OrderConfirmation, Session};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmedResponse {
    pub table: String,
    pub total_quantity: u32,
    pub total: Money,
    pub confirmed_at: DateTime<Utc>,
}

impl From<&OrderConfirmation> for OrderConfirmedResponse {
    fn from(confirmation: &OrderConfirmation) -> Self {
        OrderConfirmedResponse {
            table: confirmation.table.clone(),
            total_quantity: confirmation.total_quantity,
            total: confirmation.total,
            confirmed_at: confirmation.confirmed_at,
        }
    }
}

/// Sends the cart to the kitchen.
pub async fn confirm_order<A>(session: &mut Session, api: &A) -> CommandResult<OrderConfirmedResponse>
where
    A: MenuApi + ?Sized,
{
    debug!(
        table = ?session.table().map(|t| t.as_str()),
        items = session.cart().item_count(),
        "confirm_order command"
    );
    let confirmation = session.confirm_order(api).await?;
    Ok(OrderConfirmedResponse::from(confirmation))
}

/// "OK" on the confirmation view.
pub fn acknowledge_order(session: &mut Session) {
    debug!("acknowledge_order command");
    session.acknowledge_order();
}
