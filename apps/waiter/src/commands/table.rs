//! # Table Commands
//!
//! Starting an order, the table prompt and cancelling.

use serde::Serialize;
use tracing::debug;

use crate::error::CommandResult;
use crate::state::Session;

/// Header and table prompt state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    /// `None` shows the welcome banner.
    pub table: Option<String>,
    pub prompt_visible: bool,
    pub new_order_enabled: bool,
}

impl From<&Session> for TableResponse {
    fn from(session: &Session) -> Self {
        TableResponse {
            table: session.table().map(|t| t.to_string()),
            prompt_visible: session.table_prompt().visible,
            new_order_enabled: !session.is_loading() && session.table().is_none(),
        }
    }
}

pub fn get_table(session: &Session) -> TableResponse {
    TableResponse::from(session)
}

/// "New order": opens the table prompt. Disabled while the menu loads or
/// while an order is already open for a table.
pub fn new_order(session: &mut Session) -> CommandResult<TableResponse> {
    debug!("new_order command");
    session.new_order()?;
    Ok(TableResponse::from(&*session))
}

pub fn save_table(session: &mut Session, input: &str) -> CommandResult<TableResponse> {
    debug!(input = %input, "save_table command");
    session.save_table(input)?;
    Ok(TableResponse::from(&*session))
}

pub fn close_table_prompt(session: &mut Session) -> TableResponse {
    debug!("close_table_prompt command");
    session.close_table_prompt();
    TableResponse::from(&*session)
}

/// Header "cancel order": forgets the table and empties the cart.
pub fn cancel_order(session: &mut Session) -> CommandResult<TableResponse> {
    debug!("cancel_order command");
    session.cancel_order()?;
    Ok(TableResponse::from(&*session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::commands::catalog::load_menu;
    use crate::error::ErrorCode;
    use crate::testing::{menu, FakeApi};

    #[test]
    fn test_new_order_disabled_while_loading() {
        let mut session = Session::new();
        assert!(!get_table(&session).new_order_enabled);

        let err = new_order(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::Busy);
    }

    #[tokio::test]
    async fn test_prompt_flow() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();

        let response = new_order(&mut session).unwrap();
        assert!(response.prompt_visible);
        assert_eq!(response.table, None);

        let err = save_table(&mut session, "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_table(&session).prompt_visible);

        let response = save_table(&mut session, " 12 ").unwrap();
        assert_eq!(response.table.as_deref(), Some("12"));
        assert!(!response.prompt_visible);
        assert!(!response.new_order_enabled);
    }

    #[tokio::test]
    async fn test_new_order_refused_while_table_set() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();
        save_table(&mut session, "4").unwrap();
        add_to_cart(&mut session, 1).unwrap();

        let err = new_order(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInProgress);
        assert_eq!(err.message, "Table 4 already has an open order; cancel it first");
        assert!(!get_table(&session).prompt_visible);

        let err = save_table(&mut session, "9").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInProgress);
        let cart = get_cart(&session);
        assert_eq!(cart.table.as_deref(), Some("4"));
        assert_eq!(cart.items.len(), 1);
    }

    #[tokio::test]
    async fn test_close_prompt_keeps_cart() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();
        add_to_cart(&mut session, 1).unwrap();

        let response = close_table_prompt(&mut session);
        assert!(!response.prompt_visible);
        assert_eq!(get_cart(&session).items.len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_order() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();
        save_table(&mut session, "4").unwrap();
        add_to_cart(&mut session, 1).unwrap();

        let response = cancel_order(&mut session).unwrap();
        assert_eq!(response.table, None);
        assert!(get_cart(&session).items.is_empty());
    }
}
