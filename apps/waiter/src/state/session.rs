//! # Session State
//!
//! The waiter's screen state: fetched menu, cart, selected table, and the
//! flags that drive which view is showing.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐  load()   ┌──────────┐ save_table() ┌──────────────────┐ │
//! │  │ Loading  │──────────►│  Browse  │─────────────►│ Ordering (table) │ │
//! │  └──────────┘           │ (no table│              │  add / decrement │ │
//! │                         │  selected)│◄─────────────│                  │ │
//! │                         └──────────┘ cancel_order()└────────┬─────────┘ │
//! │                              ▲                              │           │
//! │                              │ acknowledge_order()    confirm_order()  │
//! │                              │                              ▼           │
//! │                              │                     ┌──────────────────┐ │
//! │                              └─────────────────────│ Order confirmed  │ │
//! │                                                    └──────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is owned by one task and mutated through `&mut self`. Network
//! calls go through a [`MenuApi`] so tests can substitute an in-memory fake.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use bfood_api::{ClientError, MenuApi};
use bfood_core::{
    AddOutcome, Cart, Category, CategoryFilter, CoreError, DecrementOutcome, Money, Order,
    Product, ProductQuery, Table, ValidationError,
};

// =============================================================================
// Session Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    /// The action is disabled while a request is running.
    #[error("Please wait: {0}")]
    Busy(&'static str),

    /// The backend answered `false` to the order submission.
    #[error("The order for table {0} was not accepted")]
    OrderRejected(String),

    /// A table is already selected; the current order must be cancelled first.
    #[error("Table {0} already has an open order")]
    OrderInProgress(String),
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Core(err.into())
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Views Owned by the Session
// =============================================================================

/// The table prompt ("which table is this order for?").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePrompt {
    pub visible: bool,
}

/// Shown after the backend accepted an order, until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub table: String,
    pub total_quantity: u32,
    pub total: Money,
    pub confirmed_at: DateTime<Utc>,
}

/// Result of [`Session::add_to_cart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddToCart {
    pub outcome: AddOutcome,
    /// True if this add opened the table prompt because no table was set.
    pub table_prompt_opened: bool,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug)]
pub struct Session {
    categories: Vec<Category>,
    products: Vec<Product>,
    filter: CategoryFilter,
    cart: Cart,
    table: Option<Table>,
    table_prompt: TablePrompt,
    product_detail: Option<Product>,
    confirmation: Option<OrderConfirmation>,
    is_loading: bool,
    is_loading_products: bool,
    is_submitting: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session. Starts in the loading state until [`Session::load`].
    pub fn new() -> Self {
        Session {
            categories: Vec::new(),
            products: Vec::new(),
            filter: CategoryFilter::new(),
            cart: Cart::new(),
            table: None,
            table_prompt: TablePrompt::default(),
            product_detail: None,
            confirmation: None,
            is_loading: true,
            is_loading_products: false,
            is_submitting: false,
        }
    }

    // =========================================================================
    // Menu
    // =========================================================================

    /// Fetches categories and all products concurrently.
    ///
    /// The loading flag is cleared whether or not the fetch succeeds.
    pub async fn load<A>(&mut self, api: &A) -> SessionResult<()>
    where
        A: MenuApi + ?Sized,
    {
        self.is_loading = true;
        let result = tokio::try_join!(api.list_categories(), api.list_products());
        self.is_loading = false;

        let (categories, products) = result.inspect_err(|e| {
            warn!(error = %e, "Initial menu load failed");
        })?;

        info!(
            categories = categories.len(),
            products = products.len(),
            "Menu loaded"
        );
        self.categories = categories;
        self.products = products;
        self.filter.clear();
        Ok(())
    }

    /// Taps a category and refetches the matching products.
    ///
    /// Re-tapping the selected category goes back to the full listing.
    pub async fn select_category<A>(&mut self, api: &A, category_id: &str) -> SessionResult<ProductQuery>
    where
        A: MenuApi + ?Sized,
    {
        let query = self.filter.toggle(category_id);
        debug!(?query, "Category filter changed");

        self.is_loading_products = true;
        let result = match &query {
            ProductQuery::All => api.list_products().await,
            ProductQuery::ByCategory(id) => api.list_products_by_category(id).await,
        };
        self.is_loading_products = false;

        self.products = result.inspect_err(|e| {
            warn!(error = %e, "Product fetch failed");
        })?;
        Ok(query)
    }

    /// Opens the detail view for a product in the current listing.
    pub fn show_product(&mut self, product_id: &str) -> SessionResult<&Product> {
        let product = self
            .find_product(product_id)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
        Ok(&*self.product_detail.insert(product))
    }

    pub fn close_product(&mut self) {
        self.product_detail = None;
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of `product`.
    ///
    /// Without a selected table this also opens the table prompt; the add
    /// still happens.
    pub fn add_to_cart(&mut self, product: &Product) -> SessionResult<AddToCart> {
        self.ensure_no_pending_confirmation()?;

        let table_prompt_opened = self.table.is_none();
        if table_prompt_opened {
            self.open_table_prompt();
        }

        let outcome = self.cart.add(product);
        debug!(product_id = %product.id, ?outcome, "Added to cart");

        Ok(AddToCart {
            outcome,
            table_prompt_opened,
        })
    }

    pub fn decrement(&mut self, product_id: &str) -> SessionResult<DecrementOutcome> {
        self.ensure_no_pending_confirmation()?;
        let outcome = self.cart.decrement(product_id)?;
        debug!(product_id = %product_id, ?outcome, "Decremented cart item");
        Ok(outcome)
    }

    /// Cart total, recomputed from the items on every call.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    // =========================================================================
    // Table
    // =========================================================================

    /// "New order": only offered while no table is selected, and disabled
    /// until the menu has loaded.
    pub fn new_order(&mut self) -> SessionResult<()> {
        if self.is_loading {
            return Err(SessionError::Busy("the menu is still loading"));
        }
        self.ensure_no_open_table()?;
        self.open_table_prompt();
        Ok(())
    }

    pub fn open_table_prompt(&mut self) {
        self.table_prompt.visible = true;
    }

    /// Saves the table typed into the prompt and closes it.
    ///
    /// An order already running for a table keeps that table until it is
    /// cancelled or acknowledged.
    pub fn save_table(&mut self, input: &str) -> SessionResult<&Table> {
        self.ensure_no_open_table()?;
        let table = Table::parse(input)?;
        info!(table = %table, "Table selected");

        self.table_prompt = TablePrompt::default();
        Ok(&*self.table.insert(table))
    }

    pub fn close_table_prompt(&mut self) {
        self.table_prompt.visible = false;
    }

    /// Header "cancel order": forgets the table and empties the cart.
    pub fn cancel_order(&mut self) -> SessionResult<()> {
        self.ensure_no_pending_confirmation()?;
        if let Some(table) = &self.table {
            info!(table = %table, items = self.cart.item_count(), "Order cancelled");
        }
        self.reset_order();
        Ok(())
    }

    fn reset_order(&mut self) {
        self.table = None;
        self.cart.clear();
    }

    fn ensure_no_open_table(&self) -> SessionResult<()> {
        match &self.table {
            Some(table) => Err(SessionError::OrderInProgress(table.to_string())),
            None => Ok(()),
        }
    }

    /// The confirmation view blocks everything except acknowledging it.
    fn ensure_no_pending_confirmation(&self) -> SessionResult<()> {
        if self.confirmation.is_some() {
            return Err(SessionError::Busy("the order confirmation is still open"));
        }
        Ok(())
    }

    // =========================================================================
    // Order Submission
    // =========================================================================

    /// Submits the cart as an order for the selected table.
    ///
    /// ## Errors
    /// - `Busy` while a previous submission is still running
    /// - `TableNotSelected` / `EmptyCart` from the order rules
    /// - `Client` if the request fails (cart and table are kept)
    /// - `OrderRejected` if the backend answers `false`
    pub async fn confirm_order<A>(&mut self, api: &A) -> SessionResult<&OrderConfirmation>
    where
        A: MenuApi + ?Sized,
    {
        if self.is_submitting {
            return Err(SessionError::Busy("the order is already being sent"));
        }
        self.ensure_no_pending_confirmation()?;

        let table = self.table.as_ref().ok_or(CoreError::TableNotSelected)?;
        let order = Order::from_cart(table, &self.cart)?;

        self.is_submitting = true;
        let result = api.submit_order(&order).await;
        self.is_submitting = false;

        if !result? {
            return Err(SessionError::OrderRejected(order.table));
        }

        info!(table = %order.table, "Order confirmed");
        Ok(&*self.confirmation.insert(OrderConfirmation {
            table: order.table.clone(),
            total_quantity: order.total_quantity(),
            total: self.cart.total(),
            confirmed_at: Utc::now(),
        }))
    }

    /// "OK" on the confirmation: resets table and cart for the next order.
    pub fn acknowledge_order(&mut self) {
        if let Some(confirmation) = self.confirmation.take() {
            debug!(table = %confirmation.table, "Order confirmation acknowledged");
        }
        self.reset_order();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn table_prompt(&self) -> &TablePrompt {
        &self.table_prompt
    }

    pub fn product_detail(&self) -> Option<&Product> {
        self.product_detail.as_ref()
    }

    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_loading_products(&self) -> bool {
        self.is_loading_products
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Confirm is enabled with a table, a non-empty cart and no request running.
    pub fn can_confirm(&self) -> bool {
        self.table.is_some()
            && !self.cart.is_empty()
            && !self.is_submitting
            && self.confirmation.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{menu, FakeApi};

    async fn loaded_session(api: &FakeApi) -> Session {
        let mut session = Session::new();
        session.load(api).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_load_fetches_categories_and_products() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        assert!(session.is_loading());

        session.load(&api).await.unwrap();

        assert!(!session.is_loading());
        assert_eq!(session.categories().len(), 2);
        assert_eq!(session.products().len(), 3);
    }

    #[tokio::test]
    async fn test_load_failure_clears_loading_flag() {
        let api = FakeApi::new(menu()).failing();
        let mut session = Session::new();

        let err = session.load(&api).await.unwrap_err();
        assert!(matches!(err, SessionError::Client(_)));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_select_then_reselect_restores_all_products() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;

        let query = session.select_category(&api, "drinks").await.unwrap();
        assert_eq!(query, ProductQuery::ByCategory("drinks".to_string()));
        assert_eq!(session.products().len(), 1);

        let query = session.select_category(&api, "drinks").await.unwrap();
        assert_eq!(query, ProductQuery::All);
        assert_eq!(session.products().len(), 3);
        assert_eq!(
            api.calls(),
            vec![
                "GET /categories",
                "GET /products",
                "GET /categories/drinks/products",
                "GET /products"
            ]
        );
    }

    #[tokio::test]
    async fn test_add_without_table_opens_prompt_and_still_adds() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        let pizza = session.find_product("pizza").cloned().unwrap();

        let result = session.add_to_cart(&pizza).unwrap();

        assert!(result.table_prompt_opened);
        assert_eq!(result.outcome, AddOutcome::Added);
        assert!(session.table_prompt().visible);
        assert_eq!(session.cart().quantity_of("pizza"), 1);
    }

    #[tokio::test]
    async fn test_add_with_table_does_not_prompt() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.save_table("5").unwrap();
        let pizza = session.find_product("pizza").cloned().unwrap();

        let first = session.add_to_cart(&pizza).unwrap();
        let second = session.add_to_cart(&pizza).unwrap();

        assert!(!first.table_prompt_opened);
        assert_eq!(second.outcome, AddOutcome::Incremented { quantity: 2 });
        assert!(!session.table_prompt().visible);
        assert_eq!(session.cart().item_count(), 1);
    }

    #[tokio::test]
    async fn test_save_table_validates_and_resets_prompt() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.new_order().unwrap();

        assert!(session.save_table("  ").is_err());
        assert!(session.table().is_none());
        assert!(session.table_prompt().visible);

        assert_eq!(session.save_table("12").unwrap().as_str(), "12");
        assert_eq!(session.table_prompt(), &TablePrompt::default());
    }

    #[test]
    fn test_new_order_disabled_while_loading() {
        let mut session = Session::new();
        assert!(matches!(session.new_order(), Err(SessionError::Busy(_))));
        assert!(!session.table_prompt().visible);
    }

    #[tokio::test]
    async fn test_cancel_order_clears_table_and_cart() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.save_table("3").unwrap();
        let soda = session.find_product("soda").cloned().unwrap();
        session.add_to_cart(&soda).unwrap();

        session.cancel_order().unwrap();

        assert!(session.table().is_none());
        assert!(session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_order_submits_and_acknowledge_resets() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.save_table("9").unwrap();
        let pizza = session.find_product("pizza").cloned().unwrap();
        let soda = session.find_product("soda").cloned().unwrap();
        session.add_to_cart(&pizza).unwrap();
        session.add_to_cart(&pizza).unwrap();
        session.add_to_cart(&soda).unwrap();

        let confirmation = session.confirm_order(&api).await.unwrap().clone();
        assert_eq!(confirmation.table, "9");
        assert_eq!(confirmation.total_quantity, 3);
        assert_eq!(confirmation.total, Money::from_cents(2 * 4000 + 750));
        assert!(!session.is_submitting());

        let orders = api.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].table, "9");
        assert_eq!(orders[0].products[0].product, "pizza");
        assert_eq!(orders[0].products[0].quantity, 2);

        // Cart is kept until the waiter acknowledges
        assert!(!session.cart().is_empty());
        session.acknowledge_order();
        assert!(session.confirmation().is_none());
        assert!(session.cart().is_empty());
        assert!(session.table().is_none());
    }

    #[tokio::test]
    async fn test_confirm_requires_table_and_items() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;

        let err = session.confirm_order(&api).await.unwrap_err();
        assert!(matches!(err, SessionError::Core(CoreError::TableNotSelected)));

        session.save_table("1").unwrap();
        let err = session.confirm_order(&api).await.unwrap_err();
        assert!(matches!(err, SessionError::Core(CoreError::EmptyCart)));
        assert!(api.orders().is_empty());
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_cart() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.save_table("1").unwrap();
        let soda = session.find_product("soda").cloned().unwrap();
        session.add_to_cart(&soda).unwrap();

        let api = api.failing();
        let err = session.confirm_order(&api).await.unwrap_err();

        assert!(matches!(err, SessionError::Client(_)));
        assert!(!session.is_submitting());
        assert_eq!(session.cart().quantity_of("soda"), 1);
        assert!(session.confirmation().is_none());
    }

    #[tokio::test]
    async fn test_rejected_order() {
        let api = FakeApi::new(menu()).rejecting_orders();
        let mut session = loaded_session(&api).await;
        session.save_table("2").unwrap();
        let soda = session.find_product("soda").cloned().unwrap();
        session.add_to_cart(&soda).unwrap();

        let err = session.confirm_order(&api).await.unwrap_err();
        assert!(matches!(err, SessionError::OrderRejected(ref t) if t == "2"));
        assert!(!session.cart().is_empty());
    }

    #[tokio::test]
    async fn test_new_order_and_table_change_refused_while_table_set() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.save_table("4").unwrap();
        let soda = session.find_product("soda").cloned().unwrap();
        session.add_to_cart(&soda).unwrap();

        let err = session.new_order().unwrap_err();
        assert!(matches!(err, SessionError::OrderInProgress(ref t) if t == "4"));
        assert!(!session.table_prompt().visible);

        let err = session.save_table("7").unwrap_err();
        assert!(matches!(err, SessionError::OrderInProgress(_)));
        assert_eq!(session.table().unwrap().as_str(), "4");
        assert_eq!(session.cart().quantity_of("soda"), 1);

        // After cancelling, a new table can be chosen
        session.cancel_order().unwrap();
        session.new_order().unwrap();
        assert_eq!(session.save_table("7").unwrap().as_str(), "7");
    }

    #[tokio::test]
    async fn test_pending_confirmation_blocks_changes_until_acknowledged() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;
        session.save_table("6").unwrap();
        let pizza = session.find_product("pizza").cloned().unwrap();
        let soda = session.find_product("soda").cloned().unwrap();
        session.add_to_cart(&pizza).unwrap();
        session.confirm_order(&api).await.unwrap();
        assert!(!session.can_confirm());

        let err = session.confirm_order(&api).await.unwrap_err();
        assert!(matches!(err, SessionError::Busy("the order confirmation is still open")));
        assert_eq!(api.orders().len(), 1);

        assert!(matches!(session.add_to_cart(&soda), Err(SessionError::Busy(_))));
        assert!(matches!(session.decrement("pizza"), Err(SessionError::Busy(_))));
        assert!(matches!(session.cancel_order(), Err(SessionError::Busy(_))));
        assert_eq!(session.cart().quantity_of("pizza"), 1);
        assert_eq!(session.cart().quantity_of("soda"), 0);
        assert_eq!(session.table().unwrap().as_str(), "6");

        session.acknowledge_order();
        assert!(session.table().is_none());
        session.save_table("2").unwrap();
        session.add_to_cart(&soda).unwrap();
        assert!(session.can_confirm());
    }

    #[tokio::test]
    async fn test_show_and_close_product() {
        let api = FakeApi::new(menu());
        let mut session = loaded_session(&api).await;

        assert_eq!(session.show_product("soda").unwrap().name, "Coca-Cola");
        assert!(session.product_detail().is_some());
        session.close_product();
        assert!(session.product_detail().is_none());

        assert!(session.show_product("ghost").is_err());
    }
}
