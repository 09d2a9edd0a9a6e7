//! # Catalog Commands
//!
//! Menu loading, category selection and the product detail view.
//!
//! ## Category Toggle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [🍕 Pizzas]  [🍻 Bebidas]  [🍔 Burgers]                                │
//! │                                                                         │
//! │  category 2  ──► Bebidas selected   ──► GET /categories/{id}/products  │
//! │  category 2  ──► selection cleared  ──► GET /products                  │
//! │  category 1  ──► Pizzas selected    ──► GET /categories/{id}/products  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use bfood_api::MenuApi;
use bfood_core::{Ingredient, Money, Product};

use super::at_position;
use crate::error::CommandResult;
use crate::state::Session;

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub icon: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image_url: Option<String>,
}

impl ProductEntry {
    fn new<A: MenuApi + ?Sized>(api: &A, position: usize, product: &Product) -> Self {
        ProductEntry {
            position,
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price(),
            image_url: api.image_url(&product.image_path),
        }
    }
}

/// Categories and the current product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub categories: Vec<CategoryEntry>,
    pub products: Vec<ProductEntry>,
    pub is_loading: bool,
    pub is_loading_products: bool,
}

impl MenuResponse {
    pub fn build<A: MenuApi + ?Sized>(session: &Session, api: &A) -> Self {
        let filter = session.filter();
        let categories = session
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| CategoryEntry {
                position: i + 1,
                id: c.id.clone(),
                name: c.name.clone(),
                icon: c.icon.clone(),
                selected: filter.is_selected(&c.id),
            })
            .collect();

        let products = session
            .products()
            .iter()
            .enumerate()
            .map(|(i, p)| ProductEntry::new(api, i + 1, p))
            .collect();

        MenuResponse {
            categories,
            products,
            is_loading: session.is_loading(),
            is_loading_products: session.is_loading_products(),
        }
    }

    /// True when the menu should render "no products found".
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && !self.is_loading && !self.is_loading_products
    }
}

/// The product detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: ProductEntry,
    pub ingredients: Vec<Ingredient>,
    /// How many are already in the cart.
    pub in_cart: u32,
}

// =============================================================================
// Commands
// =============================================================================

/// Initial fetch of categories and all products.
pub async fn load_menu<A>(session: &mut Session, api: &A) -> CommandResult<MenuResponse>
where
    A: MenuApi + ?Sized,
{
    debug!("load_menu command");
    session.load(api).await?;
    Ok(MenuResponse::build(session, api))
}

/// The menu as currently loaded, without fetching.
pub fn get_menu<A>(session: &Session, api: &A) -> MenuResponse
where
    A: MenuApi + ?Sized,
{
    MenuResponse::build(session, api)
}

/// Toggles the category at `position` and refetches products.
pub async fn select_category<A>(
    session: &mut Session,
    api: &A,
    position: usize,
) -> CommandResult<MenuResponse>
where
    A: MenuApi + ?Sized,
{
    let category_id = at_position(session.categories(), position, "Category")?.id.clone();
    debug!(position, category_id = %category_id, "select_category command");

    session.select_category(api, &category_id).await?;
    Ok(MenuResponse::build(session, api))
}

/// Opens the detail view for the product at `position` in the listing.
pub fn show_product<A>(
    session: &mut Session,
    api: &A,
    position: usize,
) -> CommandResult<ProductDetailResponse>
where
    A: MenuApi + ?Sized,
{
    let product_id = at_position(session.products(), position, "Product")?.id.clone();
    debug!(position, product_id = %product_id, "show_product command");

    let product = session.show_product(&product_id)?.clone();
    Ok(ProductDetailResponse {
        in_cart: session.cart().quantity_of(&product.id),
        ingredients: product.ingredients.clone(),
        product: ProductEntry::new(api, position, &product),
    })
}

pub fn close_product(session: &mut Session) {
    debug!("close_product command");
    session.close_product();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::{menu, FakeApi, Menu};

    #[tokio::test]
    async fn test_load_menu_numbers_entries() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();

        let response = load_menu(&mut session, &api).await.unwrap();

        assert!(!response.is_loading);
        assert_eq!(response.categories[0].position, 1);
        assert_eq!(response.categories[1].name, "Bebidas");
        assert!(response.categories.iter().all(|c| !c.selected));
        assert_eq!(response.products[2].position, 3);
        assert_eq!(
            response.products[0].image_url.as_deref(),
            Some("http://fake/uploads/pizza.png")
        );
        assert_eq!(response.products[1].image_url, None);
    }

    #[tokio::test]
    async fn test_load_menu_failure() {
        let api = FakeApi::new(menu()).failing();
        let mut session = Session::new();

        let err = load_menu(&mut session, &api).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Network);
        assert!(!get_menu(&session, &api).is_loading);
    }

    #[tokio::test]
    async fn test_select_category_marks_selection() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();

        let response = select_category(&mut session, &api, 2).await.unwrap();
        assert!(response.categories[1].selected);
        assert_eq!(response.products.len(), 1);
        assert_eq!(response.products[0].id, "soda");

        let response = select_category(&mut session, &api, 2).await.unwrap();
        assert!(!response.categories[1].selected);
        assert_eq!(response.products.len(), 3);
    }

    #[tokio::test]
    async fn test_select_unknown_position() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();

        let err = select_category(&mut session, &api, 7).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_show_product_detail() {
        let api = FakeApi::new(menu());
        let mut session = Session::new();
        load_menu(&mut session, &api).await.unwrap();

        let detail = show_product(&mut session, &api, 1).unwrap();
        assert_eq!(detail.product.name, "Pizza Quatro Queijos");
        assert_eq!(detail.ingredients[0].name, "Mozzarella");
        assert_eq!(detail.in_cart, 0);

        close_product(&mut session);
        assert!(session.product_detail().is_none());
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let api = FakeApi::new(Menu {
            categories: Vec::new(),
            products: Vec::new(),
        });
        let mut session = Session::new();
        // Still loading: not "no products found" yet
        assert!(!get_menu(&session, &api).is_empty());

        let response = load_menu(&mut session, &api).await.unwrap();
        assert!(response.is_empty());
    }
}
