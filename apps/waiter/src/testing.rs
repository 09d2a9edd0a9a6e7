//! In-memory [`MenuApi`] used by the session, command and terminal tests.

use std::sync::Mutex;

use async_trait::async_trait;

use bfood_api::{ClientError, ClientResult, MenuApi};
use bfood_core::{Category, Ingredient, Money, Order, Product};

pub struct Menu {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Two categories, three products; "drinks" holds only the soda.
pub fn menu() -> Menu {
    let category = |id: &str, name: &str, icon: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    };

    let mut pizza = Product::new("pizza", "Pizza Quatro Queijos", Money::from_cents(4000), "pizzas");
    pizza.description = "Four cheeses".to_string();
    pizza.image_path = "pizza.png".to_string();
    pizza.ingredients = vec![Ingredient {
        id: "i1".to_string(),
        name: "Mozzarella".to_string(),
        icon: "🧀".to_string(),
    }];

    Menu {
        categories: vec![
            category("pizzas", "Pizzas", "🍕"),
            category("drinks", "Bebidas", "🍻"),
        ],
        products: vec![
            pizza,
            Product::new("calzone", "Calzone", Money::from_cents(4500), "pizzas"),
            Product::new("soda", "Coca-Cola", Money::from_cents(750), "drinks"),
        ],
    }
}

pub struct FakeApi {
    menu: Menu,
    fail: bool,
    accept_orders: bool,
    calls: Mutex<Vec<String>>,
    orders: Mutex<Vec<Order>>,
}

impl FakeApi {
    pub fn new(menu: Menu) -> Self {
        FakeApi {
            menu,
            fail: false,
            accept_orders: true,
            calls: Mutex::new(Vec::new()),
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with HTTP 503.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Order submissions answer `false`.
    pub fn rejecting_orders(mut self) -> Self {
        self.accept_orders = false;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call.clone());
        if self.fail {
            let path = call.split_once(' ').map(|(_, p)| p).unwrap_or_default();
            return Err(ClientError::Status {
                path: path.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MenuApi for FakeApi {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.record("GET /categories".to_string())?;
        Ok(self.menu.categories.clone())
    }

    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.record("GET /products".to_string())?;
        Ok(self.menu.products.clone())
    }

    async fn list_products_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.record(format!("GET /categories/{}/products", category_id))?;
        Ok(self
            .menu
            .products
            .iter()
            .filter(|p| p.category == category_id)
            .cloned()
            .collect())
    }

    async fn submit_order(&self, order: &Order) -> ClientResult<bool> {
        self.record("POST /orders".to_string())?;
        self.orders.lock().unwrap().push(order.clone());
        Ok(self.accept_orders)
    }

    fn image_url(&self, image_path: &str) -> Option<String> {
        (!image_path.is_empty()).then(|| format!("http://fake/uploads/{}", image_path))
    }
}
