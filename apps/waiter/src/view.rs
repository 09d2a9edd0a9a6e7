//! # Text Views
//!
//! Renders command responses as plain text for the terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order                                          cancel order            │
//! │  Table 12                                                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  1. 🍕 Pizzas   [2. 🍻 Bebidas]                                        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  1. Coca-Cola                                            R$ 7,50        │
//! │     Lata 350ml                                                          │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  1. 2x Coca-Cola                R$ 7,50                                 │
//! │  Total                          R$ 15,00                                │
//! │  [confirm]                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function is pure: response in, `String` out.

use std::fmt::Write;

use crate::commands::cart::{AddToCartResponse, CartResponse};
use crate::commands::catalog::{MenuResponse, ProductDetailResponse};
use crate::commands::order::OrderConfirmedResponse;
use crate::commands::table::TableResponse;
use crate::error::CommandError;
use crate::state::DisplaySettings;

// Writing into a String cannot fail; results of `writeln!` are ignored below.

pub fn render_header(table: &TableResponse) -> String {
    match &table.table {
        None => {
            let mut out = String::from("Welcome to\nBFOOD\n");
            if table.new_order_enabled {
                out.push_str("Type `new` to start an order\n");
            }
            out
        }
        Some(id) => format!("Order                (`cancel` to cancel order)\nTable {}\n", id),
    }
}

pub fn render_categories(menu: &MenuResponse) -> String {
    if menu.categories.is_empty() {
        return String::new();
    }

    let entries: Vec<String> = menu
        .categories
        .iter()
        .map(|c| {
            if c.selected {
                format!("[{}. {} {}]", c.position, c.icon, c.name)
            } else {
                format!("{}. {} {}", c.position, c.icon, c.name)
            }
        })
        .collect();
    format!("{}\n", entries.join("   "))
}

pub fn render_menu(menu: &MenuResponse, display: &DisplaySettings) -> String {
    if menu.is_loading || menu.is_loading_products {
        return "Loading...\n".to_string();
    }
    if menu.is_empty() {
        return "No products found\n".to_string();
    }

    let mut out = String::new();
    for product in &menu.products {
        let _ = writeln!(
            out,
            "{:>2}. {:<36} {}",
            product.position,
            product.name,
            display.format_currency(product.price)
        );
        if !product.description.is_empty() {
            let _ = writeln!(out, "    {}", product.description);
        }
    }
    out
}

pub fn render_product(detail: &ProductDetailResponse, display: &DisplaySettings) -> String {
    let product = &detail.product;
    let mut out = String::new();

    let _ = writeln!(out, "{}", product.name);
    if let Some(url) = &product.image_url {
        let _ = writeln!(out, "Image: {}", url);
    }
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }

    if !detail.ingredients.is_empty() {
        let _ = writeln!(out, "\nIngredients");
        for ingredient in &detail.ingredients {
            let _ = writeln!(out, "  {} {}", ingredient.icon, ingredient.name);
        }
    }

    let _ = writeln!(out, "\nPrice {}", display.format_currency(product.price));
    if detail.in_cart > 0 {
        let _ = writeln!(out, "{} already in the order", detail.in_cart);
    }
    out.push_str("`add` to add to the order, `close` to go back\n");
    out
}

pub fn render_added(added: &AddToCartResponse) -> String {
    let mut out = format!("{}x {}\n", added.quantity, added.product_name);
    if added.table_prompt_opened {
        out.push_str(&render_table_prompt());
    }
    out
}

pub fn render_cart(cart: &CartResponse, display: &DisplaySettings) -> String {
    if cart.table.is_none() {
        return "Select a table to see the order (`new`)\n".to_string();
    }

    let mut out = String::new();
    if cart.items.is_empty() {
        out.push_str("Your cart is empty\n");
    } else {
        for line in &cart.items {
            let _ = writeln!(
                out,
                "{:>2}. {}x {:<30} {}",
                line.position,
                line.quantity,
                line.name,
                display.format_currency(line.unit_price)
            );
        }
        let _ = writeln!(out, "Total {}", display.format_currency(cart.total));
    }

    let control = if cart.is_submitting {
        "[sending...]"
    } else if cart.can_confirm {
        "[confirm]"
    } else {
        "[confirm disabled]"
    };
    out.push_str(control);
    out.push('\n');
    out
}

pub fn render_table_prompt() -> String {
    "Enter the table: `table <number>` (`close` to dismiss)\n".to_string()
}

pub fn render_confirmation(order: &OrderConfirmedResponse, display: &DisplaySettings) -> String {
    format!(
        "Order confirmed\nTable {}: {} item(s), {}\nThe order has been sent to the kitchen. Type `ok` to start over\n",
        order.table,
        order.total_quantity,
        display.format_currency(order.total)
    )
}

pub fn render_error(err: &CommandError) -> String {
    format!("error: {}\n", err.message)
}

pub fn render_help() -> String {
    "\
Commands
  categories        list categories
  menu              list products
  category <n>      toggle category filter
  show <n>          product details
  close             close the open view
  add [n]           add product (detail view: no number)
  dec <n>           remove one unit of cart line n
  new               start an order (asks for a table)
  table <id>        set the table
  cart              show the order
  confirm           send the order
  ok                acknowledge a confirmed order
  cancel            cancel the current order
  help              this text
  quit              exit
"
    .to_string()
}
