//! # Domain Types
//!
//! Types fetched from the ordering API, plus the validated table label.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │     Product     │   │   Ingredient    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id            │◄──│  category       │   │  _id            │       │
//! │  │  name           │   │  _id, name      │──►│  name           │       │
//! │  │  icon (emoji)   │   │  price (Money)  │   │  icon (emoji)   │       │
//! │  └─────────────────┘   │  imagePath      │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │      Table      │   validated, trimmed, non-empty label             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is immutable once fetched. Field names follow the API's
//! JSON (`_id`, `imagePath`) through serde renames.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{self, Money};
use crate::validation;

// =============================================================================
// Category
// =============================================================================

/// A menu grouping used to filter the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    /// Emoji glyph shown above the name.
    pub icon: String,
}

// =============================================================================
// Ingredient
// =============================================================================

/// An ingredient listed in the product detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ingredient {
    #[serde(rename = "_id", default)]
    pub id: String,

    pub name: String,

    pub icon: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Sent by the API as a number in major units.
    #[serde(with = "money::major_units")]
    #[ts(type = "number")]
    pub price: Money,

    /// File name under the API's uploads directory.
    #[serde(default)]
    pub image_path: String,

    /// Id of the owning category.
    pub category: String,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Product {
    /// Builds a product with an empty description, image and ingredient list.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_path: String::new(),
            category: category.into(),
            ingredients: Vec::new(),
        }
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn has_image(&self) -> bool {
        !self.image_path.is_empty()
    }
}

// =============================================================================
// Table
// =============================================================================

/// The free-text table label a waiter attaches to an order.
///
/// Can only be constructed through [`Table::parse`], so a `Table` is always
/// trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct Table(String);

impl Table {
    /// Validates raw prompt input into a table label.
    ///
    /// ```rust
    /// use bfood_core::Table;
    ///
    /// assert_eq!(Table::parse("  12 ").unwrap().as_str(), "12");
    /// assert!(Table::parse("   ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        validation::validate_table(input).map(Table)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
