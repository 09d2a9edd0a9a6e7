//! # Category Filter
//!
//! Single-selection category filter for the menu.
//!
//! ```text
//! selected: None ──tap "Pizza"──► Some("Pizza") ──tap "Pizza"──► None
//!                                      │
//!                                 tap "Drinks"
//!                                      ▼
//!                                Some("Drinks")
//! ```
//!
//! Every toggle returns the [`ProductQuery`] the caller must run, which keeps
//! the highlighted category and the fetched product list in step.

use serde::Serialize;

/// Which product listing the menu should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "categoryId", rename_all = "camelCase")]
pub enum ProductQuery {
    /// `GET /products`
    All,
    /// `GET /categories/{id}/products`
    ByCategory(String),
}

/// The currently highlighted category, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: Option<String>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Taps a category.
    ///
    /// Re-tapping the selected category clears the filter; tapping any other
    /// category replaces it.
    ///
    /// ```rust
    /// use bfood_core::{CategoryFilter, ProductQuery};
    ///
    /// let mut filter = CategoryFilter::new();
    /// assert_eq!(filter.toggle("pizza"), ProductQuery::ByCategory("pizza".into()));
    /// assert_eq!(filter.toggle("pizza"), ProductQuery::All);
    /// ```
    pub fn toggle(&mut self, category_id: &str) -> ProductQuery {
        if self.selected.as_deref() == Some(category_id) {
            self.selected = None;
        } else {
            self.selected = Some(category_id.to_string());
        }
        self.query()
    }

    /// The listing that matches the current selection.
    pub fn query(&self) -> ProductQuery {
        match &self.selected {
            Some(id) => ProductQuery::ByCategory(id.clone()),
            None => ProductQuery::All,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, category_id: &str) -> bool {
        self.selected.as_deref() == Some(category_id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
