//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::model::{CatalogData, FoodCategory, FoodItem};
use crate::repository::{FoodRepository, RepositoryError};

type ErrorFactory = Box<dyn Fn() -> RepositoryError + Send + Sync>;

/// An in-memory repository for tests that don't need real API calls.
pub struct MockRepository {
    data: CatalogData,
    items_error: Option<ErrorFactory>,
    categories_error: Option<ErrorFactory>,
    item_calls: AtomicUsize,
}

impl MockRepository {
    pub fn with_data(data: CatalogData) -> Self {
        Self {
            data,
            items_error: None,
            categories_error: None,
            item_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_items(mut self, error: impl Fn() -> RepositoryError + Send + Sync + 'static) -> Self {
        self.items_error = Some(Box::new(error));
        self
    }

    pub fn failing_categories(
        mut self,
        error: impl Fn() -> RepositoryError + Send + Sync + 'static,
    ) -> Self {
        self.categories_error = Some(Box::new(error));
        self
    }

    /// How many times the items endpoint was hit.
    pub fn item_calls(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoodRepository for MockRepository {
    async fn fetch_food_items(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);
        match &self.items_error {
            Some(make_error) => Err(make_error()),
            None => Ok(self.data.items.clone()),
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<FoodCategory>, RepositoryError> {
        match &self.categories_error {
            Some(make_error) => Err(make_error()),
            None => Ok(self.data.categories.clone()),
        }
    }
}

pub fn item(id: &str, name: &str, category_id: &str) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        price: 1.49,
        category_id: category_id.to_string(),
        image_url: String::new(),
    }
}

pub fn category(id: &str, name: &str) -> FoodCategory {
    FoodCategory {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// One item (Bananas) in one category (Produce, `c1`).
pub fn scenario_data() -> CatalogData {
    CatalogData {
        items: vec![item("1", "Bananas", "c1")],
        categories: vec![category("c1", "Produce")],
    }
}
