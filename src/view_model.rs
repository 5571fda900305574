//! # Food List View Model
//!
//! Async glue between the repository and the pure catalog reducer.
//! The view model owns the [`Catalog`]; every mutation takes `&mut self`, so
//! there is exactly one writer. Front ends that want to keep handling input
//! while a fetch runs use [`FoodListViewModel::begin_load`], run
//! `fetch_all_data` on a task of their own, and hand the result back with
//! [`FoodListViewModel::complete_load`] from the owning task.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::model::{CatalogData, FoodCategory, FoodItem};
use crate::core::state::{Catalog, LoadingState};
use crate::network::NetworkError;
use crate::repository::{FoodRepository, RepositoryError};

/// Shown for any failure that isn't a [`NetworkError`].
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Turns a repository error into the message the user sees.
pub fn error_message(error: &RepositoryError) -> String {
    match error.downcast_ref::<NetworkError>() {
        Some(network_error) => network_error.to_string(),
        None => UNEXPECTED_ERROR_MESSAGE.to_string(),
    }
}

pub struct FoodListViewModel {
    repository: Arc<dyn FoodRepository>,
    catalog: Catalog,
}

impl FoodListViewModel {
    pub fn new(repository: Arc<dyn FoodRepository>) -> Self {
        Self {
            repository,
            catalog: Catalog::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.catalog.items
    }

    pub fn categories(&self) -> &[FoodCategory] {
        &self.catalog.categories
    }

    pub fn filtered_items(&self) -> &[FoodItem] {
        &self.catalog.filtered
    }

    pub fn selected_category_ids(&self) -> &HashSet<String> {
        &self.catalog.selected
    }

    pub fn loading_state(&self) -> &LoadingState {
        &self.catalog.loading
    }

    /// Handle for running `fetch_all_data` outside the view model.
    pub fn repository(&self) -> Arc<dyn FoodRepository> {
        Arc::clone(&self.repository)
    }

    /// Fetches items and categories and commits the outcome.
    /// Does nothing if a fetch is already in flight.
    pub async fn load(&mut self) {
        if !self.begin_load() {
            return;
        }
        let result = self.repository.fetch_all_data().await;
        self.complete_load(result);
    }

    pub async fn retry(&mut self) {
        info!("Retrying catalog fetch");
        self.load().await;
    }

    /// Pull-to-refresh. Current items stay visible until the fetch lands.
    pub async fn refresh(&mut self) {
        info!("Refreshing catalog");
        self.load().await;
    }

    /// Moves to `Loading`. Returns false if a fetch was already in flight,
    /// in which case the caller must not start another.
    pub fn begin_load(&mut self) -> bool {
        let effect = update(&mut self.catalog, Action::Load);
        debug!("Loading state: {:?}", self.catalog.loading);
        effect == Effect::Fetch
    }

    /// Applies the result of a fetch started with [`Self::begin_load`].
    pub fn complete_load(&mut self, result: Result<CatalogData, RepositoryError>) {
        let action = match result {
            Ok(data) => {
                info!(
                    "Catalog loaded: {} items, {} categories",
                    data.items.len(),
                    data.categories.len()
                );
                Action::DataLoaded {
                    data,
                    fetched_at: Utc::now(),
                }
            }
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                Action::LoadFailed(error_message(&e))
            }
        };
        update(&mut self.catalog, action);
        debug!("Loading state: {:?}", self.catalog.loading);
    }

    pub fn toggle_category(&mut self, category_id: impl Into<String>) {
        let category_id = category_id.into();
        debug!("Toggling category {}", category_id);
        update(&mut self.catalog, Action::ToggleCategory(category_id));
    }

    pub fn clear_filters(&mut self) {
        update(&mut self.catalog, Action::ClearFilters);
    }
}
