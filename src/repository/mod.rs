//! # Repository
//!
//! Typed access to the two catalog endpoints. Errors from the network
//! client pass through unchanged; the view model decides what to show.

pub mod endpoints;

use async_trait::async_trait;
use futures::future::try_join;
use log::info;

use crate::core::model::{CatalogData, FoodCategory, FoodItem};
use crate::network::NetworkService;

pub use endpoints::ApiEndpoints;

/// Error returned by any repository. Remote repositories return a boxed
/// [`NetworkError`](crate::network::NetworkError).
pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn fetch_food_items(&self) -> Result<Vec<FoodItem>, RepositoryError>;

    async fn fetch_categories(&self) -> Result<Vec<FoodCategory>, RepositoryError>;

    /// Fetches items and categories concurrently. Fails with the first error
    /// seen; never returns one list without the other.
    async fn fetch_all_data(&self) -> Result<CatalogData, RepositoryError> {
        let (items, categories) = try_join(self.fetch_food_items(), self.fetch_categories()).await?;
        Ok(CatalogData { items, categories })
    }
}

/// Repository backed by the static JSON API.
pub struct RemoteFoodRepository {
    network: NetworkService,
    endpoints: ApiEndpoints,
}

impl RemoteFoodRepository {
    pub fn new(network: NetworkService, endpoints: ApiEndpoints) -> Self {
        Self { network, endpoints }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(NetworkService::new(), ApiEndpoints::new(base_url))
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }
}

#[async_trait]
impl FoodRepository for RemoteFoodRepository {
    async fn fetch_food_items(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        let items: Vec<FoodItem> = self.network.fetch(&self.endpoints.food_items()).await?;
        info!("Fetched {} food items", items.len());
        Ok(items)
    }

    async fn fetch_categories(&self) -> Result<Vec<FoodCategory>, RepositoryError> {
        let categories: Vec<FoodCategory> = self.network.fetch(&self.endpoints.categories()).await?;
        info!("Fetched {} categories", categories.len());
        Ok(categories)
    }
}
