//! FoodMart library exports for the CLI and tests

pub mod core;
pub mod network;
pub mod repository;
pub mod view_model;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{Catalog, CatalogData, FoodCategory, FoodItem, LoadingState};
pub use network::{NetworkError, NetworkService};
pub use repository::{ApiEndpoints, FoodRepository, RemoteFoodRepository, RepositoryError};
pub use view_model::FoodListViewModel;
