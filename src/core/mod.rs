//! # Core Catalog Logic
//!
//! This module contains FoodMart's business logic.
//! It knows nothing about HTTP or any specific front end.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌──────────────┐                        ┌────────────┐
//!     │  view_model  │ ── fetch_all_data ──▶  │ repository │
//!     │ (async glue) │                        │  network   │
//!     └──────────────┘                        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `FoodItem`, `FoodCategory` and their wire format
//! - [`state`]: The `Catalog` struct and the filter derivation
//! - [`action`]: The `Action` enum and `update()`
//! - [`currency`]: Price formatting
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod currency;
pub mod model;
pub mod state;

pub use model::{CatalogData, FoodCategory, FoodItem};
pub use state::{Catalog, LoadingState};
