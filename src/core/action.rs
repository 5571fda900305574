//! # Actions
//!
//! Everything that can happen to the catalog becomes an `Action`.
//! User asks for a refresh? That's `Action::Load`.
//! The fetch comes back? That's `Action::DataLoaded { .. }` or `Action::LoadFailed(..)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the caller must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::{DateTime, Utc};
use log::debug;

use crate::core::model::CatalogData;
use crate::core::state::{Catalog, LoadingState};

#[derive(Debug)]
pub enum Action {
    /// Start a fetch. Covers first load, retry and pull-to-refresh.
    Load,
    DataLoaded {
        data: CatalogData,
        fetched_at: DateTime<Utc>,
    },
    /// The fetch failed; carries the message to show.
    LoadFailed(String),
    ToggleCategory(String),
    ClearFilters,
}

/// Work the caller has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run `fetch_all_data` and report back with `DataLoaded` or `LoadFailed`.
    Fetch,
}

pub fn update(catalog: &mut Catalog, action: Action) -> Effect {
    match action {
        Action::Load => {
            if catalog.loading.is_loading() {
                debug!("Load ignored: a fetch is already in flight");
                return Effect::None;
            }
            catalog.loading = LoadingState::Loading;
            Effect::Fetch
        }
        Action::DataLoaded { data, fetched_at } => {
            catalog.items = data.items;
            catalog.categories = data.categories;
            catalog.last_updated = Some(fetched_at);
            catalog.apply_filters();
            catalog.loading = LoadingState::Success;
            Effect::None
        }
        Action::LoadFailed(message) => {
            catalog.loading = LoadingState::Error(message);
            Effect::None
        }
        Action::ToggleCategory(id) => {
            if !catalog.selected.remove(&id) {
                catalog.selected.insert(id);
            }
            catalog.apply_filters();
            Effect::None
        }
        Action::ClearFilters => {
            catalog.selected.clear();
            catalog.apply_filters();
            Effect::None
        }
    }
}
