//! # Catalog State
//!
//! Everything the list screen shows, in one place. No I/O here.
//!
//! ```text
//! Catalog
//! ├── items: Vec<FoodItem>          // last successful fetch
//! ├── categories: Vec<FoodCategory> // last successful fetch
//! ├── selected: HashSet<String>     // category ids chosen by the user
//! ├── filtered: Vec<FoodItem>       // derived from items + selected
//! ├── loading: LoadingState         // Idle / Loading / Success / Error
//! └── last_updated: Option<DateTime<Utc>>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! `filtered` is recomputed there every time `items` or `selected` changes,
//! so it is never stale.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::core::model::{FoodCategory, FoodItem};

/// Progress of the most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing fetched yet. Never re-entered.
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadingState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub items: Vec<FoodItem>,
    pub categories: Vec<FoodCategory>,
    pub selected: HashSet<String>,
    pub filtered: Vec<FoodItem>,
    pub loading: LoadingState,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds `filtered` from `items` and `selected`.
    pub(crate) fn apply_filters(&mut self) {
        self.filtered = filter_items(&self.items, &self.selected);
    }

    pub fn is_selected(&self, category_id: &str) -> bool {
        self.selected.contains(category_id)
    }

    /// Name of the category with this id, if it was part of the last fetch.
    pub fn category_name(&self, category_id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.as_str())
    }

    /// True once data has loaded but nothing passes the current filters.
    pub fn is_empty_result(&self) -> bool {
        self.loading == LoadingState::Success && self.filtered.is_empty()
    }
}

/// Items whose category is in `selected`, or every item when nothing is selected.
/// Source order is kept.
pub fn filter_items(items: &[FoodItem], selected: &HashSet<String>) -> Vec<FoodItem> {
    if selected.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| selected.contains(&item.category_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{category, item};

    fn sample_items() -> Vec<FoodItem> {
        vec![
            item("1", "Bananas", "produce"),
            item("2", "Steak", "meat"),
            item("3", "Apples", "produce"),
            item("4", "Mystery", "missing"),
        ]
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_new_defaults() {
        let catalog = Catalog::new();
        assert_eq!(catalog.loading, LoadingState::Idle);
        assert!(catalog.items.is_empty());
        assert!(catalog.filtered.is_empty());
        assert!(catalog.selected.is_empty());
        assert!(catalog.last_updated.is_none());
    }

    #[test]
    fn test_empty_selection_returns_everything() {
        let items = sample_items();
        assert_eq!(filter_items(&items, &HashSet::new()), items);
    }

    #[test]
    fn test_selection_keeps_matching_items_in_order() {
        let items = sample_items();
        let filtered = filter_items(&items, &set(&["produce"]));
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bananas", "Apples"]);
    }

    #[test]
    fn test_selection_is_a_union() {
        let items = sample_items();
        let filtered = filter_items(&items, &set(&["produce", "meat"]));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_unknown_selection_matches_nothing() {
        let items = sample_items();
        assert!(filter_items(&items, &set(&["dairy"])).is_empty());
    }

    #[test]
    fn test_filter_is_repeatable() {
        let items = sample_items();
        let selected = set(&["meat", "missing"]);
        assert_eq!(filter_items(&items, &selected), filter_items(&items, &selected));
    }

    #[test]
    fn test_filter_empty_items() {
        assert!(filter_items(&[], &set(&["produce"])).is_empty());
        assert!(filter_items(&[], &HashSet::new()).is_empty());
    }

    #[test]
    fn test_category_name_lookup() {
        let catalog = Catalog {
            categories: vec![category("produce", "Produce")],
            ..Default::default()
        };
        assert_eq!(catalog.category_name("produce"), Some("Produce"));
        assert_eq!(catalog.category_name("missing"), None);
    }

    #[test]
    fn test_loading_state_helpers() {
        assert!(LoadingState::Loading.is_loading());
        assert!(!LoadingState::Success.is_loading());
        assert_eq!(LoadingState::Error("boom".into()).error_message(), Some("boom"));
        assert_eq!(LoadingState::Idle.error_message(), None);
    }

    #[test]
    fn test_is_empty_result_only_after_success() {
        let mut catalog = Catalog::new();
        assert!(!catalog.is_empty_result());
        catalog.loading = LoadingState::Success;
        assert!(catalog.is_empty_result());
        catalog.items = sample_items();
        catalog.apply_filters();
        assert!(!catalog.is_empty_result());
    }
}
