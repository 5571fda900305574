use crate::core::config::DEFAULT_BASE_URL;

/// Endpoint URLs under one API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn food_items(&self) -> String {
        format!("{}/food_items.json", self.base_url)
    }

    pub fn categories(&self) -> String {
        format!("{}/food_item_categories.json", self.base_url)
    }
}
