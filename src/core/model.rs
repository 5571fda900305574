//! # Catalog Models
//!
//! Typed shapes of the two API payloads. The wire format uses `uuid` and
//! snake_case keys; serde renames map them onto our field names.

use serde::{Deserialize, Serialize};

use crate::core::currency::format_price;

/// A food category, used for filtering items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoodCategory {
    #[serde(rename = "uuid")]
    pub id: String,
    pub name: String,
}

/// A single item in the catalog.
///
/// `category_id` is a loose reference into [`FoodCategory::id`]; nothing
/// guarantees the category exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FoodItem {
    #[serde(rename = "uuid")]
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "category_uuid")]
    pub category_id: String,
    pub image_url: String,
}

impl FoodItem {
    /// Price as a currency string, e.g. `$1.49`.
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// Both lists from one combined fetch. Always complete: there is no way to
/// hold one list without the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogData {
    pub items: Vec<FoodItem>,
    pub categories: Vec<FoodCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_items_maps_fields_in_order() {
        let json = r#"[
            {"uuid":"1","name":"Bananas","price":1.49,"category_uuid":"c1","image_url":""},
            {"uuid":"2","name":"Steak","price":12.0,"category_uuid":"c2","image_url":"https://img.example/steak.png"}
        ]"#;
        let items: Vec<FoodItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Bananas");
        assert_eq!(items[0].price, 1.49);
        assert_eq!(items[0].category_id, "c1");
        assert_eq!(items[0].image_url, "");
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].category_id, "c2");
        assert_eq!(items[1].image_url, "https://img.example/steak.png");
    }

    #[test]
    fn test_decode_categories() {
        let json = r#"[{"uuid":"c1","name":"Produce"},{"uuid":"c2","name":"Meat"}]"#;
        let categories: Vec<FoodCategory> = serde_json::from_str(json).unwrap();
        assert_eq!(
            categories,
            vec![
                FoodCategory { id: "c1".into(), name: "Produce".into() },
                FoodCategory { id: "c2".into(), name: "Meat".into() },
            ]
        );
    }

    #[test]
    fn test_decode_item_missing_field_fails() {
        let json = r#"[{"uuid":"1","name":"Bananas","price":1.49}]"#;
        assert!(serde_json::from_str::<Vec<FoodItem>>(json).is_err());
    }

    #[test]
    fn test_decode_item_wrong_type_fails() {
        let json = r#"[{"uuid":"1","name":"Bananas","price":"cheap","category_uuid":"c1","image_url":""}]"#;
        assert!(serde_json::from_str::<Vec<FoodItem>>(json).is_err());
    }

    #[test]
    fn test_encode_uses_wire_names() {
        let category = FoodCategory { id: "c1".into(), name: "Produce".into() };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value, serde_json::json!({"uuid": "c1", "name": "Produce"}));
    }

    #[test]
    fn test_formatted_price() {
        let item = FoodItem {
            id: "1".into(),
            name: "Bananas".into(),
            price: 1.49,
            category_id: "c1".into(),
            image_url: String::new(),
        };
        assert_eq!(item.formatted_price(), "$1.49");
    }
}
