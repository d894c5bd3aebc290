use serde::{Deserialize, Serialize};

/// Structured feature set shown on the back of a flashcard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

impl KeyFeatures {
    /// Build from already-split lists, `None` when both are empty
    pub fn from_lists(ingredients: Vec<String>, allergens: Vec<String>) -> Option<Self> {
        if ingredients.is_empty() && allergens.is_empty() {
            return None;
        }
        Some(Self {
            ingredients: (!ingredients.is_empty()).then_some(ingredients),
            allergens: (!allergens.is_empty()).then_some(allergens),
        })
    }
}

/// Menu item row (`menu_items`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub key_features: Option<KeyFeatures>,
    pub is_active: bool,
}

impl MenuItem {
    pub fn ingredients(&self) -> &[String] {
        self.key_features
            .as_ref()
            .and_then(|features| features.ingredients.as_deref())
            .unwrap_or(&[])
    }

    pub fn allergens(&self) -> &[String] {
        self.key_features
            .as_ref()
            .and_then(|features| features.allergens.as_deref())
            .unwrap_or(&[])
    }
}

/// Insert payload for `menu_items`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMenuItem {
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub key_features: Option<KeyFeatures>,
    pub is_active: bool,
}

/// Menu category row (`menu_categories`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItemCategory {
    pub id: i64,
    pub name: String,
}

/// Insert payload for `menu_categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_with_null_features() {
        let json = r#"{
            "id": 7,
            "category_id": 2,
            "name": "Borscht",
            "description": "Beet soup",
            "price": 450.0,
            "image_url": "https://example.com/borscht.jpg",
            "key_features": null,
            "is_active": true
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.key_features.is_none());
        assert!(item.ingredients().is_empty());
        assert!(item.allergens().is_empty());
    }

    #[test]
    fn test_key_features_from_lists() {
        assert_eq!(KeyFeatures::from_lists(vec![], vec![]), None);

        let features = KeyFeatures::from_lists(vec!["beet".into()], vec![]).unwrap();
        assert_eq!(features.ingredients, Some(vec!["beet".to_string()]));
        assert_eq!(features.allergens, None);
        assert_eq!(serde_json::to_string(&features).unwrap(), r#"{"ingredients":["beet"]}"#);
    }
}
