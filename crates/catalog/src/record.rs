//! Base record sets: users, categories, products.
//!
//! Records are loaded once at startup and never mutated. Field names follow
//! the upstream JSON shape (`ownerId`, `categoryId`) on the wire.

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, ProductId, UserId};

/// Sex marker carried by the source data (single-letter codes on the wire).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A user who owns one or more categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

/// A product category, owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

/// A catalog product, assigned to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_uses_single_letter_codes() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"m\"");
        assert_eq!(serde_json::from_str::<Sex>("\"f\"").unwrap(), Sex::Female);
    }

    #[test]
    fn category_fields_follow_upstream_names() {
        let json = r#"{"id":2,"title":"Drinks","icon":"🍺","ownerId":1}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId::new(2));
        assert_eq!(category.owner_id, UserId::new(1));
    }

    #[test]
    fn product_fields_follow_upstream_names() {
        let json = r#"{"id":5,"name":"Milk","categoryId":1}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category_id, CategoryId::new(1));
    }
}
