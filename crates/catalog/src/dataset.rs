//! The three base record sets, bundled for loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::IntegrityError;

use crate::enrich::{EnrichedProduct, enrich};
use crate::record::{Category, Product, User};

/// Loading/validation failures for a [`Dataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The JSON document did not match the dataset schema.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The records parsed but do not resolve against each other.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// The immutable base record sets (users, categories, products).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    /// Parse a dataset from a JSON document of the form
    /// `{"users": [...], "categories": [...], "products": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the record sets into enriched products.
    pub fn enrich(&self) -> Result<Vec<EnrichedProduct>, IntegrityError> {
        enrich(&self.products, &self.categories, &self.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CategoryId, ProductId, UserId};

    const DATASET: &str = r#"
        {
            "users": [
                { "id": 1, "name": "Roma", "sex": "m" },
                { "id": 2, "name": "Anna", "sex": "f" }
            ],
            "categories": [
                { "id": 1, "title": "Grocery", "icon": "🍞", "ownerId": 2 }
            ],
            "products": [
                { "id": 1, "name": "Milk", "categoryId": 1 },
                { "id": 2, "name": "Bread", "categoryId": 1 }
            ]
        }
    "#;

    #[test]
    fn parses_the_upstream_json_shape() {
        let dataset = Dataset::from_json_str(DATASET).unwrap();
        assert_eq!(dataset.users.len(), 2);
        assert_eq!(dataset.categories.len(), 1);
        assert_eq!(dataset.products.len(), 2);
        assert_eq!(dataset.categories[0].owner_id, UserId::new(2));
        assert_eq!(dataset.products[1].category_id, CategoryId::new(1));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Dataset::from_json_str("{\"users\": [").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn enriches_through_to_the_owner() {
        let dataset = Dataset::from_json_str(DATASET).unwrap();
        let enriched = dataset.enrich().unwrap();
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].id, ProductId::new(1));
        assert_eq!(enriched[0].category.title, "Grocery");
        assert_eq!(enriched[0].user.name, "Anna");
    }

    #[test]
    fn dangling_reference_surfaces_as_integrity_error() {
        let mut dataset = Dataset::from_json_str(DATASET).unwrap();
        dataset.products[0].category_id = CategoryId::new(9);
        assert!(dataset.enrich().is_err());
    }
}
