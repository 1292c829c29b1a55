//! Join stage: resolve each product's category and that category's owner.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, IntegrityError, IntegrityResult, ProductId, UserId};

use crate::record::{Category, Product, User};

/// A product with its category and owning user resolved and embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub user: User,
}

/// Resolve the base record sets into enriched products.
///
/// Output order and cardinality match the input products. Fails on the first
/// dangling reference; a dataset that does not resolve never yields a partial
/// result set.
pub fn enrich(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> IntegrityResult<Vec<EnrichedProduct>> {
    let categories_by_id: HashMap<CategoryId, &Category> =
        categories.iter().map(|c| (c.id, c)).collect();
    let users_by_id: HashMap<UserId, &User> = users.iter().map(|u| (u.id, u)).collect();

    products
        .iter()
        .map(|product| {
            let category = categories_by_id
                .get(&product.category_id)
                .copied()
                .ok_or(IntegrityError::UnknownCategory {
                    product_id: product.id,
                    category_id: product.category_id,
                })?;
            let user = users_by_id
                .get(&category.owner_id)
                .copied()
                .ok_or(IntegrityError::UnknownOwner {
                    category_id: category.id,
                    owner_id: category.owner_id,
                })?;

            Ok(EnrichedProduct {
                id: product.id,
                name: product.name.clone(),
                category: category.clone(),
                user: user.clone(),
            })
        })
        .collect()
}
