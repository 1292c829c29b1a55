//! Filter stage: conjunctive predicates over enriched products.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_catalog::EnrichedProduct;
use storefront_core::{CategoryId, UserId};

/// The active filter predicates, combined with logical AND.
///
/// Owned by the presentation layer and passed into the pipeline on every
/// query. The default config activates no rule and filters nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Substring matched case-insensitively against product names.
    /// Whitespace-only input deactivates the rule.
    pub search: String,
    /// Keep only products owned by this user; `None` keeps all users.
    pub user: Option<UserId>,
    /// Keep only products in these categories; empty keeps all categories.
    pub categories: BTreeSet<CategoryId>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single user, or `None` for all users.
    pub fn select_user(&mut self, user: Option<UserId>) {
        self.user = user;
    }

    /// Toggle a category in or out of the selection.
    pub fn toggle_category(&mut self, category: CategoryId) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Drop the category selection entirely.
    pub fn clear_categories(&mut self) {
        self.categories.clear();
    }

    /// Clear search, user, and category selections.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no rule is active (filtering is the identity).
    pub fn is_neutral(&self) -> bool {
        self.search.trim().is_empty() && self.user.is_none() && self.categories.is_empty()
    }

    /// Whether a product passes every active rule.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        let search = self.search.trim();
        if !search.is_empty() {
            let needle = search.to_lowercase();
            if !product.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(user) = self.user {
            if product.user.id != user {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category.id) {
            return false;
        }

        true
    }
}

/// Keep the products that pass every active rule, preserving input order.
pub fn apply(products: &[EnrichedProduct], config: &FilterConfig) -> Vec<EnrichedProduct> {
    products
        .iter()
        .filter(|product| config.matches(product))
        .cloned()
        .collect()
}
