//! Domain error model.

use thiserror::Error;

use crate::id::{CategoryId, ProductId, UserId};

/// Result type used by the join stage.
pub type IntegrityResult<T> = Result<T, IntegrityError>;

/// A foreign-key-style reference between the base record sets failed to
/// resolve.
///
/// This is a fatal, load-time condition: the pipeline refuses to produce a
/// result set from a dataset that does not resolve, rather than carrying a
/// dangling reference downstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// A product references a category that does not exist.
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    /// A category references an owner that does not exist.
    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

/// An identifier was invalid (e.g. parse failure).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct IdError(String);

impl IdError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}
