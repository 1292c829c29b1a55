//! Catalog domain module (users, categories, products).
//!
//! This crate contains the immutable base record sets and the join stage
//! that resolves them into enriched products, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage — datasets arrive
//! as values or as JSON text parsed here).

pub mod dataset;
pub mod enrich;
pub mod record;

pub use dataset::{Dataset, DatasetError};
pub use enrich::{EnrichedProduct, enrich};
pub use record::{Category, Product, Sex, User};
