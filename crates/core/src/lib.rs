//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no presentation or IO
//! concerns): strongly-typed record identifiers and the error model shared
//! by the catalog and the view pipeline.

pub mod error;
pub mod id;

pub use error::{IdError, IntegrityError, IntegrityResult};
pub use id::{CategoryId, ProductId, UserId};
