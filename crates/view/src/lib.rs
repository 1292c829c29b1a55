//! Product view pipeline (filter + sort over enriched products).
//!
//! This crate contains the configuration types owned by the presentation
//! layer and the pure stages that turn an enriched product sequence into the
//! ordered, narrowed sequence to display. Every invocation recomputes from
//! scratch; there is no incremental state.

pub mod filter;
pub mod pipeline;
pub mod sort;

pub use filter::FilterConfig;
pub use pipeline::prepare;
pub use sort::{SortConfig, SortDirection, SortKey};
