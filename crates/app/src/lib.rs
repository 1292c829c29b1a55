//! Presentation layer: seed data and plain-text table rendering.

pub mod data;
pub mod table;
