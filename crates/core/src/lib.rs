//! `vitrina-core` — catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::{CategoryId, ProductId};
pub use value_object::ValueObject;
