//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Every variant is raised at the point of violation; nothing in the catalog
/// recovers from one internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A price or quantity failed validation.
    #[error("{0}")]
    InvalidValue(String),

    /// Something that is not a known product variant was offered to a category.
    #[error("invalid type: {0}")]
    InvalidType(String),

    /// The product is already in the category.
    #[error("product is already in the category")]
    DuplicateProduct,

    /// The product is not in the category.
    #[error("product not found")]
    NotFound,

    /// Two products of different variants were combined.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A field mapping lacked a required key.
    #[error("missing field: {0}")]
    MissingField(String),
}

impl CatalogError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_type(msg: impl Into<String>) -> Self {
        Self::InvalidType(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn duplicate() -> Self {
        Self::DuplicateProduct
    }
}
