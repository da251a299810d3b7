use std::sync::Arc;

use serde_json::Value;

use vitrina_core::{CatalogError, CatalogResult, CategoryId, Entity};
use vitrina_products::{Fields, Priced, Product, Quantified};

use crate::registry::CategoryRegistry;

/// Entity: Category.
///
/// Holds shared references to products; the same product may sit in several
/// categories at once. Membership is by product identity.
#[derive(Debug)]
pub struct Category<'r> {
    id: CategoryId,
    name: String,
    description: String,
    products: Vec<Arc<Product>>,
    registry: &'r CategoryRegistry,
}

impl<'r> Category<'r> {
    /// Create a category with an initial product list.
    ///
    /// The list is kept as given, duplicates included. Counts one category and
    /// every initial product against `registry`.
    pub fn new(
        registry: &'r CategoryRegistry,
        name: impl Into<String>,
        description: impl Into<String>,
        products: impl IntoIterator<Item = Arc<Product>>,
    ) -> Self {
        let category = Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            products: products.into_iter().collect(),
            registry,
        };
        registry.record_category(category.products.len());

        tracing::debug!(
            category_id = %category.id,
            name = %category.name,
            products = category.products.len(),
            "category created"
        );

        category
    }

    /// Create a category with no products.
    pub fn empty(
        registry: &'r CategoryRegistry,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(registry, name, description, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.products.iter().any(|p| p.is_same(product))
    }

    /// Append a product that is not already in this category.
    pub fn add_product(&mut self, product: Arc<Product>) -> CatalogResult<()> {
        if self.contains(&product) {
            return Err(CatalogError::duplicate());
        }

        tracing::debug!(
            category_id = %self.id,
            product_id = %product.id_typed(),
            "product added"
        );

        self.products.push(product);
        self.registry.record_added();
        Ok(())
    }

    /// Add a product described by an untyped value (e.g. a JSON payload).
    ///
    /// A value is product-shaped when it is an object carrying a `kind` or at
    /// least one of the base product keys. Anything else fails with
    /// `InvalidType`; a product-shaped mapping with gaps fails with
    /// `MissingField` for the first absent key.
    pub fn add_entry(&mut self, entry: &Value) -> CatalogResult<Arc<Product>> {
        let fields = match entry {
            Value::Object(fields) if is_product_shaped(fields) => fields,
            other => {
                return Err(CatalogError::invalid_type(format!(
                    "only products can be added, got {}",
                    value_type(other)
                )));
            }
        };

        let product = Arc::new(Product::from_fields(fields)?);
        self.add_product(Arc::clone(&product))?;
        Ok(product)
    }

    /// Remove the first occurrence of `product`.
    pub fn remove_product(&mut self, product: &Product) -> CatalogResult<Arc<Product>> {
        let index = self
            .products
            .iter()
            .position(|p| p.is_same(product))
            .ok_or_else(CatalogError::not_found)?;

        let removed = self.products.remove(index);
        self.registry.record_removed();

        tracing::debug!(
            category_id = %self.id,
            product_id = %removed.id_typed(),
            "product removed"
        );

        Ok(removed)
    }

    /// Sum of the quantities of every product entry.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| p.quantity().value()).sum()
    }

    /// Sum of price times quantity over every product entry.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(|p| p.stock_value()).sum()
    }
}

const PRODUCT_KEYS: [&str; 5] = ["kind", "name", "description", "price", "quantity"];

fn is_product_shaped(fields: &Fields) -> bool {
    PRODUCT_KEYS.iter().any(|key| fields.contains_key(*key))
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Entity for Category<'_> {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Category<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}
