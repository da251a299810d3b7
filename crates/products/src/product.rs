use serde::Serialize;

use vitrina_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::capability::{Priced, Quantified};
use crate::value::{Price, Quantity};

/// Product variant with its variant-specific descriptive fields.
///
/// The set is closed: anything a category accepts is one of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    Standard,
    Smartphone {
        efficiency: f64,
        model: String,
        /// Storage in GB.
        memory: u32,
        color: String,
    },
    LawnGrass {
        country: String,
        germination_period: String,
        color: String,
    },
}

impl ProductKind {
    /// Stable variant name (also the `kind` tag in field mappings).
    pub fn name(&self) -> &'static str {
        match self {
            ProductKind::Standard => "standard",
            ProductKind::Smartphone { .. } => "smartphone",
            ProductKind::LawnGrass { .. } => "lawn_grass",
        }
    }

    pub fn same_variant(&self, other: &ProductKind) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Entity: Product.
///
/// Not `Clone`: a copy would share the id and silently count as the same
/// product. Share through `Arc<Product>` instead.
#[derive(Debug, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    quantity: Quantity,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    /// Create a standard product.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> CatalogResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Standard)
    }

    /// Create a smartphone.
    #[allow(clippy::too_many_arguments)]
    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        efficiency: f64,
        model: impl Into<String>,
        memory: u32,
        color: impl Into<String>,
    ) -> CatalogResult<Self> {
        let kind = ProductKind::Smartphone {
            efficiency,
            model: model.into(),
            memory,
            color: color.into(),
        };
        Self::with_kind(name, description, price, quantity, kind)
    }

    /// Create a lawn grass product.
    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        country: impl Into<String>,
        germination_period: impl Into<String>,
        color: impl Into<String>,
    ) -> CatalogResult<Self> {
        let kind = ProductKind::LawnGrass {
            country: country.into(),
            germination_period: germination_period.into(),
            color: color.into(),
        };
        Self::with_kind(name, description, price, quantity, kind)
    }

    /// Create a product of any variant. All variants share the same
    /// price/quantity validation.
    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> CatalogResult<Self> {
        let price = Price::new(price).inspect_err(log_rejection)?;
        let quantity = Quantity::new(quantity).inspect_err(log_rejection)?;

        let product = Self {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            kind,
        };

        tracing::debug!(
            product_id = %product.id,
            kind = product.kind.name(),
            name = %product.name,
            price = product.price.value(),
            quantity = product.quantity.value(),
            "product created"
        );

        Ok(product)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Combined stock value of two products of the same variant.
    pub fn combine(&self, other: &Product) -> CatalogResult<f64> {
        if !self.kind.same_variant(&other.kind) {
            return Err(CatalogError::type_mismatch(format!(
                "cannot combine {} with {}",
                self.kind.name(),
                other.kind.name()
            )));
        }
        Ok(self.stock_value() + other.stock_value())
    }
}

fn log_rejection(err: &CatalogError) {
    tracing::warn!("{err}");
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Quantified for Product {
    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, value: i64) -> CatalogResult<()> {
        self.quantity = self.quantity.replace(value).inspect_err(log_rejection)?;
        Ok(())
    }
}

impl Priced for Product {
    fn price(&self) -> Price {
        self.price
    }

    fn set_price(&mut self, value: f64) -> CatalogResult<()> {
        self.price = self.price.replace(value).inspect_err(log_rejection)?;
        Ok(())
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} руб. Количество: {} шт.",
            self.name, self.price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product() -> Product {
        Product::new("Test Product", "Test Description", 100.0, 10).unwrap()
    }

    fn test_smartphone() -> Product {
        Product::smartphone(
            "Test Smartphone",
            "Test Description",
            1000.0,
            5,
            95.0,
            "Test Model",
            128,
            "Black",
        )
        .unwrap()
    }

    fn test_grass() -> Product {
        Product::lawn_grass("Test Grass", "Test Description", 50.0, 100, "Test Country", "7 days", "Green")
            .unwrap()
    }

    #[test]
    fn new_product_keeps_fields() {
        let product = test_product();
        assert_eq!(product.name(), "Test Product");
        assert_eq!(product.description(), "Test Description");
        assert_eq!(product.price().value(), 100.0);
        assert_eq!(product.quantity().value(), 10);
        assert_eq!(product.kind(), &ProductKind::Standard);
    }

    #[test]
    fn new_product_rejects_negative_price() {
        let err = Product::new("Invalid Product", "Invalid", -100.0, 10).unwrap_err();
        match err {
            CatalogError::InvalidValue(msg) => {
                assert_eq!(
                    msg,
                    "Цена не может быть отрицательной или нулевой: -100.0, прежнее значение: 0"
                );
            }
            _ => panic!("Expected InvalidValue error for negative price"),
        }
    }

    #[test]
    fn new_product_rejects_zero_price() {
        let err = Product::new("Invalid Product", "Invalid", 0.0, 10).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue(_)));
    }

    #[test]
    fn new_product_rejects_negative_quantity() {
        let err = Product::new("Invalid Product", "Invalid", 100.0, -10).unwrap_err();
        match err {
            CatalogError::InvalidValue(msg) => {
                assert_eq!(msg, "Количество не может быть отрицательным: -10, прежнее значение: 0");
            }
            _ => panic!("Expected InvalidValue error for negative quantity"),
        }
    }

    #[test]
    fn new_product_accepts_zero_quantity() {
        let product = Product::new("Sold out", "Nothing left", 10.0, 0).unwrap();
        assert_eq!(product.quantity(), Quantity::ZERO);
    }

    #[test]
    fn set_price_updates_valid_value() {
        let mut product = test_product();
        product.set_price(150.0).unwrap();
        assert_eq!(product.price().value(), 150.0);
    }

    #[test]
    fn set_price_rejects_invalid_and_keeps_previous() {
        let mut product = Product::new("Test", "Description", 100.0, 1).unwrap();
        product.set_price(200.0).unwrap();

        let err = product.set_price(0.0).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue(_)));
        assert_eq!(product.price().value(), 200.0);

        let err = product.set_price(-50.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Цена не может быть отрицательной или нулевой: -50.0, прежнее значение: 200.0"
        );
        assert_eq!(product.price().value(), 200.0);
    }

    #[test]
    fn set_quantity_rejects_negative_and_keeps_previous() {
        let mut product = Product::new("Test", "Description", 100.0, 1).unwrap();
        product.set_quantity(5).unwrap();
        assert_eq!(product.quantity().value(), 5);

        let err = product.set_quantity(-1).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue(_)));
        assert_eq!(product.quantity().value(), 5);
    }

    #[test]
    fn name_and_description_are_mutable() {
        let mut product = Product::new("Test Product", "Old Description", 100.0, 10).unwrap();
        product.set_name("Updated Product");
        product.set_description("New Description");
        product.set_price(150.0).unwrap();
        product.set_quantity(15).unwrap();

        assert_eq!(product.name(), "Updated Product");
        assert_eq!(product.description(), "New Description");
        assert_eq!(product.price().value(), 150.0);
        assert_eq!(product.quantity().value(), 15);
    }

    #[test]
    fn display_renders_price_and_quantity() {
        assert_eq!(test_product().to_string(), "Test Product, 100.0 руб. Количество: 10 шт.");
    }

    #[test]
    fn smartphone_keeps_extra_fields() {
        let phone = test_smartphone();
        assert_eq!(phone.name(), "Test Smartphone");
        assert_eq!(phone.price().value(), 1000.0);
        assert_eq!(phone.quantity().value(), 5);
        assert_eq!(
            phone.kind(),
            &ProductKind::Smartphone {
                efficiency: 95.0,
                model: "Test Model".to_string(),
                memory: 128,
                color: "Black".to_string(),
            }
        );
    }

    #[test]
    fn lawn_grass_keeps_extra_fields() {
        let grass = test_grass();
        assert_eq!(grass.name(), "Test Grass");
        assert_eq!(grass.quantity().value(), 100);
        match grass.kind() {
            ProductKind::LawnGrass { country, germination_period, color } => {
                assert_eq!(country, "Test Country");
                assert_eq!(germination_period, "7 days");
                assert_eq!(color, "Green");
            }
            other => panic!("Expected LawnGrass, got {other:?}"),
        }
    }

    #[test]
    fn variants_share_base_validation() {
        let err = Product::smartphone("Phone", "Bad", -1.0, 1, 90.0, "M", 64, "Red").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue(_)));

        let err = Product::lawn_grass("Grass", "Bad", 10.0, -3, "RU", "5 days", "Green").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue(_)));
    }

    #[test]
    fn combine_same_variant_sums_stock_values() {
        let a = test_product();
        let b = Product::new("Other", "Other", 200.0, 2).unwrap();
        assert_eq!(a.combine(&b).unwrap(), 100.0 * 10.0 + 200.0 * 2.0);

        let phone = test_smartphone();
        let other_phone =
            Product::smartphone("Other Phone", "D", 500.0, 3, 80.0, "X", 256, "White").unwrap();
        assert_eq!(phone.combine(&other_phone).unwrap(), 1000.0 * 5.0 + 500.0 * 3.0);
    }

    #[test]
    fn combine_different_variants_fails() {
        let err = test_product().combine(&test_smartphone()).unwrap_err();
        match err {
            CatalogError::TypeMismatch(msg) => assert_eq!(msg, "cannot combine standard with smartphone"),
            _ => panic!("Expected TypeMismatch error"),
        }

        let err = test_grass().combine(&test_smartphone()).unwrap_err();
        assert!(matches!(err, CatalogError::TypeMismatch(_)));
    }

    #[test]
    fn separately_built_products_are_distinct_entities() {
        let a = test_product();
        let b = test_product();
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a));
    }

    #[test]
    fn serializes_kind_tag_flat() {
        let json = serde_json::to_value(test_grass()).unwrap();
        assert_eq!(json["kind"], "lawn_grass");
        assert_eq!(json["country"], "Test Country");
        assert_eq!(json["price"], 50.0);
        assert_eq!(json["quantity"], 100);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: any positive finite price is stored exactly.
            #[test]
            fn valid_price_is_stored_exactly(price in 0.0001f64..1.0e12) {
                let mut product = Product::new("P", "D", 1.0, 1).unwrap();
                prop_assert!(product.set_price(price).is_ok());
                prop_assert_eq!(product.price().value(), price);
            }

            /// Property: non-positive prices never replace the current price.
            #[test]
            fn non_positive_price_is_rejected(start in 0.01f64..1.0e6, bad in -1.0e9f64..=0.0) {
                let mut product = Product::new("P", "D", start, 1).unwrap();
                let err = product.set_price(bad).unwrap_err();
                prop_assert!(matches!(err, CatalogError::InvalidValue(_)));
                prop_assert_eq!(product.price().value(), start);
            }

            /// Property: negative quantities never replace the current quantity.
            #[test]
            fn negative_quantity_is_rejected(start in 0i64..1_000_000, bad in i64::MIN..0) {
                let mut product = Product::new("P", "D", 1.0, start).unwrap();
                let err = product.set_quantity(bad).unwrap_err();
                prop_assert!(matches!(err, CatalogError::InvalidValue(_)));
                prop_assert_eq!(product.quantity().value(), start as u64);
            }

            /// Property: combine is the sum of both stock values.
            #[test]
            fn combine_matches_formula(
                p1 in 0.01f64..1.0e6, q1 in 0i64..10_000,
                p2 in 0.01f64..1.0e6, q2 in 0i64..10_000,
            ) {
                let a = Product::new("A", "D", p1, q1).unwrap();
                let b = Product::new("B", "D", p2, q2).unwrap();
                prop_assert_eq!(a.combine(&b).unwrap(), p1 * q1 as f64 + p2 * q2 as f64);
            }
        }
    }
}
