//! Building products from loosely-typed field mappings (e.g. parsed JSON).

use serde_json::{Map, Value};

use vitrina_core::{CatalogError, CatalogResult};

use crate::product::{Product, ProductKind};

/// Field mapping as read from JSON.
pub type Fields = Map<String, Value>;

impl Product {
    /// Build a product from a field mapping.
    ///
    /// Requires `name`, `description`, `price` and `quantity`. An optional
    /// `kind` (`standard`, `smartphone`, `lawn_grass`) selects the variant,
    /// whose own fields are then required as well.
    pub fn from_fields(fields: &Fields) -> CatalogResult<Self> {
        let name = string_field(fields, "name")?;
        let description = string_field(fields, "description")?;
        let price = float_field(fields, "price")?;
        let quantity = int_field(fields, "quantity")?;
        let kind = kind_from_fields(fields)?;

        Product::with_kind(name, description, price, quantity, kind)
    }
}

fn kind_from_fields(fields: &Fields) -> CatalogResult<ProductKind> {
    let tag = match fields.get("kind") {
        None | Some(Value::Null) => return Ok(ProductKind::Standard),
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            return Err(CatalogError::invalid_type(format!(
                "product kind must be a string, got {other}"
            )));
        }
    };

    match tag {
        "standard" => Ok(ProductKind::Standard),
        "smartphone" => Ok(ProductKind::Smartphone {
            efficiency: float_field(fields, "efficiency")?,
            model: string_field(fields, "model")?,
            memory: u32::try_from(int_field(fields, "memory")?)
                .map_err(|_| CatalogError::invalid_value("memory out of range"))?,
            color: string_field(fields, "color")?,
        }),
        "lawn_grass" => Ok(ProductKind::LawnGrass {
            country: string_field(fields, "country")?,
            germination_period: string_field(fields, "germination_period")?,
            color: string_field(fields, "color")?,
        }),
        other => Err(CatalogError::invalid_type(format!("unknown product kind: {other}"))),
    }
}

fn required<'a>(fields: &'a Fields, key: &str) -> CatalogResult<&'a Value> {
    fields.get(key).ok_or_else(|| CatalogError::missing_field(key))
}

fn string_field(fields: &Fields, key: &str) -> CatalogResult<String> {
    required(fields, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CatalogError::invalid_value(format!("{key} must be a string")))
}

fn float_field(fields: &Fields, key: &str) -> CatalogResult<f64> {
    required(fields, key)?
        .as_f64()
        .ok_or_else(|| CatalogError::invalid_value(format!("{key} must be a number")))
}

// Integral floats (`7.0`) count as integers.
fn int_field(fields: &Fields, key: &str) -> CatalogResult<i64> {
    let value = required(fields, key)?;
    if let Some(int) = value.as_i64() {
        return Ok(int);
    }

    let out_of_range = || CatalogError::invalid_value(format!("{key} is out of range"));
    if value.is_u64() {
        return Err(out_of_range());
    }

    match value.as_f64() {
        Some(float) if float.fract() == 0.0 => {
            if float >= i64::MIN as f64 && float < i64::MAX as f64 {
                Ok(float as i64)
            } else {
                Err(out_of_range())
            }
        }
        _ => Err(CatalogError::invalid_value(format!("{key} must be an integer"))),
    }
}
