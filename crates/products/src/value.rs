//! Validated price and quantity value objects.

use serde::Serialize;

use vitrina_core::{CatalogError, CatalogResult, ValueObject};

/// Unit price in roubles. Always finite and strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Validate a price for a product that has no price yet.
    pub fn new(value: f64) -> CatalogResult<Self> {
        Self::validate(value, None)
    }

    /// Validate `value` as the successor of `self`.
    pub fn replace(self, value: f64) -> CatalogResult<Self> {
        Self::validate(value, Some(self.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    // A product with no price yet reports its previous price as a bare `0`.
    fn validate(value: f64, previous: Option<f64>) -> CatalogResult<Self> {
        if value.is_finite() && value > 0.0 {
            return Ok(Self(value));
        }
        let previous = match previous {
            Some(previous) => Decimal(previous).to_string(),
            None => "0".to_string(),
        };
        Err(CatalogError::invalid_value(format!(
            "Цена не может быть отрицательной или нулевой: {}, прежнее значение: {previous}",
            Decimal(value)
        )))
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&Decimal(self.0), f)
    }
}

/// Units in stock. Never negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Validate a quantity for a product that has no quantity yet.
    pub fn new(value: i64) -> CatalogResult<Self> {
        Self::ZERO.replace(value)
    }

    /// Validate `value` as the successor of `self`.
    pub fn replace(self, value: i64) -> CatalogResult<Self> {
        u64::try_from(value).map(Self).map_err(|_| {
            CatalogError::invalid_value(format!(
                "Количество не может быть отрицательным: {value}, прежнее значение: {}",
                self.0
            ))
        })
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Renders a float the way a decimal literal reads: `100.0`, `150.5`.
///
/// Magnitudes from `1e16` up and below `1e-4` switch to exponent form with a
/// signed, two-digit exponent (`1e+16`, `2.5e-05`).
struct Decimal(f64);

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let v = self.0;
        if !v.is_finite() || v == 0.0 {
            return write!(f, "{v:.1}");
        }

        let scientific = format!("{v:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                if !(-4..16).contains(&exponent) {
                    let sign = if exponent < 0 { '-' } else { '+' };
                    return write!(f, "{mantissa}e{sign}{:02}", exponent.abs());
                }
            }
        }

        if v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}
