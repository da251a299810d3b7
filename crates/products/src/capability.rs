//! Capability contracts for anything that carries a price and a stock level.

use vitrina_core::CatalogResult;

use crate::value::{Price, Quantity};

/// Something with a stock level that can be adjusted.
pub trait Quantified {
    fn quantity(&self) -> Quantity;

    /// Replace the stock level. Negative values are rejected and leave the
    /// current quantity in place.
    fn set_quantity(&mut self, value: i64) -> CatalogResult<()>;
}

/// Something sold at a unit price.
pub trait Priced: Quantified {
    fn price(&self) -> Price;

    /// Replace the unit price. Zero, negative and non-finite values are
    /// rejected and leave the current price in place.
    fn set_price(&mut self, value: f64) -> CatalogResult<()>;

    /// Price times quantity.
    fn stock_value(&self) -> f64 {
        self.price().value() * self.quantity().value() as f64
    }
}
