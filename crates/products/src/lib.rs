//! Products module.
//!
//! Catalog line items and their validation rules, implemented purely as
//! deterministic domain logic (no IO beyond tracing).

pub mod capability;
pub mod fields;
pub mod product;
pub mod value;

pub use capability::{Priced, Quantified};
pub use fields::Fields;
pub use product::{Product, ProductKind};
pub use value::{Price, Quantity};
