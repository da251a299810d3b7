//! Categories module.
//!
//! Named groups of shared products plus the process-wide counters that track
//! how many categories and category memberships have ever been created.

pub mod category;
pub mod registry;

pub use category::Category;
pub use registry::CategoryRegistry;
