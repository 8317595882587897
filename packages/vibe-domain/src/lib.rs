pub mod catalog;
pub mod normalize;
pub mod query;

pub use catalog::{Product, ProductCatalog};
pub use normalize::normalize;
pub use query::{QueryRejectReason, is_searchable, validate_query};
