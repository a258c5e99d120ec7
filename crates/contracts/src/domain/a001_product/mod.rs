pub mod aggregate;
pub mod form;

pub use aggregate::{Product, ProductId, DEFAULT_PRODUCT_IMAGE};
pub use form::{without_product, ProductForm};
