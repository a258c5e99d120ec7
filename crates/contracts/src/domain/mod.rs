pub mod a001_product;
pub mod a002_user;
pub mod a003_sale;
pub mod common;
