pub mod context;
pub mod seed;
pub mod store;

pub use context::{use_data, DataContext, DataProvider};
pub use store::{DataStore, PRODUCTS_KEY, SALES_KEY, USERS_KEY};
