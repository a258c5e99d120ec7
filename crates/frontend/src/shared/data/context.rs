//! Reactive access to the [`DataStore`] for components.

use contracts::dashboards::d400_sales_metrics::SalesMetrics;
use contracts::domain::a001_product::{Product, ProductForm, ProductId};
use contracts::domain::a002_user::{User, UserForm, UserId};
use contracts::domain::a003_sale::Sale;
use leptos::prelude::*;

use super::store::DataStore;
use crate::shared::config::SeedConfig;
use crate::shared::error::UpdateError;
use crate::shared::storage::BrowserStorage;

const STORE_NAME: &str = "data store";

#[derive(Clone, Copy)]
pub struct DataContext {
    pub store: RwSignal<DataStore<BrowserStorage>>,
}

impl DataContext {
    pub fn products(&self) -> Vec<Product> {
        self.store.with(|s| s.products().to_vec())
    }

    pub fn users(&self) -> Vec<User> {
        self.store.with(|s| s.users().to_vec())
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.store.with(|s| s.sales().to_vec())
    }

    pub fn metrics(&self) -> SalesMetrics {
        self.store.with(|s| s.metrics())
    }

    pub fn replace_products(&self, products: Vec<Product>) {
        self.store.update(|s| s.replace_products(products));
    }

    pub fn replace_users(&self, users: Vec<User>) {
        self.store.update(|s| s.replace_users(users));
    }

    pub fn replace_sales(&self, sales: Vec<Sale>) {
        self.store.update(|s| s.replace_sales(sales));
    }

    pub fn add_product(&self, form: &ProductForm) -> Result<Product, UpdateError> {
        let created = self
            .store
            .try_update(|s| s.add_product(form))
            .ok_or(UpdateError::Disposed(STORE_NAME))??;
        Ok(created)
    }

    pub fn update_product(&self, id: ProductId, form: &ProductForm) -> Result<(), UpdateError> {
        self.store
            .try_update(|s| s.update_product(id, form))
            .ok_or(UpdateError::Disposed(STORE_NAME))??;
        Ok(())
    }

    pub fn delete_product(&self, id: ProductId) {
        self.store.update(|s| s.delete_product(id));
    }

    pub fn add_user(&self, form: &UserForm) -> Result<User, UpdateError> {
        let created = self
            .store
            .try_update(|s| s.add_user(form))
            .ok_or(UpdateError::Disposed(STORE_NAME))??;
        Ok(created)
    }

    pub fn update_user(&self, id: UserId, form: &UserForm) -> Result<(), UpdateError> {
        self.store
            .try_update(|s| s.update_user(id, form))
            .ok_or(UpdateError::Disposed(STORE_NAME))??;
        Ok(())
    }

    pub fn delete_user(&self, id: UserId) {
        self.store.update(|s| s.delete_user(id));
    }
}

/// Loads the store once and shares it with all children.
#[component]
pub fn DataProvider(seed: SeedConfig, children: Children) -> impl IntoView {
    let store = DataStore::load(BrowserStorage, &seed);
    log::info!(
        "Data store ready: {} products, {} users, {} sales",
        store.products().len(),
        store.users().len(),
        store.sales().len()
    );
    provide_context(DataContext {
        store: RwSignal::new(store),
    });

    children()
}

/// Hook to use the data context.
pub fn use_data() -> DataContext {
    use_context::<DataContext>().expect("DataContext not found. Wrap your app with DataProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordStatus;

    fn unmounted_context() -> DataContext {
        let store = RwSignal::new(DataStore::from_parts(BrowserStorage, Vec::new(), Vec::new(), Vec::new()));
        store.dispose();
        DataContext { store }
    }

    #[test]
    fn test_writes_after_unmount_are_reported() {
        let ctx = unmounted_context();
        let product = ProductForm {
            name: "Desk Mat".into(),
            category: "Accessories".into(),
            price: "19.90".into(),
            stock: "12".into(),
            status: RecordStatus::Active,
        };
        assert_eq!(ctx.add_product(&product), Err(UpdateError::Disposed(STORE_NAME)));
        assert_eq!(
            ctx.update_product(ProductId(1), &product),
            Err(UpdateError::Disposed(STORE_NAME))
        );

        let user = UserForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            ..UserForm::default()
        };
        assert_eq!(ctx.add_user(&user), Err(UpdateError::Disposed(STORE_NAME)));
        assert_eq!(ctx.update_user(UserId(1), &user), Err(UpdateError::Disposed(STORE_NAME)));
    }
}
