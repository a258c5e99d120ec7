//! Products, users and sales held in memory and mirrored to storage.
//!
//! Collections are only ever replaced whole; every replace writes the
//! collection back under its key. Writes are fire-and-forget: a failed
//! write is logged and the in-memory state stays authoritative.
//!
//! A stored collection that cannot be read is copied to `<key>-backup` and
//! left in place: the session runs on seed data and the blob is only
//! overwritten by the next explicit replace.

use contracts::dashboards::d400_sales_metrics::{compute_metrics, SalesMetrics};
use contracts::domain::a001_product::{without_product, Product, ProductForm, ProductId};
use contracts::domain::a002_user::{without_user, User, UserForm, UserId};
use contracts::domain::a003_sale::Sale;
use contracts::shared::validation::ValidationError;
use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use super::seed;
use crate::shared::config::SeedConfig;
use crate::shared::storage::KeyValueStorage;

pub const PRODUCTS_KEY: &str = "dashboard-products";
pub const USERS_KEY: &str = "dashboard-users";
pub const SALES_KEY: &str = "dashboard-sales";
/// Appended to a collection key to name the copy of an unreadable blob
pub const BACKUP_SUFFIX: &str = "-backup";

#[derive(Debug, Clone)]
pub struct DataStore<S: KeyValueStorage> {
    storage: S,
    products: Vec<Product>,
    users: Vec<User>,
    sales: Vec<Sale>,
}

impl<S: KeyValueStorage> DataStore<S> {
    /// Hydrate every collection from storage, seeding the missing ones.
    /// Sales are seeded with an unseeded generator, so a fresh session gets
    /// a different history each time.
    pub fn load(storage: S, seed_config: &SeedConfig) -> Self {
        Self::load_with_rng(storage, seed_config, &mut rand::thread_rng())
    }

    pub fn load_with_rng<R: Rng + ?Sized>(storage: S, seed_config: &SeedConfig, rng: &mut R) -> Self {
        let products = hydrate(&storage, PRODUCTS_KEY);
        let users = hydrate(&storage, USERS_KEY);
        let sales = hydrate(&storage, SALES_KEY);
        // Unreadable blobs stay untouched until the next replace
        let keep_products = products.is_unreadable();
        let keep_users = users.is_unreadable();
        let keep_sales = sales.is_unreadable();

        let store = Self {
            products: products.or_seed(seed::initial_products),
            users: users.or_seed(seed::initial_users),
            sales: sales.or_seed(|| {
                // History is generated against the seed catalogue
                let sales = seed::generate_sales(
                    &seed::initial_products(),
                    &seed::initial_users(),
                    seed_config,
                    rng,
                );
                log::info!("Generated {} synthetic sales", sales.len());
                sales
            }),
            storage,
        };
        if !keep_products {
            store.persist(PRODUCTS_KEY, &store.products);
        }
        if !keep_users {
            store.persist(USERS_KEY, &store.users);
        }
        if !keep_sales {
            store.persist(SALES_KEY, &store.sales);
        }
        store
    }

    /// Wrap collections that are already in memory, without touching storage
    pub fn from_parts(storage: S, products: Vec<Product>, users: Vec<User>, sales: Vec<Sale>) -> Self {
        Self {
            storage,
            products,
            users,
            sales,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.persist(PRODUCTS_KEY, &self.products);
    }

    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.persist(USERS_KEY, &self.users);
    }

    pub fn replace_sales(&mut self, sales: Vec<Sale>) {
        self.sales = sales;
        self.persist(SALES_KEY, &self.sales);
    }

    pub fn add_product(&mut self, form: &ProductForm) -> Result<Product, ValidationError> {
        let (products, created) = form.create(&self.products)?;
        self.replace_products(products);
        log::debug!("Product {} created", created.id);
        Ok(created)
    }

    pub fn update_product(&mut self, id: ProductId, form: &ProductForm) -> Result<(), ValidationError> {
        let products = form.apply(&self.products, id)?;
        self.replace_products(products);
        Ok(())
    }

    pub fn delete_product(&mut self, id: ProductId) {
        let products = without_product(&self.products, id);
        self.replace_products(products);
    }

    pub fn add_user(&mut self, form: &UserForm) -> Result<User, ValidationError> {
        let (users, created) = form.create(&self.users)?;
        self.replace_users(users);
        log::debug!("User {} created", created.id);
        Ok(created)
    }

    pub fn update_user(&mut self, id: UserId, form: &UserForm) -> Result<(), ValidationError> {
        let users = form.apply(&self.users, id)?;
        self.replace_users(users);
        Ok(())
    }

    pub fn delete_user(&mut self, id: UserId) {
        let users = without_user(&self.users, id);
        self.replace_users(users);
    }

    /// Products matching the inventory search box
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .cloned()
            .collect()
    }

    /// Accounts matching the directory search box
    pub fn search_users(&self, query: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.matches_query(query))
            .cloned()
            .collect()
    }

    /// Every dashboard view for the current snapshot
    pub fn metrics(&self) -> SalesMetrics {
        compute_metrics(&self.products, &self.users, &self.sales)
    }

    fn persist<T: Serialize>(&self, key: &str, value: &[T]) {
        if let Err(e) = self.storage.set_json(key, value) {
            log::error!("Failed to persist '{}': {}", key, e);
        }
    }
}

/// Outcome of reading one collection at start-up
enum Hydrated<T> {
    Stored(Vec<T>),
    Missing,
    Unreadable,
}

impl<T> Hydrated<T> {
    fn is_unreadable(&self) -> bool {
        matches!(self, Hydrated::Unreadable)
    }

    fn or_seed(self, seed: impl FnOnce() -> Vec<T>) -> Vec<T> {
        match self {
            Hydrated::Stored(items) => items,
            Hydrated::Missing | Hydrated::Unreadable => seed(),
        }
    }
}

fn hydrate<S: KeyValueStorage, T: DeserializeOwned>(storage: &S, key: &str) -> Hydrated<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Hydrated::Missing,
        Err(e) => {
            log::warn!("Cannot read '{}', using seed data: {}", key, e);
            return Hydrated::Unreadable;
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            log::info!("Hydrated {} records from '{}'", items.len(), key);
            Hydrated::Stored(items)
        }
        Err(e) => {
            let backup_key = format!("{}{}", key, BACKUP_SUFFIX);
            log::warn!(
                "Stored '{}' is unreadable ({}), kept it and copied it to '{}'; using seed data",
                key,
                e,
                backup_key
            );
            if let Err(e) = storage.set_item(&backup_key, &raw) {
                log::error!("Failed to back up '{}': {}", key, e);
            }
            Hydrated::Unreadable
        }
    }
}
