//! Seed dataset for a fresh session: fixed products and users, and a
//! pseudo-random sales history.

use contracts::domain::a001_product::{Product, ProductId, DEFAULT_PRODUCT_IMAGE};
use contracts::domain::a002_user::{User, UserId, UserRole, DEFAULT_AVATAR};
use contracts::domain::a003_sale::{Sale, SaleId, REGIONS};
use contracts::domain::common::RecordStatus;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::shared::config::SeedConfig;

pub fn initial_products() -> Vec<Product> {
    let rows: [(i64, &str, &str, f64, u32, RecordStatus, u64); 5] = [
        (1, "Wireless Headphones", "Electronics", 199.99, 45, RecordStatus::Active, 1245),
        (2, "Smart Watch Pro", "Electronics", 299.99, 28, RecordStatus::Active, 892),
        (3, "Laptop Stand", "Accessories", 49.99, 67, RecordStatus::Active, 634),
        (4, "USB-C Hub", "Accessories", 39.99, 0, RecordStatus::Inactive, 421),
        (5, "Mechanical Keyboard", "Electronics", 159.99, 34, RecordStatus::Active, 758),
    ];
    rows.into_iter()
        .map(|(id, name, category, price, stock, status, sales)| Product {
            id: ProductId(id),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            status,
            image: DEFAULT_PRODUCT_IMAGE.to_string(),
            sales,
        })
        .collect()
}

pub fn initial_users() -> Vec<User> {
    let rows: [(i64, &str, &str, UserRole, RecordStatus); 5] = [
        (1, "John Doe", "john@example.com", UserRole::Admin, RecordStatus::Active),
        (2, "Sarah Johnson", "sarah@example.com", UserRole::Manager, RecordStatus::Active),
        (3, "Michael Chen", "michael@example.com", UserRole::User, RecordStatus::Active),
        (4, "Emma Wilson", "emma@example.com", UserRole::User, RecordStatus::Inactive),
        (5, "David Brown", "david@example.com", UserRole::Manager, RecordStatus::Active),
    ];
    rows.into_iter()
        .map(|(id, name, email, role, status)| User {
            id: UserId(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: format!("+1 234 567 89{:02}", id - 1),
            role,
            status,
            avatar: DEFAULT_AVATAR.to_string(),
        })
        .collect()
}

/// For every configured month and every product, a random number of sales
/// in `min..=max` with random day, buyer, quantity and region. The amount is
/// the product's current price. Ids run from 1 without gaps.
pub fn generate_sales<R: Rng + ?Sized>(
    products: &[Product],
    users: &[User],
    config: &SeedConfig,
    rng: &mut R,
) -> Vec<Sale> {
    let mut sales = Vec::new();
    if users.is_empty() {
        return sales;
    }

    let max_sales = config.max_sales_per_product.max(config.min_sales_per_product);
    let max_quantity = config.max_quantity.max(1);
    let max_day = config.max_day.clamp(1, 28);
    let mut id = 1;

    for month in &config.months {
        for product in products {
            let count = rng.gen_range(config.min_sales_per_product..=max_sales);
            for _ in 0..count {
                let day = rng.gen_range(1..=max_day);
                let (Some(user), Some(region)) = (users.choose(rng), REGIONS.choose(rng)) else {
                    continue;
                };
                sales.push(Sale {
                    id: SaleId(id),
                    product_id: product.id,
                    user_id: user.id,
                    amount: product.price,
                    quantity: rng.gen_range(1..=max_quantity),
                    date: format!("{}-{:02}", month, day),
                    region: region.to_string(),
                });
                id += 1;
            }
        }
    }

    sales
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_data() {
        let products = initial_products();
        let users = initial_users();
        assert_eq!(products.len(), 5);
        assert_eq!(users.len(), 5);
        assert_eq!(products[3].status, RecordStatus::Inactive);
        assert_eq!(users[0].phone, "+1 234 567 8900");
        assert_eq!(users[4].phone, "+1 234 567 8904");
    }

    #[test]
    fn test_generated_sales_shape() {
        let config = Config::default().seed;
        let products = initial_products();
        let users = initial_users();
        let mut rng = StdRng::seed_from_u64(7);

        let sales = generate_sales(&products, &users, &config, &mut rng);

        let min = config.months.len() * products.len() * config.min_sales_per_product as usize;
        let max = config.months.len() * products.len() * config.max_sales_per_product as usize;
        assert!(sales.len() >= min && sales.len() <= max);

        for (i, sale) in sales.iter().enumerate() {
            assert_eq!(sale.id, SaleId(i as i64 + 1));
            assert!((1..=3).contains(&sale.quantity));
            assert!(REGIONS.contains(&sale.region.as_str()));
            assert!(config.months.iter().any(|m| m == sale.month_key()));
            let day: u32 = sale.date[8..].parse().unwrap();
            assert!((1..=28).contains(&day));
            let product = products.iter().find(|p| p.id == sale.product_id).unwrap();
            assert_eq!(sale.amount, product.price);
            assert!(users.iter().any(|u| u.id == sale.user_id));
        }
    }

    #[test]
    fn test_no_users_no_sales() {
        let config = Config::default().seed;
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_sales(&initial_products(), &[], &config, &mut rng).is_empty());
    }
}
