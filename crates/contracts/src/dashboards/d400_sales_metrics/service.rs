//! Metrics derived from the product, user and sale collections.
//!
//! Every function here is total: empty input yields zero or an empty list,
//! dangling product references are skipped and a zero revenue total never
//! divides.

use super::dto::{
    CategorySlice, MonthlyPoint, RegionShare, SalesMetrics, CATEGORY_PALETTE,
    MONTHLY_WINDOW, MONTH_ABBREVIATIONS, TOP_PRODUCTS_LIMIT,
};
use crate::domain::a001_product::{Product, ProductId};
use crate::domain::a002_user::{User, UserId};
use crate::domain::a003_sale::Sale;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Σ amount × quantity over all sales. Starts from `+0.0` so an empty
/// list never yields `-0.0`.
pub fn total_revenue(sales: &[Sale]) -> f64 {
    sales.iter().fold(0.0_f64, |acc, s| acc + s.revenue())
}

pub fn total_orders(sales: &[Sale]) -> usize {
    sales.len()
}

pub fn active_users(users: &[User]) -> usize {
    users.iter().filter(|u| u.is_active()).count()
}

pub fn active_products(products: &[Product]) -> usize {
    products.iter().filter(|p| p.is_active()).count()
}

/// Revenue per order, 0 when there are no orders
pub fn average_order(sales: &[Sale]) -> f64 {
    match total_orders(sales) {
        0 => 0.0,
        orders => total_revenue(sales) / orders as f64,
    }
}

#[derive(Default)]
struct MonthAccumulator {
    sales: u64,
    users: HashSet<UserId>,
    revenue: f64,
    orders: usize,
}

/// Sales grouped by year-month, ascending, limited to the last
/// [`MONTHLY_WINDOW`] months.
pub fn monthly_series(sales: &[Sale]) -> Vec<MonthlyPoint> {
    // BTreeMap keeps "YYYY-MM" keys in chronological order
    let mut months: BTreeMap<&str, MonthAccumulator> = BTreeMap::new();

    for sale in sales {
        let acc = months.entry(sale.month_key()).or_default();
        acc.sales += u64::from(sale.quantity);
        acc.users.insert(sale.user_id);
        acc.revenue += sale.revenue();
        acc.orders += 1;
    }

    let skip = months.len().saturating_sub(MONTHLY_WINDOW);

    months
        .into_iter()
        .skip(skip)
        .map(|(period, acc)| MonthlyPoint {
            period: period.to_string(),
            month: month_label(period),
            sales: acc.sales,
            users: acc.users.len(),
            revenue: acc.revenue.round() as i64,
            orders: acc.orders,
        })
        .collect()
}

/// "2024-08" -> "Aug". Keys without a valid month number are shown as is.
fn month_label(period: &str) -> String {
    period
        .get(5..7)
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|m| (1..=12).contains(m))
        .map(|m| MONTH_ABBREVIATIONS[m - 1].to_string())
        .unwrap_or_else(|| period.to_string())
}

/// Units sold per product category, in the order categories are first met
/// while walking the sales. Sales whose product no longer exists are skipped.
pub fn category_breakdown(products: &[Product], sales: &[Sale]) -> Vec<CategorySlice> {
    let mut by_id: HashMap<ProductId, &Product> = HashMap::new();
    for product in products {
        by_id.entry(product.id).or_insert(product);
    }

    let mut order: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in sales {
        let Some(product) = by_id.get(&sale.product_id) else {
            continue;
        };
        let category = product.category.as_str();
        let slot = *index.entry(category).or_insert_with(|| {
            order.push((category, 0));
            order.len() - 1
        });
        order[slot].1 += u64::from(sale.quantity);
    }

    order
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| CategorySlice {
            name: name.to_string(),
            value,
            color: CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()].to_string(),
        })
        .collect()
}

/// Revenue per region with percentage share, sorted by revenue descending.
/// Regions with equal revenue keep their first-seen order.
pub fn region_breakdown(sales: &[Sale]) -> Vec<RegionShare> {
    let mut order: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in sales {
        let region = sale.region.as_str();
        let slot = *index.entry(region).or_insert_with(|| {
            order.push((region, 0.0));
            order.len() - 1
        });
        order[slot].1 += sale.revenue();
    }

    let grand_total = order.iter().fold(0.0_f64, |acc, (_, v)| acc + *v);

    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    order
        .into_iter()
        .map(|(region, value)| RegionShare {
            region: region.to_string(),
            sales: value.round() as i64,
            percentage: if grand_total > 0.0 {
                (value / grand_total * 100.0).round() as i64
            } else {
                0
            },
        })
        .collect()
}

/// Best sellers by units sold. Each product's `sales` field is replaced by
/// the quantity summed over the sale records (0 when it has none); ties keep
/// the input order.
pub fn top_products(products: &[Product], sales: &[Sale]) -> Vec<Product> {
    let mut sold: HashMap<ProductId, u64> = HashMap::new();
    for sale in sales {
        *sold.entry(sale.product_id).or_insert(0) += u64::from(sale.quantity);
    }

    let mut ranked: Vec<Product> = products
        .iter()
        .map(|p| Product {
            sales: sold.get(&p.id).copied().unwrap_or(0),
            ..p.clone()
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked.truncate(TOP_PRODUCTS_LIMIT);
    ranked
}

/// All dashboard views for one snapshot of the collections
pub fn compute_metrics(products: &[Product], users: &[User], sales: &[Sale]) -> SalesMetrics {
    SalesMetrics {
        total_revenue: total_revenue(sales),
        total_orders: total_orders(sales),
        active_users: active_users(users),
        active_products: active_products(products),
        average_order: average_order(sales),
        monthly: monthly_series(sales),
        categories: category_breakdown(products, sales),
        regions: region_breakdown(sales),
        top_products: top_products(products, sales),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_user::UserRole;
    use crate::domain::a003_sale::SaleId;
    use crate::domain::common::RecordStatus;

    fn product(id: i64, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {}", id),
            category: category.to_string(),
            price: 10.0,
            stock: 5,
            status: RecordStatus::Active,
            image: String::new(),
            sales: 999,
        }
    }

    fn user(id: i64, status: RecordStatus) -> User {
        User {
            id: UserId(id),
            name: format!("User {}", id),
            email: format!("u{}@example.com", id),
            phone: String::new(),
            role: UserRole::User,
            status,
            avatar: String::new(),
        }
    }

    fn sale(id: i64, product_id: i64, user_id: i64, amount: f64, quantity: u32, date: &str, region: &str) -> Sale {
        Sale {
            id: SaleId(id),
            product_id: ProductId(product_id),
            user_id: UserId(user_id),
            amount,
            quantity,
            date: date.to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn test_three_sales_same_product() {
        let sales = vec![
            sale(1, 1, 1, 10.0, 1, "2024-07-01", "Europe"),
            sale(2, 1, 1, 10.0, 2, "2024-07-02", "Europe"),
            sale(3, 1, 2, 10.0, 3, "2024-07-03", "Asia"),
        ];
        assert_eq!(total_revenue(&sales), 60.0);
        assert_eq!(total_orders(&sales), 3);
        assert_eq!(average_order(&sales), 20.0);
    }

    #[test]
    fn test_empty_sales() {
        let products = vec![product(1, "Electronics"), product(2, "Home"), product(3, "Home")];
        assert_eq!(total_revenue(&[]), 0.0);
        assert!(total_revenue(&[]).is_sign_positive());
        assert_eq!(format!("{:.2}", total_revenue(&[])), "0.00");
        assert_eq!(average_order(&[]), 0.0);
        assert!(average_order(&[]).is_sign_positive());
        assert!(monthly_series(&[]).is_empty());
        assert!(category_breakdown(&products, &[]).is_empty());
        assert!(region_breakdown(&[]).is_empty());

        let top = top_products(&products, &[]);
        let ids: Vec<_> = top.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(top.iter().all(|p| p.sales == 0));
    }

    #[test]
    fn test_active_counts() {
        let users = vec![
            user(1, RecordStatus::Active),
            user(2, RecordStatus::Inactive),
            user(3, RecordStatus::Active),
        ];
        assert_eq!(active_users(&users), 2);

        let mut products = vec![product(1, "Home"), product(2, "Home")];
        products[1].status = RecordStatus::Inactive;
        assert_eq!(active_products(&products), 1);
    }

    #[test]
    fn test_monthly_series_groups_and_labels() {
        let sales = vec![
            sale(1, 1, 1, 10.25, 2, "2024-08-03", "Europe"),
            sale(2, 1, 2, 10.25, 1, "2024-07-15", "Europe"),
            sale(3, 2, 1, 5.0, 1, "2024-08-20", "Asia"),
            sale(4, 2, 1, 5.0, 3, "2024-08-21", "Asia"),
        ];
        let series = monthly_series(&sales);
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].period, "2024-07");
        assert_eq!(series[0].month, "Jul");
        assert_eq!(series[0].sales, 1);
        assert_eq!(series[0].users, 1);
        assert_eq!(series[0].revenue, 10);
        assert_eq!(series[0].orders, 1);

        assert_eq!(series[1].month, "Aug");
        assert_eq!(series[1].sales, 6);
        assert_eq!(series[1].users, 1);
        // 20.5 + 5 + 15 = 40.5
        assert_eq!(series[1].revenue, 41);
        assert_eq!(series[1].orders, 3);
    }

    #[test]
    fn test_monthly_series_keeps_last_seven() {
        let sales: Vec<Sale> = (1..=10)
            .map(|m| sale(m, 1, 1, 1.0, 1, &format!("2023-{:02}-10", m), "Asia"))
            .collect();
        let series = monthly_series(&sales);
        assert_eq!(series.len(), MONTHLY_WINDOW);
        assert_eq!(series.first().unwrap().period, "2023-04");
        assert_eq!(series.last().unwrap().period, "2023-10");
        assert!(series.windows(2).all(|w| w[0].period < w[1].period));
    }

    #[test]
    fn test_monthly_series_crosses_year_boundary() {
        let sales = vec![
            sale(1, 1, 1, 1.0, 1, "2025-01-05", "Asia"),
            sale(2, 1, 1, 1.0, 1, "2024-12-05", "Asia"),
        ];
        let labels: Vec<_> = monthly_series(&sales).into_iter().map(|p| p.month).collect();
        assert_eq!(labels, vec!["Dec", "Jan"]);
    }

    #[test]
    fn test_month_label_fallback() {
        assert_eq!(month_label("2024-13"), "2024-13");
        assert_eq!(month_label("bad"), "bad");
        assert_eq!(month_label("2024-02"), "Feb");
    }

    #[test]
    fn test_category_breakdown_first_seen_order_and_palette() {
        let products = vec![
            product(1, "Electronics"),
            product(2, "Accessories"),
            product(3, "Electronics"),
        ];
        let sales = vec![
            sale(1, 2, 1, 1.0, 4, "2024-07-01", "Asia"),
            sale(2, 1, 1, 1.0, 1, "2024-07-01", "Asia"),
            sale(3, 3, 1, 1.0, 2, "2024-07-01", "Asia"),
        ];
        let slices = category_breakdown(&products, &sales);
        assert_eq!(
            slices,
            vec![
                CategorySlice {
                    name: "Accessories".into(),
                    value: 4,
                    color: CATEGORY_PALETTE[0].into()
                },
                CategorySlice {
                    name: "Electronics".into(),
                    value: 3,
                    color: CATEGORY_PALETTE[1].into()
                },
            ]
        );
    }

    #[test]
    fn test_category_palette_wraps() {
        let products: Vec<Product> = (1..=6).map(|i| product(i, &format!("C{}", i))).collect();
        let sales: Vec<Sale> = (1..=6)
            .map(|i| sale(i, i, 1, 1.0, 1, "2024-07-01", "Asia"))
            .collect();
        let slices = category_breakdown(&products, &sales);
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[5].color, CATEGORY_PALETTE[0]);
    }

    #[test]
    fn test_deleted_product_skipped_in_categories_but_counted_in_revenue() {
        let products = vec![product(1, "Home")];
        let sales = vec![
            sale(1, 1, 1, 10.0, 1, "2024-07-01", "Asia"),
            sale(2, 42, 1, 10.0, 5, "2024-07-01", "Asia"),
        ];
        let slices = category_breakdown(&products, &sales);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].value, 1);
        assert_eq!(total_revenue(&sales), 60.0);
    }

    #[test]
    fn test_region_breakdown_sorted_with_percentages() {
        let sales = vec![
            sale(1, 1, 1, 10.0, 1, "2024-07-01", "Europe"),
            sale(2, 1, 1, 10.0, 3, "2024-07-01", "Asia"),
            sale(3, 1, 1, 10.0, 1, "2024-07-01", "Others"),
            sale(4, 1, 1, 10.0, 1, "2024-07-01", "Europe"),
        ];
        let regions = region_breakdown(&sales);
        let names: Vec<_> = regions.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(names, vec!["Asia", "Europe", "Others"]);
        assert_eq!(regions[0].sales, 30);
        assert_eq!(regions[0].percentage, 50);
        assert_eq!(regions[1].percentage, 33);
        assert_eq!(regions[2].percentage, 17);

        let sum: i64 = regions.iter().map(|r| r.percentage).sum();
        assert!((sum - 100).abs() <= regions.len() as i64);
    }

    #[test]
    fn test_region_breakdown_zero_total() {
        let sales = vec![
            sale(1, 1, 1, 0.0, 2, "2024-07-01", "Europe"),
            sale(2, 1, 1, 0.0, 1, "2024-07-01", "Asia"),
        ];
        let regions = region_breakdown(&sales);
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.percentage == 0 && r.sales == 0));
        // equal totals keep first-seen order
        assert_eq!(regions[0].region, "Europe");
    }

    #[test]
    fn test_top_products_ranking() {
        let products: Vec<Product> = (1..=7).map(|i| product(i, "Home")).collect();
        let sales = vec![
            sale(1, 3, 1, 1.0, 5, "2024-07-01", "Asia"),
            sale(2, 6, 1, 1.0, 2, "2024-07-01", "Asia"),
            sale(3, 6, 1, 1.0, 3, "2024-07-01", "Asia"),
            sale(4, 2, 1, 1.0, 1, "2024-07-01", "Asia"),
            sale(5, 99, 1, 1.0, 50, "2024-07-01", "Asia"),
        ];
        let top = top_products(&products, &sales);
        assert_eq!(top.len(), TOP_PRODUCTS_LIMIT);
        let ranked: Vec<_> = top.iter().map(|p| (p.id.0, p.sales)).collect();
        // 3 and 6 tie on 5 units; 3 comes first in the product list
        assert_eq!(ranked, vec![(3, 5), (6, 5), (2, 1), (1, 0), (4, 0)]);
        assert!(top.windows(2).all(|w| w[0].sales >= w[1].sales));
    }

    #[test]
    fn test_compute_metrics_bundles_views() {
        let products = vec![product(1, "Home")];
        let users = vec![user(1, RecordStatus::Active)];
        let sales = vec![sale(1, 1, 1, 2.5, 4, "2024-09-12", "Asia")];
        let metrics = compute_metrics(&products, &users, &sales);
        assert_eq!(metrics.total_revenue, 10.0);
        assert_eq!(metrics.total_orders, 1);
        assert_eq!(metrics.active_users, 1);
        assert_eq!(metrics.active_products, 1);
        assert_eq!(metrics.monthly.len(), 1);
        assert_eq!(metrics.categories[0].value, 4);
        assert_eq!(metrics.regions[0].percentage, 100);
        assert_eq!(metrics.top_products[0].sales, 4);
    }
}
