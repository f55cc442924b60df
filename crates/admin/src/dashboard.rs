//! Dashboard stats and table rows.

use std::collections::HashSet;

use eliteshop_core::{CurrencyCode, OrderId, OrderStatus, Price, ProductId};
use eliteshop_storefront::catalog::Catalog;
use eliteshop_storefront::orders::OrderHistory;
use eliteshop_storefront::storage::StorageError;

/// Rows shown per dashboard table.
const TABLE_LIMIT: usize = 10;

/// Headline numbers at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_orders: usize,
    /// Distinct shipping emails across all orders.
    pub total_customers: usize,
    pub total_revenue: Price,
}

impl DashboardStats {
    /// Compute stats over the catalog and order history.
    #[must_use]
    pub fn compute(catalog: &Catalog, history: &OrderHistory) -> Self {
        let currency = catalog
            .products()
            .first()
            .map_or(CurrencyCode::USD, |p| p.price.currency_code());

        let customers: HashSet<&str> = history
            .all()
            .iter()
            .map(|o| o.shipping.email.as_str())
            .collect();

        let total_revenue = history
            .all()
            .iter()
            .fold(Price::zero(currency), |sum, o| sum.plus(&o.total));

        Self {
            total_products: catalog.products().len(),
            total_orders: history.all().len(),
            total_customers: customers.len(),
            total_revenue,
        }
    }
}

/// One row of the products table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category_label: &'static str,
    pub price: String,
    pub image: String,
    /// "Active" while in stock.
    pub status_label: &'static str,
}

/// The first page of the products table.
#[must_use]
pub fn product_rows(catalog: &Catalog) -> Vec<ProductRow> {
    catalog
        .products()
        .iter()
        .take(TABLE_LIMIT)
        .map(|p| ProductRow {
            id: p.id,
            name: p.name.clone(),
            category_label: p.category.display_name(),
            price: p.price.display(),
            image: p.image.clone(),
            status_label: if p.in_stock { "Active" } else { "Out of Stock" },
        })
        .collect()
}

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: OrderId,
    pub customer: String,
    pub placed_on: String,
    pub status: OrderStatus,
    pub total: String,
}

/// The first page of the orders table, newest first.
#[must_use]
pub fn order_rows(history: &OrderHistory) -> Vec<OrderRow> {
    history
        .all()
        .iter()
        .take(TABLE_LIMIT)
        .map(|o| OrderRow {
            id: o.id.clone(),
            customer: o.shipping.full_name(),
            placed_on: o.placed_at.format("%b %-d, %Y").to_string(),
            status: o.status,
            total: o.total.display(),
        })
        .collect()
}

/// A top-selling product on the analytics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopProduct {
    pub name: &'static str,
    pub sales: u32,
}

/// Sample analytics data for the top-products widget.
#[must_use]
pub const fn top_products() -> [TopProduct; 5] {
    [
        TopProduct { name: "Wireless Headphones", sales: 145 },
        TopProduct { name: "Smart Watch", sales: 132 },
        TopProduct { name: "Laptop Stand", sales: 98 },
        TopProduct { name: "Coffee Maker", sales: 87 },
        TopProduct { name: "Desk Lamp", sales: 76 },
    ]
}

/// Update an order's status from the orders table.
///
/// # Errors
///
/// Returns [`StorageError`] if persisting the change fails.
pub fn set_order_status(
    history: &mut OrderHistory,
    id: &OrderId,
    status: OrderStatus,
) -> Result<(), StorageError> {
    tracing::info!(order_id = %id, status = %status, "Order status updated");
    history.set_status(id, status)
}
