//! Monthly analytics aggregation over orders.
//!
//! Admin-only at the API layer; this crate only computes.

use std::collections::HashMap;

use chrono::Datelike;
use serde::Serialize;

use ordena_catalog::Product;
use ordena_core::ProductId;
use ordena_orders::Order;

/// Cap on the product ranking length.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Label used when a ranked product no longer exists in the catalog.
pub const UNKNOWN_PRODUCT_LABEL: &str = "Desconocido";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_orders: usize,
    pub top_products: Vec<TopProduct>,
}

/// Aggregate order statistics, optionally scoped to one calendar month.
///
/// When both `month` (1-indexed) and `year` are supplied, only orders whose
/// creation timestamp falls in that month are considered; otherwise all
/// orders are. The ranking sums line quantities per product, sorts by
/// quantity descending with ascending product id as the deterministic
/// tie-break, and is capped at [`TOP_PRODUCTS_LIMIT`] entries.
pub fn aggregate(
    orders: &[Order],
    catalog: &[Product],
    month: Option<u32>,
    year: Option<i32>,
) -> Report {
    let selected: Vec<&Order> = match (month, year) {
        (Some(month), Some(year)) => orders
            .iter()
            .filter(|o| o.created_at.month() == month && o.created_at.year() == year)
            .collect(),
        _ => orders.iter().collect(),
    };

    let mut counts: HashMap<ProductId, u64> = HashMap::new();
    for order in &selected {
        for line in &order.items {
            *counts.entry(line.product_id).or_insert(0) += u64::from(line.quantity);
        }
    }

    let mut ranking: Vec<(ProductId, u64)> = counts.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranking.truncate(TOP_PRODUCTS_LIMIT);

    let top_products = ranking
        .into_iter()
        .map(|(product_id, quantity)| TopProduct {
            product_id,
            name: catalog
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PRODUCT_LABEL.to_string()),
            quantity,
        })
        .collect();

    Report {
        total_orders: selected.len(),
        top_products,
    }
}
