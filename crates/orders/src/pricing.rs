//! Line pricing and total computation.

use ordena_catalog::Product;
use ordena_core::round2;

use crate::{LineItemRequest, OrderLine};

/// Resolve unit prices for requested line items against a catalog snapshot.
///
/// An unknown product reference prices at zero rather than failing the whole
/// order; one bad reference does not reject the rest of the cart.
pub fn price_lines(requests: Vec<LineItemRequest>, catalog: &[Product]) -> Vec<OrderLine> {
    requests
        .into_iter()
        .map(|req| {
            let unit_price = catalog
                .iter()
                .find(|p| p.id == req.product_id)
                .map(|p| p.price)
                .unwrap_or(0.0);
            OrderLine {
                product_id: req.product_id,
                size: req.size,
                has_lid: req.has_lid,
                lid_type: req.lid_type,
                filter_type: req.filter_type,
                quantity: req.quantity,
                unit_price,
            }
        })
        .collect()
}

/// Order total: `Σ(unit_price × quantity)` rounded to 2 decimal places.
pub fn order_total(lines: &[OrderLine]) -> f64 {
    round2(lines.iter().map(OrderLine::amount).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordena_core::ProductId;
    use proptest::prelude::*;

    fn request(product: u32, quantity: u32) -> LineItemRequest {
        LineItemRequest {
            product_id: ProductId::new(product),
            size: None,
            has_lid: None,
            lid_type: None,
            filter_type: None,
            quantity,
        }
    }

    fn product(id: u32, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            image: None,
            price,
            has_lid: None,
            lid_type: None,
        }
    }

    #[test]
    fn prices_are_captured_from_the_catalog() {
        let catalog = vec![product(1, 10.0), product(2, 5.5)];
        let lines = price_lines(vec![request(1, 2), request(2, 1)], &catalog);

        assert_eq!(lines[0].unit_price, 10.0);
        assert_eq!(lines[1].unit_price, 5.5);
        assert_eq!(order_total(&lines), 25.5);
    }

    #[test]
    fn unknown_product_prices_at_zero() {
        let catalog = vec![product(1, 10.0)];
        let lines = price_lines(vec![request(1, 1), request(99, 3)], &catalog);

        assert_eq!(lines[1].unit_price, 0.0);
        assert_eq!(order_total(&lines), 10.0);
    }

    proptest! {
        /// Property: the total always equals the rounded sum of line amounts.
        #[test]
        fn total_matches_line_amounts(
            quantities in proptest::collection::vec(1u32..100, 1..8),
            prices in proptest::collection::vec(0.01f64..500.0, 8),
        ) {
            let catalog: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| product(i as u32 + 1, round2(*p)))
                .collect();
            let requests: Vec<LineItemRequest> = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| request(i as u32 + 1, *q))
                .collect();

            let lines = price_lines(requests, &catalog);
            let expected: f64 = lines
                .iter()
                .map(|l| l.unit_price * f64::from(l.quantity))
                .sum();
            prop_assert_eq!(order_total(&lines), round2(expected));
        }
    }
}
