//! Order entity and creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ordena_auth::Principal;
use ordena_core::{BranchId, DomainError, DomainResult, OrderId, ProductId, UserId};

use crate::{order_total, OrderStatus};

/// One product entry within an order request, before pricing.
///
/// Variant attributes are all optional; whichever the cart captured are
/// carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub product_id: ProductId,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub has_lid: Option<bool>,
    #[serde(default)]
    pub lid_type: Option<String>,
    #[serde(default)]
    pub filter_type: Option<String>,
    pub quantity: u32,
}

/// A priced order line. The unit price is captured at order-creation time
/// and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub has_lid: Option<bool>,
    #[serde(default)]
    pub lid_type: Option<String>,
    #[serde(default)]
    pub filter_type: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn amount(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A placed order. Created once by its owner; the status is the only field
/// that ever changes afterwards (Admin-only), and orders are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub branch_id: Option<BranchId>,
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Assemble a new pending order from already-priced lines.
    ///
    /// `user_id` and `branch_id` are stamped from the creating principal;
    /// the total is computed once here and is immutable from then on.
    pub fn create(
        id: OrderId,
        principal: &Principal,
        items: Vec<OrderLine>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::validation("order must have at least one item"));
        }
        if let Some(line) = items.iter().find(|l| l.quantity == 0) {
            return Err(DomainError::validation(format!(
                "quantity must be positive (product {})",
                line.product_id
            )));
        }

        let total = order_total(&items);
        Ok(Self {
            id,
            user_id: principal.user_id,
            branch_id: principal.branch_id,
            items,
            total,
            created_at: now,
            status: OrderStatus::Pending,
        })
    }

    /// Apply an Admin status change, enforcing the state machine.
    pub fn set_status(&mut self, next: OrderStatus) -> DomainResult<()> {
        self.status = self.status.transition(next)?;
        Ok(())
    }
}

/// Next sequential order id: `max(existing) + 1`, or 1 when there are none.
///
/// Callers must invoke this and append the new order while holding the order
/// collection's lock, so the read-max-then-append pair is atomic.
pub fn next_order_id<I>(existing: I) -> OrderId
where
    I: IntoIterator<Item = OrderId>,
{
    existing
        .into_iter()
        .max()
        .map(|id| id.next())
        .unwrap_or(OrderId::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordena_auth::Role;

    fn principal() -> Principal {
        Principal::new(UserId::new(3), Role::Full, Some(BranchId::new(2)))
    }

    fn line(product: u32, quantity: u32, unit_price: f64) -> OrderLine {
        OrderLine {
            product_id: ProductId::new(product),
            size: None,
            has_lid: None,
            lid_type: None,
            filter_type: None,
            quantity,
            unit_price,
        }
    }

    #[test]
    fn create_stamps_owner_branch_and_pending_status() {
        let order = Order::create(
            OrderId::new(1),
            &principal(),
            vec![line(1, 2, 10.0), line(2, 1, 5.5)],
            Utc::now(),
        )
        .unwrap();

        assert_eq!(order.user_id, UserId::new(3));
        assert_eq!(order.branch_id, Some(BranchId::new(2)));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, 25.5);
    }

    #[test]
    fn zero_quantity_line_is_rejected() {
        let err = Order::create(
            OrderId::new(1),
            &principal(),
            vec![line(1, 0, 10.0)],
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = Order::create(OrderId::new(1), &principal(), vec![], Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn status_change_respects_the_state_machine() {
        let mut order = Order::create(
            OrderId::new(1),
            &principal(),
            vec![line(1, 1, 1.0)],
            Utc::now(),
        )
        .unwrap();

        order.set_status(OrderStatus::Completed).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(order.set_status(OrderStatus::Cancelled).is_err());
    }

    #[test]
    fn next_id_is_max_plus_one_and_starts_at_one() {
        assert_eq!(next_order_id(vec![]), OrderId::new(1));
        assert_eq!(
            next_order_id(vec![OrderId::new(3), OrderId::new(9), OrderId::new(4)]),
            OrderId::new(10)
        );
    }

    #[test]
    fn sequential_creation_is_strictly_increasing_and_gap_free() {
        let mut ids: Vec<OrderId> = vec![];
        for expected in 1..=20u32 {
            let id = next_order_id(ids.iter().copied());
            assert_eq!(id, OrderId::new(expected));
            ids.push(id);
        }
    }
}
