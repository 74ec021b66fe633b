//! Order status lifecycle.

use serde::{Deserialize, Serialize};

use ordena_core::{DomainError, DomainResult};

/// Order status state machine.
///
/// `pending → completed` and `pending → cancelled` are the only legal
/// transitions; `completed` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Validate a transition from `self` to `next`.
    pub fn transition(self, next: OrderStatus) -> DomainResult<OrderStatus> {
        match (self, next) {
            (OrderStatus::Pending, OrderStatus::Completed)
            | (OrderStatus::Pending, OrderStatus::Cancelled) => Ok(next),
            (from, to) => Err(DomainError::invariant(format!(
                "illegal order status transition: {from:?} -> {to:?}"
            ))),
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
