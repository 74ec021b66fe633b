//! Order engine: creation pricing, sequential id assignment, and the order
//! status lifecycle.
//!
//! Pure domain logic; persistence and authorization are handled by the
//! caller (`ordena-store`, `ordena-policy`).

pub mod order;
pub mod pricing;
pub mod status;

pub use order::{next_order_id, LineItemRequest, Order, OrderLine};
pub use pricing::{order_total, price_lines};
pub use status::OrderStatus;
