//! Request/response DTOs and JSON mapping helpers.

use serde::{Deserialize, Serialize};

use ordena_auth::{RedactedUser, Role};
use ordena_catalog::Branch;
use ordena_core::{BranchId, CategoryId};
use ordena_orders::{LineItemRequest, Order, OrderStatus};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub has_lid: Option<bool>,
    #[serde(default)]
    pub lid_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// `category_id: null` (or absent) clears the assignment.
#[derive(Debug, Deserialize)]
pub struct AssignCategoryRequest {
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<LineItemRequest>,
}

#[derive(Debug, Deserialize)]
pub struct SetOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub branch_id: Option<BranchId>,
    #[serde(default)]
    pub view_all_categories: bool,
    #[serde(default)]
    pub allowed_categories: Vec<CategoryId>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Order listing entry, annotated with its branch.
#[derive(Debug, Serialize)]
pub struct OrderWithBranch {
    #[serde(flatten)]
    pub order: Order,
    pub sucursal: Option<Branch>,
}

impl OrderWithBranch {
    pub fn annotate(order: Order, branches: &[Branch]) -> Self {
        let sucursal = order
            .branch_id
            .and_then(|bid| branches.iter().find(|b| b.id == bid).cloned());
        Self { order, sucursal }
    }
}

/// Single-order view: branch and (redacted) owning user included.
#[derive(Debug, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub sucursal: Option<Branch>,
    pub user: Option<RedactedUser>,
}
