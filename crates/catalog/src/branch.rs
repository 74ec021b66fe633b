//! Branch ("sucursal") entity.
//!
//! Read-only from the engine's perspective; referenced by users and copied
//! onto orders at creation time.

use serde::{Deserialize, Serialize};

use ordena_core::BranchId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub address: String,
    pub phone: String,
}
