//! Persisted document layout and snapshot IO.
//!
//! A single structured JSON document holds every collection, keyed by numeric
//! ids unique within each collection. Collection names match the historical
//! on-disk layout (`productos`, `sucursales`).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ordena_auth::User;
use ordena_catalog::{Branch, Category, CategoryAssignment, Product};
use ordena_orders::Order;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// The whole-store snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default, rename = "productos")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default, rename = "product_categories")]
    pub assignments: Vec<CategoryAssignment>,
    #[serde(default, rename = "sucursales")]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Document {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}
