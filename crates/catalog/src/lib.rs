//! Catalog domain: products, categories, branches, and the product→category
//! assignment index.
//!
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod assignment;
pub mod branch;
pub mod category;
pub mod product;

pub use assignment::{AssignmentIndex, CategoryAssignment};
pub use branch::Branch;
pub use category::{Category, CategoryUpdate, CLEANING_CATEGORY};
pub use product::{Product, ProductUpdate};
