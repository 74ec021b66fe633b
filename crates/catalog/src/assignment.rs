//! Product → category assignment index.
//!
//! At most one active assignment per product: reassigning replaces, it does
//! not accumulate. Dangling references (assignments pointing at deleted
//! products or categories) are tolerated in lookups; delete cascades remove
//! them eagerly for the entity actually being deleted.

use serde::{Deserialize, Serialize};

use ordena_core::{CategoryId, ProductId};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAssignment {
    pub product_id: ProductId,
    pub category_id: CategoryId,
}

/// Derived mapping product → category, consulted by the access policy and by
/// catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentIndex {
    assignments: Vec<CategoryAssignment>,
}

impl AssignmentIndex {
    pub fn new(assignments: Vec<CategoryAssignment>) -> Self {
        Self { assignments }
    }

    /// Replace the product's assignment. `None` clears it ("uncategorize").
    pub fn assign(&mut self, product_id: ProductId, category_id: Option<CategoryId>) {
        self.assignments.retain(|a| a.product_id != product_id);
        if let Some(category_id) = category_id {
            self.assignments.push(CategoryAssignment {
                product_id,
                category_id,
            });
        }
    }

    /// Remove all assignments referencing a deleted product.
    pub fn cascade_delete_product(&mut self, product_id: ProductId) {
        self.assignments.retain(|a| a.product_id != product_id);
    }

    /// Remove all assignments referencing a deleted category.
    pub fn cascade_delete_category(&mut self, category_id: CategoryId) {
        self.assignments.retain(|a| a.category_id != category_id);
    }

    pub fn category_of(&self, product_id: ProductId) -> Option<CategoryId> {
        self.assignments
            .iter()
            .find(|a| a.product_id == product_id)
            .map(|a| a.category_id)
    }

    pub fn as_slice(&self) -> &[CategoryAssignment] {
        &self.assignments
    }

    pub fn into_inner(self) -> Vec<CategoryAssignment> {
        self.assignments
    }
}
