//! Category entity.

use serde::{Deserialize, Serialize};

use ordena_core::CategoryId;

/// Reserved category id for cleaning products ("artículos de limpieza").
///
/// Limited-role principals are subject to a hard-coded visibility carve-out
/// for this category and every product assigned to it.
pub const CLEANING_CATEGORY: CategoryId = CategoryId::new(4);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Partial update for a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}

impl CategoryUpdate {
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
    }
}
