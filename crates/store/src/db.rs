//! The record store: one repository per collection.

use std::path::{Path, PathBuf};

use ordena_auth::User;
use ordena_catalog::{Branch, Category, CategoryAssignment, Product};
use ordena_core::{BranchId, CategoryId, OrderId, ProductId, UserId};
use ordena_orders::Order;

use crate::{Document, InMemoryRepository, Keyed, Repository, StoreError};

impl Keyed for User {
    type Key = UserId;

    fn key(&self) -> UserId {
        self.id
    }
}

impl Keyed for Product {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.id
    }
}

impl Keyed for Category {
    type Key = CategoryId;

    fn key(&self) -> CategoryId {
        self.id
    }
}

impl Keyed for Branch {
    type Key = BranchId;

    fn key(&self) -> BranchId {
        self.id
    }
}

impl Keyed for Order {
    type Key = OrderId;

    fn key(&self) -> OrderId {
        self.id
    }
}

// One active assignment per product, so the product id is the key.
impl Keyed for CategoryAssignment {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.product_id
    }
}

/// Key-indexed collections for every entity the engine knows about.
///
/// The store is the single source of truth: callers read fresh snapshots per
/// request and never cache entity copies across calls.
#[derive(Debug, Default)]
pub struct InMemoryDb {
    pub users: InMemoryRepository<User>,
    pub products: InMemoryRepository<Product>,
    pub categories: InMemoryRepository<Category>,
    pub assignments: InMemoryRepository<CategoryAssignment>,
    pub branches: InMemoryRepository<Branch>,
    pub orders: InMemoryRepository<Order>,
    snapshot_path: Option<PathBuf>,
}

impl InMemoryDb {
    /// Empty store (tests, ephemeral dev runs).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: Document) -> Self {
        Self {
            users: InMemoryRepository::new(doc.users),
            products: InMemoryRepository::new(doc.products),
            categories: InMemoryRepository::new(doc.categories),
            assignments: InMemoryRepository::new(doc.assignments),
            branches: InMemoryRepository::new(doc.branches),
            orders: InMemoryRepository::new(doc.orders),
            snapshot_path: None,
        }
    }

    /// Load from a JSON snapshot and remember the path for [`Self::persist`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let doc = Document::load(&path)?;
        let mut db = Self::from_document(doc);
        db.snapshot_path = Some(path.as_ref().to_path_buf());
        Ok(db)
    }

    /// Current whole-store snapshot.
    pub fn snapshot(&self) -> Document {
        Document {
            users: self.users.get_all(),
            products: self.products.get_all(),
            categories: self.categories.get_all(),
            assignments: self.assignments.get_all(),
            branches: self.branches.get_all(),
            orders: self.orders.get_all(),
        }
    }

    /// Write the current snapshot back to the path the store was opened
    /// from. A store built without a path is memory-only and this is a
    /// no-op.
    pub fn persist(&self) -> Result<(), StoreError> {
        if let Some(path) = &self.snapshot_path {
            self.snapshot().save(path)?;
            tracing::debug!(path = %path.display(), "store snapshot written");
        }
        Ok(())
    }
}
