//! Application service layer.
//!
//! One place where the store, the session registry, the access policy, and
//! the order engine meet. Handlers stay thin: they parse, call one service
//! method, and map the result. Every policy gate is enforced here so no
//! endpoint can forget it.

use std::sync::Arc;

use chrono::Utc;

use ordena_analytics::Report;
use ordena_auth::{
    InMemorySessionStore, Principal, RedactedUser, SessionStore, User, UserUpdate,
};
use ordena_catalog::{
    AssignmentIndex, Branch, Category, CategoryUpdate, Product, ProductUpdate,
};
use ordena_core::{CategoryId, DomainError, DomainResult, OrderId, ProductId, UserId};
use ordena_orders::{next_order_id, price_lines, LineItemRequest, Order, OrderStatus};
use ordena_policy::{
    authorize_order_read, filter_categories, filter_orders, filter_products, require_admin,
};
use ordena_store::{InMemoryDb, InMemoryRepository, Repository};

use crate::app::dto;

pub struct AppServices {
    pub db: InMemoryDb,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppServices {
    pub fn new(db: InMemoryDb) -> Self {
        Self::with_sessions(db, Arc::new(InMemorySessionStore::new()))
    }

    /// Inject a different session registry (e.g. a distributed cache).
    pub fn with_sessions(db: InMemoryDb, sessions: Arc<dyn SessionStore>) -> Self {
        Self { db, sessions }
    }

    /// Write the snapshot back after a mutation. Durability is the store's
    /// concern, not the engine's: a failed write is logged, never surfaced.
    fn persist(&self) {
        if let Err(e) = self.db.persist() {
            tracing::error!("store snapshot write failed: {e}");
        }
    }

    // ── auth ────────────────────────────────────────────────────────────

    /// Username/credential login. The issued session holds a snapshot of the
    /// user's role and branch as of now.
    pub fn login(&self, username: &str, password: &str) -> Option<(String, RedactedUser)> {
        let user = self
            .db
            .users
            .get_all()
            .into_iter()
            .find(|u| u.username == username && u.password == password)?;

        let token = self.sessions.create(user.principal());
        tracing::info!(user_id = %user.id, "login");
        Some((token, user.redacted()))
    }

    pub fn logout(&self, token: &str) {
        self.sessions.revoke(token);
    }

    // ── catalog ─────────────────────────────────────────────────────────

    pub fn list_products(&self, principal: &Principal) -> Vec<Product> {
        let index = AssignmentIndex::new(self.db.assignments.get_all());
        filter_products(principal, self.db.products.get_all(), &index)
    }

    pub fn get_product(&self, id: ProductId) -> DomainResult<Product> {
        self.db.products.get_by_id(id).ok_or(DomainError::NotFound)
    }

    pub fn create_product(
        &self,
        principal: &Principal,
        req: dto::CreateProductRequest,
    ) -> DomainResult<Product> {
        require_admin(principal)?;

        let product = self.db.products.update(|items| {
            let id = InMemoryRepository::<Product>::next_key(items);
            let product = Product {
                id,
                name: req.name,
                description: req.description,
                image: req.image,
                price: req.price,
                has_lid: req.has_lid,
                lid_type: req.lid_type,
            };
            items.push(product.clone());
            product
        });

        self.persist();
        Ok(product)
    }

    pub fn update_product(
        &self,
        principal: &Principal,
        id: ProductId,
        patch: ProductUpdate,
    ) -> DomainResult<Product> {
        require_admin(principal)?;

        let product = self.db.products.update(|items| {
            let product = items
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(DomainError::NotFound)?;
            patch.apply_to(product);
            Ok::<_, DomainError>(product.clone())
        })?;

        self.persist();
        Ok(product)
    }

    pub fn delete_product(&self, principal: &Principal, id: ProductId) -> DomainResult<()> {
        require_admin(principal)?;

        if !self.db.products.delete(id) {
            return Err(DomainError::NotFound);
        }
        self.db.assignments.update(|items| {
            let mut index = AssignmentIndex::new(std::mem::take(items));
            index.cascade_delete_product(id);
            *items = index.into_inner();
        });

        self.persist();
        Ok(())
    }

    /// Replace or clear a product's category assignment.
    pub fn assign_category(
        &self,
        principal: &Principal,
        product_id: ProductId,
        category_id: Option<CategoryId>,
    ) -> DomainResult<()> {
        require_admin(principal)?;

        self.db.assignments.update(|items| {
            let mut index = AssignmentIndex::new(std::mem::take(items));
            index.assign(product_id, category_id);
            *items = index.into_inner();
        });

        self.persist();
        Ok(())
    }

    pub fn list_categories(&self, principal: &Principal) -> Vec<Category> {
        filter_categories(principal, self.db.categories.get_all())
    }

    pub fn create_category(&self, principal: &Principal, name: String) -> DomainResult<Category> {
        require_admin(principal)?;

        let category = self.db.categories.update(|items| {
            let id = InMemoryRepository::<Category>::next_key(items);
            let category = Category { id, name };
            items.push(category.clone());
            category
        });

        self.persist();
        Ok(category)
    }

    pub fn update_category(
        &self,
        principal: &Principal,
        id: CategoryId,
        patch: CategoryUpdate,
    ) -> DomainResult<Category> {
        require_admin(principal)?;

        let category = self.db.categories.update(|items| {
            let category = items
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(DomainError::NotFound)?;
            patch.apply_to(category);
            Ok::<_, DomainError>(category.clone())
        })?;

        self.persist();
        Ok(category)
    }

    pub fn delete_category(&self, principal: &Principal, id: CategoryId) -> DomainResult<()> {
        require_admin(principal)?;

        if !self.db.categories.delete(id) {
            return Err(DomainError::NotFound);
        }
        self.db.assignments.update(|items| {
            let mut index = AssignmentIndex::new(std::mem::take(items));
            index.cascade_delete_category(id);
            *items = index.into_inner();
        });

        self.persist();
        Ok(())
    }

    pub fn list_branches(&self) -> Vec<Branch> {
        self.db.branches.get_all()
    }

    // ── orders ──────────────────────────────────────────────────────────

    pub fn list_orders(&self, principal: &Principal) -> Vec<dto::OrderWithBranch> {
        let branches = self.db.branches.get_all();
        filter_orders(principal, self.db.orders.get_all())
            .into_iter()
            .map(|order| dto::OrderWithBranch::annotate(order, &branches))
            .collect()
    }

    pub fn get_order(&self, principal: &Principal, id: OrderId) -> DomainResult<dto::OrderDetail> {
        let order = self.db.orders.get_by_id(id).ok_or(DomainError::NotFound)?;
        authorize_order_read(principal, &order)?;

        let sucursal = order
            .branch_id
            .and_then(|bid| self.db.branches.get_by_id(bid));
        let user = self
            .db
            .users
            .get_by_id(order.user_id)
            .map(|u| u.redacted());

        Ok(dto::OrderDetail {
            order,
            sucursal,
            user,
        })
    }

    /// Create an order from cart line items.
    ///
    /// Unit prices are captured from the current catalog; id assignment and
    /// append happen under the order collection's lock as one atomic unit.
    pub fn create_order(
        &self,
        principal: &Principal,
        items: Vec<LineItemRequest>,
    ) -> DomainResult<Order> {
        let catalog = self.db.products.get_all();
        let lines = price_lines(items, &catalog);

        let order = self.db.orders.update(|orders| {
            let id = next_order_id(orders.iter().map(|o| o.id));
            let order = Order::create(id, principal, lines, Utc::now())?;
            orders.push(order.clone());
            Ok::<_, DomainError>(order)
        })?;

        tracing::info!(order_id = %order.id, user_id = %order.user_id, total = order.total, "order created");
        self.persist();
        Ok(order)
    }

    pub fn set_order_status(
        &self,
        principal: &Principal,
        id: OrderId,
        status: OrderStatus,
    ) -> DomainResult<Order> {
        require_admin(principal)?;

        let order = self.db.orders.update(|orders| {
            let order = orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or(DomainError::NotFound)?;
            order.set_status(status)?;
            Ok::<_, DomainError>(order.clone())
        })?;

        tracing::info!(order_id = %order.id, status = %order.status, "order status changed");
        self.persist();
        Ok(order)
    }

    // ── analytics ───────────────────────────────────────────────────────

    pub fn analytics(
        &self,
        principal: &Principal,
        month: Option<u32>,
        year: Option<i32>,
    ) -> DomainResult<Report> {
        require_admin(principal)?;
        Ok(ordena_analytics::aggregate(
            &self.db.orders.get_all(),
            &self.db.products.get_all(),
            month,
            year,
        ))
    }

    // ── users ───────────────────────────────────────────────────────────

    pub fn list_users(&self, principal: &Principal) -> DomainResult<Vec<RedactedUser>> {
        require_admin(principal)?;
        Ok(self
            .db
            .users
            .get_all()
            .iter()
            .map(User::redacted)
            .collect())
    }

    pub fn get_user(&self, principal: &Principal, id: UserId) -> DomainResult<RedactedUser> {
        require_admin(principal)?;
        self.db
            .users
            .get_by_id(id)
            .map(|u| u.redacted())
            .ok_or(DomainError::NotFound)
    }

    pub fn create_user(
        &self,
        principal: &Principal,
        req: dto::CreateUserRequest,
    ) -> DomainResult<RedactedUser> {
        require_admin(principal)?;

        let user = self.db.users.update(|users| {
            if users.iter().any(|u| u.username == req.username) {
                return Err(DomainError::conflict("El nombre de usuario ya existe"));
            }
            let id = InMemoryRepository::<User>::next_key(users);
            let user = User {
                id,
                username: req.username,
                password: req.password,
                name: req.name,
                role: req.role,
                branch_id: req.branch_id,
                view_all_categories: req.view_all_categories,
                allowed_categories: req.allowed_categories,
            };
            users.push(user.clone());
            Ok(user)
        })?;

        self.persist();
        Ok(user.redacted())
    }

    pub fn update_user(
        &self,
        principal: &Principal,
        id: UserId,
        patch: UserUpdate,
    ) -> DomainResult<RedactedUser> {
        require_admin(principal)?;

        let user = self.db.users.update(|users| {
            if let Some(username) = &patch.username {
                if users.iter().any(|u| u.id != id && &u.username == username) {
                    return Err(DomainError::conflict("El nombre de usuario ya existe"));
                }
            }
            let user = users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or(DomainError::NotFound)?;
            patch.apply_to(user);
            Ok(user.clone())
        })?;

        self.persist();
        Ok(user.redacted())
    }

    /// Delete a user. A principal can never delete its own account.
    pub fn delete_user(&self, principal: &Principal, id: UserId) -> DomainResult<()> {
        require_admin(principal)?;

        if id == principal.user_id {
            return Err(DomainError::forbidden(
                "No puedes eliminar tu propio usuario",
            ));
        }
        if !self.db.users.delete(id) {
            return Err(DomainError::NotFound);
        }

        self.persist();
        Ok(())
    }
}
