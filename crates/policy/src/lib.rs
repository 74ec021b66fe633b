//! Access policy: role-keyed visibility filtering and mutation gates.
//!
//! Every function here is pure given `(principal, data snapshot)` — no hidden
//! state, no IO — so the rules stay independently testable. Handlers call
//! these before touching the order engine or returning store results.
//!
//! | Role    | Products/Categories           | Orders     | Mutations          |
//! |---------|-------------------------------|------------|--------------------|
//! | Admin   | full                          | all        | full CRUD          |
//! | Full    | full                          | own only   | create own orders  |
//! | Limited | all except cleaning category  | own only   | create own orders  |

use ordena_auth::{Principal, Role};
use ordena_catalog::{AssignmentIndex, Category, Product, CLEANING_CATEGORY};
use ordena_core::{DomainError, DomainResult};
use ordena_orders::Order;

/// Filter a product listing for the principal.
///
/// Limited-role principals never see a product whose current category
/// assignment points at the reserved cleaning category. Per-user
/// `allowed_categories` allow-lists are intentionally NOT consulted here;
/// only the blanket role rule is enforced.
pub fn filter_products(
    principal: &Principal,
    products: Vec<Product>,
    index: &AssignmentIndex,
) -> Vec<Product> {
    match principal.role {
        Role::Limited => products
            .into_iter()
            .filter(|p| index.category_of(p.id) != Some(CLEANING_CATEGORY))
            .collect(),
        Role::Admin | Role::Full => products,
    }
}

/// Filter a category listing: Limited excludes the cleaning category itself.
pub fn filter_categories(principal: &Principal, categories: Vec<Category>) -> Vec<Category> {
    match principal.role {
        Role::Limited => categories
            .into_iter()
            .filter(|c| c.id != CLEANING_CATEGORY)
            .collect(),
        Role::Admin | Role::Full => categories,
    }
}

/// Filter an order listing: Admin sees everything, everyone else only orders
/// they own.
pub fn filter_orders(principal: &Principal, orders: Vec<Order>) -> Vec<Order> {
    if principal.is_admin() {
        return orders;
    }
    orders
        .into_iter()
        .filter(|o| o.user_id == principal.user_id)
        .collect()
}

/// Gate a single-order read: Admin always, otherwise owner only.
pub fn authorize_order_read(principal: &Principal, order: &Order) -> DomainResult<()> {
    if principal.is_admin() || order.user_id == principal.user_id {
        Ok(())
    } else {
        Err(DomainError::forbidden("not the order's owner"))
    }
}

/// Gate a mutation endpoint: Admin only.
pub fn require_admin(principal: &Principal) -> DomainResult<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(DomainError::forbidden("admin role required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ordena_core::{BranchId, CategoryId, OrderId, ProductId, UserId};
    use ordena_orders::{OrderLine, OrderStatus};

    fn principal(role: Role) -> Principal {
        Principal::new(UserId::new(5), role, Some(BranchId::new(1)))
    }

    fn product(id: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            description: String::new(),
            image: None,
            price: 1.0,
            has_lid: None,
            lid_type: None,
        }
    }

    fn category(id: u32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        }
    }

    fn order(id: u32, owner: u32) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new(owner),
            branch_id: None,
            items: vec![OrderLine {
                product_id: ProductId::new(1),
                size: None,
                has_lid: None,
                lid_type: None,
                filter_type: None,
                quantity: 1,
                unit_price: 1.0,
            }],
            total: 1.0,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    fn cleaning_index() -> AssignmentIndex {
        let mut index = AssignmentIndex::default();
        index.assign(ProductId::new(7), Some(CLEANING_CATEGORY));
        index.assign(ProductId::new(1), Some(CategoryId::new(1)));
        index
    }

    #[test]
    fn limited_never_sees_cleaning_products() {
        let products = vec![product(1), product(7), product(9)];
        let filtered = filter_products(&principal(Role::Limited), products, &cleaning_index());

        assert!(filtered.iter().all(|p| p.id != ProductId::new(7)));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn admin_and_full_see_the_full_product_list() {
        let products = vec![product(1), product(7)];
        for role in [Role::Admin, Role::Full] {
            let filtered =
                filter_products(&principal(role), products.clone(), &cleaning_index());
            assert_eq!(filtered.len(), 2);
        }
    }

    #[test]
    fn unassigned_products_are_visible_to_limited() {
        // Dangling/absent assignments are tolerated: no assignment means no
        // carve-out.
        let filtered = filter_products(
            &principal(Role::Limited),
            vec![product(42)],
            &AssignmentIndex::default(),
        );
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn limited_does_not_see_the_cleaning_category() {
        let categories = vec![category(1, "Vasos"), category(4, "Limpieza")];
        let filtered = filter_categories(&principal(Role::Limited), categories.clone());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, CategoryId::new(1));

        let all = filter_categories(&principal(Role::Full), categories);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn admin_sees_all_orders_others_only_their_own() {
        let orders = vec![order(1, 5), order(2, 6), order(3, 5)];

        let admin_view = filter_orders(&principal(Role::Admin), orders.clone());
        assert_eq!(admin_view.len(), 3);

        for role in [Role::Limited, Role::Full] {
            let own = filter_orders(&principal(role), orders.clone());
            assert_eq!(own.len(), 2);
            assert!(own.iter().all(|o| o.user_id == UserId::new(5)));
        }
    }

    #[test]
    fn order_read_is_admin_or_owner_only() {
        let other_users_order = order(1, 6);
        assert!(authorize_order_read(&principal(Role::Admin), &other_users_order).is_ok());
        assert!(matches!(
            authorize_order_read(&principal(Role::Full), &other_users_order),
            Err(DomainError::Forbidden(_))
        ));
        assert!(authorize_order_read(&principal(Role::Full), &order(2, 5)).is_ok());
    }

    #[test]
    fn require_admin_rejects_ordering_roles() {
        assert!(require_admin(&principal(Role::Admin)).is_ok());
        for role in [Role::Limited, Role::Full] {
            assert!(matches!(
                require_admin(&principal(role)),
                Err(DomainError::Forbidden(_))
            ));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: filtering is a subset operation and never invents
            /// entries; for Admin it is the identity.
            #[test]
            fn filter_orders_is_identity_for_admin_and_subset_otherwise(
                owners in proptest::collection::vec(1u32..10, 0..20),
            ) {
                let orders: Vec<Order> = owners
                    .iter()
                    .enumerate()
                    .map(|(i, owner)| order(i as u32 + 1, *owner))
                    .collect();

                let admin_view = filter_orders(&principal(Role::Admin), orders.clone());
                prop_assert_eq!(admin_view.len(), orders.len());

                let own = filter_orders(&principal(Role::Full), orders.clone());
                let expected = orders
                    .iter()
                    .filter(|o| o.user_id == UserId::new(5))
                    .count();
                prop_assert_eq!(own.len(), expected);
                prop_assert!(own.iter().all(|o| o.user_id == UserId::new(5)));
            }
        }
    }
}
