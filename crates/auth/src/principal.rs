//! Authenticated request identity.

use serde::{Deserialize, Serialize};

use ordena_core::{BranchId, UserId};

use crate::Role;

/// The authenticated identity resolved from a session token.
///
/// This is a snapshot captured at login time. A later update of the backing
/// user record does not change an already-issued session's role or branch;
/// the user must log in again to pick the change up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
    pub branch_id: Option<BranchId>,
}

impl Principal {
    pub fn new(user_id: UserId, role: Role, branch_id: Option<BranchId>) -> Self {
        Self {
            user_id,
            role,
            branch_id,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
