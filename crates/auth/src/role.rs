//! Role model.

use serde::{Deserialize, Serialize};

/// User role, serialized as its numeric wire code.
///
/// - `Admin` (1): full CRUD on users/products/categories and order status.
/// - `Limited` (2): ordering user subject to the cleaning-category carve-out.
/// - `Full` (3): ordering user with an unrestricted catalog view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Role {
    Admin,
    Limited,
    Full,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn code(&self) -> u8 {
        (*self).into()
    }
}

impl From<Role> for u8 {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => 1,
            Role::Limited => 2,
            Role::Full => 3,
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Role::Admin),
            2 => Ok(Role::Limited),
            3 => Ok(Role::Full),
            other => Err(format!("unknown role code: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_wire_codes() {
        for role in [Role::Admin, Role::Limited, Role::Full] {
            let json = serde_json::to_string(&role).unwrap();
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn unknown_role_code_is_rejected() {
        assert!(serde_json::from_str::<Role>("9").is_err());
    }
}
