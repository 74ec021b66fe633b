//! User entity and partial-update semantics.

use serde::{Deserialize, Deserializer, Serialize};

use ordena_core::{BranchId, CategoryId, UserId};

use crate::{Principal, Role};

/// A user account.
///
/// `view_all_categories` and `allowed_categories` are carried on the record
/// but not consulted by the product listing filter; only the blanket
/// Limited-role rule is enforced. They are reserved for a future per-user
/// category policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub branch_id: Option<BranchId>,
    #[serde(default)]
    pub view_all_categories: bool,
    #[serde(default)]
    pub allowed_categories: Vec<CategoryId>,
}

impl User {
    /// Snapshot this user into a session principal.
    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.role, self.branch_id)
    }

    /// Copy of this user with the credential secret stripped, for responses.
    pub fn redacted(&self) -> RedactedUser {
        RedactedUser {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            role: self.role,
            branch_id: self.branch_id,
            view_all_categories: self.view_all_categories,
            allowed_categories: self.allowed_categories.clone(),
        }
    }
}

/// User representation safe to return to callers (no password field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactedUser {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub branch_id: Option<BranchId>,
    pub view_all_categories: bool,
    pub allowed_categories: Vec<CategoryId>,
}

/// Partial update for a user record.
///
/// Absent fields preserve the prior value. The password is preserved when
/// omitted. `branch_id` distinguishes "absent" (keep) from explicit `null`
/// (clear) via the double-`Option`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub branch_id: Option<Option<BranchId>>,
    pub view_all_categories: Option<bool>,
    pub allowed_categories: Option<Vec<CategoryId>>,
}

impl UserUpdate {
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(branch_id) = self.branch_id {
            user.branch_id = branch_id;
        }
        if let Some(view_all) = self.view_all_categories {
            user.view_all_categories = view_all;
        }
        if let Some(allowed) = self.allowed_categories {
            user.allowed_categories = allowed;
        }
    }
}

/// Deserialize a field that was present in the JSON body, keeping `null`
/// distinguishable from an absent key (absent uses `#[serde(default)]`).
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(2),
            username: "mruiz".to_string(),
            password: "secret".to_string(),
            name: "María Ruiz".to_string(),
            role: Role::Limited,
            branch_id: Some(BranchId::new(1)),
            view_all_categories: false,
            allowed_categories: vec![CategoryId::new(1)],
        }
    }

    #[test]
    fn update_preserves_password_when_omitted() {
        let mut user = sample_user();
        let patch: UserUpdate =
            serde_json::from_str(r#"{"name": "María R.", "role": 3}"#).unwrap();
        patch.apply_to(&mut user);

        assert_eq!(user.password, "secret");
        assert_eq!(user.name, "María R.");
        assert_eq!(user.role, Role::Full);
        assert_eq!(user.username, "mruiz");
    }

    #[test]
    fn explicit_null_branch_clears_it_but_absent_keeps_it() {
        let mut user = sample_user();
        let keep: UserUpdate = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        keep.apply_to(&mut user);
        assert_eq!(user.branch_id, Some(BranchId::new(1)));

        let clear: UserUpdate = serde_json::from_str(r#"{"branch_id": null}"#).unwrap();
        clear.apply_to(&mut user);
        assert_eq!(user.branch_id, None);
    }

    #[test]
    fn redacted_user_has_no_password_field() {
        let json = serde_json::to_value(sample_user().redacted()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "mruiz");
    }
}
