//! Session registry: opaque token → principal snapshot.
//!
//! The registry is process-wide, in-memory mutable shared state with no
//! persistence; a restart clears all sessions and forces re-login. The trait
//! exists so the registry can be swapped for a distributed cache without
//! touching policy logic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use ordena_core::{DomainError, DomainResult};

use crate::Principal;

/// Capability set of a session registry.
///
/// Tokens, once issued, stay valid until explicit revocation; there is no
/// expiry clock.
pub trait SessionStore: Send + Sync {
    /// Issue a fresh opaque token bound to the given principal snapshot.
    fn create(&self, principal: Principal) -> String;

    /// Look the token up; `Unauthenticated` when absent.
    fn resolve(&self, token: &str) -> DomainResult<Principal>;

    /// Remove the mapping. Revoking an unknown token is a no-op.
    fn revoke(&self, token: &str);
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn create(&self, principal: Principal) -> String {
        (**self).create(principal)
    }

    fn resolve(&self, token: &str) -> DomainResult<Principal> {
        (**self).resolve(token)
    }

    fn revoke(&self, token: &str) {
        (**self).revoke(token)
    }
}

/// In-memory session registry.
///
/// The mutex serializes concurrent mutation of the same token's lifecycle.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Principal>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, HashMap<String, Principal>> {
        // A poisoned lock only means another thread panicked mid-access;
        // the map itself is still a valid snapshot.
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, principal: Principal) -> String {
        // UUIDv4: random, unguessable token. Collisions are not engineered
        // against beyond what 122 random bits already provide.
        let token = Uuid::new_v4().simple().to_string();
        self.guard().insert(token.clone(), principal);
        tracing::debug!(user_id = %principal.user_id, "session created");
        token
    }

    fn resolve(&self, token: &str) -> DomainResult<Principal> {
        self.guard()
            .get(token)
            .copied()
            .ok_or(DomainError::Unauthenticated)
    }

    fn revoke(&self, token: &str) {
        self.guard().remove(token);
    }
}
