//! Identity and session management.
//!
//! This crate owns the user entity, the role model, and the session registry.
//! Authorization *decisions* (visibility filtering, role gates) live in
//! `ordena-policy`; this crate only answers "who is calling".

pub mod principal;
pub mod role;
pub mod session;
pub mod user;

pub use principal::Principal;
pub use role::Role;
pub use session::{InMemorySessionStore, SessionStore};
pub use user::{RedactedUser, User, UserUpdate};
