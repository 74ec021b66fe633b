//! Record store: repository-per-entity abstraction over a single structured
//! document.
//!
//! The engine treats storage as an injected key-indexed record store;
//! durability is limited to whole-document JSON snapshots. Each collection is
//! guarded by its own mutex, and `Repository::update` runs a closure under
//! that lock so read-modify-write sequences (id assignment + append) are one
//! atomic unit.

pub mod db;
pub mod document;
pub mod repository;

pub use db::InMemoryDb;
pub use document::{Document, StoreError};
pub use repository::{InMemoryRepository, Keyed, Repository};
