//! Repository layer for data access.
//!
//! `base` holds the generic per-entity operations; the aggregate
//! repositories build on them.

mod base;
pub mod entities;
mod interest_repository;
mod relations;
mod user_repository;

pub use base::{CrudRepository, DeleteRepository, ReadRepository, WriteRepository};
pub use interest_repository::InterestStore;
pub use relations::UserRelations;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
