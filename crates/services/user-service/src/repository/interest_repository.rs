//! Interest repository.
//!
//! Interests have their own lifecycle, so plain per-entity CRUD is enough;
//! links to users are managed by the user aggregate.

use sea_orm::DatabaseConnection;

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::{interest, InterestActiveModel, InterestEntity};

/// SeaORM store for standalone interests
pub struct InterestStore {
    db: DatabaseConnection,
}

impl InterestStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<InterestEntity, interest::Model> for InterestStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl WriteRepository<InterestEntity, interest::Model, InterestActiveModel> for InterestStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl DeleteRepository<InterestEntity> for InterestStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
