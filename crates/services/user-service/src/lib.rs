//! User Service Library
//!
//! Persistence and relationship management for users, their profiles,
//! reviews and interests. The `user-service` binary drives it from the
//! command line; other code can embed it through [`UserServices`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{InterestStore, UserStore};
use crate::service::{InterestCatalog, InterestService, UserManager, UserService};

/// Services wired to one database connection.
#[derive(Clone)]
pub struct UserServices {
    pub users: Arc<dyn UserService>,
    pub interests: Arc<dyn InterestService>,
}

impl UserServices {
    /// Build the service graph on top of an open connection.
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));

        Self {
            users: Arc::new(UserManager::new(user_repo)),
            interests: Arc::new(InterestCatalog::new(InterestStore::new(db))),
        }
    }

    /// Connect, apply pending migrations and build the services.
    pub async fn connect(config: &UserServiceConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Database::connect(&config.database).await?;
        Ok(Self::new(db.get_connection()))
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
