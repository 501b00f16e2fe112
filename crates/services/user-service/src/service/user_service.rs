//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{CreateUser, DomainError, NewReview, NewUser, UpdateUser, User};

use crate::repository::{UserRelations, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with its profile and interests
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// List every user (no relations loaded)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Get a user by ID with profile, reviews and interests loaded
    async fn find_one(&self, id: i32) -> AppResult<User>;

    /// Overwrite the user's mutable fields and replace its reviews
    async fn update(&self, id: i32, input: UpdateUser) -> AppResult<User>;

    /// Delete a user and everything it owns. Unknown IDs are not an error.
    async fn remove(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        // No email uniqueness check; the schema decides
        self.repo.create(NewUser::from(input)).await
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn find_one(&self, id: i32) -> AppResult<User> {
        let user = self
            .repo
            .find_one(id, UserRelations::all())
            .await?
            .ok_or_else(|| DomainError::not_found(format!("user {}", id)))?;

        Ok(user)
    }

    async fn update(&self, id: i32, input: UpdateUser) -> AppResult<User> {
        let mut user = self
            .repo
            .find_one(id, UserRelations::none())
            .await?
            .ok_or_else(|| DomainError::not_found(format!("user {}", id)))?;

        let UpdateUser {
            is_active,
            first_name,
            last_name,
            reviews,
        } = input;

        user.update_details(is_active, first_name, last_name);
        let reviews = reviews.into_iter().map(NewReview::from).collect();

        self.repo.save(user, reviews).await
    }

    async fn remove(&self, id: i32) -> AppResult<()> {
        let removed = self.repo.delete(id).await?;
        if removed == 0 {
            tracing::debug!(user_id = id, "Delete matched no user");
        }
        Ok(())
    }
}
