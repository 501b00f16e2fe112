//! Interest service - standalone interest lifecycle.

use async_trait::async_trait;
use sea_orm::Set;

use common::AppResult;
use domain::{CreateInterest, Interest, NewInterest};

use crate::repository::entities::{interest, InterestActiveModel, InterestEntity};
use crate::repository::CrudRepository;

/// Interest service trait for dependency injection.
#[async_trait]
pub trait InterestService: Send + Sync {
    /// Create an interest that is not linked to any user
    async fn create_interest(&self, input: CreateInterest) -> AppResult<Interest>;

    /// List every interest, ordered by ID
    async fn list_interests(&self) -> AppResult<Vec<Interest>>;

    /// Delete an interest; its links to users go with it
    async fn remove_interest(&self, id: i32) -> AppResult<()>;
}

/// InterestService backed by any CRUD repository over the interest table
pub struct InterestCatalog<R> {
    repo: R,
}

impl<R> InterestCatalog<R>
where
    R: CrudRepository<InterestEntity, interest::Model, InterestActiveModel>,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> InterestService for InterestCatalog<R>
where
    R: CrudRepository<InterestEntity, interest::Model, InterestActiveModel> + 'static,
{
    async fn create_interest(&self, input: CreateInterest) -> AppResult<Interest> {
        let NewInterest { place } = NewInterest::from(input);
        let model = self
            .repo
            .insert(InterestActiveModel {
                place: Set(place),
                ..Default::default()
            })
            .await?;

        tracing::info!(interest_id = model.id, "Interest created");
        Ok(Interest::from(model))
    }

    async fn list_interests(&self) -> AppResult<Vec<Interest>> {
        let models = self.repo.find_all().await?;
        Ok(models.into_iter().map(Interest::from).collect())
    }

    async fn remove_interest(&self, id: i32) -> AppResult<()> {
        let removed = self.repo.delete_by_id(id).await?;
        tracing::info!(interest_id = id, removed, "Interest delete requested");
        Ok(())
    }
}
