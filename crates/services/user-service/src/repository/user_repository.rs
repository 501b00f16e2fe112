//! User aggregate repository.
//!
//! A user owns its profile and reviews and shares interests with other
//! users. Every write touching more than one table runs in a single
//! transaction; deletes remove owned rows explicitly instead of relying on
//! the backend's foreign key cascades.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, Unchanged,
};
use tracing::debug;

use super::base::ReadRepository;
use super::entities::{
    interest, profile, review, user, user_interest, InterestActiveModel, InterestEntity,
    ProfileActiveModel, ProfileEntity, ReviewActiveModel, ReviewEntity, UserActiveModel,
    UserEntity, UserInterestActiveModel, UserInterestEntity,
};
use super::relations::UserRelations;
use crate::with_transaction;
use common::{AppError, AppResult};
use domain::{Interest, NewReview, NewUser, Profile, Review, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID, loading the requested relations
    async fn find_one(&self, id: i32, relations: UserRelations) -> AppResult<Option<User>>;

    /// List all users without relations, ordered by ID
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Persist a new user together with its profile, reviews and interests
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Save the user's mutable fields and replace its whole review collection
    async fn save(&self, user: User, reviews: Vec<NewReview>) -> AppResult<User>;

    /// Delete a user with its profile, reviews and interest links.
    ///
    /// Returns the number of user rows removed (0 when the ID is unknown).
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity, user::Model> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_one(&self, id: i32, relations: UserRelations) -> AppResult<Option<User>> {
        debug!(user_id = id, ?relations, "Loading user");

        match ReadRepository::<UserEntity, user::Model>::find_by_id(self, id).await? {
            Some(model) => load_relations(&self.db, model, relations).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = ReadRepository::<UserEntity, user::Model>::find_all(self).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        with_transaction!(&self.db, |txn| insert_graph(txn, user).await)
    }

    async fn save(&self, user: User, reviews: Vec<NewReview>) -> AppResult<User> {
        with_transaction!(&self.db, |txn| save_with_reviews(txn, user, reviews).await)
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        with_transaction!(&self.db, |txn| delete_graph(txn, id).await)
    }
}

/// Attach the requested relations to a loaded user row.
async fn load_relations<C>(db: &C, model: user::Model, relations: UserRelations) -> AppResult<User>
where
    C: ConnectionTrait,
{
    let profile = if relations.profile {
        let profile = model
            .find_related(ProfileEntity)
            .one(db)
            .await?
            .ok_or_else(|| AppError::internal(format!("user {} has no profile", model.id)))?;
        Some(Profile::from(profile))
    } else {
        None
    };

    let reviews = if relations.reviews {
        let reviews = model
            .find_related(ReviewEntity)
            .order_by_asc(review::Column::Id)
            .all(db)
            .await?;
        Some(reviews.into_iter().map(Review::from).collect())
    } else {
        None
    };

    let interests = if relations.interests {
        let interests = model
            .find_related(InterestEntity)
            .order_by_asc(interest::Column::Id)
            .all(db)
            .await?;
        Some(interests.into_iter().map(Interest::from).collect())
    } else {
        None
    };

    let mut user = User::from(model);
    user.profile = profile;
    user.reviews = reviews;
    user.interests = interests;
    Ok(user)
}

/// Insert a user, its profile, its reviews, and each interest with its join row.
async fn insert_graph(txn: &DatabaseTransaction, new_user: NewUser) -> AppResult<User> {
    let NewUser {
        first_name,
        last_name,
        email,
        password,
        is_active,
        profile,
        reviews,
        interests,
    } = new_user;

    let user_model = UserActiveModel {
        first_name: Set(first_name),
        last_name: Set(last_name),
        email: Set(email),
        password: Set(password),
        is_active: Set(is_active),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let profile_model = ProfileActiveModel {
        sex: Set(profile.sex),
        dob: Set(profile.dob),
        tel: Set(profile.tel),
        address: Set(profile.address),
        city: Set(profile.city),
        user_id: Set(user_model.id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let reviews = insert_reviews(txn, user_model.id, reviews).await?;

    let mut saved_interests = Vec::with_capacity(interests.len());
    for interest in interests {
        let interest_model = InterestActiveModel {
            place: Set(interest.place),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        saved_interests.push(interest_model);
    }

    if !saved_interests.is_empty() {
        let links = saved_interests.iter().map(|interest| UserInterestActiveModel {
            user_id: Set(user_model.id),
            interest_id: Set(interest.id),
        });
        UserInterestEntity::insert_many(links)
            .exec_without_returning(txn)
            .await?;
    }

    tracing::info!(
        user_id = user_model.id,
        interests = saved_interests.len(),
        "User created"
    );

    let mut user = User::from(user_model);
    user.profile = Some(Profile::from(profile_model));
    user.reviews = Some(reviews);
    user.interests = Some(saved_interests.into_iter().map(Interest::from).collect());
    Ok(user)
}

async fn insert_reviews(
    txn: &DatabaseTransaction,
    user_id: i32,
    reviews: Vec<NewReview>,
) -> AppResult<Vec<Review>> {
    let mut saved = Vec::with_capacity(reviews.len());
    for new_review in reviews {
        let model = ReviewActiveModel {
            content: Set(new_review.content),
            rating: Set(new_review.rating),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        saved.push(Review::from(model));
    }
    Ok(saved)
}

/// Write the mutable user columns and swap the review collection.
async fn save_with_reviews(
    txn: &DatabaseTransaction,
    user: User,
    reviews: Vec<NewReview>,
) -> AppResult<User> {
    let User {
        id,
        first_name,
        last_name,
        is_active,
        profile,
        interests,
        ..
    } = user;

    let model = UserActiveModel {
        id: Unchanged(id),
        first_name: Set(first_name),
        last_name: Set(last_name),
        is_active: Set(is_active),
        ..Default::default()
    }
    .update(txn)
    .await
    .map_err(|e| match e {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::from(other),
    })?;

    let removed = ReviewEntity::delete_many()
        .filter(review::Column::UserId.eq(id))
        .exec(txn)
        .await?;
    let reviews = insert_reviews(txn, id, reviews).await?;

    tracing::info!(
        user_id = id,
        reviews_removed = removed.rows_affected,
        reviews_added = reviews.len(),
        "User updated"
    );

    let mut saved = User::from(model);
    saved.profile = profile;
    saved.reviews = Some(reviews);
    saved.interests = interests;
    Ok(saved)
}

/// Remove owned rows and interest links, then the user. Interests stay.
async fn delete_graph(txn: &DatabaseTransaction, id: i32) -> AppResult<u64> {
    ReviewEntity::delete_many()
        .filter(review::Column::UserId.eq(id))
        .exec(txn)
        .await?;
    ProfileEntity::delete_many()
        .filter(profile::Column::UserId.eq(id))
        .exec(txn)
        .await?;
    UserInterestEntity::delete_many()
        .filter(user_interest::Column::UserId.eq(id))
        .exec(txn)
        .await?;

    let result = UserEntity::delete_by_id(id).exec(txn).await?;
    if result.rows_affected > 0 {
        tracing::info!(user_id = id, "User deleted");
    }

    Ok(result.rows_affected)
}
