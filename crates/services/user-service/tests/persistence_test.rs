//! Persistence tests against an in-memory SQLite store.
//!
//! These run the real repositories, migrations and transactions; only the
//! backend differs from production.

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use common::{AppError, DatabaseConfig};
use domain::{CreateInterest, CreateProfile, CreateReview, CreateUser, UpdateUser, User};
use user_service_lib::infra::{run_in_transaction, Database};
use user_service_lib::repository::entities::{
    interest, profile, review, user, user_interest, InterestActiveModel, InterestEntity,
    ProfileEntity, ReviewEntity, UserEntity, UserInterestEntity,
};
use user_service_lib::UserServices;

async fn setup() -> (UserServices, DatabaseConnection) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = Database::connect(&config)
        .await
        .expect("in-memory database should open");
    let conn = db.get_connection();

    (UserServices::new(conn.clone()), conn)
}

fn ana(interests: &[&str]) -> CreateUser {
    CreateUser {
        first_name: "Ana".to_string(),
        last_name: "Diaz".to_string(),
        email: "a@x.com".to_string(),
        password: "secret".to_string(),
        profile: CreateProfile {
            sex: "F".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            tel: "555".to_string(),
            address: "1 Elm".to_string(),
            city: "Springfield".to_string(),
        },
        interests: interests
            .iter()
            .map(|place| CreateInterest {
                place: place.to_string(),
            })
            .collect(),
    }
}

fn update_input(reviews: &[(&str, i32)]) -> UpdateUser {
    UpdateUser {
        is_active: false,
        first_name: "Anna".to_string(),
        last_name: "Ruiz".to_string(),
        reviews: reviews
            .iter()
            .map(|(content, rating)| CreateReview {
                content: content.to_string(),
                rating: *rating,
            })
            .collect(),
    }
}

fn places(user: &User) -> Vec<String> {
    let mut places: Vec<String> = user
        .interests
        .as_ref()
        .expect("interests should be loaded")
        .iter()
        .map(|i| i.place.clone())
        .collect();
    places.sort();
    places
}

#[tokio::test]
async fn test_create_then_find_one_returns_full_aggregate() {
    let (services, _) = setup().await;

    let created = services.users.create(ana(&["Paris"])).await.unwrap();
    let found = services.users.find_one(created.id).await.unwrap();

    assert_eq!(found.first_name, "Ana");
    assert_eq!(found.last_name, "Diaz");
    assert_eq!(found.email, "a@x.com");
    assert_eq!(found.password, "secret");
    assert!(found.is_active);

    let profile = found.profile.as_ref().expect("profile should be loaded");
    assert_eq!(profile.sex, "F");
    assert_eq!(profile.dob, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    assert_eq!(profile.tel, "555");
    assert_eq!(profile.address, "1 Elm");
    assert_eq!(profile.city, "Springfield");

    assert_eq!(places(&found), vec!["Paris".to_string()]);
    assert_eq!(found.reviews, Some(vec![]));
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_create_links_every_interest() {
    let (services, _) = setup().await;

    let created = services
        .users
        .create(ana(&["Rome", "Paris", "Lima"]))
        .await
        .unwrap();
    let found = services.users.find_one(created.id).await.unwrap();

    assert_eq!(places(&found), vec!["Lima", "Paris", "Rome"]);
}

#[tokio::test]
async fn test_find_all_returns_each_user_without_relations() {
    let (services, _) = setup().await;

    for _ in 0..3 {
        services.users.create(ana(&[])).await.unwrap();
    }

    let users = services.users.find_all().await.unwrap();
    assert_eq!(users.len(), 3);

    let mut ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    assert!(users.iter().all(|u| u.profile.is_none()));
    assert!(users.iter().all(|u| u.reviews.is_none() && u.interests.is_none()));
}

#[tokio::test]
async fn test_find_all_on_empty_store() {
    let (services, _) = setup().await;

    assert!(services.users.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_one_unknown_id_is_not_found() {
    let (services, _) = setup().await;

    let result = services.users.find_one(12345).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_replaces_fields_and_review_collection() {
    let (services, conn) = setup().await;
    let created = services.users.create(ana(&["Paris"])).await.unwrap();

    let updated = services
        .users
        .update(
            created.id,
            update_input(&[("Good", 4), ("Bad", 1), ("Fine", 3)]),
        )
        .await
        .unwrap();
    assert_eq!(updated.reviews.as_ref().map(Vec::len), Some(3));

    let updated = services
        .users
        .update(created.id, update_input(&[]))
        .await
        .unwrap();
    assert_eq!(updated.reviews, Some(vec![]));

    let found = services.users.find_one(created.id).await.unwrap();
    assert!(!found.is_active);
    assert_eq!(found.first_name, "Anna");
    assert_eq!(found.last_name, "Ruiz");
    assert_eq!(found.email, "a@x.com");
    assert_eq!(found.reviews, Some(vec![]));
    assert_eq!(found.profile, created.profile);
    assert_eq!(found.interests, created.interests);

    let stored_reviews = ReviewEntity::find()
        .filter(review::Column::UserId.eq(created.id))
        .count(&conn)
        .await
        .unwrap();
    assert_eq!(stored_reviews, 0);
}

#[tokio::test]
async fn test_update_assigns_fresh_review_ids() {
    let (services, _) = setup().await;
    let created = services.users.create(ana(&[])).await.unwrap();

    let first = services
        .users
        .update(created.id, update_input(&[("Good", 4)]))
        .await
        .unwrap();
    let second = services
        .users
        .update(created.id, update_input(&[("Good", 4)]))
        .await
        .unwrap();

    let first_id = first.reviews.unwrap()[0].id;
    let second_reviews = second.reviews.unwrap();
    assert_eq!(second_reviews.len(), 1);
    assert_ne!(second_reviews[0].id, first_id);
    assert_eq!(second_reviews[0].user_id, created.id);
    assert_eq!(second_reviews[0].content, "Good");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (services, _) = setup().await;

    let result = services.users.update(999, update_input(&[("Good", 4)])).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_remove_deletes_owned_rows_and_keeps_interests() {
    let (services, conn) = setup().await;
    let created = services.users.create(ana(&["Paris", "Lima"])).await.unwrap();
    services
        .users
        .update(created.id, update_input(&[("Good", 4), ("Bad", 1)]))
        .await
        .unwrap();

    let links_before = UserInterestEntity::find()
        .filter(user_interest::Column::UserId.eq(created.id))
        .count(&conn)
        .await
        .unwrap();
    assert_eq!(links_before, 2);

    services.users.remove(created.id).await.unwrap();

    let result = services.users.find_one(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let profiles = ProfileEntity::find()
        .filter(profile::Column::UserId.eq(created.id))
        .count(&conn)
        .await
        .unwrap();
    let reviews = ReviewEntity::find()
        .filter(review::Column::UserId.eq(created.id))
        .count(&conn)
        .await
        .unwrap();
    let links = UserInterestEntity::find()
        .filter(user_interest::Column::UserId.eq(created.id))
        .count(&conn)
        .await
        .unwrap();
    assert_eq!(profiles, 0);
    assert_eq!(reviews, 0);
    assert_eq!(links, 0);

    let mut interests: Vec<String> = services
        .interests
        .list_interests()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.place)
        .collect();
    interests.sort();
    assert_eq!(interests, vec!["Lima", "Paris"]);
}

#[tokio::test]
async fn test_remove_leaves_other_users_untouched() {
    let (services, _) = setup().await;
    let first = services.users.create(ana(&["Paris"])).await.unwrap();
    let second = services.users.create(ana(&["Lima"])).await.unwrap();

    services.users.remove(first.id).await.unwrap();

    let found = services.users.find_one(second.id).await.unwrap();
    assert!(found.profile.is_some());
    assert_eq!(places(&found), vec!["Lima"]);
}

#[tokio::test]
async fn test_remove_unknown_id_is_ok() {
    let (services, _) = setup().await;

    assert!(services.users.remove(777).await.is_ok());
    // Removing twice is just as quiet
    let created = services.users.create(ana(&[])).await.unwrap();
    services.users.remove(created.id).await.unwrap();
    assert!(services.users.remove(created.id).await.is_ok());
}

#[tokio::test]
async fn test_standalone_interest_lifecycle() {
    let (services, _) = setup().await;

    let interest = services
        .interests
        .create_interest(CreateInterest {
            place: "Kyoto".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(interest.place, "Kyoto");

    let listed = services.interests.list_interests().await.unwrap();
    assert_eq!(listed, vec![interest.clone()]);

    services.interests.remove_interest(interest.id).await.unwrap();
    assert!(services.interests.list_interests().await.unwrap().is_empty());

    // Unknown IDs are ignored
    assert!(services.interests.remove_interest(interest.id).await.is_ok());
}

#[tokio::test]
async fn test_removing_interest_unlinks_it_from_users() {
    let (services, _) = setup().await;
    let created = services.users.create(ana(&["Paris", "Lima"])).await.unwrap();
    let paris = created
        .interests
        .as_ref()
        .unwrap()
        .iter()
        .find(|i| i.place == "Paris")
        .cloned()
        .unwrap();

    services.interests.remove_interest(paris.id).await.unwrap();

    let found = services.users.find_one(created.id).await.unwrap();
    assert_eq!(places(&found), vec!["Lima"]);
}

#[tokio::test]
async fn test_failed_transaction_rolls_back() {
    let (_, conn) = setup().await;

    let result: Result<(), AppError> = run_in_transaction(&conn, |txn| {
        Box::pin(async move {
            use sea_orm::ActiveModelTrait;

            InterestActiveModel {
                place: Set("Oslo".to_string()),
                ..Default::default()
            }
            .insert(txn)
            .await?;

            Err::<(), AppError>(AppError::internal("abort after insert"))
        })
    })
    .await;
    assert!(result.is_err());

    let stored = InterestEntity::find()
        .filter(interest::Column::Place.eq("Oslo"))
        .count(&conn)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn test_failed_create_leaves_no_user_row() {
    let (services, conn) = setup().await;
    conn.execute_unprepared("DROP TABLE profile").await.unwrap();

    let result = services.users.create(ana(&["Paris"])).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let users = UserEntity::find().count(&conn).await.unwrap();
    let interests = InterestEntity::find().count(&conn).await.unwrap();
    assert_eq!(users, 0);
    assert_eq!(interests, 0);
}

#[tokio::test]
async fn test_failed_update_keeps_previous_fields() {
    let (services, conn) = setup().await;
    let created = services.users.create(ana(&[])).await.unwrap();
    conn.execute_unprepared("DROP TABLE review").await.unwrap();

    // The user row is written before the review swap fails
    let result = services
        .users
        .update(created.id, update_input(&[("Good", 4)]))
        .await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let stored = UserEntity::find_by_id(created.id)
        .one(&conn)
        .await
        .unwrap()
        .expect("user row should survive");
    assert_eq!(stored.first_name, "Ana");
    assert_eq!(stored.last_name, "Diaz");
    assert!(stored.is_active);

    let stored_by_email = UserEntity::find()
        .filter(user::Column::Email.eq("a@x.com"))
        .count(&conn)
        .await
        .unwrap();
    assert_eq!(stored_by_email, 1);
}

#[tokio::test]
async fn test_migrations_are_all_applied() {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = Database::connect(&config).await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
}
