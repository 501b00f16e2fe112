//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_IS_ACTIVE;
use crate::interest::{CreateInterest, Interest, NewInterest};
use crate::profile::{CreateProfile, NewProfile, Profile};
use crate::review::{CreateReview, NewReview, Review};

/// User domain entity
///
/// Relations are `None` when they were not loaded from the store and
/// `Some` (possibly empty) when they were.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<Interest>>,
}

impl User {
    /// Overwrite the mutable account fields
    pub fn update_details(&mut self, is_active: bool, first_name: String, last_name: String) {
        self.is_active = is_active;
        self.first_name = first_name;
        self.last_name = last_name;
    }
}

/// User aggregate that has not been persisted yet.
///
/// Saved as a whole: the user row, its profile, its reviews and its
/// interests (plus the join rows linking them) go into one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub profile: NewProfile,
    pub reviews: Vec<NewReview>,
    pub interests: Vec<NewInterest>,
}

impl NewUser {
    /// Create a new, active user with no reviews
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        profile: NewProfile,
        interests: Vec<NewInterest>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            is_active: DEFAULT_USER_IS_ACTIVE,
            profile,
            reviews: Vec::new(),
            interests,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub profile: CreateProfile,
    /// Interests to create and link to the user
    #[serde(default)]
    pub interests: Vec<CreateInterest>,
}

impl From<CreateUser> for NewUser {
    fn from(dto: CreateUser) -> Self {
        let profile = NewProfile::from(dto.profile);
        let interests = dto.interests.into_iter().map(NewInterest::from).collect();

        NewUser::new(
            dto.first_name,
            dto.last_name,
            dto.email,
            dto.password,
            profile,
            interests,
        )
    }
}

/// User update data transfer object
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub is_active: bool,
    pub first_name: String,
    pub last_name: String,
    /// Complete replacement for the user's reviews
    #[serde(default)]
    pub reviews: Vec<CreateReview>,
}
