//! Review domain entity and related types.

use serde::{Deserialize, Serialize};

/// A review written by, and owned by, a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub content: String,
    pub rating: i32,
    /// Owning user
    pub user_id: i32,
}

/// Review that has not been persisted yet.
///
/// The owning user is supplied when the review collection is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub content: String,
    pub rating: i32,
}

impl NewReview {
    pub fn new(content: impl Into<String>, rating: i32) -> Self {
        Self {
            content: content.into(),
            rating,
        }
    }
}

/// Review creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub content: String,
    pub rating: i32,
}

impl From<CreateReview> for NewReview {
    fn from(dto: CreateReview) -> Self {
        NewReview::new(dto.content, dto.rating)
    }
}
