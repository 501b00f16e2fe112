//! Interest domain entity and related types.

use serde::{Deserialize, Serialize};

/// A place of interest, shared between any number of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: i32,
    pub place: String,
}

/// Interest that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterest {
    pub place: String,
}

impl NewInterest {
    pub fn new(place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
        }
    }
}

/// Interest creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInterest {
    pub place: String,
}

impl From<CreateInterest> for NewInterest {
    fn from(dto: CreateInterest) -> Self {
        NewInterest::new(dto.place)
    }
}
