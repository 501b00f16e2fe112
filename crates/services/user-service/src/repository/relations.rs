//! Relation-loading options for user queries.

/// Which relations of a user to load eagerly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserRelations {
    pub profile: bool,
    pub reviews: bool,
    pub interests: bool,
}

impl UserRelations {
    /// Flat user row only
    pub const fn none() -> Self {
        Self {
            profile: false,
            reviews: false,
            interests: false,
        }
    }

    /// Profile, reviews and interests
    pub const fn all() -> Self {
        Self {
            profile: true,
            reviews: true,
            interests: true,
        }
    }
}
