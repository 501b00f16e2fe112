//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod interest;
pub mod profile;
pub mod review;
pub mod user;
pub mod user_interest;

// Re-exports for public API convenience
pub use interest::{ActiveModel as InterestActiveModel, Entity as InterestEntity};
pub use profile::{ActiveModel as ProfileActiveModel, Entity as ProfileEntity};
pub use review::{ActiveModel as ReviewActiveModel, Entity as ReviewEntity};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity};
pub use user_interest::{ActiveModel as UserInterestActiveModel, Entity as UserInterestEntity};
