//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! A user owns exactly one profile and any number of reviews, and is linked
//! to interests that other users may share.

pub mod constants;
pub mod error;
pub mod interest;
pub mod profile;
pub mod review;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use interest::{CreateInterest, Interest, NewInterest};
pub use profile::{CreateProfile, NewProfile, Profile};
pub use review::{CreateReview, NewReview, Review};
pub use user::{CreateUser, NewUser, UpdateUser, User};
