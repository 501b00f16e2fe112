//! Application services layer - use cases over the repositories.

mod interest_service;
mod user_service;

pub use interest_service::{InterestCatalog, InterestService};
pub use user_service::{UserManager, UserService};
