//! Domain-level constants.
//!
//! These constants define defaults applied when entities are constructed.

// =============================================================================
// User
// =============================================================================

/// Activation state given to every newly created user
pub const DEFAULT_USER_IS_ACTIVE: bool = true;
