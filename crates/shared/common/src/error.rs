//! Unified error handling.
//!
//! Provides a single error type for every layer of the user service.
//! Store errors are carried verbatim; only their user-facing message is
//! redacted.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Input shape
    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::BadRequest(msg) => format!("Invalid input: {}", msg),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::NotFound | AppError::BadRequest(_))
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => AppError::NotFound,
        }
    }
}

// =============================================================================
// Input Shape Errors
// =============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_not_found_maps_to_not_found() {
        let err = AppError::from(DomainError::not_found("user 7"));
        assert!(matches!(err, AppError::NotFound));
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(json_err);

        assert_eq!(err.code(), "BAD_REQUEST");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("pool exhausted on node 3");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert!(!err.is_client_error());
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_database_error_is_redacted() {
        let err = AppError::from(sea_orm::DbErr::Custom("relation \"user\" missing".into()));
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.user_message(), "A database error occurred");
    }
}
