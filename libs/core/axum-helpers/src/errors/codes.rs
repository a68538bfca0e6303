//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// Combines string identifiers (for clients), integer codes (for monitoring),
/// and default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// Malformed request
    BadRequest,

    /// Requested resource was not found
    NotFound,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// JSON serialization failed
    SerdeJsonError,

    /// I/O error
    IoError,

    // Database errors (2000-2999)
    /// Database connection or query error
    DatabaseError,
}

impl ErrorCode {
    /// Machine-readable string identifier sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "INVALID_UUID",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::InvalidUuid => 1002,
            ErrorCode::BadRequest => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1500,
            ErrorCode::ServiceUnavailable => 1503,
            ErrorCode::SerdeJsonError => 1501,
            ErrorCode::IoError => 1502,
            ErrorCode::DatabaseError => 2000,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "Invalid UUID format",
            ErrorCode::BadRequest => "Malformed request",
            ErrorCode::NotFound => "The requested resource was not found",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::SerdeJsonError => "Failed to serialize response",
            ErrorCode::IoError => "An I/O error occurred",
            ErrorCode::DatabaseError => "A database error occurred",
        }
    }
}
