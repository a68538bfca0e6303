use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoffeeError {
    #[error("Coffee not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CoffeeResult<T> = Result<T, CoffeeError>;

/// Convert CoffeeError to AppError for standardized error responses
impl From<CoffeeError> for AppError {
    fn from(err: CoffeeError) -> Self {
        match err {
            CoffeeError::NotFound(id) => AppError::NotFound(format!("Coffee {} not found", id)),
            CoffeeError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CoffeeError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CoffeeError {
    fn from(err: mongodb::error::Error) -> Self {
        CoffeeError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_becomes_404() {
        let response = CoffeeError::NotFound(Uuid::new_v4()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_becomes_500() {
        let response = CoffeeError::Database("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
