use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CategoryError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.name_empty",
            ),
            CategoryError::NameTaken => {
                error_response(StatusCode::CONFLICT, "Conflict", "category.name_taken")
            }
            CategoryError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "category.not_found")
            }
            CategoryError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_taken_name_to_conflict() {
        let (status, json) = CategoryError::NameTaken.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.name, "Conflict");
    }

    #[test]
    fn should_map_missing_category_to_not_found() {
        let (status, json) = CategoryError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "category.not_found");
    }
}
