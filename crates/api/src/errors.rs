use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use resolver_api_domain::DomainError;
use serde_json::json;

/// Body text for every 500; details stay in the server log.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occured.";

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidRecordType(_)
            | DomainError::InvalidDomainName(_)
            | DomainError::InvalidIpAddress(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::NoNameservers(_) | DomainError::ReverseNotFound => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }

            DomainError::AllNameserversTimedOut => {
                (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string())
            }

            DomainError::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UNEXPECTED_ERROR_MESSAGE.to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
