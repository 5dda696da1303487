use poem::http::StatusCode;
use poem_openapi::payload::PlainText;

use business::domain::product::errors::ProductError;

use crate::api::error::IntoErrorResponse;

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, PlainText<String>) {
        let status = match &self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::AlreadyExists(_) => StatusCode::CONFLICT,
            ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::Unknown(source) => {
                tracing::error!(error = %source, "unexpected catalog failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, PlainText(self.to_string()))
    }
}
