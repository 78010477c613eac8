// Turns failures reaching the HTTP boundary into an error envelope.
//
// Responsibilities
// - Pick the status code and the coded message for each failure.
// - Log infrastructure causes without exposing them to the client.

use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::employees::use_cases::get_employee_by_id::handler::LookupError;
use crate::shared::core::envelope::RootEntity;
use crate::shared::core::errors::{ErrorMessage, MessageType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: ErrorMessage,
}

impl ApiError {
    pub fn new(status: StatusCode, message: ErrorMessage) -> Self {
        Self { status, message }
    }

    pub fn general(status: StatusCode, of_static: Option<String>) -> Self {
        Self::new(
            status,
            ErrorMessage::new(MessageType::GeneralException, of_static),
        )
    }
}

impl From<LookupError> for ApiError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::NotFound { id } => Self::new(
                StatusCode::NOT_FOUND,
                ErrorMessage::new(MessageType::NoRecordExist, Some(id.to_string())),
            ),
            other => {
                tracing::error!(error = %other, "employee lookup failed");
                Self::general(StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::general(StatusCode::BAD_REQUEST, Some(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope: RootEntity<()> = RootEntity::error(self.message.to_string());
        (self.status, Json(envelope)).into_response()
    }
}
