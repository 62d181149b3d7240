use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registrar_application::RegisterUserError;
use registrar_core::CredentialError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Account created, but signing in failed. Please log in")]
    AccountCreatedWithoutToken,

    #[error("Unexpected error")]
    UnexpectedError,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::UserAlreadyExists => StatusCode::CONFLICT,
            ApiError::AccountCreatedWithoutToken | ApiError::UnexpectedError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<RegisterUserError> for ApiError {
    fn from(error: RegisterUserError) -> Self {
        match error {
            RegisterUserError::InvalidInput(e) => ApiError::InvalidInput(e.to_string()),
            RegisterUserError::Credential(CredentialError::PolicyViolation(reason)) => {
                ApiError::InvalidInput(reason)
            }
            RegisterUserError::UserAlreadyExists => ApiError::UserAlreadyExists,
            RegisterUserError::TokenIssuance { user_id, source } => {
                tracing::error!(%user_id, error = %source, "Registered user without a token");
                ApiError::AccountCreatedWithoutToken
            }
            other => {
                tracing::error!(error = %other, "Registration failed");
                ApiError::UnexpectedError
            }
        }
    }
}
