use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use registrar_application::RegisterUserUseCase;
use registrar_core::{CredentialEncoder, Notifier, TokenIssuer, UserStore};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub token: String,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<U, C, T, N>(
    State(use_case): State<Arc<RegisterUserUseCase<U, C, T, N>>>,
    request: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + 'static,
    C: CredentialEncoder + 'static,
    T: TokenIssuer + 'static,
    N: Notifier + 'static,
{
    let Json(request) = request.map_err(|e| ApiError::InvalidInput(e.body_text()))?;

    let token = use_case
        .create(request.name, request.email, request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            token: token.into_string(),
        }),
    ))
}
