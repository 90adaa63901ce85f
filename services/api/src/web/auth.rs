//! services/api/src/web/auth.rs
//!
//! Account endpoints for signup, login, logout and the current session.

use astrology_core::{Account, AuthError};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;
use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The session account. Never includes the password.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub requests_remaining: u32,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            requests_remaining: account.requests_remaining,
        }
    }
}

/// Maps a refused login or signup to a status code the UI can show and retry from.
fn auth_failure(e: AuthError) -> (StatusCode, String) {
    match e {
        AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, e.to_string()),
        AuthError::EmailAlreadyRegistered => (StatusCode::CONFLICT, e.to_string()),
        AuthError::Port(err) => {
            error!("Failed to update the session: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update the session".to_string(),
            )
        }
    }
}

pub(crate) fn require_present(fields: &[(&str, &str)]) -> Result<(), (StatusCode, String)> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err((StatusCode::BAD_REQUEST, format!("{} is required", field))),
        None => Ok(()),
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /auth/signup - Create a new account and log in as it
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Missing field"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    require_present(&[
        ("email", req.email.as_str()),
        ("password", req.password.as_str()),
        ("name", req.name.as_str()),
    ])?;

    let account = state
        .service
        .lock()
        .await
        .accounts_mut()
        .signup(&req.email, &req.password, &req.name)
        .await
        .map_err(auth_failure)?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// POST /auth/login - Login with an existing account
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AccountResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let account = state
        .service
        .lock()
        .await
        .accounts_mut()
        .login(&req.email, &req.password)
        .await
        .map_err(auth_failure)?;

    Ok((StatusCode::OK, Json(AccountResponse::from(account))))
}

/// POST /auth/logout - Clear the active session
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logout successful"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .service
        .lock()
        .await
        .accounts_mut()
        .logout()
        .await
        .map_err(|e| {
            error!("Failed to clear stored session: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to logout".to_string())
        })?;

    Ok((StatusCode::OK, "Logged out".to_string()))
}

/// GET /auth/session - The account of the active session
#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = 200, description = "Active session", body = AccountResponse),
        (status = 401, description = "No active session")
    )
)]
pub async fn session_handler(Extension(account): Extension<Account>) -> Json<AccountResponse> {
    Json(AccountResponse::from(account))
}
